//! Page-level list state: pagination, search and filters.
//!
//! Any committed change to the search text or to a filter sends the page
//! index back to 0, so a page never points into a result set that was
//! narrowed after it was chosen.

use leptos::*;

/// A fixed set of named string filters.
///
/// Implementors are plain structs whose fields are addressed through the
/// `Field` enum, so only declared keys can ever be read or written.
pub trait FilterSet: Clone + Default + PartialEq + 'static {
    type Field: Copy + 'static;

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Reusable pagination + search state shared by list pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchPagination {
    page: usize,
    search: String,
    search_input: String,
}

impl SearchPagination {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Committed search text, the one queries are built from.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// No bounds check here: whoever owns the result count clamps.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn handle_search_change(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub fn handle_search_submit(&mut self) {
        self.search = self.search_input.clone();
        self.reset_page();
    }

    pub fn handle_clear_search(&mut self) {
        self.search_input.clear();
        self.search.clear();
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.page = 0;
    }
}

/// List page state for a page filtered by `F`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPageState<F> {
    pagination: SearchPagination,
    filters: F,
}

impl<F: FilterSet> ListPageState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn search(&self) -> &str {
        self.pagination.search()
    }

    pub fn search_input(&self) -> &str {
        self.pagination.search_input()
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_default()
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn handle_search_change(&mut self, value: impl Into<String>) {
        self.pagination.handle_search_change(value);
    }

    pub fn handle_search_submit(&mut self) {
        self.pagination.handle_search_submit();
    }

    pub fn handle_clear_search(&mut self) {
        self.pagination.handle_clear_search();
    }

    pub fn handle_filter_change(&mut self, field: F::Field, value: impl Into<String>) {
        self.filters.set(field, value.into());
        self.pagination.reset_page();
    }

    pub fn handle_clear_filters(&mut self) {
        self.filters = F::default();
        self.pagination.reset_page();
    }

    /// The state with the uncommitted search text dropped.
    pub fn committed(&self) -> Self {
        let mut committed = self.clone();
        committed.pagination.search_input.clear();
        committed
    }
}

/// Reactive handle over a [`ListPageState`].
///
/// Readers are tracked, so views reading `page()` or `filters()` re-render
/// after any mutation made through the handle.
pub struct ListPageController<F: 'static> {
    state: RwSignal<ListPageState<F>>,
}

impl<F: 'static> Clone for ListPageController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for ListPageController<F> {}

impl<F: FilterSet> ListPageController<F> {
    pub fn page(&self) -> usize {
        self.state.with(ListPageState::page)
    }

    pub fn search(&self) -> String {
        self.state.with(|s| s.search().to_string())
    }

    pub fn search_input(&self) -> String {
        self.state.with(|s| s.search_input().to_string())
    }

    pub fn filter(&self, field: F::Field) -> String {
        self.state.with(|s| s.filters().get(field).to_string())
    }

    pub fn filters(&self) -> F {
        self.state.with(|s| s.filters().clone())
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.with(ListPageState::has_active_filters)
    }

    pub fn snapshot(&self) -> ListPageState<F> {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> ListPageState<F> {
        self.state.get_untracked()
    }

    /// Memo over [`ListPageState::committed`]: dependents do not re-run while
    /// the user is only typing into the search box.
    pub fn committed_state(&self) -> Memo<ListPageState<F>> {
        let state = self.state;
        create_memo(move |_| state.with(ListPageState::committed))
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn handle_search_change(&self, value: String) {
        self.state.update(|s| s.handle_search_change(value));
    }

    pub fn handle_search_submit(&self) {
        self.state.update(ListPageState::handle_search_submit);
    }

    pub fn handle_clear_search(&self) {
        self.state.update(ListPageState::handle_clear_search);
    }

    pub fn handle_filter_change(&self, field: F::Field, value: String) {
        self.state.update(|s| s.handle_filter_change(field, value));
    }

    pub fn handle_clear_filters(&self) {
        self.state.update(ListPageState::handle_clear_filters);
    }
}

pub fn use_list_page<F: FilterSet>() -> ListPageController<F> {
    ListPageController {
        state: create_rw_signal(ListPageState::default()),
    }
}

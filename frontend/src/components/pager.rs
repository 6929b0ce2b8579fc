use leptos::*;

/// Number of pages for `total` items, never less than 1.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// `page` pulled back onto the last existing page, if it ran past it.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

/// The page to move to when `page` is past the end, `None` when it is in range.
pub fn page_correction(page: usize, page_count: usize) -> Option<usize> {
    let clamped = clamp_page(page, page_count);
    (clamped != page).then_some(clamped)
}

/// An unknown page count keeps "next" disabled.
pub fn is_last_page(page: usize, page_count: Option<usize>) -> bool {
    page_count.map_or(true, |count| page + 1 >= count)
}

/// Prev/next controls over a zero-based page index.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<Option<usize>>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = Signal::derive(move || page.get() == 0);
    let is_last = Signal::derive(move || is_last_page(page.get(), page_count.get()));

    view! {
        <div class="mt-4 flex justify-between items-center">
            <button
                class="px-4 py-2 border rounded disabled:opacity-50 text-sm"
                disabled=move || is_first.get()
                on:click=move |_| on_page_change.call(page.get_untracked().saturating_sub(1))
            >
                "前へ"
            </button>
            <div class="text-sm text-fg-muted">
                "ページ " {move || page.get() + 1}
                {move || page_count.get().map(|count| format!(" / {}", count))}
            </div>
            <button
                class="px-4 py-2 border rounded disabled:opacity-50 text-sm"
                disabled=move || is_last.get()
                on:click=move |_| on_page_change.call(page.get_untracked() + 1)
            >
                "次へ"
            </button>
        </div>
    }
}

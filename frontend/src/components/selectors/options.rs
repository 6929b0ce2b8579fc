use crate::api::{CustomerResponse, ProjectResponse, UserResponse};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn from_user(user: &UserResponse, value_kind: UserSelectValue) -> Self {
        let value = match value_kind {
            UserSelectValue::Id => user.id.clone(),
            UserSelectValue::Username => user.username.clone(),
        };
        Self::new(value, format!("{} ({})", user.full_name, user.username))
    }

    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

impl From<&CustomerResponse> for SelectOption {
    fn from(customer: &CustomerResponse) -> Self {
        Self::new(customer.id.clone(), customer.name.clone())
    }
}

impl From<&ProjectResponse> for SelectOption {
    fn from(project: &ProjectResponse) -> Self {
        Self::new(project.id.clone(), project.name.clone())
    }
}

/// Which user field a user selector reports as its value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UserSelectValue {
    #[default]
    Id,
    Username,
}

/// Case-insensitive substring match on label or value. Keeps input order.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.matches(&needle))
        .cloned()
        .collect()
}

/// Filtered options, plus the selected option when the filter would hide it.
pub fn visible_options(options: &[SelectOption], query: &str, selected: &str) -> Vec<SelectOption> {
    let mut visible = filter_options(options, query);
    if !selected.is_empty() && !visible.iter().any(|option| option.value == selected) {
        if let Some(current) = options.iter().find(|option| option.value == selected) {
            visible.insert(0, current.clone());
        }
    }
    visible
}

pub fn sort_options(mut options: Vec<SelectOption>) -> Vec<SelectOption> {
    options.sort_by(|left, right| match left.label.cmp(&right.label) {
        Ordering::Equal => left.value.cmp(&right.value),
        other => other,
    });
    options
}

pub fn user_options(users: &[UserResponse], value_kind: UserSelectValue) -> Vec<SelectOption> {
    sort_options(
        users
            .iter()
            .map(|user| SelectOption::from_user(user, value_kind))
            .collect(),
    )
}

pub fn customer_options(customers: &[CustomerResponse]) -> Vec<SelectOption> {
    sort_options(customers.iter().map(SelectOption::from).collect())
}

/// Projects of `customer_id`, or every project when it is empty.
pub fn project_options(projects: &[ProjectResponse], customer_id: &str) -> Vec<SelectOption> {
    sort_options(
        projects
            .iter()
            .filter(|project| customer_id.is_empty() || project.customer_id == customer_id)
            .map(SelectOption::from)
            .collect(),
    )
}

use crate::{
    api::{ApiError, CreateUser, UserResponse},
    components::pager::{clamp_page, total_pages},
    state::list_page::{FilterSet, ListPageState},
};

pub const USERS_PER_PAGE: usize = 20;

pub const ROLES: &[(&str, &str)] = &[
    ("admin", "管理者"),
    ("member", "メンバー"),
    ("auditor", "監査担当"),
];

pub const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "有効"), ("inactive", "無効")];

pub fn role_label(role: &str) -> &str {
    ROLES
        .iter()
        .find(|(value, _)| *value == role)
        .map(|(_, label)| *label)
        .unwrap_or(role)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub role: String,
    /// "", "active" or "inactive".
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserFilterField {
    Role,
    Status,
}

impl FilterSet for UserFilters {
    type Field = UserFilterField;

    fn get(&self, field: UserFilterField) -> &str {
        match field {
            UserFilterField::Role => &self.role,
            UserFilterField::Status => &self.status,
        }
    }

    fn set(&mut self, field: UserFilterField, value: String) {
        match field {
            UserFilterField::Role => self.role = value,
            UserFilterField::Status => self.status = value,
        }
    }
}

fn matches_search(user: &UserResponse, needle: &str) -> bool {
    needle.is_empty()
        || [&user.username, &user.full_name, &user.email]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters(user: &UserResponse, filters: &UserFilters) -> bool {
    let role_ok = filters.role.is_empty() || user.roles.iter().any(|role| *role == filters.role);
    let status_ok = match filters.status.as_str() {
        "active" => user.is_active,
        "inactive" => !user.is_active,
        _ => true,
    };
    role_ok && status_ok
}

/// Users passing the committed search and the filters, in input order.
pub fn filter_users(users: &[UserResponse], state: &ListPageState<UserFilters>) -> Vec<UserResponse> {
    let needle = state.search().trim().to_lowercase();
    users
        .iter()
        .filter(|user| matches_search(user, &needle) && matches_filters(user, state.filters()))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserPage {
    pub items: Vec<UserResponse>,
    /// Page actually shown, after clamping.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

pub fn paginate_users(users: Vec<UserResponse>, page: usize, per_page: usize) -> UserPage {
    let total = users.len();
    let page_count = total_pages(total, per_page);
    let page = clamp_page(page, page_count);
    let items = users
        .into_iter()
        .skip(page * per_page)
        .take(per_page)
        .collect();
    UserPage {
        items,
        page,
        page_count,
        total,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserFormState {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
    pub customer_id: String,
    pub project_id: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl CreateUserFormState {
    pub fn toggle_role(&mut self, role: &str) {
        if let Some(index) = self.roles.iter().position(|r| r == role) {
            self.roles.remove(index);
        } else {
            self.roles.push(role.to_string());
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// A project belongs to one customer, so switching customer drops it.
    pub fn set_customer(&mut self, customer_id: String) {
        if self.customer_id != customer_id {
            self.project_id.clear();
        }
        self.customer_id = customer_id;
    }

    pub fn validate(&self) -> Result<CreateUser, ApiError> {
        let mut missing = Vec::new();
        if self.username.trim().is_empty() {
            missing.push("ユーザー名は必須です");
        }
        if self.full_name.trim().is_empty() {
            missing.push("氏名は必須です");
        }
        if self.password.is_empty() {
            missing.push("パスワードは必須です");
        }
        if !self.email.contains('@') {
            missing.push("メールアドレスの形式が不正です");
        }
        if self.roles.is_empty() {
            missing.push("権限を1つ以上選択してください");
        }
        if !missing.is_empty() {
            let mut error = ApiError::validation("入力内容に誤りがあります");
            error.details = Some(serde_json::json!({ "errors": missing }));
            return Err(error);
        }
        Ok(CreateUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            roles: self.roles.clone(),
            customer_id: optional(&self.customer_id),
            project_id: optional(&self.project_id),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_user;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type State = ListPageState<UserFilters>;

    fn users() -> Vec<UserResponse> {
        let mut carol = sample_user("u3", "carol", "Carol Chen");
        carol.is_active = false;
        carol.roles = vec!["auditor".into()];
        let mut bob = sample_user("u2", "bob", "Bob Builder");
        bob.roles = vec!["admin".into(), "member".into()];
        bob.email = "builder@corp.example".into();
        vec![sample_user("u1", "alice", "Alice Example"), bob, carol]
    }

    fn ids(list: &[UserResponse]) -> Vec<&str> {
        list.iter().map(|u| u.id.as_str()).collect()
    }

    #[wasm_bindgen_test]
    fn search_matches_username_name_or_email() {
        let mut state = State::new();
        state.handle_search_change("CORP");
        state.handle_search_submit();
        assert_eq!(ids(&filter_users(&users(), &state)), vec!["u2"]);

        state.handle_search_change("chen");
        state.handle_search_submit();
        assert_eq!(ids(&filter_users(&users(), &state)), vec!["u3"]);
    }

    #[wasm_bindgen_test]
    fn uncommitted_search_does_not_filter() {
        let mut state = State::new();
        state.handle_search_change("nobody");
        assert_eq!(filter_users(&users(), &state).len(), 3);
    }

    #[wasm_bindgen_test]
    fn role_and_status_filters_combine() {
        let mut state = State::new();
        state.handle_filter_change(UserFilterField::Status, "active");
        assert_eq!(ids(&filter_users(&users(), &state)), vec!["u1", "u2"]);

        state.handle_filter_change(UserFilterField::Role, "admin");
        assert_eq!(ids(&filter_users(&users(), &state)), vec!["u2"]);

        state.handle_filter_change(UserFilterField::Status, "inactive");
        assert!(filter_users(&users(), &state).is_empty());
    }

    #[wasm_bindgen_test]
    fn pagination_clamps_past_the_end() {
        let list: Vec<UserResponse> = (0..5)
            .map(|i| sample_user(&format!("u{}", i), &format!("user{}", i), "Name"))
            .collect();
        let page = paginate_users(list.clone(), 1, 2);
        assert_eq!(ids(&page.items), vec!["u2", "u3"]);
        assert_eq!(page.page_count, 3);

        let clamped = paginate_users(list, 9, 2);
        assert_eq!(clamped.page, 2);
        assert_eq!(ids(&clamped.items), vec!["u4"]);

        let empty = paginate_users(Vec::new(), 3, 2);
        assert_eq!(empty.page, 0);
        assert_eq!(empty.page_count, 1);
        assert!(empty.items.is_empty());
    }

    #[wasm_bindgen_test]
    fn toggle_role_adds_and_removes_keeping_order() {
        let mut form = CreateUserFormState::default();
        form.toggle_role("admin");
        form.toggle_role("member");
        form.toggle_role("auditor");
        form.toggle_role("member");
        assert_eq!(form.roles, vec!["admin", "auditor"]);
        assert!(form.has_role("auditor"));
        assert!(!form.has_role("member"));
    }

    #[wasm_bindgen_test]
    fn changing_customer_clears_project() {
        let mut form = CreateUserFormState::default();
        form.set_customer("c1".into());
        form.project_id = "p1".into();
        form.set_customer("c1".into());
        assert_eq!(form.project_id, "p1");
        form.set_customer("c2".into());
        assert_eq!(form.customer_id, "c2");
        assert!(form.project_id.is_empty());
    }

    #[wasm_bindgen_test]
    fn validate_lists_every_problem() {
        let err = CreateUserFormState::default().validate().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        let errors = err.details.unwrap()["errors"].as_array().unwrap().len();
        assert_eq!(errors, 5);
    }

    #[wasm_bindgen_test]
    fn validate_builds_trimmed_request() {
        let mut form = CreateUserFormState {
            username: " dana ".into(),
            full_name: "Dana Scully".into(),
            email: "dana@example.com".into(),
            password: "s3cret!".into(),
            customer_id: "c1".into(),
            ..Default::default()
        };
        form.toggle_role("member");
        let request = form.validate().unwrap();
        assert_eq!(request.username, "dana");
        assert_eq!(request.roles, vec!["member"]);
        assert_eq!(request.customer_id.as_deref(), Some("c1"));
        assert_eq!(request.project_id, None);

        form.reset();
        assert_eq!(form, CreateUserFormState::default());
    }

    #[wasm_bindgen_test]
    fn message_state_keeps_one_kind() {
        let mut state = MessageState::default();
        state.set_error(ApiError::request_failed("NG"));
        assert!(state.error.is_some());
        state.set_success("OK");
        assert!(state.error.is_none());
        assert_eq!(state.success.as_deref(), Some("OK"));
        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[wasm_bindgen_test]
    fn role_label_falls_back_to_value() {
        assert_eq!(role_label("admin"), "管理者");
        assert_eq!(role_label("owner"), "owner");
    }
}

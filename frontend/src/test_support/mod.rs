#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;

    pub fn sample_user(id: &str, username: &str, full_name: &str) -> UserResponse {
        UserResponse {
            id: id.into(),
            username: username.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", username),
            roles: vec!["member".into()],
            is_active: true,
            customer_id: None,
            project_id: None,
        }
    }

    pub fn inactive_user(id: &str, username: &str) -> UserResponse {
        UserResponse {
            is_active: false,
            ..sample_user(id, username, "Inactive User")
        }
    }
}

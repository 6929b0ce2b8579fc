use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
const ACCESS_TOKEN_KEY: &str = "access_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn access_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn access_token() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn clear_access_token() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_access_token() {}

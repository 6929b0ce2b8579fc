use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

// window.__ADMIN_CONSOLE_ENV = { API_BASE_URL: "..." }, written by env.js
fn get_from_env_js() -> Option<String> {
    read_global("__ADMIN_CONSOLE_ENV", ["API_BASE_URL", "api_base_url"])
}

fn get_from_window_config() -> Option<String> {
    read_global("__ADMIN_CONSOLE_CONFIG", ["api_base_url", "API_BASE_URL"])
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__ADMIN_CONSOLE_CONFIG".into(), &obj);
}

fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        log::warn!("config.json returned status {}", resp.status().as_u16());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Picks the API base URL: env.js wins over the window config, which wins
/// over `config.json`. Blank values count as unset.
pub fn resolve_api_base_url(
    env_js: Option<String>,
    window_config: Option<String>,
    config_json: Option<RuntimeConfig>,
) -> String {
    env_js
        .into_iter()
        .chain(window_config)
        .chain(config_json.and_then(|cfg| cfg.api_base_url))
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    log::info!("API base URL: {}", value);
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let env_js = get_from_env_js();
    let window_config = get_from_window_config();
    if env_js.is_some() || window_config.is_some() {
        return cache_base_url(resolve_api_base_url(env_js, window_config, None));
    }
    let fetched = fetch_runtime_config().await;
    if let Some(cfg) = &fetched {
        write_window_config(cfg);
    }
    cache_base_url(resolve_api_base_url(None, None, fetched))
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

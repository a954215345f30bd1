use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const ENV_GLOBAL: &str = "__SUBTRACK_ENV";
const CONFIG_GLOBAL: &str = "__SUBTRACK_CONFIG";

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__SUBTRACK_ENV (env.js) wins over window.__SUBTRACK_CONFIG.
    read_global_key(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]))
        .filter(|url| !url.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config(origin: &str) -> Option<RuntimeConfig> {
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub fn default_base_url(origin: Option<&str>) -> String {
    match origin {
        Some(origin) if !origin.is_empty() && origin != "null" => {
            format!("{}/api", normalize_base_url(origin))
        }
        _ => "/api".to_string(),
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    let origin = page_origin();
    if let Some(origin) = origin.as_deref() {
        if let Some(cfg) = fetch_runtime_config(origin).await {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url.filter(|u| !u.trim().is_empty()) {
                log::debug!("api base url taken from config.json");
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(&default_base_url(origin.as_deref()))
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("api base url resolved to {}", url);
}

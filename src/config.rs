use aethereal_core::{ViewerConfig, CONFIG_KEYS};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use web_sys::UrlSearchParams;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads viewer options from the page query string, e.g.
/// `?orbs=12&flip-ms=800&background=off`. Bad values are logged and skipped.
/// Without an explicit `reduced-motion` option the OS preference decides.
pub(crate) fn load_viewer_config() -> ViewerConfig {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let mut config = config_from_query(&search);
    if !has_option(&search, "reduced-motion") && prefers_reduced_motion() {
        config.reduced_motion = true;
    }
    config
}

pub(crate) fn config_from_query(search: &str) -> ViewerConfig {
    let mut config = ViewerConfig::default();
    let search = search.trim();
    if search.is_empty() {
        return config;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        gloo::console::warn!("ignoring malformed query string", search);
        return config;
    };
    for key in CONFIG_KEYS {
        let Some(raw) = params.get(key) else {
            continue;
        };
        if let Err(err) = config.apply(key, &raw) {
            gloo::console::warn!("viewer option ignored", err.to_string());
        }
    }
    config
}

fn has_option(search: &str, key: &str) -> bool {
    UrlSearchParams::new_with_str(search.trim())
        .map(|params| params.has(key))
        .unwrap_or(false)
}

pub(crate) fn prefers_reduced_motion() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(match_media) = Reflect::get(&window, &"matchMedia".into()) else {
        return false;
    };
    let Ok(match_media) = match_media.dyn_into::<Function>() else {
        return false;
    };
    let Ok(query) = match_media.call1(&window, &REDUCED_MOTION_QUERY.into()) else {
        return false;
    };
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

pub(crate) fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub(crate) fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

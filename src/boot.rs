//! Bridge to the loading overlay defined inline in `index.html`
//! (`window.__AE_BOOT`). Every call is a no-op when the overlay script is
//! missing, so the viewer still runs from a bare page.

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Object, Reflect};

#[cfg(target_arch = "wasm32")]
const BOOT_GLOBAL: &str = "__AE_BOOT";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn boot_object() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Object>().ok()
}

#[cfg(target_arch = "wasm32")]
fn call(method: &str, args: &[JsValue]) {
    let Some(boot) = boot_object() else {
        return;
    };
    let Ok(func) = Reflect::get(&boot, &JsValue::from_str(method))
        .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from))
    else {
        return;
    };
    let array: Array = args.iter().collect();
    if let Err(err) = func.apply(&boot, &array) {
        gloo::console::warn!("boot overlay call failed", method, err);
    }
}

pub(crate) fn set_phase(label: &str, detail: &str) {
    #[cfg(target_arch = "wasm32")]
    call(
        "setPhase",
        &[JsValue::from_str(label), JsValue::from_str(detail)],
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (label, detail);
}

/// Replaces the overlay with an error card. Once `ready` has run the overlay
/// is gone and failures are only logged.
pub(crate) fn fail(code: &str, message: &str, hint: &str) {
    #[cfg(target_arch = "wasm32")]
    call(
        "fail",
        &[
            JsValue::from_str(code),
            JsValue::from_str(message),
            JsValue::from_str(hint),
        ],
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (code, message, hint);
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if READY_SENT.with(|flag| flag.replace(true)) {
            return;
        }
        call("ready", &[]);
    }
}

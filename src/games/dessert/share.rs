//! Sharing the score with another application.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

/// MIME type of the share payload.
pub const SHARE_MIME_TYPE: &str = "text/plain";

/// Rejection name for a share sheet the user closed without picking a target.
const DISMISSED: &str = "AbortError";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Nothing on the host can take a share of this type.
    #[error("no application can handle a text/plain share")]
    NoHandler,
}

/// The host's "share with another app" facility.
pub trait ShareHost {
    fn share(&mut self, mime_type: &str, text: &str) -> Result<(), ShareError>;

    /// True once if an accepted share later failed with no target able to
    /// take it. Clears the failure.
    fn take_deferred_failure(&mut self) -> bool {
        false
    }
}

/// Message shared for the given score.
pub fn share_text(desserts_sold: u64, revenue: u64) -> String {
    format!(
        "I've clicked {} Desserts for a total of {}$ #AndroidDessertClicker",
        desserts_sold, revenue
    )
}

/// Whether a share rejected with the error named `name` was the user closing
/// the sheet, as opposed to the host being unable to share.
pub fn is_dismissal(name: Option<&str>) -> bool {
    name == Some(DISMISSED)
}

/// Web Share API (`navigator.share`). Browsers without it, or that refuse the
/// call outright, report `NoHandler`. A refusal that arrives later through the
/// returned promise is kept until `take_deferred_failure` picks it up.
#[derive(Default)]
pub struct NavigatorShare {
    failed: Rc<Cell<bool>>,
}

impl NavigatorShare {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShareHost for NavigatorShare {
    fn share(&mut self, mime_type: &str, text: &str) -> Result<(), ShareError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        if mime_type != SHARE_MIME_TYPE {
            return Err(ShareError::NoHandler);
        }

        let navigator: JsValue = web_sys::window()
            .ok_or(ShareError::NoHandler)?
            .navigator()
            .into();
        let share_fn = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .map_err(|_| ShareError::NoHandler)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ShareError::NoHandler)?;

        let data = js_sys::Object::new();
        js_sys::Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text))
            .map_err(|_| ShareError::NoHandler)?;

        // `canShare` is optional; when present it must accept the payload.
        if let Some(can_share) = js_sys::Reflect::get(&navigator, &JsValue::from_str("canShare"))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        {
            let accepted = can_share
                .call1(&navigator, &data)
                .map_err(|_| ShareError::NoHandler)?;
            if !accepted.is_truthy() {
                return Err(ShareError::NoHandler);
            }
        }

        let result = share_fn
            .call1(&navigator, &data)
            .map_err(|_| ShareError::NoHandler)?;

        if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
            let failed = Rc::clone(&self.failed);
            let on_reject = Closure::wrap(Box::new(move |reason: JsValue| {
                let name = js_sys::Reflect::get(&reason, &JsValue::from_str("name"))
                    .ok()
                    .and_then(|v| v.as_string());
                if is_dismissal(name.as_deref()) {
                    web_sys::console::log_2(&"Dessert Clicker: share dismissed".into(), &reason);
                } else {
                    web_sys::console::log_2(&"Dessert Clicker: share refused".into(), &reason);
                    failed.set(true);
                }
            }) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }
        Ok(())
    }

    fn take_deferred_failure(&mut self) -> bool {
        self.failed.replace(false)
    }
}

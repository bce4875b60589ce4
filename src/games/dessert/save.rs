//! Instance state that survives the page being torn down and rebuilt.
//!
//! Only the two counters are kept; the dessert shown is re-derived from the
//! sold count on restore. The bundle lives in `sessionStorage`, so it survives
//! reloads and back/forward navigation of the same tab but not closing it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::select_dessert;
use super::state::DessertState;

pub const KEY_REVENUE: &str = "revenue_key";
pub const KEY_DESSERT_SOLD: &str = "dessert_sold_key";

/// sessionStorage key holding the serialized bundle.
const STORAGE_KEY: &str = "dessert_clicker_instance_state";

/// Key-value store handed out at teardown and handed back at creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: Map<String, Value>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: &str, value: u64) {
        self.entries.insert(key.to_string(), Value::from(value));
    }

    /// Integer stored under `key`, or `default` when missing or not a
    /// non-negative integer.
    pub fn get_int(&self, key: &str, default: u64) -> u64 {
        self.entries
            .get(key)
            .and_then(Value::as_u64)
            .unwrap_or(default)
    }
}

/// Write the counters into `out`.
pub fn save_instance_state(state: &DessertState, out: &mut Bundle) {
    out.put_int(KEY_REVENUE, state.revenue);
    out.put_int(KEY_DESSERT_SOLD, state.desserts_sold);
}

/// Read the counters back from `saved` and resync the dessert on display.
/// A restored dessert is not a new one, so nothing is logged or flashed.
pub fn restore_instance_state(state: &mut DessertState, saved: &Bundle) {
    state.revenue = saved.get_int(KEY_REVENUE, 0);
    state.desserts_sold = saved.get_int(KEY_DESSERT_SOLD, 0);
    state.current = select_dessert(state.desserts_sold);
}

/// Parse a stored bundle. Anything but a JSON object is rejected.
pub fn parse_bundle(json: &str) -> serde_json::Result<Bundle> {
    serde_json::from_str(json)
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Persist `bundle` to sessionStorage. Failures are logged and ignored.
pub fn store_bundle(bundle: &Bundle) {
    let json = match serde_json::to_string(bundle) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Dessert Clicker: failed to serialize instance state: {e}").into(),
            );
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("Dessert Clicker: failed to write sessionStorage: {e:?}").into(),
            );
        }
    }
}

/// Bundle saved by a previous instance of this page, if any.
/// Unparseable data is dropped and treated as absent.
pub fn load_bundle() -> Option<Bundle> {
    let storage = get_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok()??;

    match parse_bundle(&json) {
        Ok(bundle) => Some(bundle),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Dessert Clicker: discarding unreadable instance state: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            None
        }
    }
}

//! Semantic action IDs for Dessert Clicker click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

pub const SELL_DESSERT: u16 = 0;
pub const SHARE: u16 = 1;

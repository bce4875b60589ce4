//! Dessert Clicker game state definitions.

use super::catalog::{Dessert, ALL_DESSERTS};

/// How long a toast stays on screen, in ticks (3.5 s at 10 ticks/sec).
pub const TOAST_TICKS: u32 = 35;

/// Log entries kept for the log panel.
const MAX_LOG: usize = 50;

/// Log entry for the Dessert game.
#[derive(Clone, Debug)]
pub struct DessertLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// A short-lived, non-blocking notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub text: String,
    pub ticks_left: u32,
}

/// Full state of a Dessert Clicker session.
///
/// Only `revenue` and `desserts_sold` survive a teardown. `current` is
/// re-derived from `desserts_sold`; everything else is presentation.
pub struct DessertState {
    /// Total money earned.
    pub revenue: u64,
    /// Total desserts sold.
    pub desserts_sold: u64,
    /// Index into `ALL_DESSERTS` of the dessert being produced.
    pub current: usize,
    /// Message log.
    pub log: Vec<DessertLogEntry>,
    /// Toast currently on screen, if any.
    pub toast: Option<Toast>,
    /// Ticks remaining for the click feedback flash.
    pub click_flash: u32,
    /// Ticks remaining for the "new dessert" highlight.
    pub tier_flash: u32,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
}

impl DessertState {
    pub fn new() -> Self {
        Self {
            revenue: 0,
            desserts_sold: 0,
            current: 0,
            log: vec![DessertLogEntry {
                text: "Welcome to Dessert Clicker!".into(),
                is_important: true,
            }],
            toast: None,
            click_flash: 0,
            tier_flash: 0,
            anim_frame: 0,
        }
    }

    /// The dessert currently being produced.
    pub fn current_dessert(&self) -> &'static Dessert {
        &ALL_DESSERTS[self.current]
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(DessertLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > MAX_LOG {
            self.log.remove(0);
        }
    }

    /// Show a toast, replacing any toast still on screen.
    pub fn show_toast(&mut self, text: &str) {
        self.toast = Some(Toast {
            text: text.to_string(),
            ticks_left: TOAST_TICKS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dessert::catalog::DessertImage;

    #[test]
    fn new_state_starts_with_cupcake() {
        let state = DessertState::new();
        assert_eq!(state.revenue, 0);
        assert_eq!(state.desserts_sold, 0);
        assert_eq!(state.current_dessert().image, DessertImage::Cupcake);
        assert_eq!(state.current_dessert().price, 5);
        assert!(state.toast.is_none());
    }

    #[test]
    fn log_truncation() {
        let mut state = DessertState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert_eq!(state.log.len(), MAX_LOG);
        assert_eq!(state.log.last().map(|e| e.text.as_str()), Some("msg 59"));
    }

    #[test]
    fn toast_replaces_previous() {
        let mut state = DessertState::new();
        state.show_toast("first");
        if let Some(t) = state.toast.as_mut() {
            t.ticks_left = 3;
        }
        state.show_toast("second");
        assert_eq!(
            state.toast,
            Some(Toast {
                text: "second".into(),
                ticks_left: TOAST_TICKS,
            })
        );
    }
}

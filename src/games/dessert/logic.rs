//! Dessert Clicker game logic — pure functions over `DessertState`.

use super::catalog::{select_dessert, ALL_DESSERTS};
use super::share::{share_text, ShareError, ShareHost, SHARE_MIME_TYPE};
use super::state::DessertState;

/// Ticks the art panel stays highlighted after a click.
const CLICK_FLASH_TICKS: u32 = 3;
/// Ticks the art panel stays highlighted after a new dessert appears.
const TIER_FLASH_TICKS: u32 = 15;

pub const SHARING_NOT_AVAILABLE: &str = "Sharing Not Available";

/// Advance presentation timers by `delta_ticks` ticks (at 10 ticks/sec).
pub fn tick(state: &mut DessertState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    state.tier_flash = state.tier_flash.saturating_sub(delta_ticks);

    if let Some(toast) = state.toast.as_mut() {
        toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
        if toast.ticks_left == 0 {
            state.toast = None;
        }
    }
}

/// Sell one dessert at the current dessert's price, then move to a new
/// dessert if the sale crossed a threshold.
///
/// Counters saturate at `u64::MAX`.
pub fn click(state: &mut DessertState) {
    state.revenue = state.revenue.saturating_add(state.current_dessert().price);
    state.desserts_sold = state.desserts_sold.saturating_add(1);
    state.click_flash = CLICK_FLASH_TICKS;

    show_current_dessert(state);
}

/// Point `state.current` at the dessert matching `desserts_sold`.
/// Returns true when the dessert changed (and the image must be swapped).
pub fn show_current_dessert(state: &mut DessertState) -> bool {
    let selected = select_dessert(state.desserts_sold);
    if selected == state.current {
        return false;
    }

    state.current = selected;
    state.tier_flash = TIER_FLASH_TICKS;
    let d = state.current_dessert();
    let text = format!(
        "Now producing {} (${} each)",
        d.image.name(),
        format_number(d.price)
    );
    state.add_log(&text, true);
    true
}

/// Sales still needed before the next dessert starts production.
/// `None` once the last dessert is in production.
pub fn sales_to_next_dessert(state: &DessertState) -> Option<u64> {
    ALL_DESSERTS
        .get(state.current + 1)
        .map(|next| next.start_production_amount.saturating_sub(state.desserts_sold))
}

/// Hand the current score to the host's share facility.
/// A missing share target is reported with a toast and nothing else.
pub fn share(state: &mut DessertState, host: &mut dyn ShareHost) {
    let text = share_text(state.desserts_sold, state.revenue);
    match host.share(SHARE_MIME_TYPE, &text) {
        Ok(()) => state.add_log("Shared your dessert stats", false),
        Err(ShareError::NoHandler) => state.show_toast(SHARING_NOT_AVAILABLE),
    }
}

/// Toast a share the host accepted but could not deliver.
pub fn report_deferred_share_failure(state: &mut DessertState, host: &mut dyn ShareHost) {
    if host.take_deferred_failure() {
        state.show_toast(SHARING_NOT_AVAILABLE);
    }
}

/// Format an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dessert::catalog::DessertImage;
    use crate::games::dessert::state::TOAST_TICKS;

    /// Share host that records what it was asked to share.
    struct RecordingHost {
        shared: Vec<(String, String)>,
    }

    impl ShareHost for RecordingHost {
        fn share(&mut self, mime_type: &str, text: &str) -> Result<(), ShareError> {
            self.shared.push((mime_type.to_string(), text.to_string()));
            Ok(())
        }
    }

    struct NoShareApps;

    impl ShareHost for NoShareApps {
        fn share(&mut self, _mime_type: &str, _text: &str) -> Result<(), ShareError> {
            Err(ShareError::NoHandler)
        }
    }

    fn click_n(state: &mut DessertState, n: u32) {
        for _ in 0..n {
            click(state);
        }
    }

    #[test]
    fn one_click_sells_a_cupcake() {
        let mut state = DessertState::new();
        click(&mut state);
        assert_eq!(state.revenue, 5);
        assert_eq!(state.desserts_sold, 1);
        assert_eq!(state.current_dessert().image, DessertImage::Cupcake);
    }

    #[test]
    fn fifth_click_switches_to_donut() {
        let mut state = DessertState::new();
        click_n(&mut state, 4);
        assert_eq!(state.current_dessert().image, DessertImage::Cupcake);

        click(&mut state);
        assert_eq!(state.revenue, 25);
        assert_eq!(state.desserts_sold, 5);
        assert_eq!(state.current_dessert().image, DessertImage::Donut);
        assert_eq!(state.current_dessert().price, 10);
    }

    #[test]
    fn sixth_click_is_priced_as_donut() {
        let mut state = DessertState::new();
        click_n(&mut state, 6);
        assert_eq!(state.revenue, 25 + 10);
    }

    #[test]
    fn twentieth_click_switches_to_eclair() {
        let mut state = DessertState::new();
        click_n(&mut state, 19);
        assert_eq!(state.current_dessert().image, DessertImage::Donut);
        click(&mut state);
        assert_eq!(state.desserts_sold, 20);
        assert_eq!(state.current_dessert().image, DessertImage::Eclair);
        // 5 cupcakes at 5 + 15 donuts at 10
        assert_eq!(state.revenue, 25 + 150);
    }

    #[test]
    fn click_uses_price_before_tier_change() {
        let mut state = DessertState::new();
        state.desserts_sold = 4;
        click(&mut state);
        // The 5th sale is still a cupcake sale.
        assert_eq!(state.revenue, 5);
        assert_eq!(state.current_dessert().image, DessertImage::Donut);
    }

    #[test]
    fn show_current_dessert_only_reports_changes() {
        let mut state = DessertState::new();
        assert!(!show_current_dessert(&mut state));
        assert_eq!(state.tier_flash, 0);

        state.desserts_sold = 50;
        assert!(show_current_dessert(&mut state));
        assert_eq!(state.current_dessert().image, DessertImage::Froyo);
        assert!(state.tier_flash > 0);

        // Same tier again: no redraw
        state.tier_flash = 0;
        state.desserts_sold = 51;
        assert!(!show_current_dessert(&mut state));
        assert_eq!(state.tier_flash, 0);
    }

    #[test]
    fn tier_change_is_logged() {
        let mut state = DessertState::new();
        click_n(&mut state, 5);
        let last = state.log.last().map(|e| e.text.clone()).unwrap_or_default();
        assert_eq!(last, "Now producing Donut ($10 each)");
    }

    #[test]
    fn counters_saturate() {
        let mut state = DessertState::new();
        state.desserts_sold = u64::MAX;
        state.revenue = u64::MAX - 1;
        show_current_dessert(&mut state);
        click(&mut state);
        assert_eq!(state.revenue, u64::MAX);
        assert_eq!(state.desserts_sold, u64::MAX);
        assert_eq!(state.current_dessert().image, DessertImage::Oreo);
    }

    #[test]
    fn sales_to_next() {
        let mut state = DessertState::new();
        assert_eq!(sales_to_next_dessert(&state), Some(5));
        click_n(&mut state, 3);
        assert_eq!(sales_to_next_dessert(&state), Some(2));
        click_n(&mut state, 2);
        assert_eq!(sales_to_next_dessert(&state), Some(15));

        state.desserts_sold = 25_000;
        show_current_dessert(&mut state);
        assert_eq!(sales_to_next_dessert(&state), None);
    }

    #[test]
    fn tick_expires_flashes_and_toast() {
        let mut state = DessertState::new();
        click(&mut state);
        state.show_toast("hello");
        tick(&mut state, CLICK_FLASH_TICKS);
        assert_eq!(state.click_flash, 0);
        assert!(state.toast.is_some());
        tick(&mut state, TOAST_TICKS);
        assert!(state.toast.is_none());
    }

    #[test]
    fn tick_zero_is_noop() {
        let mut state = DessertState::new();
        state.show_toast("hello");
        tick(&mut state, 0);
        assert_eq!(state.anim_frame, 0);
        assert_eq!(state.toast.as_ref().map(|t| t.ticks_left), Some(TOAST_TICKS));
    }

    #[test]
    fn share_sends_plain_text_with_counters() {
        let mut state = DessertState::new();
        click_n(&mut state, 5);
        let mut host = RecordingHost { shared: Vec::new() };
        share(&mut state, &mut host);

        assert_eq!(host.shared.len(), 1);
        let (mime, text) = &host.shared[0];
        assert_eq!(mime, "text/plain");
        assert!(text.contains('5'));
        assert!(text.contains("25"));
        assert!(state.toast.is_none());
    }

    #[test]
    fn share_without_handler_shows_toast() {
        let mut state = DessertState::new();
        share(&mut state, &mut NoShareApps);
        assert_eq!(
            state.toast.as_ref().map(|t| t.text.as_str()),
            Some(SHARING_NOT_AVAILABLE)
        );
        // Counters are untouched
        assert_eq!(state.revenue, 0);
        assert_eq!(state.desserts_sold, 0);
    }

    #[test]
    fn share_can_be_retried_after_failure() {
        let mut state = DessertState::new();
        share(&mut state, &mut NoShareApps);
        let mut host = RecordingHost { shared: Vec::new() };
        share(&mut state, &mut host);
        assert_eq!(host.shared.len(), 1);
    }

    /// Accepts the share, then fails once the host gets around to it.
    struct RefusesLater {
        failed: bool,
    }

    impl ShareHost for RefusesLater {
        fn share(&mut self, _mime_type: &str, _text: &str) -> Result<(), ShareError> {
            self.failed = true;
            Ok(())
        }

        fn take_deferred_failure(&mut self) -> bool {
            std::mem::take(&mut self.failed)
        }
    }

    #[test]
    fn late_share_refusal_shows_toast_once() {
        let mut state = DessertState::new();
        let mut host = RefusesLater { failed: false };
        share(&mut state, &mut host);
        assert!(state.toast.is_none());

        report_deferred_share_failure(&mut state, &mut host);
        assert_eq!(
            state.toast.as_ref().map(|t| t.text.as_str()),
            Some(SHARING_NOT_AVAILABLE)
        );

        state.toast = None;
        report_deferred_share_failure(&mut state, &mut host);
        assert!(state.toast.is_none());
    }

    #[test]
    fn hosts_without_deferred_failures_never_toast() {
        let mut state = DessertState::new();
        let mut host = RecordingHost { shared: Vec::new() };
        share(&mut state, &mut host);
        report_deferred_share_failure(&mut state, &mut host);
        assert!(state.toast.is_none());
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(20_000), "20,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_current_matches_lookup_after_clicks(n in 0u32..600) {
            let mut state = DessertState::new();
            for _ in 0..n {
                click(&mut state);
            }
            prop_assert_eq!(state.desserts_sold, n as u64);
            prop_assert_eq!(state.current, select_dessert(state.desserts_sold));
        }

        #[test]
        fn prop_tier_never_goes_back(start in 0u64..30_000, n in 1u32..100) {
            let mut state = DessertState::new();
            state.desserts_sold = start;
            show_current_dessert(&mut state);
            let mut prev = state.current;
            for _ in 0..n {
                click(&mut state);
                prop_assert!(state.current >= prev);
                prev = state.current;
            }
        }

        #[test]
        fn prop_click_adds_previous_price(start in 0u64..30_000) {
            let mut state = DessertState::new();
            state.desserts_sold = start;
            show_current_dessert(&mut state);
            let price = state.current_dessert().price;
            let before = state.revenue;
            click(&mut state);
            prop_assert_eq!(state.revenue, before + price);
        }

        #[test]
        fn prop_format_number_digits_preserved(n in any::<u64>()) {
            let s = format_number(n);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, n.to_string());
        }
    }
}

//! Dessert Clicker: sell desserts one tap at a time.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod render;
pub mod save;
pub mod share;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use save::Bundle;
use share::ShareHost;
use state::DessertState;

pub struct DessertGame {
    pub state: DessertState,
    share_host: Box<dyn ShareHost>,
}

impl DessertGame {
    /// Build the game, picking up the counters from `saved` when the page is
    /// being recreated.
    pub fn create(saved: Option<&Bundle>, share_host: Box<dyn ShareHost>) -> Self {
        let mut state = DessertState::new();
        if let Some(bundle) = saved {
            save::restore_instance_state(&mut state, bundle);
        }
        Self { state, share_host }
    }

    /// Externalize what must survive a teardown.
    pub fn save_instance_state(&self, out: &mut Bundle) {
        save::save_instance_state(&self.state, out);
    }

    fn dispatch(&mut self, action_id: u16) -> bool {
        match action_id {
            actions::SELL_DESSERT => {
                logic::click(&mut self.state);
                true
            }
            actions::SHARE => {
                logic::share(&mut self.state, self.share_host.as_mut());
                true
            }
            _ => false,
        }
    }
}

impl Game for DessertGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id) => self.dispatch(*id),
            InputEvent::Key(' ') | InputEvent::Key('\n') | InputEvent::Key('d') => {
                self.dispatch(actions::SELL_DESSERT)
            }
            InputEvent::Key('s') => self.dispatch(actions::SHARE),
            InputEvent::Key(_) => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::report_deferred_share_failure(&mut self.state, self.share_host.as_mut());
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

mod games;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use games::dessert::save::{self, Bundle};
use games::dessert::share::NavigatorShare;
use games::dessert::DessertGame;
use games::Game;
use input::{ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::{GameTime, TICKS_PER_SEC};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Resolve a mouse/touch position in page pixels to a click action.
fn dom_pixel_to_action(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<u16> {
    let document = web_sys::window()?.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    cs.hit_test_pixels(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

fn now_ms() -> Option<f64> {
    Some(web_sys::window()?.performance()?.now())
}

/// Write the game's instance state to sessionStorage.
fn persist(game: &DessertGame) {
    let mut bundle = Bundle::new();
    game.save_instance_state(&mut bundle);
    save::store_bundle(&bundle);
    web_sys::console::log_1(
        &format!(
            "Dessert Clicker: saved instance state (sold={}, revenue={})",
            game.state.desserts_sold, game.state.revenue
        )
        .into(),
    );
}

/// Save the instance state whenever the page may be torn down: navigating
/// away, reloading, or being hidden (after which mobile browsers may discard it).
fn register_teardown_hooks(game: &Rc<RefCell<DessertGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_pagehide = {
        let game = game.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            persist(&game.borrow());
        }) as Box<dyn FnMut(_)>)
    };
    if let Err(e) = window
        .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
    {
        web_sys::console::warn_1(
            &format!("Dessert Clicker: could not listen for pagehide: {e:?}").into(),
        );
    }
    on_pagehide.forget();

    let Some(document) = window.document() else {
        return;
    };
    let on_visibility = {
        let game = game.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if document.hidden() {
                persist(&game.borrow());
            }
        }) as Box<dyn FnMut(_)>)
    };
    if let Err(e) = document.add_event_listener_with_callback(
        "visibilitychange",
        on_visibility.as_ref().unchecked_ref(),
    ) {
        web_sys::console::warn_1(
            &format!("Dessert Clicker: could not listen for visibilitychange: {e:?}").into(),
        );
    }
    on_visibility.forget();
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let saved = save::load_bundle();
    web_sys::console::log_1(
        &format!(
            "Dessert Clicker: created (restoring saved state: {})",
            saved.is_some()
        )
        .into(),
    );

    let game = Rc::new(RefCell::new(DessertGame::create(
        saved.as_ref(),
        Box::new(NavigatorShare::new()),
    )));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let game_time = Rc::new(RefCell::new(GameTime::new(TICKS_PER_SEC)));

    register_teardown_hooks(&game);

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_action(mouse_event.x, mouse_event.y, &cs)
            };

            if let Some(action_id) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c.to_ascii_lowercase()),
                KeyCode::Enter => InputEvent::Key('\n'),
                _ => return,
            };
            game.borrow_mut().handle_input(&event);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            if let Some(now) = now_ms() {
                let ticks = game_time.borrow_mut().update(now);
                game.borrow_mut().tick(ticks);
            }

            let size = f.area();
            click_state.borrow_mut().begin_frame(size.width, size.height);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(10)])
                .split(size);

            render_title(f, chunks[0]);
            game.borrow().render(f, chunks[1], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut ratzilla::ratatui::Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Dessert Clicker",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

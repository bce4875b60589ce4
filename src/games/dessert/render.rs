//! Dessert Clicker rendering: the dessert button, counters, menu, toast and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{SELL_DESSERT, SHARE};
use super::logic::{format_number, sales_to_next_dessert};
use super::state::DessertState;

pub fn render(state: &DessertState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Log panel on the right when wide enough
    let (main_area, log_area) = if area.width >= 80 {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (area, None)
    };

    let [button_area, counters_area, menu_area, _] = main_chunks(main_area);

    render_dessert_button(state, f, button_area, click_state);
    render_counters(state, f, counters_area);
    render_menu(f, menu_area, click_state);

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }

    if let Some(toast) = &state.toast {
        if let Some(rect) = toast_area(&toast.text, main_area, menu_area) {
            render_toast(&toast.text, f, rect);
        }
    }
}

fn main_chunks(main_area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // dessert button
            Constraint::Length(5), // counters
            Constraint::Length(3), // menu
            Constraint::Min(0),
        ])
        .areas(main_area)
}

/// Where a toast showing `text` goes: bottom of the space above the menu, so
/// it never covers a click target.
fn toast_area(text: &str, main_area: Rect, menu_area: Rect) -> Option<Rect> {
    let above_menu = menu_area.y.saturating_sub(main_area.y);
    if above_menu < 3 {
        return None;
    }
    let width = (text.chars().count() as u16 + 4).min(main_area.width);
    Some(Rect::new(
        main_area.x + (main_area.width - width) / 2,
        main_area.y + above_menu - 3,
        width,
        3,
    ))
}

/// The dessert art doubles as the sell button: the whole panel is clickable.
fn render_dessert_button(
    state: &DessertState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let dessert = state.current_dessert();

    let border_color = if state.click_flash > 0 {
        Color::White
    } else if state.tier_flash > 0 {
        if state.anim_frame % 4 < 2 { Color::Magenta } else { Color::White }
    } else {
        Color::Yellow
    };
    let art_style = if state.click_flash > 0 {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let title = if state.tier_flash > 0 {
        format!(" ✦ {} ✦ ", dessert.image.name())
    } else {
        format!(" {} ", dessert.image.name())
    };
    let borders = if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let mut cl = ClickableList::new();
    for art_line in dessert.image.art() {
        cl.push_clickable(Line::from(Span::styled(art_line, art_style)), SELL_DESSERT);
    }
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [D] ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Sell for ${}", format_number(dessert.price)),
                Style::default().fg(Color::White),
            ),
        ]),
        SELL_DESSERT,
    );

    let mut cs = click_state.borrow_mut();
    // Register the panel first so the per-line targets sit on top of it.
    cs.add_click_target(area, SELL_DESSERT);
    cl.register_targets(area, &mut cs, 1, 1, 0, 0);

    let widget = Paragraph::new(cl.into_lines())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );
    f.render_widget(widget, area);
}

fn render_counters(state: &DessertState, f: &mut Frame, area: Rect) {
    let next_line = match sales_to_next_dessert(state) {
        Some(n) => Line::from(Span::styled(
            format!(" Next dessert in {} sales", format_number(n)),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            " Every dessert unlocked!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Revenue: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("${}", format_number(state.revenue)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Desserts sold: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_number(state.desserts_sold),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        next_line,
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Sales "),
    );
    f.render_widget(widget, area);
}

fn render_menu(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [S] ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Share", Style::default().fg(Color::White)),
        ]),
        SHARE,
    );

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
    }

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu "),
    );
    f.render_widget(widget, area);
}

fn render_toast(text: &str, f: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

fn render_log(state: &DessertState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;

    // Newest first
    let log_lines: Vec<Line> = state
        .log
        .iter()
        .rev()
        .take(visible_height)
        .map(|entry| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

//! Clickable UI building blocks.
//!
//! - [`ClickableList`] — lines of text where some lines are buttons.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// A builder that pairs rendered [`Line`]s with click actions, so click
/// targets follow their line when lines are added or removed above them.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push_clickable(Line::from("Share"), SHARE);
/// cl.register_targets(area, &mut cs, 1, 1, 0, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    #[cfg(test)]
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line that triggers `action_id` when tapped.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register a row target for every clickable line that is visible.
    ///
    /// * `top_offset` / `bottom_offset` — rows taken by borders above/below the content.
    /// * `scroll` — lines scrolled out of view at the top.
    /// * `inner_width` — wrap width; `0` when the widget does not wrap, so each
    ///   line is one row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        // Visual row at which each line starts once wrapped.
        let mut starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let h = if inner_width == 0 {
                1
            } else {
                (line.width().max(1)).div_ceil(inner_width as usize) as u16
            };
            starts.push(cumulative);
            heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            for vr in starts[li]..starts[li] + heights[li] {
                if vr < scroll {
                    continue;
                }
                let row = content_y + (vr - scroll);
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

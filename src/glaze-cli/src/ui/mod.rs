//! Drawing a session [`Frame`](glaze_core::Frame) with ratatui.

pub mod colors;
mod popup;

use std::ops::Range;
use std::time::Duration;

use glaze_config::Toggle;
use glaze_core::{Frame as View, SearchStatus};
use ratatui::Frame;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub use colors::Palette;
use popup::SuggestionPopup;

use crate::overlay::SettingsOverlay;

/// Renderer-side state that is not part of the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState<'a> {
    pub overlay: Option<&'a SettingsOverlay>,
    pub caret_on: bool,
    /// Lines scrolled up from the bottom of the log.
    pub scroll_back: usize,
}

/// Caret blink phase. `speed` is blinks per second; zero or less never blinks.
pub fn caret_visible(elapsed: Duration, speed: f32) -> bool {
    if speed <= 0.0 || !speed.is_finite() {
        return true;
    }
    (elapsed.as_secs_f32() * speed).fract() < 0.5
}

/// Rows of the log to show in a viewport of `height` rows.
///
/// A `focus` line (the current search hit) is always brought into view;
/// otherwise the window sits `scroll_back` rows above the bottom.
pub fn visible_window(total: usize, height: usize, scroll_back: usize, focus: Option<usize>) -> Range<usize> {
    if height == 0 || total == 0 {
        return 0..0;
    }
    let bottom_start = total.saturating_sub(height);
    let mut start = bottom_start.saturating_sub(scroll_back);
    if let Some(line) = focus.filter(|&l| l < total) {
        if line < start {
            start = line;
        } else if line >= start + height {
            start = line + 1 - height;
        }
    }
    start..(start + height).min(total)
}

pub fn draw(f: &mut Frame, view: &View, state: &ViewState<'_>) {
    let palette = Palette::from_settings(&view.settings);
    let base = Style::default().fg(palette.text).bg(palette.background);
    let area = f.area();
    f.render_widget(Block::default().style(base), area);

    let search_rows = if view.search.is_some() { 1 } else { 0 };
    let [log_area, input_area, search_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(search_rows),
    ])
    .areas(area);

    draw_log(f, view, state.scroll_back, log_area, base);
    let prompt_width = draw_input(f, view, state.caret_on, input_area, palette);

    if let Some(search) = &view.search {
        draw_search_bar(f, search, search_area, palette);
    }

    if !view.suggestions.is_empty() {
        let popup = SuggestionPopup::new(
            &view.suggestions,
            view.selected_suggestion.unwrap_or(0),
            view.suggestion_scroll,
            view.suggestion_rows,
            palette,
        );
        let popup_area = popup.area_above(input_area, input_area.x + prompt_width, log_area);
        f.render_widget(popup, popup_area);
    }

    if let Some(overlay) = state.overlay {
        draw_overlay(f, overlay, view, area, palette);
    }
}

fn draw_log(f: &mut Frame, view: &View, scroll_back: usize, area: Rect, base: Style) {
    let focus = view.search.as_ref().and_then(SearchStatus::highlighted_line);
    let window = visible_window(view.lines.len(), area.height as usize, scroll_back, focus);
    let matched = view.search.as_ref().map(|s| s.matched_lines.as_slice()).unwrap_or(&[]);

    let lines: Vec<Line> = window
        .map(|i| {
            let style = if Some(i) == focus {
                base.add_modifier(Modifier::REVERSED)
            } else if matched.binary_search(&i).is_ok() {
                base.add_modifier(Modifier::UNDERLINED)
            } else {
                base
            };
            Line::styled(view.lines[i].as_str(), style)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).style(base), area);
}

/// Draws prompt and buffer; returns the prompt width in cells.
fn draw_input(f: &mut Frame, view: &View, caret_on: bool, area: Rect, palette: Palette) -> u16 {
    let base = Style::default().fg(palette.text).bg(palette.background);
    let prompt = if view.busy {
        Span::styled("(running) ", base.add_modifier(Modifier::DIM))
    } else {
        Span::styled(view.prompt.as_str(), base.fg(palette.caret).add_modifier(Modifier::BOLD))
    };
    let prompt_width = prompt.width() as u16;

    let caret = view.caret.min(view.input.len());
    let (before, rest) = view.input.split_at(caret);
    let mut chars = rest.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = chars.collect();

    let caret_style = if caret_on {
        Style::default().fg(palette.background).bg(palette.caret)
    } else {
        base
    };

    let line = Line::from(vec![
        prompt,
        Span::styled(before.to_string(), base),
        Span::styled(under, caret_style),
        Span::styled(after, base),
    ]);

    let caret_col = prompt_width as usize + caret + 1;
    let offset = caret_col.saturating_sub(area.width as usize) as u16;
    f.render_widget(Paragraph::new(line).style(base).scroll((0, offset)), area);
    prompt_width.saturating_sub(offset)
}

fn draw_search_bar(f: &mut Frame, search: &SearchStatus, area: Rect, palette: Palette) {
    let bar = Style::default().fg(palette.background).bg(palette.text);
    let line = Line::from(vec![
        Span::styled(" Find: ", bar.add_modifier(Modifier::BOLD)),
        Span::styled(search.query.as_str(), bar),
        Span::styled(format!("  {}  ", search.counter()), bar),
        Span::styled("Enter/Down next  Up prev  Esc close", bar.add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(Paragraph::new(line).style(bar), area);
}

fn draw_overlay(f: &mut Frame, overlay: &SettingsOverlay, view: &View, area: Rect, palette: Palette) {
    let base = Style::default().fg(palette.text).bg(palette.background);
    let width = 52.min(area.width);
    let height = (Toggle::ALL.len() as u16 + 6).min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let mut lines: Vec<Line> = Toggle::ALL
        .iter()
        .enumerate()
        .map(|(i, &toggle)| {
            let mark = if view.settings.get(toggle) { "x" } else { " " };
            let restart = if toggle.needs_restart() { "  (restart to apply)" } else { "" };
            let text = format!(" [{mark}] {}{restart}", toggle.label());
            if i == overlay.selected() {
                Line::styled(text, Style::default().fg(palette.background).bg(palette.caret))
            } else {
                Line::styled(text, base)
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        overlay.status().unwrap_or("Space toggles, Esc closes").to_string(),
        base.add_modifier(Modifier::DIM),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .style(base);
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

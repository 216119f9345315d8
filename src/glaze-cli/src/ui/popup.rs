//! Suggestion popup drawn above the input line.

use glaze_complete::{Suggestion, SuggestionKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};

use super::colors::Palette;

const MIN_WIDTH: u16 = 16;
const MAX_WIDTH: u16 = 60;

pub struct SuggestionPopup<'a> {
    items: &'a [Suggestion],
    selected: usize,
    scroll: usize,
    rows: usize,
    palette: Palette,
}

impl<'a> SuggestionPopup<'a> {
    pub fn new(items: &'a [Suggestion], selected: usize, scroll: usize, rows: usize, palette: Palette) -> Self {
        Self {
            items,
            selected,
            scroll,
            rows: rows.max(1),
            palette,
        }
    }

    fn visible(&self) -> &'a [Suggestion] {
        let start = self.scroll.min(self.items.len());
        let end = (start + self.rows).min(self.items.len());
        &self.items[start..end]
    }

    /// Outer size including borders.
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .visible()
            .iter()
            .map(|s| s.text.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let width = (widest + 4).clamp(MIN_WIDTH, MAX_WIDTH);
        let height = self.visible().len() as u16 + 2;
        (width, height)
    }

    /// Area above `input` starting at column `x`, clipped to `bounds`.
    pub fn area_above(&self, input: Rect, x: u16, bounds: Rect) -> Rect {
        let (width, height) = self.size();
        let height = height.min(input.y.saturating_sub(bounds.y));
        let width = width.min(bounds.width);
        let x = x.min(bounds.x + bounds.width - width);
        Rect::new(x, input.y - height, width, height)
    }
}

impl Widget for SuggestionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let base = Style::default().fg(self.palette.text).bg(self.palette.background);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(Color::DarkGray))
            .style(base);
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, item) in self.visible().iter().enumerate().take(inner.height as usize) {
            let index = self.scroll + row;
            let style = if index == self.selected {
                Style::default()
                    .fg(self.palette.background)
                    .bg(self.palette.caret)
                    .add_modifier(Modifier::BOLD)
            } else if item.kind == SuggestionKind::Directory {
                base.fg(Color::LightBlue)
            } else {
                base
            };
            let y = inner.y + row as u16;
            let line_area = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(line_area, style);
            buf.set_stringn(inner.x + 1, y, &item.text, inner.width.saturating_sub(1) as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_config::Settings;

    fn items(n: usize) -> Vec<Suggestion> {
        (0..n)
            .map(|i| Suggestion::new(format!("item{i}"), SuggestionKind::Command))
            .collect()
    }

    fn palette() -> Palette {
        Palette::from_settings(&Settings::default())
    }

    #[test]
    fn test_size_tracks_visible_rows() {
        let items = items(20);
        let popup = SuggestionPopup::new(&items, 0, 0, 8, palette());
        assert_eq!(popup.size(), (MIN_WIDTH, 10));

        let few = self::items(2);
        let popup = SuggestionPopup::new(&few, 0, 0, 8, palette());
        assert_eq!(popup.size().1, 4);
    }

    #[test]
    fn test_area_clipped_above_input() {
        let items = items(8);
        let popup = SuggestionPopup::new(&items, 0, 0, 8, palette());
        let bounds = Rect::new(0, 0, 40, 6);
        let input = Rect::new(0, 5, 40, 1);
        let area = popup.area_above(input, 35, bounds);
        assert_eq!(area.height, 5);
        assert_eq!(area.y, 0);
        assert_eq!(area.x + area.width, 40);
    }

    #[test]
    fn test_renders_scrolled_window() {
        let items = items(12);
        let popup = SuggestionPopup::new(&items, 9, 4, 8, palette());
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        popup.render(area, &mut buf);
        let row: String = (1..7).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, " item4");
    }
}

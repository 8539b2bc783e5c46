use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use crate::model::grid::GridState;

/// Each cell spans two terminal columns so the grid stays roughly square
/// on typical fonts.
pub const CELL_WIDTH: u16 = 2;

/// Renders the grid as colored blocks: blue for Alive, white for Dead.
pub struct GridWidget<'a> {
    grid: &'a GridState,
    cursor: Option<(usize, usize)>,
    title: String,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a GridState, cursor: Option<(usize, usize)>, title: String) -> Self {
        Self {
            grid,
            cursor,
            title,
        }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps a terminal position to grid coordinates.
    ///
    /// Returns the `(row, col)` pair by value; the caller hands it straight
    /// to the controller rather than holding any reference into the widget.
    pub fn screen_to_cell(
        screen_x: u16,
        screen_y: u16,
        area: Rect,
        grid: &GridState,
    ) -> Option<(usize, usize)> {
        let inner = Self::get_inner_area(area);
        if screen_x < inner.left()
            || screen_x >= inner.right()
            || screen_y < inner.top()
            || screen_y >= inner.bottom()
        {
            return None;
        }
        let row = (screen_y - inner.y) as usize;
        let col = ((screen_x - inner.x) / CELL_WIDTH) as usize;
        if row < grid.rows() && col < grid.columns() {
            Some((row, col))
        } else {
            None
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(self.title).borders(Borders::ALL);
        block.render(area, buf);

        let inner = Self::get_inner_area(area);

        for row in 0..self.grid.rows() {
            let screen_y = inner.y + row as u16;
            if screen_y >= inner.bottom() {
                break;
            }
            for col in 0..self.grid.columns() {
                let screen_x = inner.x + col as u16 * CELL_WIDTH;
                if screen_x + CELL_WIDTH > inner.right() {
                    break;
                }
                let alive = self
                    .grid
                    .get(row, col)
                    .map(|state| state.is_alive())
                    .unwrap_or(false);
                let bg = match (self.cursor == Some((row, col)), alive) {
                    (true, true) => Color::LightBlue,
                    (true, false) => Color::Yellow,
                    (false, true) => Color::Blue,
                    (false, false) => Color::White,
                };
                for dx in 0..CELL_WIDTH {
                    buf.get_mut(screen_x + dx, screen_y).set_char(' ').set_bg(bg);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_maps_origin() {
        let grid = GridState::new(10, 10).expect("valid dimensions");
        let area = Rect::new(0, 0, 30, 15);
        // Inside the border, the first cell starts at (1, 1).
        assert_eq!(GridWidget::screen_to_cell(1, 1, area, &grid), Some((0, 0)));
        assert_eq!(GridWidget::screen_to_cell(2, 1, area, &grid), Some((0, 0)));
        assert_eq!(GridWidget::screen_to_cell(3, 1, area, &grid), Some((0, 1)));
        assert_eq!(GridWidget::screen_to_cell(1, 2, area, &grid), Some((1, 0)));
    }

    #[test]
    fn test_screen_to_cell_rejects_border_and_outside() {
        let grid = GridState::new(10, 10).expect("valid dimensions");
        let area = Rect::new(0, 0, 30, 15);
        assert_eq!(GridWidget::screen_to_cell(0, 0, area, &grid), None);
        assert_eq!(GridWidget::screen_to_cell(29, 5, area, &grid), None);
        assert_eq!(GridWidget::screen_to_cell(5, 14, area, &grid), None);
    }

    #[test]
    fn test_screen_to_cell_rejects_beyond_grid_extent() {
        // A 2x2 grid inside a large area: clicks past the grid's own
        // extent land on no cell even though they are inside the border.
        let grid = GridState::new(2, 2).expect("valid dimensions");
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(GridWidget::screen_to_cell(1, 1, area, &grid), Some((0, 0)));
        assert_eq!(GridWidget::screen_to_cell(10, 1, area, &grid), None);
        assert_eq!(GridWidget::screen_to_cell(1, 10, area, &grid), None);
    }
}

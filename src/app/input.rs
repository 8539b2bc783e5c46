use crate::app::App;
use crate::ui::renderer::GridWidget;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        // An open notification is modal: the first key dismisses it.
        if self.notice.take().is_some() {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.toggle_run(),
            KeyCode::Char('n') => {
                self.controller.single_step();
                self.next_advance_in = None;
            }
            KeyCode::Char('c') => {
                // Rejected while running
                let _ = self.controller.clear();
            }
            KeyCode::Char('h') => self.show_help = !self.show_help,
            KeyCode::Up => self.cursor.0 = self.cursor.0.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor.0 + 1 < self.controller.grid().rows() {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Left => self.cursor.1 = self.cursor.1.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor.1 + 1 < self.controller.grid().columns() {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('t') => {
                let (row, col) = self.cursor;
                if let Err(e) = self.controller.toggle(row, col) {
                    debug!("toggle at ({row}, {col}) rejected: {e}");
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some((row, col)) = GridWidget::screen_to_cell(
                mouse.column,
                mouse.row,
                self.last_grid_rect,
                self.controller.grid(),
            ) {
                self.cursor = (row, col);
                if let Err(e) = self.controller.toggle(row, col) {
                    debug!("click at ({row}, {col}) rejected: {e}");
                }
            }
        }
    }
}

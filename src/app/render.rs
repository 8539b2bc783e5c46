use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::model::run::RunState;
use crate::ui::renderer::GridWidget;

pub fn draw(app: &mut App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(f.area());

    let state_label = match app.controller.state() {
        RunState::Idle => "Idle",
        RunState::Running => "Running",
        RunState::StoppedEmpty => "Stopped (all dead)",
        RunState::StoppedStalled => "Stopped (stalled)",
    };
    let status = format!(
        "State: {} | Gen: {} | Alive: {} | Interval: {}ms",
        state_label,
        app.controller.generation(),
        app.controller.grid().live_cells(),
        app.config.run.step_interval_ms,
    );
    let keys = "[Space] start/stop | [N] step | [Click/Enter] toggle | [C] clear | [H] help | [Q] quit";
    f.render_widget(
        Paragraph::new(vec![
            Line::from(status),
            Line::from(keys).style(Style::default().fg(Color::DarkGray)),
        ]),
        chunks[0],
    );

    app.last_grid_rect = chunks[1];
    // The cursor is an editing aid; hide it while a run is active.
    let cursor = if app.controller.is_running() {
        None
    } else {
        Some(app.cursor)
    };
    let grid_widget = GridWidget::new(
        app.controller.grid(),
        cursor,
        format!(" Life (Gen: {}) ", app.controller.generation()),
    );
    f.render_widget(grid_widget, chunks[1]);

    if app.show_help {
        let help_text = vec![
            " [Space]       Start/stop updates",
            " [N]           Single update",
            " [Click]       Toggle a cell (while idle)",
            " [Arrows+Enter] Move cursor and toggle",
            " [C]           Clear the grid",
            " [H]           Toggle this help",
            " [Q]           Quit",
        ];
        draw_popup(f, " Help ", &help_text.join("\n"));
    }

    if let Some(text) = &app.notice {
        draw_popup(f, " Update Stopped ", text);
    }
}

fn draw_popup(f: &mut Frame, title: &str, text: &str) {
    let area = f.area();
    let popup_area = Rect::new(
        area.width / 4,
        area.height / 3,
        area.width / 2,
        (area.height / 3).max(3),
    );
    f.render_widget(Clear, popup_area);
    let block = Paragraph::new(text.to_string())
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(block, popup_area);
}

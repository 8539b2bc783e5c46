pub mod input;
pub mod render;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::model::config::AppConfig;
use crate::model::history::EventLogger;
use crate::model::run::{Directive, RunController};
use crate::ui::tui::Tui;

/// Interactive application: owns the run controller and the event loop.
pub struct App {
    pub running: bool,
    pub controller: RunController,
    pub config: AppConfig,
    pub logger: EventLogger,
    /// Keyboard editing cursor, `(row, col)`.
    pub cursor: (usize, usize),
    /// Pop-up text for a terminal notification, dismissed by any key.
    pub notice: Option<String>,
    pub show_help: bool,
    /// Grid area of the last frame, for mouse position mapping.
    pub last_grid_rect: Rect,
    last_advance: Instant,
    /// Delay until the next scheduled advance; None while nothing is
    /// scheduled.
    next_advance_in: Option<Duration>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let controller = RunController::new(&config)?;
        let logger = EventLogger::new("logs/events.jsonl")?;

        Ok(Self {
            running: true,
            controller,
            config,
            logger,
            cursor: (0, 0),
            notice: None,
            show_help: false,
            last_grid_rect: Rect::default(),
            last_advance: Instant::now(),
            next_advance_in: None,
        })
    }

    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.config.target_fps.max(1));
        let mut last_frame = Instant::now();

        while self.running {
            tui.terminal.draw(|f| render::draw(self, f))?;

            let timeout = tick_rate.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
            last_frame = Instant::now();

            if let Some(delay) = self.next_advance_in {
                if self.last_advance.elapsed() >= delay {
                    self.advance_scheduled();
                }
            }
        }
        Ok(())
    }

    /// Starts a run, or stops the active one. A fresh run takes its first
    /// step immediately; the following steps come from the scheduled
    /// cadence.
    pub fn toggle_run(&mut self) {
        if self.controller.is_running() {
            self.controller.stop();
            self.next_advance_in = None;
            self.pump_events();
        } else if self.controller.start() {
            self.pump_events();
            self.advance_scheduled();
        }
    }

    fn advance_scheduled(&mut self) {
        self.last_advance = Instant::now();
        match self.controller.advance() {
            Directive::Continue(delay) => self.next_advance_in = Some(delay),
            Directive::Halt => self.next_advance_in = None,
        }
        self.pump_events();
    }

    /// Drains controller notifications into the event log and the pop-up.
    fn pump_events(&mut self) {
        for event in self.controller.drain_events() {
            if let Err(e) = self.logger.log_event(&event) {
                warn!("failed to log run event: {e}");
            }
            if let Some(text) = event.notice() {
                self.notice = Some(text.to_string());
            }
        }
    }
}

//! Run events and the append-only JSONL event log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Discrete notifications emitted by the run controller.
///
/// The two terminal events carry the user-facing notices the presentation
/// layer shows as a pop-up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum RunEvent {
    Started { generation: u64, timestamp: String },
    Stopped { generation: u64, timestamp: String },
    AllDead { generation: u64, timestamp: String },
    Stalled { generation: u64, timestamp: String },
}

impl RunEvent {
    pub fn started(generation: u64) -> Self {
        Self::Started {
            generation,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn stopped(generation: u64) -> Self {
        Self::Stopped {
            generation,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn all_dead(generation: u64) -> Self {
        Self::AllDead {
            generation,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn stalled(generation: u64) -> Self {
        Self::Stalled {
            generation,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AllDead { .. } | Self::Stalled { .. })
    }

    /// Pop-up text for terminal events, None otherwise.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::AllDead { .. } => Some("All cells are white. Stopping updates."),
            Self::Stalled { .. } => Some("Grid state unchanged. Stopping updates."),
            _ => None,
        }
    }
}

/// Appends run events as JSON lines to a log file.
pub struct EventLogger {
    writer: BufWriter<File>,
}

impl EventLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn log_event(&mut self, event: &RunEvent) -> anyhow::Result<()> {
        let json = serde_json::to_string(event)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

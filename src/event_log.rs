//! JSONL event log.
//!
//! One JSON object per line for every session event plus the final quit.
//! Write failures disable the log instead of interrupting play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

/// One line of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Milliseconds since the Unix epoch
    pub ts_ms: u64,
    /// 1-based session number within this process
    pub session: u32,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl EventRecord {
    pub fn from_event(session: u32, event: &GameEvent) -> Self {
        let mut record = Self::bare(session, event.name());
        match *event {
            GameEvent::SessionStarted => {}
            GameEvent::LinesCleared { rows, score } => {
                record.rows = Some(rows);
                record.score = Some(score);
            }
            GameEvent::GameOver { score, level } => {
                record.score = Some(score);
                record.level = Some(level);
            }
        }
        record
    }

    /// Record for the player leaving the program.
    pub fn quit(session: u32) -> Self {
        Self::bare(session, "quit")
    }

    fn bare(session: u32, event: &'static str) -> Self {
        Self {
            ts_ms: now_ms(),
            session,
            event,
            rows: None,
            score: None,
            level: None,
        }
    }
}

/// Appends [`EventRecord`]s to a writer, one per line.
pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("event log: open {} failed", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// False once a write has failed.
    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &EventRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).and_then(|()| out.flush()).is_err() {
            self.out = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

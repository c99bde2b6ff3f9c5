//! JSON-lines event log.
//!
//! One JSON object per line for every notable core event. A failed write
//! disables the log; the error is kept so the runner can report it once the
//! terminal has been restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameState, PieceSource, StepReport};
use crate::types::{PieceKind, Rotation};

/// A single log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    Landed {
        frame: u64,
        episode: u32,
        kind: PieceKind,
        rotation: Rotation,
        x: i8,
        y: i8,
    },
    LinesCleared {
        frame: u64,
        episode: u32,
        rows: Vec<usize>,
        points: u32,
        score: u32,
    },
    LevelUp {
        frame: u64,
        episode: u32,
        level: u32,
    },
    GameOver {
        frame: u64,
        episode: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    Restart {
        episode: u32,
    },
}

impl EventRecord {
    /// Records describing one step, in the order they happened
    pub fn from_step<S: PieceSource>(report: &StepReport, game: &GameState<S>) -> Vec<EventRecord> {
        let frame = game.frame();
        let episode = game.episode();
        let mut out = Vec::new();

        if report.restarted {
            out.push(EventRecord::Restart { episode });
        }
        if let Some(piece) = report.landed {
            out.push(EventRecord::Landed {
                frame,
                episode,
                kind: piece.kind,
                rotation: piece.rotation,
                x: piece.x,
                y: piece.y,
            });
        }
        if !report.cleared_rows.is_empty() {
            out.push(EventRecord::LinesCleared {
                frame,
                episode,
                rows: report.cleared_rows.to_vec(),
                points: report.points,
                score: game.score(),
            });
        }
        if report.levels_gained > 0 {
            out.push(EventRecord::LevelUp {
                frame,
                episode,
                level: game.level(),
            });
        }
        if report.game_over {
            out.push(EventRecord::GameOver {
                frame,
                episode,
                score: game.score(),
                level: game.level(),
                lines: game.lines(),
            });
        }
        out
    }
}

/// Appends [`EventRecord`]s to a writer, one JSON object per line
pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    failure: Option<anyhow::Error>,
    written: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            failure: None,
            written: 0,
        }
    }

    /// A log that drops everything
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            failure: None,
            written: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn record(&mut self, record: &EventRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        let result = serde_json::to_writer(&mut self.buf, record)
            .context("encode event")
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf).context("write event log")
            });
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                self.out = None;
                self.failure = Some(e);
            }
        }
    }

    /// Log every event of one step
    pub fn record_step<S: PieceSource>(&mut self, report: &StepReport, game: &GameState<S>) {
        if !self.is_enabled() {
            return;
        }
        for record in EventRecord::from_step(report, game) {
            self.record(&record);
        }
    }

    /// Flush buffered lines. Failures disable the log like write failures.
    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.out = None;
                self.failure = Some(anyhow::Error::new(e).context("flush event log"));
            }
        }
    }

    /// The error that disabled the log, if any
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

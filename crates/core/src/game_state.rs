//! Game state module - the frame-stepped game loop driver
//!
//! This module ties together the grid, the active piece, the piece source and
//! scoring. Each call to [`GameState::step`] is one frame: apply the frame's
//! input, advance gravity, land and clear rows, spawn the next piece and detect
//! game over.

use crate::collision::{collides, place};
use crate::grid::{ClearedRows, Grid};
use crate::movement::{resolve, MoveRequest, Movement};
use crate::piece::Piece;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_frames, line_clear_score, LevelProgress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{FrameInput, PieceKind};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The piece committed to the grid this frame, at its final position
    pub landed: Option<Piece>,
    /// Rows removed after the landing, top to bottom
    pub cleared_rows: ClearedRows,
    /// Points awarded for the cleared rows
    pub points: u32,
    /// Levels gained from the cleared rows
    pub levels_gained: u32,
    /// A new active piece was spawned (landing or explicit request)
    pub spawned: bool,
    /// The game ended this frame
    pub game_over: bool,
    /// The game was reset this frame
    pub restarted: bool,
}

impl StepReport {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = SimpleRng> {
    grid: Grid,
    active: Piece,
    next: PieceKind,
    source: S,
    /// Frames since gravity last moved the piece
    drop_counter: u32,
    progress: LevelProgress,
    score: u32,
    lines: u32,
    /// Frames simulated in the current game
    frame: u64,
    /// Incremented on every restart
    episode: u32,
    game_over: bool,
    /// Rows cleared by the most recent step (for highlighting)
    last_cleared: ClearedRows,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game on an empty grid drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self::from_parts(Grid::new(), source)
    }

    /// Create a new game on a prepared grid
    ///
    /// The first draw becomes the active piece and the second the preview.
    pub fn from_parts(grid: Grid, mut source: S) -> Self {
        let next = source.next_kind();
        let mut state = Self {
            grid,
            active: Piece::spawn(next),
            next,
            source,
            drop_counter: 0,
            progress: LevelProgress::new(),
            score: 0,
            lines: 0,
            frame: 0,
            episode: 0,
            game_over: false,
            last_cleared: ClearedRows::new(),
        };
        state.spawn_next();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// The preview kind that will spawn next
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Total rows cleared in this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Cleared rows counted toward the next level
    pub fn level_accumulator(&self) -> u32 {
        self.progress.accumulated()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn drop_counter(&self) -> u32 {
        self.drop_counter
    }

    pub fn last_cleared(&self) -> &[usize] {
        &self.last_cleared
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current gravity threshold in frames
    pub fn drop_frames(&self, soft_drop: bool) -> u32 {
        drop_frames(self.level(), soft_drop)
    }

    /// Replace the active piece with the preview and draw a new preview.
    ///
    /// Sets game over when the new piece collides at its spawn position.
    pub fn spawn_next(&mut self) -> bool {
        self.active = Piece::spawn(self.next);
        self.next = self.source.next_kind();
        if collides(&self.grid, &self.active) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Resolve one movement request and adopt the result if accepted
    pub fn apply_move(&mut self, request: MoveRequest) -> Movement {
        if self.game_over {
            return Movement::Blocked;
        }
        let movement = resolve(&self.grid, &self.active, request);
        self.active = movement.apply_to(self.active);
        movement
    }

    /// Reset to a fresh game. The piece source keeps its sequence.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.drop_counter = 0;
        self.progress = LevelProgress::new();
        self.score = 0;
        self.lines = 0;
        self.frame = 0;
        self.episode = self.episode.wrapping_add(1);
        self.game_over = false;
        self.last_cleared.clear();
        self.next = self.source.next_kind();
        self.spawn_next();
    }

    /// Advance the game by one frame
    pub fn step(&mut self, input: &FrameInput) -> StepReport {
        let mut report = StepReport::default();
        self.last_cleared.clear();

        if input.restart {
            self.restart();
            report.restarted = true;
            report.spawned = true;
            return report;
        }

        if self.game_over {
            return report;
        }

        self.frame += 1;

        if input.spawn_next {
            report.spawned = true;
            if !self.spawn_next() {
                report.game_over = true;
                return report;
            }
        }

        for request in MoveRequest::from_input(input) {
            self.apply_move(request);
        }

        self.apply_gravity(input.soft_drop, &mut report);
        report
    }

    /// Count the frame toward gravity and move the piece down when due
    fn apply_gravity(&mut self, soft_drop: bool, report: &mut StepReport) {
        let threshold = self.drop_frames(soft_drop);
        if self.drop_counter < threshold {
            self.drop_counter += 1;
            return;
        }
        self.drop_counter = 0;

        let lowered = self.active.translated(0, 1);
        if collides(&self.grid, &lowered) {
            // Last valid row is the current one.
            self.land(report);
        } else {
            self.active = lowered;
        }
    }

    /// Commit the active piece, clear rows, score them and spawn the next piece
    fn land(&mut self, report: &mut StepReport) {
        place(&mut self.grid, &self.active);
        report.landed = Some(self.active);

        let cleared = self.grid.clear_full_rows();
        if !cleared.is_empty() {
            let n = cleared.len();
            let points = line_clear_score(n, self.level());
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(n as u32);
            report.points = points;
            report.levels_gained = self.progress.add_clears(n as u32);
            report.cleared_rows = cleared.clone();
            self.last_cleared = cleared;
        }

        report.spawned = true;
        if !self.spawn_next() {
            report.game_over = true;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.cleared_rows.clear();
        out.cleared_rows
            .try_extend_from_slice(&self.last_cleared)
            .ok();
        out.game_over = self.game_over;
        out.frame = self.frame;
        out.episode = self.episode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

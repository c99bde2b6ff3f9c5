//! Per-frame input collection for terminal environments.
//!
//! Key presses arriving between two frames are folded into one [`FrameInput`].
//! Soft drop is a held state: it stays on while Down presses keep arriving
//! within the release timeout, or until a release event when the terminal
//! reports one.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{FrameInput, GameAction};

/// How long soft drop stays held after the last Down press when the terminal
/// reports no key release. Autorepeat delays longer than this drop soft drop
/// until the first repeat arrives.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 300;

/// Accumulates key events into one [`FrameInput`] per frame.
#[derive(Debug, Clone)]
pub struct FrameInputCollector {
    pending: FrameInput,
    soft_drop_at: Option<Instant>,
    key_release_timeout: Duration,
}

impl FrameInputCollector {
    pub fn new() -> Self {
        Self {
            pending: FrameInput::NONE,
            soft_drop_at: None,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Feed one terminal key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        self.handle_key_event_at(key, Instant::now())
    }

    /// Feed one terminal key event observed at `now`.
    ///
    /// Returns the action the key maps to, if any. Release events only end a held
    /// soft drop.
    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        let action = handle_key_event(key)?;

        if key.kind == KeyEventKind::Release {
            if action == GameAction::SoftDrop {
                self.soft_drop_at = None;
            }
            return None;
        }

        match action {
            GameAction::SoftDrop => self.soft_drop_at = Some(now),
            other => self.pending.record(other),
        }
        Some(action)
    }

    /// True while soft drop counts as held at `now`.
    pub fn soft_drop_held(&self, now: Instant) -> bool {
        self.soft_drop_at
            .is_some_and(|at| now.saturating_duration_since(at) <= self.key_release_timeout)
    }

    /// Take the input for the frame ending now.
    pub fn take_frame(&mut self) -> FrameInput {
        self.take_frame_at(Instant::now())
    }

    /// Take the input for the frame ending at `now` and start a new frame.
    pub fn take_frame_at(&mut self, now: Instant) -> FrameInput {
        let mut input = std::mem::take(&mut self.pending);
        if self.soft_drop_held(now) {
            input.soft_drop = true;
        } else {
            self.soft_drop_at = None;
        }
        input
    }

    /// Forget pending actions and any held soft drop.
    pub fn reset(&mut self) {
        self.pending = FrameInput::NONE;
        self.soft_drop_at = None;
    }
}

impl Default for FrameInputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_presses_fold_into_one_frame() {
        let mut c = FrameInputCollector::new();
        let now = Instant::now();

        assert_eq!(
            c.handle_key_event_at(press(KeyCode::Left), now),
            Some(GameAction::MoveLeft)
        );
        c.handle_key_event_at(press(KeyCode::Up), now);
        c.handle_key_event_at(press(KeyCode::Left), now);

        let frame = c.take_frame_at(now);
        assert!(frame.shift_left);
        assert!(frame.rotate_cw);
        assert!(!frame.shift_right);

        // Edge actions do not carry over.
        assert!(c.take_frame_at(now).is_empty());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut c = FrameInputCollector::new();
        assert_eq!(c.handle_key_event_at(press(KeyCode::Char('p')), Instant::now()), None);
        assert!(c.take_frame().is_empty());
    }

    #[test]
    fn test_soft_drop_held_until_timeout() {
        let mut c = FrameInputCollector::new().with_key_release_timeout_ms(100);
        let t0 = Instant::now();

        c.handle_key_event_at(press(KeyCode::Down), t0);
        assert!(c.take_frame_at(t0).soft_drop);
        assert!(c.take_frame_at(t0 + Duration::from_millis(50)).soft_drop);

        // No repeat arrived within the timeout: released.
        assert!(!c.take_frame_at(t0 + Duration::from_millis(101)).soft_drop);
        assert!(!c.soft_drop_held(t0 + Duration::from_millis(101)));
    }

    #[test]
    fn test_soft_drop_repeat_extends_hold() {
        let mut c = FrameInputCollector::new().with_key_release_timeout_ms(100);
        let t0 = Instant::now();

        c.handle_key_event_at(press(KeyCode::Down), t0);
        c.handle_key_event_at(press(KeyCode::Down), t0 + Duration::from_millis(80));
        assert!(c.take_frame_at(t0 + Duration::from_millis(150)).soft_drop);
    }

    #[test]
    fn test_autorepeat_delay_beyond_default_lapses_soft_drop() {
        let t0 = Instant::now();
        let first_repeat = t0 + Duration::from_millis(550);
        let gap = t0 + Duration::from_millis(400);

        let mut c = FrameInputCollector::new();
        c.handle_key_event_at(press(KeyCode::Down), t0);
        assert!(!c.take_frame_at(gap).soft_drop);

        // A window wider than the autorepeat delay keeps the drop held.
        let mut c = FrameInputCollector::new().with_key_release_timeout_ms(600);
        c.handle_key_event_at(press(KeyCode::Down), t0);
        assert!(c.take_frame_at(gap).soft_drop);
        c.handle_key_event_at(press(KeyCode::Down), first_repeat);
        assert!(c.take_frame_at(first_repeat).soft_drop);
    }

    #[test]
    fn test_release_event_ends_soft_drop() {
        let mut c = FrameInputCollector::new().with_key_release_timeout_ms(10_000);
        let t0 = Instant::now();

        c.handle_key_event_at(press(KeyCode::Down), t0);
        assert_eq!(c.handle_key_event_at(release(KeyCode::Down), t0), None);
        assert!(!c.take_frame_at(t0).soft_drop);
    }

    #[test]
    fn test_release_of_other_key_is_not_an_action() {
        let mut c = FrameInputCollector::new();
        c.handle_key_event_at(release(KeyCode::Left), Instant::now());
        assert!(c.take_frame().is_empty());
    }

    #[test]
    fn test_quit_and_restart_are_recorded() {
        let mut c = FrameInputCollector::new();
        c.handle_key_event_at(press(KeyCode::Esc), Instant::now());
        c.handle_key_event_at(press(KeyCode::Char('r')), Instant::now());
        let frame = c.take_frame();
        assert!(frame.quit);
        assert!(frame.restart);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut c = FrameInputCollector::new().with_key_release_timeout_ms(10_000);
        let now = Instant::now();
        c.handle_key_event_at(press(KeyCode::Down), now);
        c.handle_key_event_at(press(KeyCode::Char(' ')), now);

        c.reset();
        assert!(c.take_frame_at(now).is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let c = FrameInputCollector::default();
        assert!(c.key_release_timeout() > Duration::ZERO);
    }
}

//! Compound-interest escape room: solve each vault's puzzle before the
//! clock runs out.

use serde::Serialize;

use super::GameError;
use crate::domain::values::puzzle::{Puzzle, PUZZLES};

pub const TIME_LIMIT_SECS: u32 = 300;
pub const BASE_SCORE: i64 = 1000;
pub const HINT_PENALTY: i64 = 200;
pub const ATTEMPT_PENALTY: i64 = 50;
pub const MAX_ATTEMPT_PENALTY: i64 = 300;
pub const MIN_SCORE: i64 = 100;
/// Answers closer than this to the expected amount unlock the vault.
pub const ANSWER_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePhase {
    Briefing,
    Solving,
    Escaped,
    TimedOut,
}

impl EscapePhase {
    fn name(&self) -> &'static str {
        match self {
            EscapePhase::Briefing => "briefing",
            EscapePhase::Solving => "solving",
            EscapePhase::Escaped => "escaped",
            EscapePhase::TimedOut => "timed_out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Attempt {
    /// Input was not a number. Not counted.
    Invalid,
    Wrong,
    Unlocked { score: u32 },
}

/// `max(1000 + 2 * seconds_left - hint - min(50 * attempts, 300), 100)`.
pub fn level_score(seconds_remaining: u32, hint_used: bool, attempts: u32) -> u32 {
    let time_bonus = 2 * i64::from(seconds_remaining);
    let hint_penalty = if hint_used { HINT_PENALTY } else { 0 };
    let attempt_penalty = (i64::from(attempts) * ATTEMPT_PENALTY).min(MAX_ATTEMPT_PENALTY);
    (BASE_SCORE + time_bonus - hint_penalty - attempt_penalty).max(MIN_SCORE) as u32
}

/// `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, Serialize)]
pub struct EscapeRoom {
    phase: EscapePhase,
    level: usize,
    seconds_remaining: u32,
    attempts: u32,
    hint_used: bool,
    hint_visible: bool,
    steps_visible: bool,
    lock_digits: Vec<u8>,
    level_score: Option<u32>,
    total_score: u32,
}

impl Default for EscapeRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeRoom {
    pub fn new() -> Self {
        Self {
            phase: EscapePhase::Briefing,
            level: 1,
            seconds_remaining: TIME_LIMIT_SECS,
            attempts: 0,
            hint_used: false,
            hint_visible: false,
            steps_visible: false,
            lock_digits: vec![0; 6],
            level_score: None,
            total_score: 0,
        }
    }

    pub fn phase(&self) -> EscapePhase {
        self.phase
    }

    /// 1-based.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        PUZZLES.len()
    }

    pub fn is_last_level(&self) -> bool {
        self.level == PUZZLES.len()
    }

    pub fn puzzle(&self) -> &'static Puzzle {
        &PUZZLES[self.level - 1]
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.hint_visible.then_some(self.puzzle().hint)
    }

    pub fn steps(&self) -> Option<&'static [&'static str]> {
        (self.hint_visible && self.steps_visible).then_some(&self.puzzle().steps[..])
    }

    pub fn lock_digits(&self) -> &[u8] {
        &self.lock_digits
    }

    pub fn level_score(&self) -> Option<u32> {
        self.level_score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    fn expect_phase(&self, phase: EscapePhase) -> Result<(), GameError> {
        if self.phase != phase {
            return Err(GameError::WrongPhase(self.phase.name()));
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(EscapePhase::Briefing)?;
        self.seconds_remaining = TIME_LIMIT_SECS;
        self.phase = EscapePhase::Solving;
        Ok(())
    }

    /// Advance the clock. Only runs while solving; reaching zero locks the
    /// player out.
    pub fn tick(&mut self, seconds: u32) {
        if self.phase != EscapePhase::Solving {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(seconds);
        if self.seconds_remaining == 0 {
            self.phase = EscapePhase::TimedOut;
        }
    }

    /// Show or hide the hint. The first reveal costs the hint penalty.
    pub fn toggle_hint(&mut self) -> Result<(), GameError> {
        self.expect_phase(EscapePhase::Solving)?;
        self.hint_visible = !self.hint_visible;
        if self.hint_visible {
            self.hint_used = true;
        }
        Ok(())
    }

    pub fn toggle_steps(&mut self) -> Result<(), GameError> {
        self.expect_phase(EscapePhase::Solving)?;
        if !self.hint_visible {
            return Err(GameError::Rejected("Open the hint first".to_string()));
        }
        self.steps_visible = !self.steps_visible;
        Ok(())
    }

    /// Check an answer. The score for a correct answer counts only the
    /// wrong attempts made before it.
    pub fn submit(&mut self, input: &str) -> Result<Attempt, GameError> {
        self.expect_phase(EscapePhase::Solving)?;

        let value: f64 = match input.trim().trim_start_matches('$').parse() {
            Ok(v) if f64::is_finite(v) => v,
            _ => return Ok(Attempt::Invalid),
        };

        let prior_attempts = self.attempts;
        self.attempts += 1;

        let puzzle = self.puzzle();
        if (value - puzzle.answer()).abs() >= ANSWER_TOLERANCE {
            return Ok(Attempt::Wrong);
        }

        let score = level_score(self.seconds_remaining, self.hint_used, prior_attempts);
        self.level_score = Some(score);
        self.total_score += score;
        self.lock_digits = puzzle.lock_digits();
        self.phase = EscapePhase::Escaped;
        Ok(Attempt::Unlocked { score })
    }

    /// Move to the next vault with a fresh clock.
    pub fn next_level(&mut self) -> Result<(), GameError> {
        self.expect_phase(EscapePhase::Escaped)?;
        if self.is_last_level() {
            return Err(GameError::Rejected("All vaults are already unlocked".to_string()));
        }
        self.level += 1;
        self.reset_level_state();
        self.phase = EscapePhase::Solving;
        Ok(())
    }

    /// Restart from the first vault; the clock starts immediately.
    pub fn reset(&mut self) {
        self.level = 1;
        self.total_score = 0;
        self.reset_level_state();
        self.phase = EscapePhase::Solving;
    }

    fn reset_level_state(&mut self) {
        self.seconds_remaining = TIME_LIMIT_SECS;
        self.attempts = 0;
        self.hint_used = false;
        self.hint_visible = false;
        self.steps_visible = false;
        self.lock_digits = vec![0; 6];
        self.level_score = None;
    }
}

//! Budget allocation simulator.
//!
//! Flow: pick a profile, pick an income, then play three levels. Each level
//! asks the player to split the whole income across six categories while
//! meeting the profile's minimum shares; one life event may interrupt a
//! level.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use super::GameError;
use crate::domain::values::budget_category::BudgetCategory;
use crate::domain::values::budget_profile::{BudgetProfile, LifeEvent, LifeEventKind, LEVEL_COUNT};

/// How long into a level the life event is offered.
pub const LIFE_EVENT_DELAY: Duration = Duration::from_secs(8);
pub const BASE_LEVEL_SCORE: i64 = 100;
pub const UNMET_PENALTY: i64 = 20;
pub const ENTERTAINMENT_BONUS: i64 = 10;
/// Entertainment must stay at or under this share of income for the bonus.
pub const ENTERTAINMENT_CAP: f64 = 0.1;
pub const PASS_SCORE: u32 = 60;
/// Largest income the simulator accepts, custom or after life events.
pub const MAX_INCOME: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPhase {
    Profile,
    Income,
    Intro,
    Playing,
    Result,
    Final,
}

impl BudgetPhase {
    fn name(&self) -> &'static str {
        match self {
            BudgetPhase::Profile => "profile",
            BudgetPhase::Income => "income",
            BudgetPhase::Intro => "intro",
            BudgetPhase::Playing => "playing",
            BudgetPhase::Result => "result",
            BudgetPhase::Final => "final",
        }
    }
}

/// How the player answers a life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeEventChoice {
    UseSavings,
    AddToExpenses,
    AcceptIncome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    Beginner,
    MoneyManager,
    FinanceGuru,
    BudgetMaster,
}

impl Rank {
    pub fn from_total(total: u32) -> Self {
        if total >= 240 {
            Rank::BudgetMaster
        } else if total >= 200 {
            Rank::FinanceGuru
        } else if total >= 150 {
            Rank::MoneyManager
        } else {
            Rank::Beginner
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Beginner => "Beginner",
            Rank::MoneyManager => "Money Manager",
            Rank::FinanceGuru => "Finance Guru",
            Rank::BudgetMaster => "Budget Master",
        }
    }
}

/// A category requirement the submitted budget fell short of.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortfall {
    pub category: BudgetCategory,
    pub required: f64,
    pub min_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelResult {
    pub level: u8,
    pub score: u32,
    pub passed: bool,
    pub shortfalls: Vec<Shortfall>,
    pub entertainment_bonus: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetGame {
    phase: BudgetPhase,
    profile: Option<BudgetProfile>,
    level: u8,
    income: u64,
    allocations: BTreeMap<BudgetCategory, u64>,
    life_event: Option<LifeEvent>,
    life_event_handled: bool,
    last_result: Option<LevelResult>,
    total_score: u32,
    feedback: Option<String>,
}

impl Default for BudgetGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetGame {
    pub fn new() -> Self {
        Self {
            phase: BudgetPhase::Profile,
            profile: None,
            level: 1,
            income: 0,
            allocations: empty_allocations(),
            life_event: None,
            life_event_handled: false,
            last_result: None,
            total_score: 0,
            feedback: None,
        }
    }

    pub fn phase(&self) -> BudgetPhase {
        self.phase
    }

    pub fn profile(&self) -> Option<BudgetProfile> {
        self.profile
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn income(&self) -> u64 {
        self.income
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn last_result(&self) -> Option<&LevelResult> {
        self.last_result.as_ref()
    }

    /// Latest feedback message, cleared on read.
    pub fn take_feedback(&mut self) -> Option<String> {
        self.feedback.take()
    }

    pub fn allocation(&self, category: BudgetCategory) -> u64 {
        self.allocations.get(&category).copied().unwrap_or(0)
    }

    pub fn allocated(&self) -> u64 {
        self.allocations
            .values()
            .fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    /// Income not yet assigned. Negative once a life event pushed spending
    /// past income.
    pub fn remaining(&self) -> i64 {
        let diff = i128::from(self.income) - i128::from(self.allocated());
        diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Share of income in `category`, as a percentage.
    pub fn share_pct(&self, category: BudgetCategory) -> f64 {
        if self.income == 0 {
            return 0.0;
        }
        self.allocation(category) as f64 / self.income as f64 * 100.0
    }

    /// Requirements for the current level, empty before a profile is chosen.
    pub fn requirements(&self) -> &'static [(BudgetCategory, f64)] {
        self.profile
            .map(|p| p.requirements(self.level))
            .unwrap_or(&[])
    }

    pub fn pending_life_event(&self) -> Option<&LifeEvent> {
        self.life_event.as_ref()
    }

    pub fn rank(&self) -> Rank {
        Rank::from_total(self.total_score)
    }

    fn expect_phase(&self, phase: BudgetPhase) -> Result<(), GameError> {
        if self.phase != phase {
            return Err(GameError::WrongPhase(self.phase.name()));
        }
        Ok(())
    }

    fn reject(&mut self, message: &str) -> GameError {
        self.feedback = Some(message.to_string());
        GameError::Rejected(message.to_string())
    }

    pub fn choose_profile(&mut self, profile: BudgetProfile) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Profile)?;
        self.profile = Some(profile);
        self.phase = BudgetPhase::Income;
        Ok(())
    }

    pub fn back_to_profile(&mut self) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Income)?;
        self.phase = BudgetPhase::Profile;
        Ok(())
    }

    /// Presets and custom amounts go through here; zero is refused.
    pub fn choose_income(&mut self, amount: u64) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Income)?;
        if amount == 0 {
            return Err(self.reject("Income must be greater than zero"));
        }
        if amount > MAX_INCOME {
            return Err(self.reject(&format!("Income cannot exceed ${MAX_INCOME}")));
        }
        self.income = amount;
        self.phase = BudgetPhase::Intro;
        Ok(())
    }

    pub fn start_level(&mut self) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Intro)?;
        self.begin_play();
        Ok(())
    }

    /// From the result screen, replay the same level from scratch.
    pub fn retry_level(&mut self) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Result)?;
        self.begin_play();
        Ok(())
    }

    fn begin_play(&mut self) {
        self.allocations = empty_allocations();
        self.life_event = None;
        self.life_event_handled = false;
        self.phase = BudgetPhase::Playing;
    }

    /// Set `category` to `amount`. Refused when the new total would exceed
    /// income; a met requirement produces a confirmation message.
    pub fn allocate(&mut self, category: BudgetCategory, amount: u64) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Playing)?;

        let fits = (self.allocated() - self.allocation(category))
            .checked_add(amount)
            .is_some_and(|total| total <= self.income);
        if !fits {
            return Err(self.reject("You don't have enough budget for that!"));
        }
        self.allocations.insert(category, amount);

        let required = self
            .profile
            .and_then(|p| p.requirement(self.level, category))
            .unwrap_or(0.0);
        if required > 0.0 && amount as f64 >= self.income as f64 * required {
            self.feedback = Some(format!("Great! {} is well allocated!", category.label()));
        }
        Ok(())
    }

    /// Whether the level's life event should be shown after `elapsed` of play.
    pub fn life_event_due(&self, elapsed: Duration) -> bool {
        self.phase == BudgetPhase::Playing
            && !self.life_event_handled
            && self.life_event.is_none()
            && elapsed >= LIFE_EVENT_DELAY
    }

    /// Draw the level's life event uniformly from the profile's table.
    pub fn trigger_life_event(&mut self) -> Result<LifeEvent, GameError> {
        let count = self.profile.map(|p| p.life_events().len()).unwrap_or(0);
        if count == 0 {
            return Err(GameError::WrongPhase(self.phase.name()));
        }
        self.trigger_life_event_at(rand::random_range(0..count))
    }

    /// Show a specific life event. At most one per level.
    pub fn trigger_life_event_at(&mut self, index: usize) -> Result<LifeEvent, GameError> {
        self.expect_phase(BudgetPhase::Playing)?;
        if self.life_event_handled || self.life_event.is_some() {
            return Err(GameError::Rejected(
                "A life event already happened this level".to_string(),
            ));
        }
        let profile = self.profile.ok_or(GameError::WrongPhase(self.phase.name()))?;
        let event = *profile
            .life_events()
            .get(index)
            .ok_or_else(|| GameError::Rejected(format!("No life event #{index}")))?;
        self.life_event = Some(event);
        Ok(event)
    }

    pub fn resolve_life_event(&mut self, choice: LifeEventChoice) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Playing)?;
        let event = self
            .life_event
            .ok_or_else(|| GameError::Rejected("No life event to resolve".to_string()))?;

        match (event.kind, choice) {
            (LifeEventKind::Expense { .. }, LifeEventChoice::UseSavings) => {
                let savings = self.allocation(BudgetCategory::Savings);
                if savings >= event.amount {
                    self.allocations
                        .insert(BudgetCategory::Savings, savings - event.amount);
                    self.feedback =
                        Some("Good! You used your emergency savings wisely!".to_string());
                } else {
                    let other = self.allocations.entry(BudgetCategory::Other).or_insert(0);
                    *other = other.saturating_add(event.amount);
                    self.feedback =
                        Some("Not enough savings! Adding to other expenses.".to_string());
                }
            }
            (LifeEventKind::Expense { category }, LifeEventChoice::AddToExpenses) => {
                let slot = self.allocations.entry(category).or_insert(0);
                *slot = slot.saturating_add(event.amount);
                self.feedback = Some("Added to your expenses.".to_string());
            }
            (LifeEventKind::Income, LifeEventChoice::AcceptIncome) => {
                self.income = self.income.saturating_add(event.amount).min(MAX_INCOME);
                self.feedback = Some("Great news! Your income increased!".to_string());
            }
            _ => {
                return Err(GameError::Rejected(format!(
                    "That choice does not apply to \"{}\"",
                    event.title
                )))
            }
        }

        self.life_event = None;
        self.life_event_handled = true;
        Ok(())
    }

    /// Score the level. Only allowed once every dollar is allocated.
    pub fn submit(&mut self) -> Result<LevelResult, GameError> {
        self.expect_phase(BudgetPhase::Playing)?;
        if self.remaining() != 0 {
            return Err(self.reject("You must allocate all your income!"));
        }

        let income = self.income as f64;
        let shortfalls: Vec<Shortfall> = self
            .requirements()
            .iter()
            .filter_map(|&(category, min_share)| {
                let required = income * min_share;
                ((self.allocation(category) as f64) < required).then_some(Shortfall {
                    category,
                    required,
                    min_share,
                })
            })
            .collect();

        let entertainment = self.allocation(BudgetCategory::Entertainment);
        let entertainment_bonus =
            entertainment > 0 && entertainment as f64 <= income * ENTERTAINMENT_CAP;

        let mut raw = BASE_LEVEL_SCORE - UNMET_PENALTY * shortfalls.len() as i64;
        if entertainment_bonus {
            raw += ENTERTAINMENT_BONUS;
        }
        let score = raw.max(0) as u32;

        let result = LevelResult {
            level: self.level,
            score,
            passed: score >= PASS_SCORE,
            shortfalls,
            entertainment_bonus,
        };
        self.total_score += score;
        self.last_result = Some(result.clone());
        self.phase = BudgetPhase::Result;
        Ok(result)
    }

    /// Advance after a passed level: the next intro, or the final screen
    /// after the last level.
    pub fn next_level(&mut self) -> Result<(), GameError> {
        self.expect_phase(BudgetPhase::Result)?;
        if !self.last_result.as_ref().is_some_and(|r| r.passed) {
            return Err(GameError::Rejected(format!(
                "Score at least {PASS_SCORE} to continue"
            )));
        }
        if self.level < LEVEL_COUNT {
            self.level += 1;
            self.phase = BudgetPhase::Intro;
        } else {
            self.phase = BudgetPhase::Final;
        }
        Ok(())
    }

    /// Back to profile selection with a clean slate.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn empty_allocations() -> BTreeMap<BudgetCategory, u64> {
    BudgetCategory::ALL.iter().map(|c| (*c, 0)).collect()
}

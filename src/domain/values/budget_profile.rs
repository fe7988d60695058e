//! Player profiles for the budget simulator: preset incomes, per-level
//! minimum allocations and the life events each profile can draw.

use crate::domain::values::budget_category::BudgetCategory;
use crate::domain::values::budget_category::BudgetCategory::{
    Food, Housing, Other, Savings, Transportation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of levels in one run.
pub const LEVEL_COUNT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetProfile {
    Student,
    Adult,
    Freelancer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LifeEventKind {
    /// Costs `amount`, charged to `category` unless savings cover it.
    Expense { category: BudgetCategory },
    /// Raises income by `amount`.
    Income,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeEvent {
    pub kind: LifeEventKind,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: u64,
}

const fn expense(
    title: &'static str,
    description: &'static str,
    amount: u64,
    category: BudgetCategory,
) -> LifeEvent {
    LifeEvent {
        kind: LifeEventKind::Expense { category },
        title,
        description,
        amount,
    }
}

const fn income(title: &'static str, description: &'static str, amount: u64) -> LifeEvent {
    LifeEvent {
        kind: LifeEventKind::Income,
        title,
        description,
        amount,
    }
}

type Requirement = (BudgetCategory, f64);

const STUDENT_REQUIREMENTS: [[Requirement; 4]; 3] = [
    [(Housing, 0.25), (Food, 0.15), (Transportation, 0.05), (Savings, 0.10)],
    [(Housing, 0.25), (Food, 0.15), (Transportation, 0.10), (Savings, 0.15)],
    [(Housing, 0.30), (Food, 0.15), (Transportation, 0.10), (Savings, 0.20)],
];

const ADULT_REQUIREMENTS: [[Requirement; 4]; 3] = [
    [(Housing, 0.25), (Food, 0.12), (Transportation, 0.15), (Savings, 0.15)],
    [(Housing, 0.28), (Food, 0.12), (Transportation, 0.15), (Savings, 0.20)],
    [(Housing, 0.30), (Food, 0.12), (Transportation, 0.15), (Savings, 0.25)],
];

const FREELANCER_REQUIREMENTS: [[Requirement; 4]; 3] = [
    [(Housing, 0.25), (Food, 0.12), (Transportation, 0.10), (Savings, 0.20)],
    [(Housing, 0.25), (Food, 0.12), (Transportation, 0.10), (Savings, 0.25)],
    [(Housing, 0.28), (Food, 0.12), (Transportation, 0.10), (Savings, 0.30)],
];

const STUDENT_EVENTS: [LifeEvent; 4] = [
    expense("Textbook Emergency!", "You need to buy expensive textbooks", 200, Other),
    expense("Laptop Repair", "Your laptop needs urgent repairs", 150, Other),
    income("Part-time Bonus!", "You got a bonus from your part-time job", 100),
    expense("Medical Visit", "Unexpected doctor visit", 80, Other),
];

const ADULT_EVENTS: [LifeEvent; 5] = [
    expense("Car Repair", "Your car needs immediate repairs", 500, Transportation),
    expense("Medical Emergency", "Unexpected medical bill", 400, Other),
    income("Work Bonus!", "You received a performance bonus", 300),
    expense("Home Repair", "Plumbing issue needs fixing", 250, Housing),
    income("Tax Refund!", "You got a tax refund", 200),
];

const FREELANCER_EVENTS: [LifeEvent; 4] = [
    expense("Equipment Upgrade", "Need to upgrade work equipment", 400, Other),
    expense("Slow Month", "Client payments delayed", 300, Savings),
    income("Big Project!", "Landed a major client", 500),
    expense("Software Subscription", "Annual software renewal", 200, Other),
];

impl BudgetProfile {
    pub const ALL: [BudgetProfile; 3] = [
        BudgetProfile::Student,
        BudgetProfile::Adult,
        BudgetProfile::Freelancer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BudgetProfile::Student => "Student",
            BudgetProfile::Adult => "Working Adult",
            BudgetProfile::Freelancer => "Freelancer",
        }
    }

    pub fn default_incomes(&self) -> [u64; 4] {
        match self {
            BudgetProfile::Student => [500, 1000, 1500, 2000],
            BudgetProfile::Adult => [2500, 3500, 5000, 7000],
            BudgetProfile::Freelancer => [2000, 3000, 4500, 6000],
        }
    }

    /// Minimum share of income per category for `level` (1-based).
    /// Levels past the last reuse the final level's table.
    pub fn requirements(&self, level: u8) -> &'static [Requirement] {
        let idx = usize::from(level.clamp(1, LEVEL_COUNT) - 1);
        match self {
            BudgetProfile::Student => &STUDENT_REQUIREMENTS[idx],
            BudgetProfile::Adult => &ADULT_REQUIREMENTS[idx],
            BudgetProfile::Freelancer => &FREELANCER_REQUIREMENTS[idx],
        }
    }

    pub fn requirement(&self, level: u8, category: BudgetCategory) -> Option<f64> {
        self.requirements(level)
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, pct)| *pct)
    }

    pub fn life_events(&self) -> &'static [LifeEvent] {
        match self {
            BudgetProfile::Student => &STUDENT_EVENTS,
            BudgetProfile::Adult => &ADULT_EVENTS,
            BudgetProfile::Freelancer => &FREELANCER_EVENTS,
        }
    }
}

impl fmt::Display for BudgetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetProfile::Student => write!(f, "student"),
            BudgetProfile::Adult => write!(f, "adult"),
            BudgetProfile::Freelancer => write!(f, "freelancer"),
        }
    }
}

impl FromStr for BudgetProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(BudgetProfile::Student),
            "adult" | "working adult" => Ok(BudgetProfile::Adult),
            "freelancer" => Ok(BudgetProfile::Freelancer),
            _ => Err(format!("Unknown profile: {s}")),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Housing,
    Food,
    Transportation,
    Entertainment,
    Savings,
    Other,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 6] = [
        BudgetCategory::Housing,
        BudgetCategory::Food,
        BudgetCategory::Transportation,
        BudgetCategory::Entertainment,
        BudgetCategory::Savings,
        BudgetCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetCategory::Housing => "Housing/Rent",
            BudgetCategory::Food => "Food & Groceries",
            BudgetCategory::Transportation => "Transportation",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::Savings => "Savings",
            BudgetCategory::Other => "Other/Bills",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetCategory::Housing => write!(f, "housing"),
            BudgetCategory::Food => write!(f, "food"),
            BudgetCategory::Transportation => write!(f, "transportation"),
            BudgetCategory::Entertainment => write!(f, "entertainment"),
            BudgetCategory::Savings => write!(f, "savings"),
            BudgetCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "housing" | "rent" => Ok(BudgetCategory::Housing),
            "food" | "groceries" => Ok(BudgetCategory::Food),
            "transportation" | "transport" => Ok(BudgetCategory::Transportation),
            "entertainment" => Ok(BudgetCategory::Entertainment),
            "savings" => Ok(BudgetCategory::Savings),
            "other" | "bills" => Ok(BudgetCategory::Other),
            _ => Err(format!("Unknown budget category: {s}")),
        }
    }
}

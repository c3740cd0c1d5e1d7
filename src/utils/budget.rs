use crate::models::Expense;

pub const REMAINING_LABEL: &str = "Remaining";
pub const REMAINING_COLOR: &str = "#e5e7eb";

const WARNING_THRESHOLD: f64 = 80.0;
const OVER_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetLevel {
    Normal,
    Warning,
    Over,
}

impl BudgetLevel {
    /// Thresholds are strict: exactly 80 is normal, exactly 100 is a warning.
    /// NaN compares false everywhere and lands on `Normal`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > OVER_THRESHOLD {
            BudgetLevel::Over
        } else if percentage > WARNING_THRESHOLD {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Normal
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            BudgetLevel::Normal => "text-emerald-500",
            BudgetLevel::Warning => "text-amber-500",
            BudgetLevel::Over => "text-rose-500",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            BudgetLevel::Normal => "bg-green-500",
            BudgetLevel::Warning => "bg-orange-500",
            BudgetLevel::Over => "bg-red-500",
        }
    }
}

pub fn budget_percentage(spent: f64, budget: f64) -> f64 {
    spent / budget * 100.0
}

/// Width of the progress bar in percent, always within [0, 100].
pub fn progress_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn remaining_budget(expenses: &[Expense], total_budget: f64) -> f64 {
    (total_budget - total_spent(expenses)).max(0.0)
}

/// Expenses plus a synthetic "Remaining" slice, keeping only positive amounts.
pub fn breakdown_series(expenses: &[Expense], total_budget: f64) -> Vec<Expense> {
    let remaining = Expense {
        category: REMAINING_LABEL.to_string(),
        amount: remaining_budget(expenses, total_budget),
        color: REMAINING_COLOR.to_string(),
    };

    expenses
        .iter()
        .cloned()
        .chain(std::iter::once(remaining))
        .filter(|e| e.amount > 0.0)
        .collect()
}

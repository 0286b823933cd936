//! Budget consumption and status evaluation.

use crate::aggregation;
use crate::models::{Budget, Transaction, TransactionKind};

/// Ratio of limit at which a budget is flagged as nearly exhausted.
pub const NEAR_THRESHOLD: f64 = 0.8;
/// Ratio of limit at which a budget is exceeded.
pub const OVER_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Ok,
    Near,
    Over,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("budget limit must be greater than zero")]
    NonPositiveLimit,
}

/// Consumption as a whole percentage, clamped to `[0, 100]`. A non-positive
/// limit is a caller error; the budget form validates before this is called.
pub fn percentage(spent: f64, limit: f64) -> Result<u8, BudgetError> {
    if limit <= 0.0 {
        return Err(BudgetError::NonPositiveLimit);
    }
    let pct = (spent / limit * 100.0).round();
    Ok(pct.clamp(0.0, 100.0) as u8)
}

pub fn status(spent: f64, limit: f64) -> Result<BudgetStatus, BudgetError> {
    if limit <= 0.0 {
        return Err(BudgetError::NonPositiveLimit);
    }
    let ratio = spent / limit;
    Ok(if ratio >= OVER_THRESHOLD {
        BudgetStatus::Over
    } else if ratio >= NEAR_THRESHOLD {
        BudgetStatus::Near
    } else {
        BudgetStatus::Ok
    })
}

/// Evaluated consumption of one budget against a transaction snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub spent: f64,
    pub percentage: u8,
    pub status: BudgetStatus,
}

/// Spend for the budget's category within the budget's month, evaluated
/// against its limit.
pub fn evaluate(budget: &Budget, transactions: &[Transaction]) -> Result<BudgetUsage, BudgetError> {
    let spent: f64 = aggregation::in_month(transactions, budget.month)
        .into_iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.category_id == Some(budget.category_id))
        .map(|t| t.amount)
        .sum();
    Ok(BudgetUsage {
        spent,
        percentage: percentage(spent, budget.limit_amount)?,
        status: status(spent, budget.limit_amount)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;
    use uuid::Uuid;

    #[test]
    fn percentage_rounds_and_caps_at_100() {
        assert_eq!(percentage(0.0, 100.0).unwrap(), 0);
        assert_eq!(percentage(33.4, 100.0).unwrap(), 33);
        assert_eq!(percentage(33.5, 100.0).unwrap(), 34);
        assert_eq!(percentage(100.0, 100.0).unwrap(), 100);
        assert_eq!(percentage(250.0, 100.0).unwrap(), 100);
    }

    #[test]
    fn percentage_is_monotonic_in_spent() {
        let mut last = 0;
        for spent in 0..200 {
            let pct = percentage(spent as f64, 100.0).unwrap();
            assert!(pct >= last);
            last = pct;
        }
    }

    #[test]
    fn non_positive_limit_is_an_error() {
        assert_eq!(percentage(10.0, 0.0), Err(BudgetError::NonPositiveLimit));
        assert_eq!(percentage(10.0, -5.0), Err(BudgetError::NonPositiveLimit));
        assert_eq!(status(10.0, 0.0), Err(BudgetError::NonPositiveLimit));
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(status(79.0, 100.0).unwrap(), BudgetStatus::Ok);
        assert_eq!(status(80.0, 100.0).unwrap(), BudgetStatus::Near);
        assert_eq!(status(100.0, 100.0).unwrap(), BudgetStatus::Over);
        assert_eq!(status(150.0, 100.0).unwrap(), BudgetStatus::Over);
    }

    #[test]
    fn evaluate_scopes_to_category_and_month() {
        let user_id = Uuid::new_v4();
        let category = Uuid::new_v4();
        let other = Uuid::new_v4();
        let budget = Budget {
            id: Uuid::new_v4(),
            user_id,
            category_id: category,
            month: MonthKey { year: 2024, month: 5 },
            limit_amount: 500_000.0,
        };
        let tx = |amount: f64, category_id, date: &str| Transaction {
            id: Uuid::new_v4(),
            user_id,
            title: "test".to_string(),
            amount,
            kind: TransactionKind::Expense,
            category_id,
            date: date.parse().unwrap(),
            notes: None,
        };
        let transactions = vec![
            tx(200_000.0, Some(category), "2024-05-03"),
            tx(250_000.0, Some(category), "2024-05-20"),
            tx(100_000.0, Some(other), "2024-05-10"),   // other category
            tx(100_000.0, Some(category), "2024-04-30"), // previous month
        ];
        let usage = evaluate(&budget, &transactions).unwrap();
        assert_eq!(usage.spent, 450_000.0);
        assert_eq!(usage.percentage, 90);
        assert_eq!(usage.status, BudgetStatus::Near);
    }
}

//! Summary derivations over a snapshot of transactions. Every page that
//! shows a sum or a chart goes through these functions; nothing re-derives
//! inline.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use crate::models::{MonthKey, Transaction, TransactionKind};

/// All-time income/expense sums and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Per-day-of-week sums for one week, Monday at index 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeeklySeries {
    pub income: [f64; 7],
    pub expense: [f64; 7],
}

/// Income/expense sums for one month of a trend series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Sums amounts per category id, restricted to one kind. Transactions
/// without a category are skipped; absent categories get no entry.
pub fn by_category(transactions: &[Transaction], kind: TransactionKind) -> HashMap<Uuid, f64> {
    let mut sums = HashMap::new();
    for tx in transactions.iter().filter(|t| t.kind == kind) {
        if let Some(category_id) = tx.category_id {
            *sums.entry(category_id).or_insert(0.0) += tx.amount;
        }
    }
    sums
}

/// Buckets transactions dated within `[week_start, week_end]` (inclusive on
/// both ends) by day of week. Anything outside the range is ignored.
pub fn weekly_series(
    transactions: &[Transaction],
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> WeeklySeries {
    let mut series = WeeklySeries::default();
    for tx in transactions {
        if tx.date < week_start || tx.date > week_end {
            continue;
        }
        let index = tx.date.weekday().num_days_from_monday() as usize;
        match tx.kind {
            TransactionKind::Income => series.income[index] += tx.amount,
            TransactionKind::Expense => series.expense[index] += tx.amount,
        }
    }
    series
}

/// Income/expense sums per requested month, in the given order.
pub fn monthly_series(transactions: &[Transaction], months: &[MonthKey]) -> Vec<MonthlyPoint> {
    months
        .iter()
        .map(|&month| {
            let mut income = 0.0;
            let mut expense = 0.0;
            for tx in transactions.iter().filter(|t| month.contains(t.date)) {
                match tx.kind {
                    TransactionKind::Income => income += tx.amount,
                    TransactionKind::Expense => expense += tx.amount,
                }
            }
            MonthlyPoint {
                month,
                income,
                expense,
            }
        })
        .collect()
}

/// Transactions whose date falls within the given month.
pub fn in_month(transactions: &[Transaction], month: MonthKey) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| month.contains(t.date))
        .collect()
}

/// Monday-through-Sunday bounds of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: f64, kind: TransactionKind, category: Option<Uuid>, date: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "test".to_string(),
            amount,
            kind,
            category_id: category,
            date: date.parse().unwrap(),
            notes: None,
        }
    }

    #[test]
    fn totals_of_empty_list_are_zero() {
        let totals = totals(&[]);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expense, 0.0);
        assert_eq!(totals.balance, 0.0);
    }

    #[test]
    fn totals_balance_is_income_minus_expense() {
        let category = Uuid::new_v4();
        let transactions = vec![
            tx(1_000_000.0, TransactionKind::Income, None, "2024-05-01"),
            tx(300_000.0, TransactionKind::Expense, Some(category), "2024-05-02"),
        ];
        let totals = totals(&transactions);
        assert_eq!(totals.income, 1_000_000.0);
        assert_eq!(totals.expense, 300_000.0);
        assert_eq!(totals.balance, 700_000.0);
    }

    #[test]
    fn by_category_groups_one_kind_and_skips_uncategorized() {
        let food = Uuid::new_v4();
        let travel = Uuid::new_v4();
        let transactions = vec![
            tx(100.0, TransactionKind::Expense, Some(food), "2024-05-01"),
            tx(50.0, TransactionKind::Expense, Some(food), "2024-05-02"),
            tx(30.0, TransactionKind::Expense, Some(travel), "2024-05-03"),
            tx(20.0, TransactionKind::Expense, None, "2024-05-04"),
            tx(999.0, TransactionKind::Income, Some(food), "2024-05-05"),
        ];
        let sums = by_category(&transactions, TransactionKind::Expense);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums[&food], 150.0);
        assert_eq!(sums[&travel], 30.0);
    }

    #[test]
    fn categorized_expense_sum_never_exceeds_expense_total() {
        let category = Uuid::new_v4();
        let transactions = vec![
            tx(100.0, TransactionKind::Expense, Some(category), "2024-05-01"),
            tx(40.0, TransactionKind::Expense, None, "2024-05-02"),
        ];
        let categorized: f64 = by_category(&transactions, TransactionKind::Expense)
            .values()
            .sum();
        assert!(categorized <= totals(&transactions).expense);
        assert_eq!(categorized, 100.0);
    }

    #[test]
    fn weekly_series_buckets_by_weekday_inclusive() {
        // 2024-05-06 is a Monday
        let start: NaiveDate = "2024-05-06".parse().unwrap();
        let end: NaiveDate = "2024-05-12".parse().unwrap();
        let transactions = vec![
            tx(10.0, TransactionKind::Income, None, "2024-05-06"), // start boundary
            tx(20.0, TransactionKind::Expense, None, "2024-05-12"), // end boundary
            tx(99.0, TransactionKind::Expense, None, "2024-05-13"), // one day past end
            tx(99.0, TransactionKind::Income, None, "2024-05-05"), // one day before start
        ];
        let series = weekly_series(&transactions, start, end);
        assert_eq!(series.income[0], 10.0);
        assert_eq!(series.expense[6], 20.0);
        assert_eq!(series.income.iter().sum::<f64>(), 10.0);
        assert_eq!(series.expense.iter().sum::<f64>(), 20.0);
    }

    #[test]
    fn week_bounds_start_on_monday() {
        // a Thursday
        let (start, end) = week_bounds("2024-05-09".parse().unwrap());
        assert_eq!(start, "2024-05-06".parse::<NaiveDate>().unwrap());
        assert_eq!(end, "2024-05-12".parse::<NaiveDate>().unwrap());

        // a Monday maps to itself
        let (start, _) = week_bounds("2024-05-06".parse().unwrap());
        assert_eq!(start, "2024-05-06".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn monthly_series_keeps_requested_order() {
        let months = vec![
            MonthKey { year: 2024, month: 4 },
            MonthKey { year: 2024, month: 5 },
        ];
        let transactions = vec![
            tx(100.0, TransactionKind::Income, None, "2024-04-15"),
            tx(70.0, TransactionKind::Expense, None, "2024-05-20"),
        ];
        let series = monthly_series(&transactions, &months);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].income, 100.0);
        assert_eq!(series[0].expense, 0.0);
        assert_eq!(series[1].income, 0.0);
        assert_eq!(series[1].expense, 70.0);
    }

    #[test]
    fn in_month_filters_by_calendar_month() {
        let month = MonthKey { year: 2024, month: 5 };
        let transactions = vec![
            tx(1.0, TransactionKind::Income, None, "2024-05-01"),
            tx(2.0, TransactionKind::Income, None, "2024-05-31"),
            tx(3.0, TransactionKind::Income, None, "2024-06-01"),
        ];
        assert_eq!(in_month(&transactions, month).len(), 2);
    }
}

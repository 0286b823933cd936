use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement on a transaction or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Which side of a debt the user is on: `Borrow` means the user owes money,
/// `Lend` means money is owed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtKind {
    Borrow,
    Lend,
}

/// Settlement state of a debt. `Pending` is the initial state, `Paid` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Pending,
    Paid,
}

/// A calendar month, serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("month must be formatted YYYY-MM")]
pub struct ParseMonthKeyError;

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The `n` months ending with (and including) this one, oldest first.
    pub fn trailing(self, n: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(n);
        let mut current = self;
        for _ in 0..n {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or(ParseMonthKeyError)?;
        let year = year.parse::<i32>().map_err(|_| ParseMonthKeyError)?;
        let month = month.parse::<u32>().map_err(|_| ParseMonthKeyError)?;
        if !(1..=12).contains(&month) {
            return Err(ParseMonthKeyError);
        }
        Ok(Self { year, month })
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseMonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// Always positive; `kind` carries the direction.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    /// Calendar day the transaction happened (YYYY-MM-DD).
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Row sent when creating a transaction; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Full-replacement patch for an existing transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransaction {
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// A classification tag for transactions. Built-in categories have no owner;
/// user categories carry the owner's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// CSS color tag, e.g. "bg-red-500".
    pub color: String,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub color: String,
}

/// A per-category, per-month spending limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub month: MonthKey,
    pub limit_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub month: MonthKey,
    pub limit_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBudget {
    pub category_id: Uuid,
    pub month: MonthKey,
    pub limit_amount: f64,
}

/// A tracked borrow/lend obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: DebtKind,
    /// Name of the other party.
    pub counterparty: String,
    pub date: NaiveDate,
    pub status: DebtStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDebt {
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: DebtKind,
    pub counterparty: String,
    pub date: NaiveDate,
    pub status: DebtStatus,
    pub notes: Option<String>,
}

/// A savings goal. Read-only in this application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl FinancialGoal {
    /// Display progress, capped at 100. A zero or negative target renders as
    /// 0% because goals cannot be edited from this app.
    pub fn progress_percent(&self) -> u8 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        let pct = (self.current_amount / self.target_amount * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

/// Per-user profile row; the id equals the auth user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub full_name: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_round_trips_through_string() {
        let month: MonthKey = "2024-05".parse().unwrap();
        assert_eq!(month, MonthKey { year: 2024, month: 5 });
        assert_eq!(month.to_string(), "2024-05");
    }

    #[test]
    fn month_key_rejects_bad_input() {
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-00".parse::<MonthKey>().is_err());
        assert!("abcd-05".parse::<MonthKey>().is_err());
    }

    #[test]
    fn month_key_serde_uses_string_form() {
        let month = MonthKey { year: 2024, month: 5 };
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }

    #[test]
    fn month_key_contains_checks_year_and_month() {
        let month = MonthKey { year: 2024, month: 5 };
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()));
    }

    #[test]
    fn trailing_months_cross_year_boundary() {
        let month = MonthKey { year: 2024, month: 2 };
        let months = month.trailing(4);
        assert_eq!(
            months,
            vec![
                MonthKey { year: 2023, month: 11 },
                MonthKey { year: 2023, month: 12 },
                MonthKey { year: 2024, month: 1 },
                MonthKey { year: 2024, month: 2 },
            ]
        );
    }

    #[test]
    fn transaction_kind_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(serde_json::to_string(&DebtKind::Lend).unwrap(), "\"lend\"");
        assert_eq!(
            serde_json::to_string(&DebtStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn goal_progress_caps_at_100_and_handles_zero_target() {
        let mut goal = FinancialGoal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Mua xe".to_string(),
            target_amount: 1_000_000.0,
            current_amount: 250_000.0,
        };
        assert_eq!(goal.progress_percent(), 25);

        goal.current_amount = 2_000_000.0;
        assert_eq!(goal.progress_percent(), 100);

        goal.target_amount = 0.0;
        assert_eq!(goal.progress_percent(), 0);
    }
}

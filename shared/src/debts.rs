//! Debt ledger derivations: the mirrored transactions a debt spawns and the
//! summary positions the Debts page shows. The effectful two-write protocol
//! lives in the client crate; everything here is pure.

use chrono::NaiveDate;

use crate::categories::{
    BORROW_ISSUE_CATEGORY_ID, BORROW_REPAY_CATEGORY_ID, LEND_COLLECT_CATEGORY_ID,
    LEND_ISSUE_CATEGORY_ID,
};
use crate::models::{Debt, DebtKind, DebtStatus, NewTransaction, TransactionKind};

/// Per-kind pending sums for the Debts page summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebtTotals {
    pub borrowed: f64,
    pub lent: f64,
}

fn auto_note(debt: &Debt) -> String {
    let label = match debt.kind {
        DebtKind::Borrow => "vay",
        DebtKind::Lend => "cho vay",
    };
    format!(
        "Tự động tạo từ khoản {}: {} - {}",
        label, debt.title, debt.counterparty
    )
}

/// The transaction mirrored when a debt is created: borrowing brings money
/// in now, lending sends money out now.
pub fn issuance_transaction(debt: &Debt) -> NewTransaction {
    let (title, kind, category_id) = match debt.kind {
        DebtKind::Borrow => (
            format!("Vay: {}", debt.title),
            TransactionKind::Income,
            BORROW_ISSUE_CATEGORY_ID,
        ),
        DebtKind::Lend => (
            format!("Cho vay: {}", debt.title),
            TransactionKind::Expense,
            LEND_ISSUE_CATEGORY_ID,
        ),
    };
    NewTransaction {
        user_id: debt.user_id,
        title,
        amount: debt.amount,
        kind,
        category_id: Some(category_id),
        date: debt.date,
        notes: Some(auto_note(debt)),
    }
}

/// The transaction mirrored when a debt is settled: repaying a borrow is an
/// expense, collecting a lend is income. Dated on the settlement day.
pub fn settlement_transaction(debt: &Debt, settled_on: NaiveDate) -> NewTransaction {
    let (title, kind, category_id) = match debt.kind {
        DebtKind::Borrow => (
            format!("Trả nợ: {}", debt.title),
            TransactionKind::Expense,
            BORROW_REPAY_CATEGORY_ID,
        ),
        DebtKind::Lend => (
            format!("Thu nợ: {}", debt.title),
            TransactionKind::Income,
            LEND_COLLECT_CATEGORY_ID,
        ),
    };
    NewTransaction {
        user_id: debt.user_id,
        title,
        amount: debt.amount,
        kind,
        category_id: Some(category_id),
        date: settled_on,
        notes: Some(auto_note(debt)),
    }
}

/// Net amount the world owes the user over pending debts: `lend` counts
/// positive, `borrow` negative. Paid debts contribute nothing.
pub fn net_position(debts: &[Debt]) -> f64 {
    debts
        .iter()
        .filter(|d| d.status == DebtStatus::Pending)
        .map(|d| match d.kind {
            DebtKind::Lend => d.amount,
            DebtKind::Borrow => -d.amount,
        })
        .sum()
}

pub fn pending_totals(debts: &[Debt]) -> DebtTotals {
    let mut totals = DebtTotals::default();
    for debt in debts.iter().filter(|d| d.status == DebtStatus::Pending) {
        match debt.kind {
            DebtKind::Borrow => totals.borrowed += debt.amount,
            DebtKind::Lend => totals.lent += debt.amount,
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn debt(amount: f64, kind: DebtKind, status: DebtStatus) -> Debt {
        Debt {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Mua laptop".to_string(),
            amount,
            kind,
            counterparty: "Minh".to_string(),
            date: "2024-05-01".parse().unwrap(),
            status,
            notes: None,
        }
    }

    #[test]
    fn settling_a_borrow_mirrors_an_expense() {
        let debt = debt(500_000.0, DebtKind::Borrow, DebtStatus::Pending);
        let settled_on: NaiveDate = "2024-06-15".parse().unwrap();
        let mirror = settlement_transaction(&debt, settled_on);
        assert_eq!(mirror.kind, TransactionKind::Expense);
        assert_eq!(mirror.amount, 500_000.0);
        assert_eq!(mirror.category_id, Some(BORROW_REPAY_CATEGORY_ID));
        assert_eq!(mirror.date, settled_on);
        assert_eq!(mirror.title, "Trả nợ: Mua laptop");
        assert_eq!(mirror.user_id, debt.user_id);
    }

    #[test]
    fn settling_a_lend_mirrors_an_income() {
        let debt = debt(200_000.0, DebtKind::Lend, DebtStatus::Pending);
        let mirror = settlement_transaction(&debt, "2024-06-15".parse().unwrap());
        assert_eq!(mirror.kind, TransactionKind::Income);
        assert_eq!(mirror.category_id, Some(LEND_COLLECT_CATEGORY_ID));
        assert_eq!(mirror.title, "Thu nợ: Mua laptop");
    }

    #[test]
    fn issuing_uses_the_reserved_issue_categories_and_debt_date() {
        let borrow = debt(100_000.0, DebtKind::Borrow, DebtStatus::Pending);
        let mirror = issuance_transaction(&borrow);
        assert_eq!(mirror.kind, TransactionKind::Income);
        assert_eq!(mirror.category_id, Some(BORROW_ISSUE_CATEGORY_ID));
        assert_eq!(mirror.date, borrow.date);

        let lend = debt(100_000.0, DebtKind::Lend, DebtStatus::Pending);
        let mirror = issuance_transaction(&lend);
        assert_eq!(mirror.kind, TransactionKind::Expense);
        assert_eq!(mirror.category_id, Some(LEND_ISSUE_CATEGORY_ID));
    }

    #[test]
    fn net_position_counts_lend_positive_borrow_negative() {
        let debts = vec![
            debt(300_000.0, DebtKind::Lend, DebtStatus::Pending),
            debt(100_000.0, DebtKind::Borrow, DebtStatus::Pending),
            debt(999_999.0, DebtKind::Borrow, DebtStatus::Paid),
        ];
        assert_eq!(net_position(&debts), 200_000.0);
    }

    #[test]
    fn net_position_is_zero_once_everything_is_paid() {
        let debts = vec![debt(500_000.0, DebtKind::Borrow, DebtStatus::Paid)];
        assert_eq!(net_position(&debts), 0.0);
        assert_eq!(net_position(&[]), 0.0);
    }

    #[test]
    fn pending_totals_split_by_kind() {
        let debts = vec![
            debt(300_000.0, DebtKind::Lend, DebtStatus::Pending),
            debt(100_000.0, DebtKind::Borrow, DebtStatus::Pending),
            debt(50_000.0, DebtKind::Borrow, DebtStatus::Pending),
            debt(777.0, DebtKind::Lend, DebtStatus::Paid),
        ];
        let totals = pending_totals(&debts);
        assert_eq!(totals.lent, 300_000.0);
        assert_eq!(totals.borrowed, 150_000.0);
    }
}

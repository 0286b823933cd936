//! Built-in category table and the merged lookup registry.

use uuid::{uuid, Uuid};

use crate::models::{Category, TransactionKind};

/// Reserved category for the income side of taking out a loan.
pub const BORROW_ISSUE_CATEGORY_ID: Uuid = uuid!("bc985284-54a1-4a6a-bb59-e6997eb6ac51");
/// Reserved category for the expense side of lending money out.
pub const LEND_ISSUE_CATEGORY_ID: Uuid = uuid!("862b2956-2e4b-4732-b0cd-1bb1f8112afa");
/// Reserved category for repaying a borrowed amount.
pub const BORROW_REPAY_CATEGORY_ID: Uuid = uuid!("d1e2f3a4-b5c6-7d8e-9f0a-1b2c3d4e5f6a");
/// Reserved category for collecting a lent amount.
pub const LEND_COLLECT_CATEGORY_ID: Uuid = uuid!("e2f3a4b5-c6d7-8e9f-0a1b-2c3d4e5f6a7b");

const EXPENSE_COLOR: &str = "bg-red-500";
const INCOME_COLOR: &str = "bg-green-500";
const PLACEHOLDER_COLOR: &str = "bg-gray-400";

fn builtin(id: Uuid, name: &str, kind: TransactionKind) -> Category {
    let color = match kind {
        TransactionKind::Income => INCOME_COLOR,
        TransactionKind::Expense => EXPENSE_COLOR,
    };
    Category {
        id,
        name: name.to_string(),
        kind,
        color: color.to_string(),
        user_id: None,
    }
}

/// The fixed built-in categories, in display order: expenses first, then
/// income. Identifiers are stable across installs.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        builtin(
            uuid!("37a85603-d42f-421c-9b73-52d5e5d8d85a"),
            "Ăn uống",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("b3c27ff4-82b2-4e91-8f08-b9aaa54964f0"),
            "Di chuyển",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("c9f6a9d7-1b4c-4e5f-8e3a-2c4b5d6d7e8f"),
            "Mua sắm",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("d8e7f6a5-4b3c-2d1e-9f8a-7b6c5d4e3f2a"),
            "Hóa đơn & Tiện ích",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("e5d4c3b2-a1b2-c3d4-e5f6-a7b8c9d0e1f2"),
            "Giải trí",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("f2e1d0c9-b8a7-6f5e-4d3c-2b1a0f9e8d7c"),
            "Sức khỏe",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("a1b2c3d4-e5f6-7a8b-9c0d-1e2f3a4b5c6d"),
            "Giáo dục",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("b2c3d4e5-f6a7-8b9c-0d1e-2f3a4b5c6d7e"),
            "Khác",
            TransactionKind::Expense,
        ),
        builtin(
            uuid!("c3d4e5f6-a7b8-9c0d-1e2f-3a4b5c6d7e8f"),
            "Lương",
            TransactionKind::Income,
        ),
        builtin(
            uuid!("d4e5f6a7-b8c9-0d1e-2f3a-4b5c6d7e8f9a"),
            "Thưởng",
            TransactionKind::Income,
        ),
        builtin(
            uuid!("e5f6a7b8-c9d0-1e2f-3a4b-5c6d7e8f9a0b"),
            "Đầu tư",
            TransactionKind::Income,
        ),
        builtin(
            uuid!("f6a7b8c9-d0e1-2f3a-4b5c-6d7e8f9a0b1c"),
            "Được tặng",
            TransactionKind::Income,
        ),
        builtin(
            uuid!("a7b8c9d0-e1f2-3a4b-5c6d-7e8f9a0b1c2d"),
            "Thu nhập phụ",
            TransactionKind::Income,
        ),
        builtin(
            uuid!("b8c9d0e1-f2a3-4b5c-6d7e-8f9a0b1c2d3e"),
            "Khác",
            TransactionKind::Income,
        ),
    ]
}

/// Reserved debt-bookkeeping categories. Never offered in pickers; only the
/// debt ledger writes transactions against them.
pub fn debt_categories() -> Vec<Category> {
    vec![
        builtin(BORROW_ISSUE_CATEGORY_ID, "Vay", TransactionKind::Income),
        builtin(LEND_ISSUE_CATEGORY_ID, "Cho vay", TransactionKind::Expense),
        builtin(BORROW_REPAY_CATEGORY_ID, "Trả nợ", TransactionKind::Expense),
        builtin(LEND_COLLECT_CATEGORY_ID, "Thu nợ", TransactionKind::Income),
    ]
}

/// Built-in categories merged with the user's own, with lookup by id.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRegistry {
    builtins: Vec<Category>,
    reserved: Vec<Category>,
    user: Vec<Category>,
    placeholder: Category,
}

impl CategoryRegistry {
    pub fn new(mut user_categories: Vec<Category>) -> Self {
        user_categories.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            builtins: builtin_categories(),
            reserved: debt_categories(),
            user: user_categories,
            placeholder: Category {
                id: Uuid::nil(),
                name: "Không phân loại".to_string(),
                kind: TransactionKind::Expense,
                color: PLACEHOLDER_COLOR.to_string(),
                user_id: None,
            },
        }
    }

    /// Categories offered in pickers for the given kind: built-ins in their
    /// fixed order, then user categories ordered by name. Reserved debt
    /// categories are excluded.
    pub fn list_by_kind(&self, kind: TransactionKind) -> Vec<&Category> {
        self.builtins
            .iter()
            .chain(self.user.iter())
            .filter(|c| c.kind == kind)
            .collect()
    }

    /// Resolves any category id, including the reserved debt ones.
    pub fn lookup(&self, id: Uuid) -> Option<&Category> {
        self.builtins
            .iter()
            .chain(self.reserved.iter())
            .chain(self.user.iter())
            .find(|c| c.id == id)
    }

    /// Resolves for display, falling back to the "uncategorized" placeholder
    /// so a dangling reference never breaks a render.
    pub fn resolve(&self, id: Option<Uuid>) -> &Category {
        id.and_then(|id| self.lookup(id)).unwrap_or(&self.placeholder)
    }

    pub fn placeholder(&self) -> &Category {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_category(name: &str, kind: TransactionKind) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            color: "bg-blue-500".to_string(),
            user_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn builtins_come_first_then_user_categories_by_name() {
        let registry = CategoryRegistry::new(vec![
            user_category("Zzz", TransactionKind::Expense),
            user_category("Aaa", TransactionKind::Expense),
        ]);
        let names: Vec<&str> = registry
            .list_by_kind(TransactionKind::Expense)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names[0], "Ăn uống");
        assert_eq!(names[names.len() - 2], "Aaa");
        assert_eq!(names[names.len() - 1], "Zzz");
    }

    #[test]
    fn reserved_debt_categories_resolve_but_are_not_listed() {
        let registry = CategoryRegistry::new(vec![]);
        assert!(registry.lookup(BORROW_REPAY_CATEGORY_ID).is_some());
        let listed: Vec<Uuid> = registry
            .list_by_kind(TransactionKind::Expense)
            .iter()
            .map(|c| c.id)
            .collect();
        assert!(!listed.contains(&BORROW_REPAY_CATEGORY_ID));
        assert!(!listed.contains(&LEND_ISSUE_CATEGORY_ID));
    }

    #[test]
    fn unknown_id_resolves_to_placeholder() {
        let registry = CategoryRegistry::new(vec![]);
        let resolved = registry.resolve(Some(Uuid::new_v4()));
        assert_eq!(resolved.name, "Không phân loại");
        assert_eq!(registry.resolve(None).name, "Không phân loại");
    }

    #[test]
    fn kinds_are_split_between_income_and_expense() {
        let registry = CategoryRegistry::new(vec![]);
        assert_eq!(registry.list_by_kind(TransactionKind::Expense).len(), 8);
        assert_eq!(registry.list_by_kind(TransactionKind::Income).len(), 6);
    }
}

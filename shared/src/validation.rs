//! Form-input validation, run before any network call. A failed check is a
//! user-facing message; no state is mutated.

use uuid::Uuid;

use crate::models::{Budget, Category, MonthKey, TransactionKind};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Vui lòng nhập tiêu đề")]
    EmptyTitle,
    #[error("Số tiền phải lớn hơn 0")]
    NonPositiveAmount,
    #[error("Vui lòng chọn danh mục")]
    MissingCategory,
    #[error("Danh mục không khớp với loại giao dịch")]
    KindMismatch,
    #[error("Vui lòng nhập ngày hợp lệ")]
    InvalidDate,
    #[error("Vui lòng nhập tên người vay/cho vay")]
    EmptyCounterparty,
    #[error("Hạn mức phải lớn hơn 0")]
    NonPositiveLimit,
    #[error("Đã có ngân sách cho danh mục này trong tháng")]
    DuplicateBudget,
    #[error("Vui lòng nhập tên danh mục")]
    EmptyCategoryName,
    #[error("Vui lòng nhập họ tên")]
    EmptyName,
    #[error("Email không hợp lệ")]
    InvalidEmail,
    #[error("Mật khẩu phải có ít nhất {MIN_PASSWORD_LEN} ký tự")]
    PasswordTooShort,
    #[error("Mật khẩu nhập lại không khớp")]
    PasswordMismatch,
}

/// Transaction form check. The form requires a category; the registry
/// resolves it before calling so the kind match can be verified here.
pub fn validate_transaction_input(
    title: &str,
    amount: f64,
    category: Option<&Category>,
    kind: TransactionKind,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    match category {
        None => Err(ValidationError::MissingCategory),
        Some(category) if category.kind != kind => Err(ValidationError::KindMismatch),
        Some(_) => Ok(()),
    }
}

pub fn validate_debt_input(
    title: &str,
    counterparty: &str,
    amount: f64,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if counterparty.trim().is_empty() {
        return Err(ValidationError::EmptyCounterparty);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// Budget form check. `existing` holds the user's other budgets; one budget
/// per (category, month) is enforced here since the backend does not.
pub fn validate_budget_input(
    limit: f64,
    category_id: Uuid,
    month: MonthKey,
    existing: &[Budget],
) -> Result<(), ValidationError> {
    if limit <= 0.0 {
        return Err(ValidationError::NonPositiveLimit);
    }
    let duplicate = existing
        .iter()
        .any(|b| b.category_id == category_id && b.month == month);
    if duplicate {
        return Err(ValidationError::DuplicateBudget);
    }
    Ok(())
}

pub fn validate_category_input(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyCategoryName);
    }
    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if !email.contains('@') || !email.contains('.') || email.len() < 5 {
        return Err(ValidationError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    validate_credentials(email, password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(kind: TransactionKind) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: "Ăn uống".to_string(),
            kind,
            color: "bg-red-500".to_string(),
            user_id: None,
        }
    }

    #[test]
    fn transaction_input_requires_title_amount_and_category() {
        let expense = category(TransactionKind::Expense);
        assert_eq!(
            validate_transaction_input("", 100.0, Some(&expense), TransactionKind::Expense),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_transaction_input("Cơm trưa", 0.0, Some(&expense), TransactionKind::Expense),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            validate_transaction_input("Cơm trưa", 100.0, None, TransactionKind::Expense),
            Err(ValidationError::MissingCategory)
        );
        assert!(
            validate_transaction_input("Cơm trưa", 100.0, Some(&expense), TransactionKind::Expense)
                .is_ok()
        );
    }

    #[test]
    fn category_kind_must_match_transaction_kind() {
        let income = category(TransactionKind::Income);
        assert_eq!(
            validate_transaction_input("Lương", 100.0, Some(&income), TransactionKind::Expense),
            Err(ValidationError::KindMismatch)
        );
    }

    #[test]
    fn budget_rejects_duplicate_category_month_pair() {
        let category_id = Uuid::new_v4();
        let month = MonthKey { year: 2024, month: 5 };
        let existing = vec![Budget {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            category_id,
            month,
            limit_amount: 500_000.0,
        }];
        assert_eq!(
            validate_budget_input(300_000.0, category_id, month, &existing),
            Err(ValidationError::DuplicateBudget)
        );
        assert!(validate_budget_input(300_000.0, Uuid::new_v4(), month, &existing).is_ok());
        assert_eq!(
            validate_budget_input(0.0, Uuid::new_v4(), month, &[]),
            Err(ValidationError::NonPositiveLimit)
        );
    }

    #[test]
    fn debt_input_requires_counterparty() {
        assert_eq!(
            validate_debt_input("Mua xe", "", 100.0),
            Err(ValidationError::EmptyCounterparty)
        );
        assert!(validate_debt_input("Mua xe", "Minh", 100.0).is_ok());
    }

    #[test]
    fn registration_checks_name_email_and_password_pair() {
        assert_eq!(
            validate_registration("", "a@b.com", "secret1", "secret1"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_registration("An", "not-an-email", "secret1", "secret1"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration("An", "a@b.com", "abc", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_registration("An", "a@b.com", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_registration("An", "a@b.com", "secret1", "secret1").is_ok());
    }
}

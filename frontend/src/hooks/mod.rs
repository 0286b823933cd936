pub mod use_budgets;
pub mod use_categories;
pub mod use_debts;
pub mod use_transactions;

pub use use_budgets::use_budgets;
pub use use_categories::use_categories;
pub use use_debts::use_debts;
pub use use_transactions::use_transactions;

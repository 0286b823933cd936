//! Domain types and pure finance logic shared by the client SDK and the
//! frontend. Everything in this crate is host-testable: no network, no wasm.

pub mod aggregation;
pub mod budget;
pub mod categories;
pub mod currency;
pub mod debts;
pub mod models;
pub mod validation;

pub use models::{
    Budget, Category, Debt, DebtKind, DebtStatus, FinancialGoal, MonthKey, NewBudget, NewCategory,
    NewDebt, NewTransaction, Profile, Transaction, TransactionKind, UpdateBudget, UpdateCategory,
    UpdateProfile, UpdateTransaction,
};

pub mod budget;
pub mod dashboard;
pub mod debts;
pub mod login;
pub mod register;
pub mod reports;
pub mod settings;
pub mod transactions;

pub mod budget_modal;
pub mod category_modal;
pub mod charts;
pub mod confirm_dialog;
pub mod debt_modal;
pub mod navbar;
pub mod stat_card;
pub mod transaction_modal;

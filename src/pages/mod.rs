pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod families;
pub mod goals;
pub mod login;
pub mod movements;
pub mod recurring;
pub mod settings;
pub mod users;

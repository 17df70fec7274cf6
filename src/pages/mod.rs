pub mod login;
pub mod tasks;

pub mod config;
pub mod date;
pub mod error;
pub mod month_view;

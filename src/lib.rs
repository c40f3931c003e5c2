pub mod api;
pub mod categories;
pub mod config;
pub mod database;
pub mod error;
pub mod items;
pub mod pagination;

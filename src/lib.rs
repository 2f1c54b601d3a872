pub mod api;
pub mod bidding;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod listing;
pub mod query;
pub mod render;
pub mod session;
pub mod state;

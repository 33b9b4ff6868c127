//! Discrete-time simulation of a single retail store.
//!
//! The store keeps its stock in a fixed set of perishable boxes, serves a
//! reputation-driven stream of customers each day and restocks whole boxes
//! at a time. A driver constructs a [`SimpleShopModel`], seeds its random
//! stream and calls [`Model::run`]; the financial outcome is read back
//! through accessors. Searching over parameters is the driver's job, not
//! the model's.

pub mod boxes;
pub mod config;
pub mod demand;
pub mod model;
pub mod reporting;
pub mod shop;
pub mod stats;

pub use boxes::StockBox;
pub use config::ShopConfig;
pub use model::{Model, ModelError};
pub use shop::SimpleShopModel;
pub use stats::{run_revenue_trials, RevenueStats};

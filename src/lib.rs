pub mod accounts;
pub mod billing;
pub mod cli;
pub mod dates;
pub mod db;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod models;
pub mod seed;
pub mod settings;
pub mod store;
pub mod view;

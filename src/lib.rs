// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod controller;
pub mod datetime;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod services;
pub mod session;

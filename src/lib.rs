pub mod api;
pub mod config;
pub mod engine;
pub mod records;
pub mod runner;

mod ip;

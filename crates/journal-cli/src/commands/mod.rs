pub mod accounts;
pub mod config;
pub mod misc;
pub mod report;
pub mod transactions;

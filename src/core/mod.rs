pub mod batch;
pub mod calculator;
pub mod config;
pub mod logic;

pub mod day_report;
pub mod event;
pub mod interval;
pub mod query;
pub mod shift;

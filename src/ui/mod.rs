pub mod messages;
pub mod report;
pub mod strip;

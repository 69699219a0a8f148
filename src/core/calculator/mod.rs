pub mod consolidate;
pub mod counter;
pub mod gaps;
pub mod indicators;
pub mod interval;
pub mod shift;
pub mod timeline;

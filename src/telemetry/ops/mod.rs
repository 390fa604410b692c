pub mod download;
pub mod process;
pub mod segment;
pub mod stats;

pub mod config;
pub mod easings;
pub mod scroll;

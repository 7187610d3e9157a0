pub mod cli;
pub mod error;
pub mod matcher;
pub mod search;

pub use matcher::{is_match, is_match_bytes};

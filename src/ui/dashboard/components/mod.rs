//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod current;
pub mod footer;
pub mod forecast;
pub mod header;
pub mod logs;
pub mod search;
pub mod status;

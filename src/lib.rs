//! Vinv Library
//!
//! Vehicle inventory browser: fetch, look up and filter vehicle records
//! from a backend API.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod source;
pub mod types;

//! # moviebot Core Infrastructure
//!
//! File: bot/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config::{self, Purpose};
//! use crate::core::error::{BotError, Result};
//! ```
//!
pub mod config;
pub mod error;

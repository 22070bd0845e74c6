//! Lobby reference data store.
//!
//! This crate owns the SQLite schema for the sports lobby reference data
//! (sports, leagues, chat rooms and bet-type multiplier configurations),
//! the repositories that read it, and the fixture seeding that populates it.
//!
//! # Modules
//!
//! - [`db`] - Store handle, schema creation and teardown
//! - [`models`] - Serializable row types returned by the repositories
//! - [`bet_type`] - The closed set of wager categories
//! - [`repo`] - One repository per table
//! - [`seed`] - Idempotent fixture loading
//! - [`config`] - TOML configuration shared by the binaries

pub mod bet_type;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod seed;

pub use bet_type::BetType;
pub use db::DbPool;
pub use error::{Error, Result};

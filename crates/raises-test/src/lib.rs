//! Shared test fixtures for raises crates.
//!
//! This crate provides reference answers and input generators for testing.
//! It does NOT depend on `raises-solver`, so the solver can be checked
//! against it.
//!
//! - [`oracle`] - brute-force optimum over every set partition
//! - [`rolls`] - named rolls and proptest strategies for dice sets
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! raises-test = { workspace = true }
//! ```

pub mod oracle;
pub mod rolls;

pub use oracle::{brute_force_optimum, brute_force_partition};
pub use rolls::{dice, dice_set, gap_roll, mode, roll, small_dice_set, ORACLE_MAX_DICE};

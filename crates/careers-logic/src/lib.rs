//! Profession catalogs and eligibility rules for station careers.
//!
//! This crate contains all career logic that is independent of any database,
//! engine, or runtime. Rules read player aggregates through the
//! [`records::PlayerRecords`] trait and return plain verdicts, making them
//! unit-testable and portable across SpacetimeDB (WASM), native CLI tools,
//! and any future front-end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Station and syndicate profession lists, costs, currencies |
//! | [`constants`] | Track, currency, boss-kind codes; weapon and item ids |
//! | [`engine`] | Rule registry and name-keyed evaluation |
//! | [`memory`] | In-memory player store for tests and the harness |
//! | [`records`] | Player record types and the store contract |
//! | [`reference`] | Weapon and item classification tables |
//! | [`rules`] | One eligibility rule per profession |
//! | [`verdict`] | Pass/fail results with display reasons |

pub mod catalog;
pub mod constants;
pub mod engine;
pub mod memory;
pub mod records;
pub mod reference;
pub mod rules;
pub mod verdict;

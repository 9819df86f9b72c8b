//! Station Careers Server - SpacetimeDB Module
//!
//! Player career records and profession eligibility running as a
//! SpacetimeDB module. Rules live in careers-logic; reducers here adapt
//! the tables to the rule engine and persist verdicts for clients.

mod reducers;
mod store;
mod tables;

pub use reducers::*;
pub use tables::*;

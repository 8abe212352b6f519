//! # svcmap Common
//!
//! Types shared by every stage of a report run:
//!
//! * **[`models`]**: what a scan says about a port ([`models::Observation`]) and
//!   what a report row looks like ([`models::TableRow`]).
//! * **[`config`]**: the immutable run configuration.
//! * **[`error`]**: fatal configuration errors.
//! * **[`utils`]**: path helpers.

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

//! # svcmap Core
//!
//! The report pipeline, in the order a run executes it:
//!
//! 1. **[`discovery`]**: finds scan documents under a root directory.
//! 2. **[`source`]**: turns each document into [`Observation`]s, collecting
//!    per-file failures instead of aborting.
//! 3. **[`aggregate`]**: groups matching observations by version key into
//!    sorted [`TableRow`]s.
//! 4. **[`report`]**: renders the rows into the report file.
//!
//! [`Observation`]: svcmap_common::models::Observation
//! [`TableRow`]: svcmap_common::models::TableRow

pub mod aggregate;
pub mod discovery;
pub mod report;
pub mod source;

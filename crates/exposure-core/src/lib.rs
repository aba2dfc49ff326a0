//! exposure-core - Economic exposure metrics from labor-market data
//!
//! This crate computes two derived metrics over in-memory tables:
//!
//! - **AIOE**: AI Occupational Exposure, one score per occupation, from the
//!   overlap between an occupation's required abilities and the capabilities
//!   exercised by existing AI applications
//! - **AIFE**: AI Firm Exposure, one score per firm, from the firm's
//!   occupational mix weighted by occupation-level AIOE scores
//!
//! # Design
//!
//! Everything here is synchronous, single-pass batch computation over typed
//! value objects. File parsing and schema binding live in `exposure-io`;
//! the core never touches the filesystem and never logs.

pub mod aife;
pub mod aioe;
pub mod align;
pub mod error;
pub mod pivot;
pub mod table;

pub use aife::*;
pub use aioe::*;
pub use align::*;
pub use error::*;
pub use pivot::*;
pub use table::*;

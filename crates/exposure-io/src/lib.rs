//! exposure-io - Tabular I/O for exposure reference data
//!
//! This crate binds loosely-typed tabular files to the typed tables in
//! `exposure-core`:
//!
//! - **firm**: firm-by-occupation job posting data (long format)
//! - **onet**: scale-coded occupation-ability ratings (IM/LV)
//! - **matrix**: the ability-by-AI-application relevance matrix
//! - **writer**: CSV serialization of score tables
//!
//! # Design
//!
//! Formats are detected from the file extension. CSV is always available;
//! XLSX sits behind the `xlsx` cargo feature. All schema validation happens
//! here, at the boundary, so the core never sees a column name.

pub mod error;
pub mod firm;
pub mod format;
pub mod matrix;
pub mod onet;
pub mod writer;

pub use error::*;
pub use firm::*;
pub use format::*;
pub use matrix::*;
pub use onet::*;
pub use writer::*;

//! # Field Definitions
//!
//! The schema registry driving per-field dispatch.
//!
//! Every serialized field on the wire is identified by a `(type_code,
//! field_code)` pair assigned by the network's schema. This module owns the
//! immutable table mapping field names to those codes and back, along with
//! the per-field serialization flags.
//!
//! ## Components
//! - **FieldDefinition**: One schema row — name, type, codes, flags
//! - **FieldRegistry**: Name and code indexes over the loaded rows
//!
//! ## Sources
//! - `FieldRegistry::new()` — embedded table of the common
//!   transaction/ledger fields
//! - `FieldRegistry::from_json()` — a caller-supplied schema document
//!   (test networks, amended schemas)
//!
//! The registry never mutates after load, so it is safe to share across
//! unbounded concurrent encode/decode calls by reference.

pub mod registry;
mod tables;

pub use registry::{FieldDefinition, FieldRegistry};

/// Type code for nested objects (STObject).
pub const TYPE_CODE_OBJECT: u8 = 14;

/// Type code for nested arrays (STArray).
pub const TYPE_CODE_ARRAY: u8 = 15;

/// Field code of both end-marker fields within their container types.
pub const FIELD_CODE_END_MARKER: u8 = 1;

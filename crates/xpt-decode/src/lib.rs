//! SAS Transport (XPT) file format decoder.
//!
//! This crate decodes the SAS Transport V5/V6 binary layout: eight fixed
//! 80-byte ASCII header records, one fixed-width NAMESTR record per
//! variable, and the first observation record, with numerics decoded from
//! 64-bit IBM hexadecimal floating point.
//!
//! Exactly one observation record is decoded per file; the reader is an
//! inspection tool for the transport layout, not a full dataset loader.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use xpt_decode::{Value, read_xpt};
//!
//! let document = read_xpt(Path::new("dm.xpt")).unwrap();
//! for decoded in &document.values {
//!     match &decoded.value {
//!         Value::Text(text) => println!("{}: '{text}'", decoded.variable.trimmed_name()),
//!         Value::Number(number) => println!("{}: {number}", decoded.variable.trimmed_name()),
//!         Value::Missing => println!("{}: <missing>", decoded.variable.trimmed_name()),
//!     }
//! }
//! ```
//!
//! # Errors
//!
//! Every structural problem is terminal for the current parse: truncated
//! input surfaces as an I/O error with section and offset, absent header
//! markers and unparsable count fields as format errors, and fixed-offset
//! fields past a record's end as bounds errors. See [`XptError`].

mod cursor;
pub mod dates;
mod error;
pub mod float;
pub mod header;
mod reader;
mod value;

// Re-export error types
pub use error::{Result, XptError};

// Re-export core types
pub use header::{
    FormatSpec, HeaderKind, HeaderRecord, Justification, VariableDescriptor, VariableType,
};

// Re-export cursor and reader functionality
pub use cursor::ByteCursor;
pub use reader::{TransportDocument, XptReader, read_xpt};

// Re-export value decoding
pub use value::{DecodedValue, Value, decode_value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

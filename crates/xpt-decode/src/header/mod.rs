//! XPT header record parsing.
//!
//! This module handles the fixed 80-byte records at the front of an XPT
//! file and the NAMESTR records that describe each variable:
//! - Header records (library, member, NAMESTR, observation markers)
//! - NAMESTR records (variable definitions)

pub mod namestr;
pub mod record;

// Re-export commonly used items
pub use namestr::{
    FormatSpec, Justification, NAMESTR_FIXED_LEN, VariableDescriptor, VariableType, parse_namestr,
};
pub use record::{
    HEADER_BLOCK_COUNT, HeaderKind, HeaderRecord, LIBRARY_HEADER_PREFIX, MEMBER_HEADER_PREFIX,
    NAMESTR_HEADER_PREFIX, OBS_HEADER_PREFIX, RECORD_LEN, align_to_record, parse_namestr_len,
    parse_variable_count,
};

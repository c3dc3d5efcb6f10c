//! Observation value decoding.

use crate::float::{ibm_to_f64, is_missing};
use crate::header::{VariableDescriptor, VariableType};

/// A decoded observation value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Character data, exactly `length` bytes, untrimmed.
    Text(String),
    /// Decoded IBM float.
    Number(f64),
    /// Missing numeric marker.
    Missing,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Missing => write!(f, "<missing>"),
        }
    }
}

/// One variable's decoded value plus its provenance.
#[derive(Debug, Clone)]
pub struct DecodedValue {
    /// The variable this value belongs to.
    pub variable: VariableDescriptor,
    /// The raw bytes consumed from the observation record.
    pub raw: Vec<u8>,
    /// The decoded value.
    pub value: Value,
}

/// Decode one variable's slice of the observation record.
///
/// Character data passes through as text. Numeric data is the missing
/// marker when the first byte is `0x2E`, otherwise an IBM float; raw
/// values shorter than 8 bytes are zero-extended before decoding.
#[must_use]
pub fn decode_value(variable: &VariableDescriptor, raw: &[u8]) -> DecodedValue {
    let value = match variable.var_type {
        VariableType::Character => Value::Text(String::from_utf8_lossy(raw).into_owned()),
        VariableType::Numeric => {
            if is_missing(raw) {
                Value::Missing
            } else {
                let mut buf = [0u8; 8];
                let len = raw.len().min(8);
                buf[..len].copy_from_slice(&raw[..len]);
                Value::Number(ibm_to_f64(buf))
            }
        }
    };

    DecodedValue {
        variable: variable.clone(),
        raw: raw.to_vec(),
        value,
    }
}

//! Fixed 80-byte header record handling.
//!
//! The first eight records of an XPT file are 80-byte ASCII blocks. Two of
//! them carry the values the rest of the parse depends on:
//! - the member header holds the NAMESTR record size at text offset 74-77
//! - the NAMESTR header holds the variable count at text offset 54-57
//!
//! The remaining blocks are tagged by their marker prefix and retained
//! unexamined for audit output.

use crate::error::{Result, XptError};

/// Record length in bytes.
pub const RECORD_LEN: usize = 80;

/// Number of leading header blocks before the NAMESTR records.
pub const HEADER_BLOCK_COUNT: usize = 8;

/// Library header prefix.
pub const LIBRARY_HEADER_PREFIX: &str = "HEADER RECORD*******LIBRARY HEADER RECORD";

/// Member header prefix.
pub const MEMBER_HEADER_PREFIX: &str = "HEADER RECORD*******MEMBER  HEADER RECORD";

/// NAMESTR header prefix.
pub const NAMESTR_HEADER_PREFIX: &str = "HEADER RECORD*******NAMESTR HEADER RECORD";

/// Observation header prefix.
pub const OBS_HEADER_PREFIX: &str = "HEADER RECORD*******OBS     HEADER RECORD";

/// Recognized header record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Library,
    Member,
    Namestr,
    Observation,
    Unrecognized,
}

impl HeaderKind {
    /// Tag a record by its marker prefix.
    #[must_use]
    pub fn classify(record: &[u8]) -> Self {
        if record.starts_with(LIBRARY_HEADER_PREFIX.as_bytes()) {
            Self::Library
        } else if record.starts_with(MEMBER_HEADER_PREFIX.as_bytes()) {
            Self::Member
        } else if record.starts_with(NAMESTR_HEADER_PREFIX.as_bytes()) {
            Self::Namestr
        } else if record.starts_with(OBS_HEADER_PREFIX.as_bytes()) {
            Self::Observation
        } else {
            Self::Unrecognized
        }
    }
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library => write!(f, "LIBRARY"),
            Self::Member => write!(f, "MEMBER"),
            Self::Namestr => write!(f, "NAMESTR"),
            Self::Observation => write!(f, "OBS"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// An immutable 80-byte header record plus its recognized tag.
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    raw: [u8; RECORD_LEN],
    kind: HeaderKind,
}

impl HeaderRecord {
    /// Tag an 80-byte block. Fails if the slice is not exactly one record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; RECORD_LEN] =
            bytes
                .try_into()
                .map_err(|_| XptError::FieldOutOfBounds {
                    section: "header record",
                    start: 0,
                    end: RECORD_LEN,
                    record_len: bytes.len(),
                })?;
        Ok(Self {
            kind: HeaderKind::classify(&raw),
            raw,
        })
    }

    /// The raw 80 bytes.
    #[must_use]
    pub fn raw(&self) -> &[u8; RECORD_LEN] {
        &self.raw
    }

    /// The recognized tag.
    #[must_use]
    pub fn kind(&self) -> HeaderKind {
        self.kind
    }
}

/// Parse NAMESTR record size from a member header record.
///
/// The size is 4 ASCII digits at offset 74-77. Returns 140 (standard) or
/// 136 (VAX/VMS) for well-formed files.
pub fn parse_namestr_len(record: &[u8]) -> Result<usize> {
    let text = ascii_field(record, 74, 78, "member header")?;
    text.trim().parse::<usize>().map_err(|_| XptError::NumericParse {
        field: "NAMESTR record size",
        text: text.to_string(),
    })
}

/// Parse variable count from a NAMESTR header record.
///
/// The count is 4 ASCII digits at offset 54-57.
pub fn parse_variable_count(record: &[u8]) -> Result<usize> {
    let text = ascii_field(record, 54, 58, "namestr header")?;
    text.trim().parse::<usize>().map_err(|_| XptError::NumericParse {
        field: "variable count",
        text: text.to_string(),
    })
}

/// Align a size up to the next record boundary (80 bytes).
///
/// Exact multiples map to themselves; zero stays zero.
#[must_use]
pub fn align_to_record(size: usize) -> usize {
    if size.is_multiple_of(RECORD_LEN) {
        size
    } else {
        size + (RECORD_LEN - (size % RECORD_LEN))
    }
}

/// Borrow a fixed-offset text field, rejecting slices past the record end.
fn ascii_field<'a>(
    record: &'a [u8],
    start: usize,
    end: usize,
    section: &'static str,
) -> Result<std::borrow::Cow<'a, str>> {
    let slice = record.get(start..end).ok_or(XptError::FieldOutOfBounds {
        section,
        start,
        end,
        record_len: record.len(),
    })?;
    Ok(String::from_utf8_lossy(slice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_block(prefix: &str) -> [u8; RECORD_LEN] {
        let mut record = [b' '; RECORD_LEN];
        let bytes = prefix.as_bytes();
        record[..bytes.len()].copy_from_slice(bytes);
        record
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            HeaderKind::classify(&header_block(LIBRARY_HEADER_PREFIX)),
            HeaderKind::Library
        );
        assert_eq!(
            HeaderKind::classify(&header_block(MEMBER_HEADER_PREFIX)),
            HeaderKind::Member
        );
        assert_eq!(
            HeaderKind::classify(&header_block(NAMESTR_HEADER_PREFIX)),
            HeaderKind::Namestr
        );
        assert_eq!(
            HeaderKind::classify(&header_block(OBS_HEADER_PREFIX)),
            HeaderKind::Observation
        );
        assert_eq!(
            HeaderKind::classify(&[b'X'; RECORD_LEN]),
            HeaderKind::Unrecognized
        );
    }

    #[test]
    fn test_classify_tolerates_writer_fill() {
        // Writers pad the marker with '!' characters; the prefix still matches.
        let mut record = header_block(MEMBER_HEADER_PREFIX);
        for byte in record.iter_mut().skip(MEMBER_HEADER_PREFIX.len()).take(7) {
            *byte = b'!';
        }
        assert_eq!(HeaderKind::classify(&record), HeaderKind::Member);
    }

    #[test]
    fn test_parse_namestr_len() {
        let mut record = header_block(MEMBER_HEADER_PREFIX);
        record[74..78].copy_from_slice(b"0140");
        assert_eq!(parse_namestr_len(&record).unwrap(), 140);

        record[74..78].copy_from_slice(b"0136");
        assert_eq!(parse_namestr_len(&record).unwrap(), 136);
    }

    #[test]
    fn test_parse_namestr_len_rejects_garbage() {
        let mut record = header_block(MEMBER_HEADER_PREFIX);
        record[74..78].copy_from_slice(b"abcd");
        assert!(matches!(
            parse_namestr_len(&record),
            Err(XptError::NumericParse { .. })
        ));
    }

    #[test]
    fn test_parse_variable_count() {
        let mut record = header_block(NAMESTR_HEADER_PREFIX);
        record[54..58].copy_from_slice(b"0025");
        assert_eq!(parse_variable_count(&record).unwrap(), 25);
    }

    #[test]
    fn test_field_bounds_rejected() {
        let short = [b' '; 60];
        assert!(matches!(
            parse_namestr_len(&short),
            Err(XptError::FieldOutOfBounds { .. })
        ));
        assert!(matches!(
            parse_variable_count(&short[..40]),
            Err(XptError::FieldOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_align_to_record() {
        assert_eq!(align_to_record(0), 0);
        assert_eq!(align_to_record(80), 80);
        assert_eq!(align_to_record(81), 160);
        assert_eq!(align_to_record(140), 160);
        assert_eq!(align_to_record(280), 320);
    }

    #[test]
    fn test_header_record_from_bytes() {
        let record = HeaderRecord::from_bytes(&header_block(OBS_HEADER_PREFIX)).unwrap();
        assert_eq!(record.kind(), HeaderKind::Observation);
        assert_eq!(record.raw().len(), RECORD_LEN);

        assert!(HeaderRecord::from_bytes(&[0u8; 40]).is_err());
    }
}

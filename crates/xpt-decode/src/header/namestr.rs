//! NAMESTR record parsing.
//!
//! The NAMESTR record describes a single variable in an XPT dataset.
//! Each NAMESTR is 140 bytes (or 136 bytes for VAX/VMS); only the first
//! 88 bytes carry fields this decoder reads.
//!
//! # NAMESTR Structure
//!
//! | Offset | Field   | Type     | Description                    |
//! |--------|---------|----------|--------------------------------|
//! | 0-1    | ntype   | short    | 1=NUMERIC, 2=CHAR              |
//! | 2-3    | nhfun   | short    | Name hash (always 0)           |
//! | 4-5    | nlng    | short    | Variable length in observation |
//! | 6-7    | nvar0   | short    | Variable number                |
//! | 8-15   | nname   | char[8]  | Variable name                  |
//! | 16-55  | nlabel  | char[40] | Variable label                 |
//! | 56-63  | nform   | char[8]  | Format name                    |
//! | 64-65  | nfl     | short    | Format field width             |
//! | 66-67  | nfd     | short    | Format decimals                |
//! | 68-69  | nfj     | short    | Justification (0=left, 1=right)|
//! | 70-71  | nfill   | char[2]  | Padding                        |
//! | 72-79  | niform  | char[8]  | Informat name                  |
//! | 80-81  | nifl    | short    | Informat width                 |
//! | 82-83  | nifd    | short    | Informat decimals              |
//! | 84-87  | npos    | long     | Position in observation        |
//!
//! Text fields come back with their space padding intact; trimming is a
//! display concern and lives behind the `trimmed_*` accessors.

use crate::error::{Result, XptError};

/// Byte count of the fixed field layout this decoder reads.
pub const NAMESTR_FIXED_LEN: usize = 88;

/// Variable type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Numeric,
    Character,
}

impl VariableType {
    /// Decode the 2-byte type field. Any tag outside {1, 2} is a format error.
    pub fn from_tag(tag: u16, index: usize) -> Result<Self> {
        match tag {
            1 => Ok(Self::Numeric),
            2 => Ok(Self::Character),
            _ => Err(XptError::InvalidVariableType { index, tag }),
        }
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "Numeric"),
            Self::Character => write!(f, "Character"),
        }
    }
}

/// Output field justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left,
    Right,
}

impl Justification {
    /// Decode the nfj field. Anything other than 1 reads as left.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            1 => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Format or informat specification.
///
/// Informats never carry a justification field; the slot is `None` by
/// construction there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    /// Format name, padding retained.
    pub name: String,
    /// Display width.
    pub width: u16,
    /// Decimal places.
    pub decimals: u16,
    /// Justification; absent for informats.
    pub justification: Option<Justification>,
}

impl FormatSpec {
    /// Render in SAS notation: `NAME w.` or `NAME w.d`.
    ///
    /// An all-blank name with zero width renders as the empty string. A
    /// zero decimal count leaves the trailing period bare.
    #[must_use]
    pub fn render(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() && self.width == 0 {
            return String::new();
        }
        if self.decimals > 0 {
            format!("{name}{}.{}", self.width, self.decimals)
        } else {
            format!("{name}{}.", self.width)
        }
    }

    /// Whether this is a DATE-family display format.
    #[must_use]
    pub fn is_date(&self) -> bool {
        self.name.trim().starts_with("DATE")
    }
}

impl std::fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// One variable's parsed NAMESTR record.
///
/// Immutable once parsed; `raw` keeps the full record for audit output.
#[derive(Debug, Clone)]
pub struct VariableDescriptor {
    /// 1-based variable number.
    pub varnum: u16,
    /// Variable name, 8 bytes with padding retained.
    pub name: String,
    /// Variable label, 40 bytes with padding retained.
    pub label: String,
    /// Numeric or character.
    pub var_type: VariableType,
    /// Byte length of this variable within an observation record.
    pub length: u16,
    /// Display format.
    pub format: FormatSpec,
    /// Input format.
    pub informat: FormatSpec,
    /// Byte position within an observation record.
    pub position: u32,
    /// The raw NAMESTR record bytes.
    pub raw: Vec<u8>,
}

impl VariableDescriptor {
    /// Name with trailing padding removed.
    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name.trim_end()
    }

    /// Label with trailing padding removed.
    #[must_use]
    pub fn trimmed_label(&self) -> &str {
        self.label.trim_end()
    }
}

/// Parse a single NAMESTR record.
///
/// # Arguments
/// * `data` - The full record as read from the file (`namestr_record_size` bytes)
/// * `index` - Variable index (for error messages)
pub fn parse_namestr(data: &[u8], index: usize) -> Result<VariableDescriptor> {
    if data.len() < NAMESTR_FIXED_LEN {
        return Err(XptError::invalid_namestr(
            index,
            format!(
                "record too short: {} bytes, fixed layout needs {NAMESTR_FIXED_LEN}",
                data.len()
            ),
        ));
    }

    // ntype: variable type (1=NUM, 2=CHAR)
    let var_type = VariableType::from_tag(read_u16(data, 0), index)?;

    // nlng: variable length
    let length = read_u16(data, 4);
    if length == 0 {
        return Err(XptError::invalid_namestr(index, "variable length is zero"));
    }

    // nvar0: variable number
    let varnum = read_u16(data, 6);

    // nname, nlabel
    let name = raw_string(data, 8, 8);
    let label = raw_string(data, 16, 40);

    // nform, nfl, nfd, nfj
    let format = FormatSpec {
        name: raw_string(data, 56, 8),
        width: read_u16(data, 64),
        decimals: read_u16(data, 66),
        justification: Some(Justification::from_raw(read_u16(data, 68))),
    };

    // niform, nifl, nifd - informats carry no justification field
    let informat = FormatSpec {
        name: raw_string(data, 72, 8),
        width: read_u16(data, 80),
        decimals: read_u16(data, 82),
        justification: None,
    };

    // npos: position in observation
    let position = read_u32(data, 84);

    Ok(VariableDescriptor {
        varnum,
        name,
        label,
        var_type,
        length,
        format,
        informat,
        position,
        raw: data.to_vec(),
    })
}

/// Read a big-endian u16 from data.
fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Read a big-endian u32 from data.
fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Decode a text field as-is, padding retained.
fn raw_string(data: &[u8], offset: usize, len: usize) -> String {
    String::from_utf8_lossy(&data[offset..offset + len]).into_owned()
}

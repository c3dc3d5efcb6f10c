//! XPT file reader.
//!
//! The parse is one strict forward pass: eight 80-byte header blocks, the
//! NAMESTR records, padding up to the next record boundary, the observation
//! header, then one value per variable from the first observation record.
//! Exactly one observation is decoded; the reader stops there.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::cursor::ByteCursor;
use crate::error::{Result, XptError};
use crate::header::{
    HEADER_BLOCK_COUNT, HeaderKind, HeaderRecord, RECORD_LEN, VariableDescriptor, align_to_record,
    parse_namestr, parse_namestr_len, parse_variable_count,
};
use crate::value::{DecodedValue, decode_value};

/// Everything consumed from one decode pass.
///
/// Raw records are retained alongside the structured output for audit and
/// display; nothing here is mutated after the parse returns.
#[derive(Debug, Clone)]
pub struct TransportDocument {
    /// The eight leading header records, tagged by marker prefix.
    pub headers: Vec<HeaderRecord>,
    /// One descriptor per variable, in file order.
    pub variables: Vec<VariableDescriptor>,
    /// The observation header record.
    pub observation_header: HeaderRecord,
    /// One decoded value per variable from the first observation record.
    pub values: Vec<DecodedValue>,
}

/// XPT file reader.
///
/// Decodes the SAS Transport V5/V6 layout up to and including the first
/// observation record.
pub struct XptReader<R: Read> {
    cursor: ByteCursor<R>,
}

impl<R: Read> XptReader<R> {
    /// Create a new XPT reader.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: ByteCursor::new(reader),
        }
    }

    /// Parse the transport layout and decode the first observation.
    pub fn read_document(mut self) -> Result<TransportDocument> {
        let (headers, namestr_len, var_count) = self.read_headers()?;
        let variables = self.read_namestr_records(namestr_len, var_count)?;
        self.skip_namestr_padding(namestr_len, var_count)?;
        let observation_header = self.read_observation_header()?;
        let values = self.read_observation(&variables)?;

        Ok(TransportDocument {
            headers,
            variables,
            observation_header,
            values,
        })
    }

    /// Read the eight leading header blocks and pull out the two values the
    /// rest of the parse depends on.
    fn read_headers(&mut self) -> Result<(Vec<HeaderRecord>, usize, usize)> {
        let mut headers = Vec::with_capacity(HEADER_BLOCK_COUNT);
        let mut namestr_len = None;
        let mut var_count = None;

        for _ in 0..HEADER_BLOCK_COUNT {
            let block = self.cursor.read_exact(RECORD_LEN, "header block")?;
            let record = HeaderRecord::from_bytes(&block)?;
            match record.kind() {
                HeaderKind::Member => namestr_len = Some(parse_namestr_len(record.raw())?),
                HeaderKind::Namestr => var_count = Some(parse_variable_count(record.raw())?),
                _ => {}
            }
            headers.push(record);
        }

        let namestr_len = namestr_len.ok_or(XptError::missing_header("MEMBER HEADER"))?;
        let var_count = var_count.ok_or(XptError::missing_header("NAMESTR HEADER"))?;
        Ok((headers, namestr_len, var_count))
    }

    /// Read and parse `var_count` NAMESTR records.
    fn read_namestr_records(
        &mut self,
        namestr_len: usize,
        var_count: usize,
    ) -> Result<Vec<VariableDescriptor>> {
        let mut variables = Vec::with_capacity(var_count);
        for index in 0..var_count {
            let record = self.cursor.read_exact(namestr_len, "NAMESTR record")?;
            variables.push(parse_namestr(&record, index)?);
        }
        Ok(variables)
    }

    /// Skip the padding between the NAMESTR section and the observation
    /// header. The gap is never data.
    fn skip_namestr_padding(&mut self, namestr_len: usize, var_count: usize) -> Result<()> {
        let section_len = namestr_len
            .checked_mul(var_count)
            .ok_or(XptError::LengthOverflow)?;
        let padding = align_to_record(section_len) - section_len;
        self.cursor.skip(padding, "NAMESTR padding")
    }

    /// Read the observation header and check its marker text.
    fn read_observation_header(&mut self) -> Result<HeaderRecord> {
        let block = self.cursor.read_exact(RECORD_LEN, "observation header")?;
        let record = HeaderRecord::from_bytes(&block)?;
        if record.kind() != HeaderKind::Observation {
            return Err(XptError::missing_header("OBS HEADER"));
        }
        Ok(record)
    }

    /// Decode one value per variable from the first observation record.
    fn read_observation(&mut self, variables: &[VariableDescriptor]) -> Result<Vec<DecodedValue>> {
        let mut values = Vec::with_capacity(variables.len());
        for variable in variables {
            let raw = self
                .cursor
                .read_exact(variable.length as usize, "observation record")?;
            values.push(decode_value(variable, &raw));
        }
        Ok(values)
    }
}

impl XptReader<File> {
    /// Open an XPT file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                XptError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                XptError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read an XPT file from a path.
///
/// Convenience wrapper that opens the file and decodes through the first
/// observation record.
pub fn read_xpt(path: &Path) -> Result<TransportDocument> {
    XptReader::open(path)?.read_document()
}

//! `.dbc` file loading (feature `file`).

use std::fs::File;
use std::io::{BufReader, Read};

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::dbc::parse::DbcParser;
use crate::types::{database::Database, errors::DbcFileError};

/// Reads and parses a `.dbc` file into a [`Database`].
///
/// # Errors
/// - [`DbcFileError::InvalidExtension`] if the path does not end in `.dbc`.
/// - [`DbcFileError::OpenFile`] / [`DbcFileError::Read`] on I/O failures.
/// - [`DbcFileError::Parse`] if the text is not valid DBC.
///
/// # Example
/// ```no_run
/// use candb::dbc;
///
/// let db = dbc::from_file("example.dbc").expect("Failed to parse DBC file");
/// println!("Parsed {} messages", db.messages.len());
/// ```
pub fn from_file(path: &str) -> Result<Database, DbcFileError> {
    // check if provided file has .dbc format
    if !path.ends_with(".dbc") {
        return Err(DbcFileError::InvalidExtension {
            path: path.to_string(),
        });
    }

    let file: File = File::open(path).map_err(|source| DbcFileError::OpenFile {
        path: path.to_string(),
        source,
    })?;
    let mut reader: BufReader<File> = BufReader::new(file);

    // read raw bytes
    let mut bytes: Vec<u8> = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DbcFileError::Read {
            path: path.to_string(),
            source,
        })?;
    debug!("Read {} bytes from {}", bytes.len(), path);

    let text: String = decode_bytes(&bytes);
    let mut parser: DbcParser = DbcParser::new();
    parser.try_parse(&text).map_err(|source| DbcFileError::Parse {
        path: path.to_string(),
        source,
    })?;
    Ok(parser.into_database())
}

/// Decodes raw file content: UTF-8 when valid (BOM stripped), Windows-1252 otherwise.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes: &[u8] = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return text.into_owned();
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

#![cfg(feature = "file")]

mod common;

use std::fs;
use std::path::PathBuf;

use candb::{DbcFileError, DbcParseError, dbc};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
    let path: PathBuf = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_from_file_windows_1252() {
    common::init_logging();
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: String = write(
        &dir,
        "motor.dbc",
        b"VERSION \"1.0.2\"\r\n\r\nBU_: Motor Gateway\r\n\r\nBO_ 708 ZV_04: 8 Motor\r\n SG_ Temp : 0|8@1+ (1,-40) [-40|215] \"\xB0C\" Gateway\r\n",
    );

    let db = dbc::from_file(&path).unwrap();
    assert_eq!(db.version, "1.0.2");
    assert_eq!(db.ecus, vec!["Motor", "Gateway"]);
    let signal = &db.signals(708).unwrap()[0];
    assert_eq!(signal.unit, "°C");
    assert_eq!(signal.offset, -40.0);
}

#[test]
fn test_from_file_errors() {
    common::init_logging();
    let dir: TempDir = tempfile::tempdir().unwrap();

    let txt: String = write(&dir, "motor.txt", b"VERSION \"\"");
    assert!(matches!(dbc::from_file(&txt), Err(DbcFileError::InvalidExtension { .. })));

    let missing: String = dir.path().join("missing.dbc").to_str().unwrap().to_string();
    assert!(matches!(dbc::from_file(&missing), Err(DbcFileError::OpenFile { .. })));

    let empty: String = write(&dir, "empty.dbc", b"");
    assert!(matches!(
        dbc::from_file(&empty),
        Err(DbcFileError::Parse {
            source: DbcParseError::EmptyInput,
            ..
        })
    ));
}

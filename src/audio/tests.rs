use super::sink::open_source;
use crate::error::PlaybackError;
use tempfile::tempdir;

#[test]
fn open_source_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.mp3");

    match open_source(&missing) {
        Err(PlaybackError::Open { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Open error, got {:?}", other.err()),
    }
}

#[test]
fn open_source_reports_undecodable_file() {
    let dir = tempdir().unwrap();
    let junk = dir.path().join("junk.mp3");
    std::fs::write(&junk, b"definitely not audio").unwrap();

    match open_source(&junk) {
        Err(PlaybackError::Decode { path, .. }) => assert_eq!(path, junk),
        other => panic!("expected Decode error, got {:?}", other.err()),
    }
}

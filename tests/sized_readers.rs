//! Integration tests for sized readers built by hand and from files

use sizeio::{
    nop_closer, open_sized, size_from_handle, wrap_closable_reader, wrap_reader, HasSize,
    ReadCloseWithSize, ReadWithSize, SizedReadCloser,
};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

fn demo_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demo/test.txt")
}

fn stringify_reader<R: Read>(mut reader: R) -> String {
    let mut content = String::new();
    reader.read_to_string(&mut content).unwrap();
    content
}

/// Accepts any reader that reports its size, the way a caller would
fn describe(reader: &mut dyn ReadWithSize) -> (u64, String) {
    let size = reader.size();
    let mut content = String::new();
    reader.read_to_string(&mut content).unwrap();
    (size, content)
}

#[test]
fn test_open_demo_file() {
    let mut reader = open_sized(demo_file()).unwrap();
    assert_eq!(reader.size(), 17);
    assert_eq!(stringify_reader(&mut reader), "text file content");
    reader.close().unwrap();
    assert_eq!(reader.size(), 17);
}

#[test]
fn test_open_missing_file() {
    let result = open_sized("missing.txt");
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_size_from_open_file() {
    let file = File::open(demo_file()).unwrap();
    let mut reader = size_from_handle(file).unwrap();
    assert_eq!(reader.size(), 17);
    reader.close().unwrap();
}

#[test]
fn test_wrap_string_reader() {
    let mut reader = wrap_reader(Cursor::new("content"), 7);
    assert_eq!(describe(&mut reader), (7, "content".to_string()));
}

#[test]
fn test_cursor_is_sized_out_of_the_box() {
    let mut reader = Cursor::new(b"content".to_vec());
    assert_eq!(describe(&mut reader), (7, "content".to_string()));
}

#[test]
fn test_wrap_closable_reader() {
    let mut reader = wrap_closable_reader(nop_closer(Cursor::new("content")), 7);
    assert_eq!(reader.size(), 7);
    reader.close().unwrap();
    assert_eq!(reader.size(), 7);
}

#[test]
fn test_close_placeholder() {
    let mut reader = SizedReadCloser::empty(0);
    assert_eq!(reader.size(), 0);
    reader.close().unwrap();
}

#[test]
fn test_mismatched_size_is_accepted() {
    let reader = wrap_reader(Cursor::new("content"), 3);
    assert_eq!(reader.size(), 3);
    assert_eq!(stringify_reader(reader), "content");
}

#[test]
fn test_boxed_closable_readers() {
    let readers: Vec<Box<dyn ReadCloseWithSize>> = vec![
        Box::new(open_sized(demo_file()).unwrap()),
        Box::new(wrap_closable_reader(Cursor::new("content"), 7)),
    ];

    let sizes: Vec<u64> = readers.iter().map(|r| r.size()).collect();
    assert_eq!(sizes, vec![17, 7]);

    for mut reader in readers {
        reader.close().unwrap();
        assert!(reader.is_closed());
    }
}

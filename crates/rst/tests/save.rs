//! Saving documents to disk.

use std::fs;

use rst::{Document, DocumentExt, Error, Options, Paragraph, RstWriter, Section};
use tempfile::tempdir;

#[test]
fn test_save_writes_rendered_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.rst");

    let mut doc = Document::new("Sample document");
    doc.add_child(Paragraph::new("Saved to disk."));
    doc.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), doc.render());
}

#[test]
fn test_save_is_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unicode.rst");

    let doc = Document::new("Überblick – 概要");
    doc.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, "==============\nÜberblick – 概要\n==============\n\n");
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("old.rst");
    fs::write(&path, "x".repeat(4096)).unwrap();

    let doc = Document::new("T");
    doc.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "=\nT\n=\n\n");
}

#[test]
fn test_save_with_writer_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested.rst");

    let mut sec = Section::new("Part", 2);
    sec.add_child(Paragraph::new("inside"));
    let mut doc = Document::new("D");
    doc.add_child(sec);

    RstWriter::with_options(Options::default().with_nested_sections(true))
        .save(&doc, &path)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "=\nD\n=\n\n\nPart\n----\n\ninside\n\n"
    );
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.rst");

    let err = Document::new("T").save(&path).unwrap_err();
    match err {
        Error::Save { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

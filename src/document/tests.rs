use super::*;
use std::fs;
use tempfile::tempdir;

fn lines_of(doc: &Document) -> Vec<&str> {
    doc.store().iter().collect()
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let doc = Document::open(&path).unwrap();
    assert!(doc.is_new());
    assert!(doc.is_empty());
    assert!(!doc.is_dirty());
    assert!(!path.exists());
}

#[test]
fn test_open_reads_lines_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "first\nsecond\nthird\n").unwrap();

    let doc = Document::open(&path).unwrap();
    assert!(!doc.is_new());
    assert_eq!(lines_of(&doc), vec!["first", "second", "third"]);
    assert_eq!(doc.line_ending(), LineEnding::LF);
}

#[test]
fn test_open_keeps_last_line_without_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "one\ntwo").unwrap();

    let doc = Document::open(&path).unwrap();
    assert_eq!(lines_of(&doc), vec!["one", "two"]);
}

#[test]
fn test_open_keeps_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "\n\nx\n\n").unwrap();

    let doc = Document::open(&path).unwrap();
    assert_eq!(lines_of(&doc), vec!["", "", "x", ""]);
}

#[test]
fn test_open_empty_file_has_no_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let doc = Document::open(&path).unwrap();
    assert!(doc.is_empty());
    assert!(!doc.is_new());
}

#[test]
fn test_open_detects_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    fs::write(&path, "a\r\nb\r\n").unwrap();

    let doc = Document::open(&path).unwrap();
    assert_eq!(lines_of(&doc), vec!["a", "b"]);
    assert_eq!(doc.line_ending(), LineEnding::CRLF);
}

#[test]
fn test_invalid_utf8_is_shown_lossily_and_saved_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\nna\xefve\nplain\n").unwrap();

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.store().get_at(1), Some("caf\u{FFFD}"));
    assert_eq!(doc.store().get_at(3), Some("plain"));

    doc.insert_at("added", 4);
    doc.save().unwrap();
    assert_eq!(
        fs::read(&path).unwrap(),
        b"caf\xe9\nna\xefve\nplain\nadded\n".to_vec()
    );
}

#[test]
fn test_mixed_endings_follow_the_majority() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, "a\nb\r\nc\n").unwrap();

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(doc.line_ending(), LineEnding::LF);
    doc.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\r\nc\n");

    fs::write(&path, "a\r\nb\nc\r\n").unwrap();
    let doc = Document::open(&path).unwrap();
    assert_eq!(doc.line_ending(), LineEnding::CRLF);
    assert_eq!(lines_of(&doc), vec!["a", "b", "c"]);
}

#[test]
fn test_open_directory_is_a_load_warning() {
    let dir = tempdir().unwrap();

    let err = Document::open(dir.path()).unwrap_err();
    assert_eq!(err.severity, crate::error::ErrorSeverity::Warning);
    assert_eq!(err.code, "LOAD_FAILED");
}

#[test]
fn test_save_then_open_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round.txt");

    let mut doc = Document::open(&path).unwrap();
    doc.insert_at("alpha", 1);
    doc.insert_at("  beta  ", 2);
    doc.insert_at("", 3);
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\n  beta  \n\n");

    let reloaded = Document::open(&path).unwrap();
    assert_eq!(reloaded.store(), doc.store());
}

#[test]
fn test_save_empty_document_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    let mut doc = Document::open(&path).unwrap();
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(!doc.is_new());
}

#[test]
fn test_save_preserves_detected_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    fs::write(&path, "a\r\n").unwrap();

    let mut doc = Document::open(&path).unwrap();
    doc.insert_at("b", 2);
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\r\nb\r\n");
}

#[test]
fn test_line_ending_option_overrides_detection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    fs::write(&path, "a\r\n").unwrap();

    let mut doc = Document::open(&path).unwrap();
    doc.set_options(EditorOptions {
        line_ending: Some(LineEnding::LF),
        ..EditorOptions::default()
    });
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
}

#[test]
fn test_non_atomic_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("direct.txt");

    let mut doc = Document::empty(&path);
    doc.set_options(EditorOptions {
        atomic_save: false,
        ..EditorOptions::default()
    });
    doc.insert_at("direct", 1);
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "direct\n");
}

#[test]
fn test_atomic_save_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clean.txt");

    let mut doc = Document::empty(&path);
    doc.insert_at("x", 1);
    doc.save().unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("clean.txt")]);
}

#[test]
fn test_save_failure_is_warning_and_keeps_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("file.txt");

    let mut doc = Document::empty(&path);
    doc.insert_at("lost", 1);

    let err = doc.save().unwrap_err();
    assert_eq!(err.severity, crate::error::ErrorSeverity::Warning);
    assert_eq!(err.code, "SAVE_FAILED");
    assert!(err.message.starts_with("Error saving file: "));
    assert!(doc.is_dirty());
}

#[test]
fn test_dirty_tracking() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dirty.txt");
    let mut doc = Document::empty(&path);

    assert!(!doc.is_dirty());
    doc.insert_at("a", 1);
    assert!(doc.is_dirty());
    assert_eq!(doc.revision(), 1);

    doc.save().unwrap();
    assert!(!doc.is_dirty());

    assert!(doc.delete_at(5).is_err());
    assert!(!doc.is_dirty());

    doc.delete_at(1).unwrap();
    assert!(doc.is_dirty());
}

#[test]
fn test_delete_range_through_document() {
    let dir = tempdir().unwrap();
    let mut doc = Document::empty(dir.path().join("r.txt"));
    for (i, text) in ["a", "b", "c", "d"].iter().enumerate() {
        doc.insert_at(*text, i + 1);
    }

    assert_eq!(doc.delete_range(2, 3).unwrap(), vec!["b", "c"]);
    assert_eq!(lines_of(&doc), vec!["a", "d"]);
    assert!(doc.delete_range(2, 5).is_err());
}

#[test]
fn test_split_lines() {
    let texts = |(lines, ending): (Vec<Line>, LineEnding)| {
        let texts: Vec<String> = lines.into_iter().map(Line::into_string).collect();
        (texts, ending)
    };

    assert_eq!(texts(split_lines(b"")), (vec![], LineEnding::LF));
    assert_eq!(texts(split_lines(b"\n")), (vec![String::new()], LineEnding::LF));
    assert_eq!(
        texts(split_lines(b"a\r\nb")),
        (vec!["a".to_string(), "b".to_string()], LineEnding::CRLF)
    );
    assert_eq!(
        texts(split_lines(b"a\r\nb\nc\n")),
        (
            vec!["a\r".to_string(), "b".to_string(), "c".to_string()],
            LineEnding::LF
        )
    );
}

#[cfg(unix)]
#[test]
fn test_atomic_save_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("script.sh");
    fs::write(&path, "echo hi\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    let mut doc = Document::open(&path).unwrap();
    doc.insert_at("echo bye", 2);
    doc.save().unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
    assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\necho bye\n");
}

#[cfg(unix)]
#[test]
fn test_atomic_save_writes_through_symlink() {
    let dir = tempdir().unwrap();
    let real = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    fs::write(&real, "old\n").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut doc = Document::open(&link).unwrap();
    doc.insert_at("new", 2);
    doc.save().unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "old\nnew\n");
}

#[test]
fn test_display_name() {
    let doc = Document::empty("notes/todo.txt");
    assert_eq!(doc.display_name(), Path::new("notes/todo.txt").display().to_string());
    assert_eq!(doc.path(), Path::new("notes/todo.txt"));
}

#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{fs, path::PathBuf};

use spanfix::test_utils::*;

#[test]
fn file_read_error() {
    // Reading a non-existent file should produce a FileNotFound error.
    let non_existent = PathBuf::from("nonexistent_file.tsx");
    let result = read_file(&non_existent);
    assert!(
        result.is_err(),
        "Expected error when reading non-existent file"
    );

    let err = result.unwrap_err();
    match err.kind() {
        RewriteErrorKind::FileNotFound(_) => { /* expected */ }
        other => panic!("Expected FileNotFound error, got {:?}", other),
    }
}

#[test]
fn read_and_write_file() {
    // Use a unique file name for this test.
    let temp_path = tmp_file_path("rw_test.tsx");

    let content = "Hello, spanfix!";
    // Write file using write_file utility.
    write_file(&temp_path, content).expect("Failed to write file");

    // Read back file using read_file utility.
    let read_content = read_file(&temp_path).expect("Failed to read file");
    assert_eq!(content, read_content);

    // Clean up the temporary file.
    let _ = fs::remove_file(temp_path);
}

#[test]
fn invalid_utf8_read_error() {
    let temp_path = tmp_file_path("invalid_utf8.tsx");
    fs::write(&temp_path, [0xC3, 0x28, 0x20]).expect("Failed to write file");

    let result = read_file(&temp_path);
    assert!(result.is_err(), "Expected error on non-UTF-8 content");
    if let Err(err) = result {
        match err.kind() {
            RewriteErrorKind::InvalidUtf8(_) => (),
            other => panic!("Expected InvalidUtf8 error, got {:?}", other),
        }
    }

    let _ = fs::remove_file(temp_path);
}

#[test]
fn rewrite_file_in_place() {
    let temp_path = tmp_file_path("in_place.tsx");
    let content = "<p>intro</p>\n<span className=\"icon\">  </span>\n";
    fs::write(&temp_path, content).expect("Failed to write file");

    let replaced = rewrite_file(&temp_path).expect("Failed to rewrite file");
    assert_eq!(replaced, 1);

    let rewritten = fs::read_to_string(&temp_path).expect("Failed to read back file");
    assert_eq!(rewritten, "<p>intro</p>\n<span className=\"icon\" />\n");

    let _ = fs::remove_file(temp_path);
}

#[test]
fn rewrite_file_without_matches_keeps_content() {
    let temp_path = tmp_file_path("no_matches.tsx");
    let content = "<span className=\"note\">kept</span>\n";
    fs::write(&temp_path, content).expect("Failed to write file");

    let replaced = rewrite_file(&temp_path).expect("Failed to rewrite file");
    assert_eq!(replaced, 0);

    let unchanged = fs::read_to_string(&temp_path).expect("Failed to read back file");
    assert_eq!(unchanged, content);

    let _ = fs::remove_file(temp_path);
}

#[test]
fn run_skips_missing_and_continues() {
    // A missing path earlier in the list must not stop later paths from
    // being processed.
    let missing = tmp_file_path("does_not_exist.tsx");
    let _ = fs::remove_file(&missing);

    let present = tmp_file_path("present.tsx");
    fs::write(
        &present,
        "<span className=\"a\"></span><span className=\"b\">\t</span>",
    )
    .expect("Failed to write file");

    let summary = run(&[missing.clone(), present.clone()]).expect("Run failed");
    assert_eq!(
        summary,
        RunSummary {
            processed: 1,
            missing: 1,
            replaced: 2,
        }
    );

    let rewritten = fs::read_to_string(&present).expect("Failed to read back file");
    assert_eq!(
        rewritten,
        "<span className=\"a\" /><span className=\"b\" />"
    );

    let _ = fs::remove_file(present);
}

#[test]
fn run_over_empty_list() {
    let summary = run(&[]).expect("Run failed");
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn run_processes_files_independently() {
    let first = tmp_file_path("independent_a.tsx");
    let second = tmp_file_path("independent_b.tsx");
    fs::write(&first, "<span className=\"a\"> </span>").expect("Failed to write file");
    fs::write(&second, "plain text").expect("Failed to write file");

    let summary = run(&[first.clone(), second.clone()]).expect("Run failed");
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.missing, 0);
    assert_eq!(summary.replaced, 1);

    let a = fs::read_to_string(&first).expect("Failed to read back file");
    let b = fs::read_to_string(&second).expect("Failed to read back file");
    assert_eq!(a, "<span className=\"a\" />");
    assert_eq!(b, "plain text");

    let _ = fs::remove_file(first);
    let _ = fs::remove_file(second);
}

use std::{fs, path::PathBuf};

use tempfile::tempdir;

use classforge_cli::{Args, CliError, run};

/// Collects all .json snapshot documents from a directory
fn collect_demo_documents(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_dir() -> PathBuf {
    // Demos are at the workspace root, relative to the workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|path| path.parent())
        .map(|path| path.join("demos"))
        .unwrap_or_default()
}

fn args_for(input: &str, output: Option<String>) -> Args {
    Args {
        input: input.to_string(),
        output,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_documents() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let documents = collect_demo_documents(demos_dir());
    assert!(!documents.is_empty(), "No snapshot documents found in demos/");

    let mut failed_documents = Vec::new();

    for document_path in &documents {
        let output_filename = format!(
            "{}.java",
            document_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(
            &document_path.to_string_lossy(),
            Some(output_path.to_string_lossy().to_string()),
        );

        match run(&args) {
            Ok(()) => {
                let source = fs::read_to_string(&output_path).expect("Output file must exist");
                if !source.starts_with("public ") || !source.ends_with('}') {
                    failed_documents.push(format!(
                        "{}: unexpected output shape",
                        document_path.display()
                    ));
                }
            }
            Err(err) => {
                failed_documents.push(format!("{}: {err}", document_path.display()));
            }
        }
    }

    assert!(
        failed_documents.is_empty(),
        "Some demo documents failed to export:\n{}",
        failed_documents.join("\n")
    );
}

#[test]
fn e2e_exported_enum_matches_expected_source() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("Color.java");

    let input = demos_dir().join("color_enum.json");
    let args = args_for(
        &input.to_string_lossy(),
        Some(output_path.to_string_lossy().to_string()),
    );
    run(&args).expect("Export must succeed");

    let source = fs::read_to_string(&output_path).expect("Output file must exist");
    assert_eq!(
        source,
        "public enum Color {\n    RED,\n    GREEN,\n    BLUE\n}"
    );
}

#[test]
fn e2e_empty_selection_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("empty.json");
    fs::write(&input_path, r#"{"elements": [], "selection": []}"#)
        .expect("Failed to write document");

    let args = args_for(&input_path.to_string_lossy(), None);
    let err = run(&args).expect_err("Export must fail without a selection");

    assert!(matches!(
        err,
        CliError::Export(classforge::ClassForgeError::NoSelection)
    ));
}

#[test]
fn e2e_malformed_document_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("broken.json");
    fs::write(&input_path, "{ definitely not json").expect("Failed to write document");

    let args = args_for(&input_path.to_string_lossy(), None);
    let err = run(&args).expect_err("Export must fail on malformed input");

    assert!(matches!(err, CliError::Document { .. }));
}

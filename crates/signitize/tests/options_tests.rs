use signitize::*;
use std::path::PathBuf;

#[test]
fn test_validation_no_input_file() {
    let options = SignitizeOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(SignitizeError::Usage(msg)) => {
            assert!(msg.contains("filename"));
        }
        _ => panic!("Expected Usage error"),
    }
}

#[test]
fn test_validation_leaves() {
    let mut options = SignitizeOptions {
        input_file: PathBuf::from("book.pdf"),
        ..Default::default()
    };

    // Default: 4 leaves
    assert_eq!(options.leaves_per_signature, 4);
    assert!(options.validate().is_ok());

    options.leaves_per_signature = 2;
    assert!(options.validate().is_ok());

    options.leaves_per_signature = 1;
    match options.validate() {
        Err(SignitizeError::Usage(msg)) => assert!(msg.contains("leaves")),
        _ => panic!("Expected Usage error"),
    }

    options.leaves_per_signature = 0;
    assert!(options.validate().is_err());
}

#[test]
fn test_signature_size() {
    let mut options = SignitizeOptions::default();
    assert_eq!(options.signature_size(), 16);

    options.leaves_per_signature = 3;
    assert_eq!(options.signature_size(), 12);
}

#[test]
fn test_basename() {
    let options = SignitizeOptions {
        input_file: PathBuf::from("/tmp/books/novel.draft.pdf"),
        ..Default::default()
    };
    assert_eq!(options.basename(), "novel.draft");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = SignitizeOptions {
        input_file: PathBuf::from("input.pdf"),
        leaves_per_signature: 6,
        split_pages: vec![40, 96],
        output_mode: OutputMode::PerSignature,
        output_dir: PathBuf::from("out"),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = SignitizeOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), br#"{ "split_pages": [10] }"#).unwrap();

    let loaded = SignitizeOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.split_pages, vec![10]);
    assert_eq!(loaded.leaves_per_signature, 4);
    assert_eq!(loaded.output_mode, OutputMode::PerVolume);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"not json").unwrap();

    match SignitizeOptions::load(temp_file.path()).await {
        Err(SignitizeError::Config(msg)) => assert!(msg.contains("parse")),
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_options_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    match SignitizeOptions::load(temp_dir.path().join("missing.json")).await {
        Err(e @ SignitizeError::Config(_)) => {
            assert_eq!(e.kind(), ErrorKind::Usage);
            assert!(e.to_string().contains("read"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_options_unwritable_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("options.json");

    match SignitizeOptions::default().save(&path).await {
        Err(e @ SignitizeError::Config(_)) => {
            assert_eq!(e.kind(), ErrorKind::Usage);
            assert!(e.to_string().contains("write"));
        }
        _ => panic!("Expected Config error"),
    }
}

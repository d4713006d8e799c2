use proclip::error::ClipError;
use proclip::model::Clip;
use proclip::variables::Variables;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn mock_clip() -> Clip {
    let vars: Variables = [("msg", ""), ("str", "qwerty")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Clip::new(
        "mock_clip",
        b"print('{{ msg }}')\nsorted('{{ str = qwerty }}')\n".to_vec(),
        ".py",
        Some(vars),
    )
    .unwrap()
}

#[test]
fn test_read_from_file() {
    // The fixture was saved with CRLF line endings
    let read = Clip::read("mock_clip", fixtures()).unwrap();
    let expected = mock_clip();
    assert_eq!(read.name(), expected.name());
    assert_eq!(read.content(), expected.content());
    assert_eq!(read.suffix(), expected.suffix());
    assert_eq!(read.variables(), expected.variables());
}

#[test]
fn test_read_from_str_dir() {
    let dir = fixtures().to_string_lossy().into_owned();
    let read = Clip::read("mock_clip", dir.as_str()).unwrap();
    assert_eq!(read, mock_clip());
}

#[test]
fn test_read_from_bad_file() {
    let err = Clip::read("bad_mock_clip", fixtures()).unwrap_err();
    assert!(matches!(err, ClipError::UnsupportedFile));
    assert_eq!(err.to_string(), "The provided file is not a valid clip file.");
}

#[test]
fn test_read_from_file_no_vars() {
    let clip = Clip::read("mock_clip_no_vars", fixtures()).unwrap();
    assert!(clip.variables().is_empty());
    assert_eq!(clip.suffix(), ".txt");
}

#[test]
fn test_read_truncated_file() {
    let err = Clip::read("truncated_clip", fixtures()).unwrap_err();
    assert!(matches!(err, ClipError::Format(_)));
}

#[test]
fn test_write_matches_fixture_bytes() {
    let temp = TempDir::new().unwrap();
    let clip = Clip::new(
        "mock_clip_no_vars",
        b"Nothing to see here.\n".to_vec(),
        ".txt",
        None,
    )
    .unwrap();

    let path = clip.write(temp.path().join("mock_clip_no_vars.clip")).unwrap();

    let expected = fs::read(fixtures().join("mock_clip_no_vars.clip")).unwrap();
    assert_eq!(fs::read(path).unwrap(), expected);
}

#[test]
fn test_write_to_str_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("mock_clip_str.clip");
    let file = mock_clip().write(target.to_str().unwrap()).unwrap();
    assert!(file.exists());
}

#[test]
fn test_roundtrip_preserves_everything() {
    let temp = TempDir::new().unwrap();
    let vars: Variables = [("a", "1"), ("b_2", ""), ("Z", "zz")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let clip = Clip::new("rt", b"{{ a }} and {{b_2}}\n".to_vec(), ".md", Some(vars)).unwrap();

    clip.write(Clip::path_in(temp.path(), "rt")).unwrap();
    assert_eq!(Clip::read("rt", temp.path()).unwrap(), clip);
}

#[test]
fn test_paste_fixture_clip() {
    let temp = TempDir::new().unwrap();
    let clip = Clip::read("mock_clip", fixtures()).unwrap();

    let file = clip
        .paste(Some("msg=Hello world!"), temp.path().join("mock_clip.py"))
        .unwrap();
    assert_eq!(
        fs::read_to_string(file).unwrap(),
        "print('Hello world!')\nsorted('qwerty')\n"
    );
}

#[test]
fn test_paste_to_file_missing_vars() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("mock_clip_str.py");
    let err = mock_clip().paste(None, &target).unwrap_err();
    assert_eq!(err.to_string(), "Some variables do not have values.");
    assert!(!target.exists());
}

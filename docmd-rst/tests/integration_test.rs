use std::path::{Path, PathBuf};

use docmd_rst::{convert, looks_like_structured_markup};

type Error = Box<dyn std::error::Error>;

fn fixture_name(path: &Path) -> Result<&str, Error> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::from("Invalid fixture file name"))
}

/// Converts every `.rst` fixture and compares it with the `.md` file of the
/// same name.
#[rstest::rstest]
#[tracing_test::traced_test]
fn test_fixtures(#[files("tests/fixtures/source/*.rst")] path: PathBuf) -> Result<(), Error> {
    let file_name = fixture_name(&path)?;
    let expected_path = Path::new("tests")
        .join("fixtures")
        .join("expected")
        .join(file_name)
        .with_extension("md");

    let source = std::fs::read_to_string(&path)?;
    let expected = std::fs::read_to_string(&expected_path)?;

    pretty_assertions::assert_eq!(
        expected,
        convert(&source),
        "Markdown output mismatch for fixture: {file_name}",
    );
    Ok(())
}

/// Everything except the `plain_*` fixtures should be worth converting.
#[rstest::rstest]
fn test_fixture_classification(
    #[files("tests/fixtures/source/*.rst")] path: PathBuf,
) -> Result<(), Error> {
    let file_name = fixture_name(&path)?;
    let source = std::fs::read_to_string(&path)?;
    assert_eq!(
        looks_like_structured_markup(&source),
        !file_name.starts_with("plain_"),
        "unexpected classification for fixture: {file_name}",
    );
    Ok(())
}

#[test]
fn plain_text_round_trips() -> Result<(), Error> {
    let source = std::fs::read_to_string("tests/fixtures/source/plain_text.rst")?;
    assert_eq!(convert(&source), source);
    Ok(())
}

use datatest_stable::Utf8Path;
use numspiral::SpiralOptions;

/// Parse a fixture stem like `24`, `6.ccw` or `24.ccw.bottom-up`.
fn fixture_input(path: &Utf8Path) -> Result<(usize, SpiralOptions), String> {
    let stem = path
        .file_stem()
        .ok_or_else(|| format!("fixture without a name: {path}"))?;
    let mut parts = stem.split('.');
    let number = parts
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("fixture name must start with a number: {stem}"))?;
    let options = SpiralOptions::from_tags(parts).map_err(|e| format!("{stem}: {e}"))?;
    Ok((number, options))
}

/// Format a diff between expected and actual output
fn format_inline_diff(expected: &str, actual: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::new();
    output.push_str("\n=== Inline Diff (expected vs actual) ===\n");
    output.push_str("Legend: [-expected only-] [+actual only+] [unchanged]\n\n");

    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("\x1b[31m[-");
                output.push_str(&s.replace(' ', "·"));
                output.push_str("-]\x1b[0m");
            }
            Chunk::Insert(s) => {
                output.push_str("\x1b[32m[+");
                output.push_str(&s.replace(' ', "·"));
                output.push_str("+]\x1b[0m");
            }
        }
    }
    output
}

fn test_spiral_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let expected = std::fs::read_to_string(path)?;
    let (number, options) = fixture_input(path)?;

    let actual = numspiral::spiral_with(number, &options);
    if actual != expected {
        panic!(
            "grid mismatch for {}:\n{}",
            path,
            format_inline_diff(&expected, &actual)
        );
    }

    Ok(())
}

datatest_stable::harness! {
    { test = test_spiral_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.txt$" },
}

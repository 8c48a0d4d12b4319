use camino::{Utf8Path, Utf8PathBuf};
use numspiral::SpiralOptions;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  bless           Rewrite every fixture in tests/fixtures from the current renderer");
        eprintln!("  add <stem>...   Create fixtures such as `48` or `48.ccw.bottom-up`");
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "bless" => bless(),
        "add" => add(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn fixtures_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures")
}

/// Decode a fixture stem: the number, then layout tags.
fn parse_stem(stem: &str) -> Result<(usize, SpiralOptions), String> {
    let mut parts = stem.split('.');
    let number = parts
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("fixture name must start with a number: {stem}"))?;
    let options = SpiralOptions::from_tags(parts).map_err(|e| format!("{stem}: {e}"))?;
    Ok((number, options))
}

/// Write the fixture for `stem`, returning whether the file changed.
fn write_fixture(dir: &Utf8Path, stem: &str) -> Result<bool, String> {
    let (number, options) = parse_stem(stem)?;
    let path = dir.join(format!("{stem}.txt"));
    let grid = numspiral::spiral_with(number, &options);

    if fs::read_to_string(&path).is_ok_and(|old| old == grid) {
        return Ok(false);
    }
    fs::write(&path, grid).map_err(|e| format!("{path}: {e}"))?;
    Ok(true)
}

fn bless() -> Result<(), String> {
    let dir = fixtures_dir();
    let mut stems: Vec<String> = fs::read_dir(&dir)
        .map_err(|e| format!("{dir}: {e}"))?
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            name.strip_suffix(".txt").map(str::to_string)
        })
        .collect();
    stems.sort();

    let mut changed = 0;
    for stem in &stems {
        if write_fixture(&dir, stem)? {
            eprintln!("updated {stem}.txt");
            changed += 1;
        }
    }
    eprintln!("{} fixtures, {} updated", stems.len(), changed);
    Ok(())
}

fn add(stems: &[String]) -> Result<(), String> {
    if stems.is_empty() {
        return Err("add needs at least one fixture stem".to_string());
    }
    let dir = fixtures_dir();
    for stem in stems {
        write_fixture(&dir, stem)?;
        eprintln!("wrote {stem}.txt");
    }
    Ok(())
}

//! Recording of live response bodies as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    env::var("FMP_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name for a recorded body: `<path with / as _>_<tag>.<ext>`.
pub(crate) fn fixture_name(path: &str, tag: &str, ext: &str) -> String {
    let endpoint = path.trim_matches('/').replace('/', "_");
    let tag = if tag.is_empty() { "all" } else { tag };
    format!("{endpoint}_{}.{ext}", tag.replace(',', "-"))
}

pub(crate) fn record_fixture(
    path: &str,
    tag: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let file = dir.join(fixture_name(path, tag, ext));
    fs::write(&file, body)?;

    if env::var("FMP_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("FMP_RECORD: wrote fixture to {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::fixture_name;

    #[test]
    fn names_flatten_paths_and_symbol_lists() {
        assert_eq!(fixture_name("quote", "AAPL", "json"), "quote_AAPL.json");
        assert_eq!(
            fixture_name("historical-price-eod/full", "AAPL,MSFT", "json"),
            "historical-price-eod_full_AAPL-MSFT.json"
        );
        assert_eq!(fixture_name("rating-bulk", "", "csv"), "rating-bulk_all.csv");
    }
}

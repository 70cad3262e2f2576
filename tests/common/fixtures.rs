use std::path::{Path, PathBuf};

pub const TEXT_FIXTURES: &[&str] = &[
    "tests/fixtures/essay-ja.txt",
    "tests/fixtures/mixed-en.txt",
    "tests/fixtures/line-breaks.txt",
];

pub fn core_fixtures() -> Vec<&'static str> {
    TEXT_FIXTURES
        .iter()
        .copied()
        .filter(|path| Path::new(path).exists())
        .collect()
}

pub fn read_fixture(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path, e))
}

/// Extra `.txt` samples dropped under `tests/fixtures/corpus`.
pub fn discover_optional_corpus() -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir("tests/fixtures/corpus") else {
        return Vec::new();
    };
    let mut out: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    out.sort();
    out
}

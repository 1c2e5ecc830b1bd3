//! Buffer helpers shared by the UI tests

use ratatui::backend::TestBackend;

/// Text of every row of the terminal buffer, trailing blanks removed
pub fn rows(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Whether any row contains `needle`
pub fn contains(backend: &TestBackend, needle: &str) -> bool {
    rows(backend).iter().any(|row| row.contains(needle))
}

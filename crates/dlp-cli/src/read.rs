//! Reading spreadsheets into a [`Grid`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use dlp_model::Grid;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Read a CSV file, keeping row 0 as data and allowing ragged rows.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let grid = parse_grid(file).with_context(|| format!("parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = grid.row_count(),
        columns = grid.headers().len(),
        "Read spreadsheet"
    );
    Ok(grid)
}

/// Parse CSV from any reader. Cells are kept verbatim apart from a leading
/// byte-order mark on the very first cell.
pub fn parse_grid<R: Read>(reader: R) -> Result<Grid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record {index}"))?;
        rows.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
    }

    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut())
        && first.starts_with(BOM)
    {
        first.remove(0);
    }
    Ok(Grid::new(rows))
}

//! Export helpers for CSV series and JSON snapshots.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors raised while writing export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Buffered writer for an output path; `-` selects stdout.
///
/// Missing parent directories of a file path are created.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

pub mod series {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;

    /// Column names, in order, of a Mars time series CSV.
    pub const HEADER: [&str; 6] = ["utc", "msd", "mtc", "ls_deg", "mars_year", "season"];

    /// CSV row emitted by the series exporter.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row<'a> {
        pub utc: &'a str,
        pub msd: f64,
        pub mtc: &'a str,
        pub ls_deg: f64,
        pub mars_year: i64,
        pub season: &'a str,
    }

    /// Write the header followed by every row. Rows are flushed before returning.
    pub fn write_rows<'a, W, I>(writer: W, rows: I) -> Result<(), ExportError>
    where
        W: Write,
        I: IntoIterator<Item = Row<'a>>,
    {
        let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        csv.write_record(HEADER)?;
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod json {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;

    /// Pretty-print any serializable value followed by a newline.
    pub fn write_pretty<W: Write, T: Serialize + ?Sized>(
        mut writer: W,
        value: &T,
    ) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

use anyhow::{Context, Result};
use risk_core::MetricsRecord;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Write the summary report, replacing any existing file at `path`.
pub fn write_summary(report: &[MetricsRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("creating summary file {}", path.display()))?;
    write_summary_to(report, file)
}

/// Serialize the report as CSV. Column names come from the record's
/// serde renames; NaN fields are written as `NaN`.
pub fn write_summary_to<W: Write>(report: &[MetricsRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in report {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a previously written summary report.
pub fn read_summary(path: impl AsRef<Path>) -> Result<Vec<MetricsRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening summary file {}", path.display()))?;
    read_summary_from(file)
}

pub fn read_summary_from<R: Read>(reader: R) -> Result<Vec<MetricsRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

//! CSV export of classified batches.

use hs_common::{AnalysisRecord, Error, Result};
use std::io::Write;
use std::path::Path;

/// Column order of the export format. Stable contract.
pub const CSV_HEADERS: [&str; 6] = [
    "Headline",
    "Sentiment",
    "Compound",
    "Positive",
    "Neutral",
    "Negative",
];

/// Write records as CSV, header row first, one row per record in
/// classification order.
///
/// Floats use shortest round-trip formatting, so re-parsing recovers the
/// exact scores.
pub fn write_csv<W: Write>(records: &[AnalysisRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| Error::Export(e.to_string()))?;

    for record in records {
        let compound = record.scores.compound.to_string();
        let pos = record.scores.pos.to_string();
        let neu = record.scores.neu.to_string();
        let neg = record.scores.neg.to_string();
        csv_writer
            .write_record([
                record.headline.as_str(),
                record.label.as_str(),
                compound.as_str(),
                pos.as_str(),
                neu.as_str(),
                neg.as_str(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    csv_writer.flush().map_err(|e| Error::Export(e.to_string()))?;
    Ok(())
}

/// Export records to a CSV file.
pub fn export_csv(records: &[AnalysisRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    tracing::info!(path = %path.display(), rows = records.len(), "exported CSV");
    Ok(())
}

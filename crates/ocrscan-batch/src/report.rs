//! CSV report encoding and writing.

use std::path::Path;

use crate::TRACING_TARGET_REPORT;
use crate::error::{BatchError, Result};
use crate::record::{REPORT_COLUMNS, RecordSet};

/// Encodes the records as UTF-8 CSV.
///
/// The header row is always present, so an empty set encodes to the header
/// alone. Fields containing separators, quotes or newlines are quoted.
pub fn encode_csv(records: &RecordSet) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|err| BatchError::EncodeReport(csv::Error::from(err.into_error())))
}

/// Writes the report to `path`, replacing any existing file.
pub async fn write_csv(path: &Path, records: &RecordSet) -> Result<()> {
    let encoded = encode_csv(records)?;

    tokio::fs::write(path, &encoded)
        .await
        .map_err(|source| BatchError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        target: TRACING_TARGET_REPORT,
        path = %path.display(),
        rows = records.len(),
        bytes = encoded.len(),
        "report written"
    );

    Ok(())
}

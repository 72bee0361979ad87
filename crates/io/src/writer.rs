//! CSV writer for the cake-day schedule.

use std::path::Path;

use gateau_schedule::CakeDay;

use crate::error::IoError;

/// Writes the schedule as headerless `date,small,large,names` rows.
///
/// Names share the last field, joined by single spaces.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or a row
/// cannot be written.
pub fn write_schedule(path: &Path, schedule: &[CakeDay]) -> Result<(), IoError> {
    let csv_err = |e: csv::Error| IoError::Csv {
        reason: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(csv_err)?;

    for entry in schedule {
        writer
            .write_record(&[
                entry.date.to_string(),
                entry.small.to_string(),
                entry.large.to_string(),
                entry.names.join(" "),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })
}

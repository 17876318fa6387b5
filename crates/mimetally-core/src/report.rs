use std::path::Path;

use crate::aggregate::Tally;
use crate::error::Result;

/// Potential-match report: one row per matched MIME with the aggregate count
/// and the raw contributing entries, then a trailing total row.
pub fn write_potential_report(path: &Path, tally: &Tally) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Matched Mime Types", "Count", "Potential Mime Types"])?;
    for (mime, total) in tally.iter() {
        let count = total.to_string();
        let entries = tally.entries_for(mime).join(", ");
        writer.write_record([mime, count.as_str(), entries.as_str()])?;
    }
    let sum = tally.sum().to_string();
    writer.write_record(["Total Count", sum.as_str(), ""])?;
    writer.flush()?;
    Ok(())
}

pub fn write_valid_report(path: &Path, tally: &Tally) -> Result<()> {
    write_two_column_report(path, tally, "Valid Mime Types", "Total Valid Count")
}

pub fn write_invalid_report(path: &Path, tally: &Tally) -> Result<()> {
    write_two_column_report(path, tally, "Invalid Mime Types", "Total Invalid Count")
}

fn write_two_column_report(
    path: &Path,
    tally: &Tally,
    header: &str,
    total_label: &str,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([header, "Count"])?;
    for (key, total) in tally.iter() {
        let count = total.to_string();
        writer.write_record([key, count.as_str()])?;
    }
    let sum = tally.sum().to_string();
    writer.write_record([total_label, sum.as_str()])?;
    writer.flush()?;
    Ok(())
}

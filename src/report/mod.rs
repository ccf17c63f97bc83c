// file: src/report/mod.rs
// version: 1.0.0
// guid: a5b6c7d8-e9f0-1234-5678-901234abcdef

//! Combined JSON and CSV report generation
//!
//! Formatting only: reporting never mutates the records, and running it
//! twice over the same sequence produces byte-identical files.

use crate::collector::HostRecord;
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Fixed JSON report filename, overwritten on every run
pub const JSON_REPORT_FILENAME: &str = "global_status_report.json";

/// Fixed CSV report filename, overwritten on every run
pub const CSV_REPORT_FILENAME: &str = "global_status_report.csv";

/// Writes the combined status reports for one collection run
pub struct Reporter {
    output_dir: PathBuf,
}

impl Reporter {
    /// Reporter writing into the current working directory
    pub fn new() -> Self {
        Self::with_output_dir(".")
    }

    /// Reporter writing into a specific directory
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// Write both report files and echo the JSON document to stdout.
    ///
    /// Returns the paths of the JSON and CSV files. Failures here are fatal
    /// to the run; there is no partial-report recovery once collection has
    /// completed.
    pub fn write_reports(&self, records: &[HostRecord]) -> Result<(PathBuf, PathBuf)> {
        let json = render_json(records)?;
        let csv = render_csv(records)?;

        let json_path = self.output_dir.join(JSON_REPORT_FILENAME);
        let csv_path = self.output_dir.join(CSV_REPORT_FILENAME);

        fs::write(&json_path, &json)?;
        info!("JSON report written to {}", json_path.display());
        fs::write(&csv_path, &csv)?;
        info!("CSV report written to {}", csv_path.display());

        println!("\nJSON report saved as {}", json_path.display());
        println!("CSV report saved as {}\n", csv_path.display());

        println!("=== Global Status Report (JSON) ===");
        println!("{}", json);

        Ok((json_path, csv_path))
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize the records as a JSON array with 4-space indentation,
/// preserving the field order each record was populated in.
pub fn render_json(records: &[HostRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| crate::error::AgentError::report(format!("Report is not UTF-8: {}", e)))
}

/// Render the records as a CSV table.
///
/// The header is the union of field names across all records, in first-seen
/// order; a record missing a field renders that cell empty.
pub fn render_csv(records: &[HostRecord]) -> Result<String> {
    let rows: Vec<Value> = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<_, _>>()?;

    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        if let Some(object) = row.as_object() {
            for key in object.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;
    for row in &rows {
        let cells: Vec<&str> = columns
            .iter()
            .map(|column| row.get(column).and_then(Value::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&cells)?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| crate::error::AgentError::report(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(buf)
        .map_err(|e| crate::error::AgentError::report(format!("Report is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::HostRecord;
    use tempfile::TempDir;

    fn success_record(host: &str, uptime: &str) -> HostRecord {
        let mut record = HostRecord::new(host, "ec2-user");
        record.hostname = Some("web-1".to_string());
        record
            .metrics
            .insert("uptime".to_string(), uptime.to_string());
        record.metrics.insert("cpu".to_string(), String::new());
        record
    }

    fn failure_record(host: &str) -> HostRecord {
        let mut record = HostRecord::new(host, "ec2-user");
        record.error = Some("timed out".to_string());
        record
    }

    #[test]
    fn test_json_is_indented_array() {
        let records = vec![success_record("10.0.0.1", "up 3 days")];
        let json = render_json(&records).unwrap();

        assert!(json.starts_with("[\n    {"));
        assert!(json.contains("\"uptime\": \"up 3 days\""));

        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_csv_column_union_and_empty_cells() {
        let records = vec![
            success_record("10.0.0.1", "up 3 days"),
            failure_record("10.0.0.2"),
        ];
        let csv = render_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "host,user,collected_at,hostname,uptime,cpu,error"
        );
        // The failed host renders empty cells for every command column,
        // never a shifted row.
        assert!(lines[2].starts_with("10.0.0.2,ec2-user,"));
        assert!(lines[2].ends_with(",,,timed out"));
        // The successful host has no error cell.
        assert!(lines[1].ends_with(",up 3 days,,"));
    }

    #[test]
    fn test_reports_are_idempotent() {
        let records = vec![
            success_record("10.0.0.1", "up 3 days"),
            failure_record("10.0.0.2"),
        ];

        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let (json_a, csv_a) = Reporter::with_output_dir(dir_a.path())
            .write_reports(&records)
            .unwrap();
        let (json_b, csv_b) = Reporter::with_output_dir(dir_b.path())
            .write_reports(&records)
            .unwrap();

        assert_eq!(
            fs::read(&json_a).unwrap(),
            fs::read(&json_b).unwrap()
        );
        assert_eq!(fs::read(&csv_a).unwrap(), fs::read(&csv_b).unwrap());
    }

    #[test]
    fn test_reports_overwrite_existing_files() {
        let dir = TempDir::new().unwrap();
        let stale = dir.path().join(JSON_REPORT_FILENAME);
        fs::write(&stale, "stale contents").unwrap();

        let records = vec![failure_record("10.0.0.2")];
        Reporter::with_output_dir(dir.path())
            .write_reports(&records)
            .unwrap();

        let fresh = fs::read_to_string(&stale).unwrap();
        assert!(fresh.starts_with('['));
        assert!(!fresh.contains("stale contents"));
    }

    #[test]
    fn test_empty_run_still_produces_reports() {
        let records: Vec<HostRecord> = Vec::new();
        assert_eq!(render_json(&records).unwrap(), "[]");
        assert_eq!(render_csv(&records).unwrap(), "");
    }
}

use crate::core::{ConfigProvider, Issue, Record, Result, ScanResult};
use crate::domain::model::AMOUNT_COLUMN;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Single pass over a CSV file, collecting data-quality issues in row order.
pub struct Scanner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Scanner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Scans the configured input file.
    pub fn scan(&self) -> Result<ScanResult> {
        self.scan_path(self.config.input_path())
    }

    /// A missing file is reported as a single critical issue rather than an
    /// error. Any other I/O or decoding failure is returned to the caller.
    pub fn scan_path(&self, path: &Path) -> Result<ScanResult> {
        tracing::info!("AGENT STARTED: Scanning {}...", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!("Data file not found: {}", path.display());
                return Ok(ScanResult::missing_file());
            }
            Err(e) => return Err(e.into()),
        };

        let result = self.scan_reader(file)?;
        tracing::info!("SCAN COMPLETED: {} rows analyzed.", result.rows_analyzed);
        Ok(result)
    }

    pub fn scan_reader<R: Read>(&self, reader: R) -> Result<ScanResult> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        tracing::debug!("Header columns: {:?}", headers);

        let mut seen_rows: HashSet<Vec<String>> = HashSet::new();
        let mut result = ScanResult::default();

        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            // header is row 1
            let row_id = index + 2;
            let record = Record::from_row(headers.iter(), row.iter());

            self.check_record(row_id, &record, &mut seen_rows, &mut result.issues);
            result.rows_analyzed += 1;
        }

        Ok(result)
    }

    fn check_record(
        &self,
        row_id: usize,
        record: &Record,
        seen_rows: &mut HashSet<Vec<String>>,
        issues: &mut Vec<Issue>,
    ) {
        if !seen_rows.insert(record.values().to_vec()) {
            report(issues, Issue::DuplicateRecord { row: row_id });
        }

        for column in self.config.critical_columns() {
            if let Some(value) = record.get(column) {
                if value.trim().is_empty() {
                    report(
                        issues,
                        Issue::MissingCriticalData {
                            row: row_id,
                            column: column.clone(),
                        },
                    );
                }
            }
        }

        if let Some(raw) = record.get(AMOUNT_COLUMN) {
            match parse_amount(raw) {
                Some(value) if value < 0.0 => report(
                    issues,
                    Issue::NegativeValue {
                        row: row_id,
                        column: AMOUNT_COLUMN.to_string(),
                        value,
                    },
                ),
                Some(_) => {}
                None => report(
                    issues,
                    Issue::InvalidFormat {
                        row: row_id,
                        column: AMOUNT_COLUMN.to_string(),
                        raw: raw.to_string(),
                    },
                ),
            }
        }
    }
}

/// Parses a numeric cell the lenient way: surrounding whitespace is ignored
/// and single underscores between digits act as separators (`1_000`).
fn parse_amount(raw: &str) -> Option<f64> {
    let chars: Vec<char> = raw.trim().chars().collect();

    let mut cleaned = String::with_capacity(chars.len());
    for (index, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            let between_digits = index > 0
                && chars[index - 1].is_ascii_digit()
                && chars.get(index + 1).is_some_and(char::is_ascii_digit);
            if !between_digits {
                return None;
            }
        } else {
            cleaned.push(ch);
        }
    }

    cleaned.parse::<f64>().ok()
}

fn report(issues: &mut Vec<Issue>, issue: Issue) {
    match issue.row() {
        Some(row) => tracing::debug!(row, "{}", issue),
        None => tracing::debug!("{}", issue),
    }
    issues.push(issue);
}

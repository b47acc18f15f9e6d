use std::fmt;

/// Column checked for numeric validity on every row that carries it.
pub const AMOUNT_COLUMN: &str = "order_total";

/// One data row keyed by the header names.
///
/// `get` distinguishes a column missing from the row (`None`) from one that is
/// present but empty (`Some("")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
    values: Vec<String>,
}

impl Record {
    /// Pairs header names with row values. Short rows leave trailing columns
    /// absent; overflow values only show up in [`Record::values`].
    pub fn from_row<'a, H, V>(headers: H, row: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let values: Vec<String> = row.into_iter().map(str::to_string).collect();
        let fields = headers
            .into_iter()
            .zip(values.iter())
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        Self { fields, values }
    }

    /// Last occurrence wins when the header repeats a name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Every raw value in file order, used as the row's identity.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    DuplicateRecord { row: usize },
    MissingCriticalData { row: usize, column: String },
    InvalidFormat { row: usize, column: String, raw: String },
    NegativeValue { row: usize, column: String, value: f64 },
    MissingDataFile,
}

impl Issue {
    pub fn row(&self) -> Option<usize> {
        match self {
            Issue::DuplicateRecord { row }
            | Issue::MissingCriticalData { row, .. }
            | Issue::InvalidFormat { row, .. }
            | Issue::NegativeValue { row, .. } => Some(*row),
            Issue::MissingDataFile => None,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DuplicateRecord { row } => write!(f, "Row {}: Duplicate Record detected.", row),
            Issue::MissingCriticalData { row, column } => {
                write!(f, "Row {}: Critical Data Missing in '{}'.", row, column)
            }
            Issue::InvalidFormat { row, column, raw } => {
                write!(f, "Row {}: Invalid Format in '{}' ('{}').", row, column, raw)
            }
            Issue::NegativeValue { row, column, value } => write!(
                f,
                "Row {}: Negative Value in '{}' (${}).",
                row,
                column,
                FloatRepr(*value)
            ),
            Issue::MissingDataFile => write!(f, "CRITICAL ERROR: Data file not found."),
        }
    }
}

/// Float text in repr style: `-20.0`, `-3.25`, `-1e-05`, `-1.5e+20`, `-inf`.
///
/// Fixed notation covers decimal exponents in `-4..16`; anything outside
/// switches to a mantissa with a signed, two-digit minimum exponent.
struct FloatRepr(f64);

impl fmt::Display for FloatRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return write!(f, "{}", if value < 0.0 { "-inf" } else { "inf" });
        }

        // shortest round-trip digits, e.g. "-1.5e20"
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if !(-4..16).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        } else if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub issues: Vec<Issue>,
    pub rows_analyzed: usize,
}

impl ScanResult {
    pub fn missing_file() -> Self {
        Self {
            issues: vec![Issue::MissingDataFile],
            rows_analyzed: 0,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_absent_vs_empty() {
        let record = Record::from_row(["order_id", "email"], ["1002", ""]);
        assert_eq!(record.get("email"), Some(""));
        assert_eq!(record.get("shipping_address"), None);
    }

    #[test]
    fn test_record_short_and_long_rows() {
        let short = Record::from_row(["a", "b", "c"], ["1"]);
        assert_eq!(short.get("a"), Some("1"));
        assert_eq!(short.get("b"), None);

        let long = Record::from_row(["a"], ["1", "2", "3"]);
        assert_eq!(long.get("a"), Some("1"));
        assert_eq!(long.values(), &["1", "2", "3"]);
    }

    #[test]
    fn test_record_repeated_header_last_wins() {
        let record = Record::from_row(["email", "email"], ["first", "second"]);
        assert_eq!(record.get("email"), Some("second"));
    }

    #[test]
    fn test_issue_descriptions() {
        assert_eq!(
            Issue::DuplicateRecord { row: 5 }.to_string(),
            "Row 5: Duplicate Record detected."
        );
        assert_eq!(
            Issue::MissingCriticalData { row: 3, column: "email".into() }.to_string(),
            "Row 3: Critical Data Missing in 'email'."
        );
        assert_eq!(
            Issue::InvalidFormat { row: 2, column: AMOUNT_COLUMN.into(), raw: "abc".into() }
                .to_string(),
            "Row 2: Invalid Format in 'order_total' ('abc')."
        );
        assert_eq!(
            Issue::MissingDataFile.to_string(),
            "CRITICAL ERROR: Data file not found."
        );
    }

    #[test]
    fn test_negative_value_float_formatting() {
        let whole = Issue::NegativeValue { row: 4, column: AMOUNT_COLUMN.into(), value: -20.0 };
        assert_eq!(whole.to_string(), "Row 4: Negative Value in 'order_total' ($-20.0).");

        let fractional = Issue::NegativeValue { row: 4, column: AMOUNT_COLUMN.into(), value: -3.25 };
        assert_eq!(fractional.to_string(), "Row 4: Negative Value in 'order_total' ($-3.25).");

        let cases = [
            (-0.00001, "-1e-05"),
            (-0.0001, "-0.0001"),
            (-1e16, "-1e+16"),
            (-1e15, "-1000000000000000.0"),
            (-1.5e20, "-1.5e+20"),
            (-1.25e-7, "-1.25e-07"),
            (-1e100, "-1e+100"),
            (f64::NEG_INFINITY, "-inf"),
        ];
        for (value, expected) in cases {
            assert_eq!(FloatRepr(value).to_string(), expected, "formatting {:?}", value);
        }
    }

    #[test]
    fn test_missing_file_result() {
        let result = ScanResult::missing_file();
        assert_eq!(result.issue_count(), 1);
        assert!(!result.is_healthy());
        assert_eq!(result.issues[0].row(), None);
    }
}

//! Per-diagnostic configuration and validation.

use crate::error::ConfigError;

/// Immutable configuration for one diagnostic instance.
///
/// `kind` selects the variant through the
/// [`DiagnosticRegistry`](crate::DiagnosticRegistry); the remaining
/// keys are interpreted by the variant. Keys a variant does not
/// recognize are ignored, keys it requires are checked at construction
/// and initialize time.
///
/// # Examples
///
/// ```
/// use strobe_diag::DiagnosticConfig;
///
/// let config = DiagnosticConfig {
///     kind: "field".into(),
///     field: Some("density".into()),
///     output_type: "csv".into(),
///     filename: Some("density.csv".into()),
///     dump_interval: Some(0.5),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticConfig {
    /// Diagnostic type name (`"point"`, `"field"`, `"grid"`, `"clock"`,
    /// or any registered extension).
    pub kind: String,
    /// Resource name to observe (point and field variants).
    pub field: Option<String>,
    /// Spatial sample coordinate (point variant).
    pub location: Option<f64>,
    /// Column index into a multi-component field. Defaults to 0.
    pub component: Option<usize>,
    /// Output destination: `"stdout"` or `"csv"`.
    pub output_type: String,
    /// Output file path. Required iff `output_type` is `"csv"`, and
    /// always required by the grid variant (its payload is a file).
    pub filename: Option<String>,
    /// Simulation-time period between samples (field variant).
    /// Absent means sample every step.
    pub dump_interval: Option<f64>,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            kind: String::new(),
            field: None,
            location: None,
            component: None,
            output_type: "stdout".to_string(),
            filename: None,
            dump_interval: None,
        }
    }
}

impl DiagnosticConfig {
    /// Validate the structural invariants that hold for every variant.
    ///
    /// Checked in order:
    /// 1. `filename` present iff `output_type` is `"csv"`. The grid
    ///    variant is exempt from the "only if" half: it writes a file
    ///    regardless of `output_type`.
    /// 2. `dump_interval`, when present, is finite and positive.
    ///
    /// Unknown `output_type` values and variant-specific key
    /// requirements are reported by sink resolution and the variant
    /// constructors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. filename ⇔ csv.
        if self.output_type == "csv" && self.filename.is_none() {
            return Err(ConfigError::CsvWithoutFilename);
        }
        if self.output_type != "csv" && self.filename.is_some() && self.kind != "grid" {
            return Err(ConfigError::FilenameWithoutCsv);
        }
        // 2. dump_interval must be a usable period.
        if let Some(interval) = self.dump_interval {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(ConfigError::InvalidDumpInterval { value: interval });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_config() -> DiagnosticConfig {
        DiagnosticConfig {
            kind: "clock".into(),
            output_type: "csv".into(),
            filename: Some("time.csv".into()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_csv_with_filename_succeeds() {
        assert!(csv_config().validate().is_ok());
    }

    #[test]
    fn validate_csv_without_filename_fails() {
        let mut config = csv_config();
        config.filename = None;
        assert_eq!(config.validate(), Err(ConfigError::CsvWithoutFilename));
    }

    #[test]
    fn validate_stdout_with_filename_fails() {
        let mut config = csv_config();
        config.output_type = "stdout".into();
        assert_eq!(config.validate(), Err(ConfigError::FilenameWithoutCsv));
    }

    #[test]
    fn validate_grid_allows_filename_with_stdout() {
        let config = DiagnosticConfig {
            kind: "grid".into(),
            output_type: "stdout".into(),
            filename: Some("grid.csv".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_bad_dump_interval_fails() {
        for value in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let mut config = csv_config();
            config.dump_interval = Some(value);
            match config.validate() {
                Err(ConfigError::InvalidDumpInterval { .. }) => {}
                other => panic!("expected InvalidDumpInterval for {value}, got {other:?}"),
            }
        }
    }
}

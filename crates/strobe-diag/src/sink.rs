//! Output sinks: where a diagnostic's records go.

use crate::config::DiagnosticConfig;
use crate::error::{ConfigError, SinkError};
use crate::recorder::CsvRecorder;

/// Destination strategy for a diagnostic's records.
///
/// A closed sum type with a single [`emit()`](OutputSink::emit) entry
/// point: adding a destination means adding a variant, not editing a
/// dispatch table. Every variant resolves it once at initialize from
/// the configuration's `output_type`.
#[derive(Debug)]
pub enum OutputSink {
    /// Print each record to stdout as it is produced.
    Immediate {
        /// Optional prefix printed before each record (full-field
        /// snapshots label their rows with the field name).
        label: Option<String>,
    },
    /// Accumulate records in a [`CsvRecorder`] and flush at finalize.
    Buffered(CsvRecorder),
}

impl OutputSink {
    /// Resolve a sink from configuration.
    ///
    /// `rows` and `width` size the recorder for the `"csv"` case;
    /// `label` is the stdout prefix for the `"stdout"` case. Unknown
    /// `output_type` values are `Err(ConfigError::UnknownOutputType)`;
    /// `"csv"` without a filename is `Err(ConfigError::CsvWithoutFilename)`.
    pub fn from_config(
        config: &DiagnosticConfig,
        rows: usize,
        width: usize,
        label: Option<String>,
    ) -> Result<Self, ConfigError> {
        match config.output_type.as_str() {
            "stdout" => Ok(Self::Immediate { label }),
            "csv" => {
                let filename = config
                    .filename
                    .as_ref()
                    .ok_or(ConfigError::CsvWithoutFilename)?;
                Ok(Self::Buffered(CsvRecorder::new(filename, rows, width)))
            }
            other => Err(ConfigError::UnknownOutputType {
                value: other.to_string(),
            }),
        }
    }

    /// Route one record through the sink.
    pub fn emit(&mut self, record: &[f64]) -> Result<(), SinkError> {
        match self {
            Self::Immediate { label } => {
                let formatted = format_record(record);
                match label {
                    Some(label) => println!("{label} {formatted}"),
                    None => println!("{formatted}"),
                }
                Ok(())
            }
            Self::Buffered(recorder) => recorder.append(record),
        }
    }

    /// Flush a buffered recorder to its file; immediate sinks are a no-op.
    ///
    /// Safe to call more than once: the recorder is inert after its
    /// first flush.
    pub fn finish(&mut self) -> Result<(), SinkError> {
        match self {
            Self::Immediate { .. } => Ok(()),
            Self::Buffered(recorder) => recorder.flush_to_file(),
        }
    }
}

fn format_record(record: &[f64]) -> String {
    let mut out = String::new();
    for (i, value) in record.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out
}

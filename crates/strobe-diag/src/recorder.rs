//! Fixed-capacity row recorder flushed once as comma-separated text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SinkError;

/// Fixed-capacity buffer of numeric rows, flushed once to a CSV file.
///
/// Storage is preallocated at construction (`rows × width` values) so
/// the steady-state append path never allocates. Rows are written to
/// the file in one pass at flush time, comma-separated, one record per
/// line, no header; only rows actually appended (`[0, cursor)`) are
/// written. After the flush the recorder is inert: further flushes are
/// no-ops.
///
/// Values are formatted with `f64`'s `Display`, which produces the
/// shortest string that parses back to the identical value, so a
/// flushed file round-trips exactly.
///
/// # Examples
///
/// ```
/// use strobe_diag::CsvRecorder;
///
/// let mut recorder = CsvRecorder::new("unused.csv", 2, 3);
/// recorder.append(&[1.0, 2.0, 3.0]).unwrap();
/// recorder.append(&[4.0, 5.0, 6.0]).unwrap();
///
/// let mut out = Vec::new();
/// recorder.write_to(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1,2,3\n4,5,6\n");
/// ```
#[derive(Debug)]
pub struct CsvRecorder {
    filename: PathBuf,
    width: usize,
    capacity: usize,
    buffer: Vec<f64>,
    cursor: usize,
    flushed: bool,
}

impl CsvRecorder {
    /// Preallocate a recorder of `rows × width` values targeting `filename`.
    pub fn new(filename: impl Into<PathBuf>, rows: usize, width: usize) -> Self {
        Self {
            filename: filename.into(),
            width,
            capacity: rows,
            buffer: vec![0.0; rows * width],
            cursor: 0,
            flushed: false,
        }
    }

    /// Append one record at the cursor and advance it.
    ///
    /// Returns `Err(SinkError::WidthMismatch)` if the record's length
    /// differs from the row width, or `Err(SinkError::BufferFull)` if
    /// every preallocated row has been written. The cursor never
    /// exceeds the row capacity.
    pub fn append(&mut self, record: &[f64]) -> Result<(), SinkError> {
        if record.len() != self.width {
            return Err(SinkError::WidthMismatch {
                expected: self.width,
                got: record.len(),
            });
        }
        if self.cursor >= self.capacity {
            return Err(SinkError::BufferFull {
                capacity: self.capacity,
            });
        }
        let start = self.cursor * self.width;
        self.buffer[start..start + self.width].copy_from_slice(record);
        self.cursor += 1;
        Ok(())
    }

    /// Number of rows appended so far.
    pub fn rows_written(&self) -> usize {
        self.cursor
    }

    /// Preallocated row capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Row width (values per record).
    pub fn width(&self) -> usize {
        self.width
    }

    /// The file this recorder flushes to.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Whether [`flush_to_file()`](Self::flush_to_file) has run.
    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    /// Serialize the appended rows to any writer.
    ///
    /// Tests use a `Vec<u8>`; [`flush_to_file()`](Self::flush_to_file)
    /// uses a `BufWriter<File>`.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), SinkError> {
        for row in 0..self.cursor {
            let start = row * self.width;
            for (i, value) in self.buffer[start..start + self.width].iter().enumerate() {
                if i > 0 {
                    write!(w, ",")?;
                }
                write!(w, "{value}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Write the buffer to the configured file in one pass.
    ///
    /// The first call creates (or truncates) the file and writes every
    /// appended row; afterwards the recorder is inert and further calls
    /// return `Ok` without touching the file. I/O failures propagate as
    /// `SinkError::Io` and are not retried.
    pub fn flush_to_file(&mut self) -> Result<(), SinkError> {
        if self.flushed {
            return Ok(());
        }
        let file = File::create(&self.filename)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        self.flushed = true;
        Ok(())
    }
}

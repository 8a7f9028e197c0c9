use super::*;
use std::path::Path;

/// Persists a [`Matrix`] as delimited text, header row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writer {
    delimiter: u8,
}

impl Default for Writer {
    fn default() -> Self {
        Self { delimiter: COMMA }
    }
}

impl Writer {
    /// A writer whose delimiter follows the file extension.
    pub fn for_path(path: &Path) -> Self {
        Self::default().delimiter(delimiter(path))
    }
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn create(&self, path: &Path, matrix: &Matrix) -> std::io::Result<()> {
        log::info!("writing {}", path.display());
        self.write(std::fs::File::create(path)?, matrix)
    }

    pub fn write<W: std::io::Write>(&self, sink: W, matrix: &Matrix) -> std::io::Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(sink);
        for row in matrix.rows() {
            out.write_record(&row)?;
        }
        out.flush()
    }
}

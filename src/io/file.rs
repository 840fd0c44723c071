// src/io/file.rs
// Reading and writing matrices as plain-text files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::io::format::TextFormat;
use crate::numerics::types::matrix::Matrix;

impl TextFormat {
    /// Write `matrix` to `path`, replacing any existing file. Every row,
    /// including the last, ends with a newline.
    pub fn write_file<P: AsRef<Path>>(&self, matrix: &Matrix, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut text = self.render(matrix);
        text.push('\n');
        fs::write(path, text)?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            columns = matrix.columns(),
            "wrote matrix"
        );
        Ok(())
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Matrix> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        match self.parse(&text) {
            Ok(matrix) => {
                debug!(
                    path = %path.display(),
                    rows = matrix.rows(),
                    columns = matrix.columns(),
                    "read matrix"
                );
                Ok(matrix)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse matrix file");
                Err(err)
            }
        }
    }
}

impl Matrix {
    /// Write this matrix to `path`. `None` separates entries with a single space.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, separator: Option<&str>) -> Result<()> {
        TextFormat::from_option(separator)?.write_file(self, path)
    }

    /// Read a matrix written by [`Matrix::write_to_file`] with the same separator.
    /// `None` accepts comma or whitespace separated entries.
    pub fn read_from_file<P: AsRef<Path>>(path: P, separator: Option<&str>) -> Result<Matrix> {
        TextFormat::from_option(separator)?.read_file(path)
    }
}

// src/io/text.rs
// Conversion between matrices and their plain-text form.

use core::fmt;
use core::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::io::format::TextFormat;
use crate::numerics::types::matrix::Matrix;

impl TextFormat {
    /// Write `matrix` one row per line, without a newline after the last row.
    ///
    /// Entries use the shortest representation that parses back to the same
    /// `f64`, always with a decimal point or exponent (`1.0`, `2.5e-8`).
    pub fn write_rows<W: fmt::Write>(&self, matrix: &Matrix, out: &mut W) -> fmt::Result {
        let sep = self.separator();
        for (i, row) in matrix.iter_rows().enumerate() {
            if i > 0 {
                out.write_char('\n')?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    out.write_str(sep)?;
                }
                write!(out, "{:?}", value)?;
            }
        }
        Ok(())
    }

    pub fn render(&self, matrix: &Matrix) -> String {
        Rendered { format: self, matrix }.to_string()
    }

    /// Parse text written by [`TextFormat::render`] (or by hand) into a matrix.
    ///
    /// Blank lines are skipped. Every other line becomes a row and must hold
    /// the same number of entries as the first one.
    pub fn parse(&self, text: &str) -> Result<Matrix> {
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut row = Vec::new();
            for token in self.split_line(line) {
                let value = token.parse::<f64>().map_err(|_| MatrixError::Parse {
                    line: line_no,
                    reason: format!("{:?} is not a number", token),
                })?;
                row.push(value);
            }

            if row.is_empty() {
                return Err(MatrixError::Parse {
                    line: line_no,
                    reason: "row has no entries".to_owned(),
                });
            }
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(MatrixError::Parse {
                        line: line_no,
                        reason: format!(
                            "expected {} entries like the first row, found {}",
                            first.len(),
                            row.len()
                        ),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(MatrixError::Parse {
                line: 1,
                reason: "no rows found".to_owned(),
            });
        }
        Matrix::from_rows(&rows)
    }
}

/// A matrix paired with the format it is written in.
struct Rendered<'a> {
    format: &'a TextFormat,
    matrix: &'a Matrix,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format.write_rows(self.matrix, f)
    }
}

impl Matrix {
    /// Render with `separator` between entries and `\n` between rows.
    pub fn to_string_with(&self, separator: &str) -> Result<String> {
        Ok(TextFormat::with_separator(separator)?.render(self))
    }

    /// Parse matrix text. `None` accepts comma or whitespace separated entries.
    pub fn parse_text(text: &str, separator: Option<&str>) -> Result<Matrix> {
        TextFormat::from_option(separator)?.parse(text)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TextFormat::default().write_rows(self, f)
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        TextFormat::default().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_display_and_custom_separators() {
        let a = m(&[&[0.0, 1.0, 2.0]]);
        let b = m(&[&[0.0], &[1.0], &[2.0]]);
        let c = m(&[
            &[0.0, 3.0, 6.0, 9.0],
            &[1.0, 4.0, 7.0, 10.0],
            &[2.0, 5.0, 8.0, 11.0],
        ]);

        assert_eq!(a.to_string(), "0.0 1.0 2.0");
        assert_eq!(a.to_string_with(",").unwrap(), "0.0,1.0,2.0");
        assert_eq!(b.to_string(), "0.0\n1.0\n2.0");
        assert_eq!(b.to_string_with(";").unwrap(), "0.0\n1.0\n2.0");
        assert_eq!(c.to_string(), "0.0 3.0 6.0 9.0\n1.0 4.0 7.0 10.0\n2.0 5.0 8.0 11.0");
        assert_eq!(
            c.to_string_with(" | ").unwrap(),
            "0.0 | 3.0 | 6.0 | 9.0\n1.0 | 4.0 | 7.0 | 10.0\n2.0 | 5.0 | 8.0 | 11.0"
        );
    }

    #[test]
    fn test_invalid_separators() {
        let a = m(&[&[0.0, 1.0, 2.0]]);
        for sep in ["", ".", ",.", ".,", ",.,", "6", ",6", "6,", ",6,"] {
            let err = a.to_string_with(sep).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "separator {:?}", sep);
        }
    }

    #[test]
    fn test_parse_default_reader() {
        let parsed: Matrix = "1.0 2.0 3.0\n4,5,6\n\n7.5, -8 ,9e2\n".parse().unwrap();
        assert_eq!(
            parsed,
            m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.5, -8.0, 900.0]])
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = Matrix::parse_text("1.0 2.0\n3.0 abc\n", None).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));

        let err = Matrix::parse_text("1.0 2.0\n3.0\n", None).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));

        let err = Matrix::parse_text("\n  \n", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = Matrix::parse_text("1.0;;2.0", Some(";")).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 1, .. }));

        let err = Matrix::parse_text(",", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = Matrix::parse_text("1.0", Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_text_round_trip_preserves_values() {
        let a = m(&[&[0.1, -2.5e-8, 1e20], &[f64::MAX, f64::MIN_POSITIVE, -0.0]]);
        for sep in [" ", ",", ";", " | ", "\t"] {
            let text = a.to_string_with(sep).unwrap();
            assert_eq!(Matrix::parse_text(&text, Some(sep)).unwrap(), a, "separator {:?}", sep);
        }
        assert_eq!(a.to_string().parse::<Matrix>().unwrap(), a);
    }

    #[test]
    fn test_infinities_round_trip() {
        let a = m(&[&[f64::INFINITY, f64::NEG_INFINITY]]);
        assert_eq!(a.to_string(), "inf -inf");
        assert_eq!(a.to_string().parse::<Matrix>().unwrap(), a);
    }
}

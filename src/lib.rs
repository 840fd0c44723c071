//! # Dense Matrix
//!
//! A dense, row-major `f64` matrix with elementary linear algebra and a
//! plain-text file format.
//!
//! ## Quick Start
//!
//! ```rust
//! use dense_matrix::Matrix;
//!
//! # fn main() -> Result<(), dense_matrix::MatrixError> {
//! let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]])?;
//! let b = Matrix::column_vector(&[1.0, 1.0, 1.0])?;
//!
//! let product = a.mul(&b)?;
//! assert_eq!(product, Matrix::from_rows(&[[6.0]])?);
//!
//! let both = Matrix::combine_vertically(&[&a, &a.mul_scalar(2.0)])?;
//! assert_eq!(both.to_string(), "1.0 2.0 3.0\n2.0 4.0 6.0");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod io;
pub mod numerics;

// Re-export commonly used types for convenience
pub use error::{Axis, ErrorKind, MatrixError, Result};
pub use io::TextFormat;
pub use numerics::types::dimensions::Dimensions;
pub use numerics::types::matrix::Matrix;

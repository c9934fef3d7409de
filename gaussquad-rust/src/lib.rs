//! # gaussquad-rust: fixed-order Gauss-Legendre quadrature
//!
//! N-point Gauss-Legendre integration over finite, semi-infinite and infinite
//! intervals for real and complex integrands, generic over the scalar type.
//! Orders 7, 10, 15, 20, 25 and 30 are supported out of the box; the
//! `arbitrary-order` feature admits any order >= 1.
//!
//! Nodes and weights come from built-in tables at three precisions (double,
//! double-double and 110-digit decimal) or, for scalars beyond those, are
//! computed once from the Legendre polynomial zeros. Either way each
//! `(scalar type, order)` rule is built at most once per process and shared
//! between threads.

pub mod cache; // Process-wide rule cache
pub mod decimal;
pub mod error;
pub mod gauss;
pub mod legendre;
pub mod numeric;
pub mod precision; // Classification of scalar types into table tiers
pub mod provider;
pub mod rule;
pub mod tables;

// Re-export commonly used types and traits
pub use decimal::Decimal;
pub use error::{GaussError, Result};
pub use gauss::GaussLegendre;
pub use numeric::{CustomNumeric, IntegrandValue};
pub use precision::{NumericTraits, PrecisionCategory};
pub use provider::is_supported_order;
pub use rule::Rule;
pub use tables::TABULATED_ORDERS;

// Re-export external dependencies for convenience
pub use num_complex::Complex;
pub use twofloat::TwoFloat;

//! Error types for quadrature

/// Errors reported by rule selection and integration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaussError {
    #[error("the domain of integration is not sensible; please check the bounds (a = {a}, b = {b})")]
    InvalidDomain { a: String, b: String },
    #[error("no Gauss-Legendre rule of order {0} is available")]
    UnsupportedOrder(usize),
}

impl GaussError {
    pub(crate) fn invalid_domain<T: std::fmt::Display>(a: &T, b: &T) -> Self {
        GaussError::InvalidDomain {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Result alias for quadrature operations
pub type Result<T> = std::result::Result<T, GaussError>;

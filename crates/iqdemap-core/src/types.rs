//! Core types for constellation extraction
//!
//! Signals are represented as complex I/Q (In-phase/Quadrature) samples:
//! the real part is the component aligned with the reference carrier, the
//! imaginary part the component 90° out of phase. Every extractor in this
//! crate consumes a slice of such samples and produces either a sequence of
//! constellation points or a resource grid.

use num_complex::Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// A recovered sequence of constellation points (complex symbols)
pub type SymbolSequence = Vec<IQSample>;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur during symbol extraction
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    #[error("Data rate '{0}' not recognized. Use '1Mbps', '2Mbps', '5.5Mbps' or '11Mbps'")]
    UnknownDataRate(String),

    #[error("Invalid {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Metadata parse failed: {0}")]
    MetadataParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_rate() {
        let err = ExtractError::UnknownDataRate("3Mbps".to_string());
        let msg = err.to_string();
        assert!(msg.contains("3Mbps"), "error must name the rejected rate: {msg}");
    }

    #[test]
    fn test_error_display_names_field() {
        let err = ExtractError::InvalidParameter {
            field: "FFTLength",
            reason: "must be > 0".to_string(),
        };
        assert!(err.to_string().contains("FFTLength"));
    }
}

//! Error types for openmsg operations
//!
//! Field conversions, bound checks and character copies are total and never
//! fail. Errors only arise when foreign bytes are viewed as a fixed layout.

/// Errors that can occur when interpreting raw bytes as a fixed layout
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Byte count differs from the size of the layout
    #[cfg_attr(feature = "std", error("Size mismatch: layout is {expected} bytes, got {actual}"))]
    SizeMismatch {
        /// The size of the layout in bytes.
        expected: usize,
        /// The number of bytes supplied.
        actual: usize,
    },

    /// Input is not aligned for a borrowed view of the layout
    #[cfg_attr(feature = "std", error("Input not aligned to {0} bytes"))]
    Misaligned(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::SizeMismatch { expected, actual } => write!(
                f,
                "Size mismatch: layout is {} bytes, got {}",
                expected, actual
            ),
            LayoutError::Misaligned(align) => write!(f, "Input not aligned to {} bytes", align),
        }
    }
}

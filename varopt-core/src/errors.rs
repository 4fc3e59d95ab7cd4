use thiserror::Error;

use crate::models::VariantSet;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationBinError {
    #[error(
        "Integer overflow detected in the {0} set! There are too many variants piled up in one annotation bin."
    )]
    Overflow(VariantSet),
}

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Annotation value is not finite: {0}")]
    NonFiniteValue(f64),

    #[error("Annotation value {value} is out of range for bin width {bin_width}")]
    ValueOutOfRange { value: f64, bin_width: f64 },

    #[error("Bin width must be a positive, finite number: {0}")]
    InvalidBinWidth(f64),

    #[error(transparent)]
    Bin(#[from] AnnotationBinError),
}

#[derive(Error, Debug)]
pub enum VcfError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing VCF line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

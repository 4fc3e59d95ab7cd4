/// Width of one annotation bin when nothing else is requested.
pub const DEFAULT_BIN_WIDTH: f64 = 1.0;

/// Bins holding fewer variants than this are folded into a neighbour.
pub const DEFAULT_MIN_VARIANTS: u32 = 100;

/// Annotation read from the VCF when none is requested.
pub const DEFAULT_ANNOTATION: &str = "QUAL";

/// VCF `ID` value marking a call absent from dbSNP.
pub const NOVEL_ID: &str = ".";

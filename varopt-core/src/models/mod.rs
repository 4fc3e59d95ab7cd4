pub mod annotation_bin;
pub mod substitution;
pub mod variant_set;

// re-export for cleaner imports
pub use self::annotation_bin::AnnotationBin;
pub use self::substitution::{AnnotatedVariant, Substitution};
pub use self::variant_set::VariantSet;

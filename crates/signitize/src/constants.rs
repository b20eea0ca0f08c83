//! Shared constants for signitizing
//!
//! This module centralizes magic numbers used by the layout engine and
//! the PDF writer.

// =============================================================================
// Folding
// =============================================================================

/// Page faces contributed by one folded leaf
pub const PAGES_PER_LEAF: usize = 4;

/// Volumes are padded up to a multiple of this many pages
pub const VOLUME_PAGE_MULTIPLE: usize = 4;

/// Default number of leaves per signature
pub const DEFAULT_LEAVES_PER_SIGNATURE: usize = 4;

/// Fewest leaves a signature may be built from
pub const MIN_LEAVES_PER_SIGNATURE: usize = 2;

// =============================================================================
// Output
// =============================================================================

/// Suffix appended to the input file stem for every output file
pub const OUTPUT_SUFFIX: &str = "-out";

/// Width of the zero-padded volume and signature numbers in file names
pub const INDEX_WIDTH: usize = 3;

/// PDF version of generated files
pub const OUTPUT_PDF_VERSION: &str = "1.7";

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

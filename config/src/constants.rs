//! # Configuration Constants
//!
//! Centralized constants for the grounds-cad pipeline. All geometry
//! tolerances, tessellation parameters and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Tessellation parameters for circular shapes
//! - **Limits**: Maximum values for safety bounds
//! - **Export**: Defaults for the file writers

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area kept after a boolean operation.
///
/// BSP clipping produces sliver triangles along cut planes; anything with
/// less area than this is dropped when polygons are converted back to a
/// mesh.
pub const MIN_TRIANGLE_AREA: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments for circular shapes.
///
/// Applied to cylinders, tubes and circular profiles when the caller does
/// not override the tessellation. 48 segments keep chord error under
/// 0.05 mm for the radii used by the container parts.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let segments = DEFAULT_SEGMENTS;
/// assert!(segments >= 3);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 48;

/// Minimum number of segments for any circular shape.
///
/// Three segments is the geometric minimum (a triangle); requesting fewer
/// is rejected by the primitive constructors.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of segments for any circular shape.
///
/// Safety limit to prevent excessive tessellation from a hostile or
/// mistyped parameter set.
pub const MAX_SEGMENTS: u32 = 512;

/// Segments per quarter circle used for rounded rectangle corners.
///
/// A box corner fillet spans 90 degrees; 8 segments per corner keeps the
/// corner chord error well under a printer's XY resolution.
pub const CORNER_SEGMENTS: u32 = 8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Default output directory for generated files, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Header text embedded in the 80-byte binary STL header.
pub const STL_HEADER_TAG: &str = "grounds-cad binary STL";

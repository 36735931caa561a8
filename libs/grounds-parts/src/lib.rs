//! # Grounds Parts
//!
//! Part generators for the coffee-grounds container system: a dimension
//! table with invariant validation, and one deterministic generator per
//! physical part.
//!
//! ## Architecture
//!
//! ```text
//! Dimensions → validate() → parts::PartKind::generate() → Vec<NamedSolid>
//! ```
//!
//! Generators are pure: no I/O, no clock, no ambient randomness (the
//! semi-random nail ring uses a fixed seed). The same dimension set always
//! produces the identical mesh.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grounds_parts::{Dimensions, PartKind};
//!
//! let dims = Dimensions::default();
//! let solids = PartKind::Spout.generate(&dims)?;
//! assert_eq!(solids[0].name, "drain_spout");
//! ```

pub mod dimensions;
pub mod error;
pub mod parts;
pub mod solid;
pub mod threads;

pub use dimensions::{DimensionError, Dimensions, ScraperSize, SpoutPosition};
pub use error::PartError;
pub use parts::PartKind;
pub use solid::NamedSolid;

//! # Dimension Table
//!
//! Every named millimeter constant of the container system in one struct,
//! with defaults matching the shipped design and `validate()` enforcing
//! the relationships the generators rely on.
//!
//! The generators assume a consistent set: a nail socket deeper than the
//! scraper base, a bore wider than the spout tube, and so on. Rather than
//! trusting manual constant selection, every entry point validates the set
//! before any geometry is constructed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extra length added to nail through-holes so the cut always clears the
/// bottom face.
pub const NAIL_THROUGH_CLEARANCE: f64 = 2.0;

/// Wall the drain wall can be on, which also selects the floor slope
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpoutPosition {
    /// Drain on the -X wall, floor sloping down toward -X
    #[default]
    Left,
    /// Drain on the +X wall, floor sloping down toward +X
    Right,
    /// Drain on the -Y wall, floor sloping down toward -Y
    Rear,
}

/// Overall storage-scraper size selection exposed by the web form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScraperSize {
    Small,
    #[default]
    Standard,
    Large,
}

impl ScraperSize {
    /// Uniform scale factor applied to the storage scraper.
    pub fn scale(self) -> f64 {
        match self {
            ScraperSize::Small => 0.85,
            ScraperSize::Standard => 0.95,
            ScraperSize::Large => 1.05,
        }
    }
}

/// A dimension set violation.
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    /// A value is outside its allowed range
    #[error("{name} = {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Two or more values collide geometrically
    #[error("Dimension conflict: {message}")]
    Conflict { message: String },
}

impl DimensionError {
    fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

/// The full dimension set, in millimeters unless noted.
///
/// Serialized with camelCase names so the web form payload maps onto it
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimensions {
    // ---- Box shell ----
    pub box_length: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub wall_thickness: f64,
    pub fillet_radius: f64,

    // ---- Drainage floor ----
    /// Floor slope toward the drain wall, degrees
    pub slope_angle_deg: f64,
    pub channel_width: f64,
    pub channel_depth: f64,

    // ---- Drain fitting ----
    pub spout_position: SpoutPosition,
    /// Clearance opening in the wall for the spout shaft
    pub drain_hole_diameter: f64,
    /// Distance from the box bottom to the bottom of the drain opening
    pub drain_lip_height: f64,
    pub thread_major_diameter: f64,
    pub thread_pitch: f64,
    /// Thread engagement depth on the box side
    pub thread_length_box: f64,
    /// Thread length on the spout, slightly less for gasket compression
    pub thread_length_spout: f64,
    /// Center bore for liquid flow
    pub drain_bore_diameter: f64,
    /// Boss cylinder on the interior wall
    pub boss_outer_diameter: f64,
    pub boss_length: f64,

    // ---- Feet ----
    pub foot_diameter: f64,
    pub foot_recess_depth: f64,
    pub foot_edge_margin: f64,

    // ---- Lid ----
    pub lid_top_thickness: f64,
    pub recess_depth: f64,
    pub recess_clearance: f64,
    pub recess_overlap: f64,
    pub lid_recess_fillet: f64,

    // ---- Handle ----
    pub handle_length: f64,
    pub handle_width: f64,
    pub handle_height: f64,
    pub handle_thickness: f64,
    pub storage_groove_diameter: f64,
    pub storage_groove_length: f64,
    pub ridge_slot_width: f64,
    pub ridge_slot_depth: f64,

    // ---- Capsule scraper (nail-insert design) ----
    pub scraper_base_diameter: f64,
    pub scraper_base_height: f64,
    pub pin_count: u32,
    pub pin_reinforcement_height: f64,
    /// Press-fit hole for 1.5 mm brad nails
    pub nail_hole_diameter: f64,
    /// Socket that captures the nail head
    pub nail_socket_diameter: f64,
    pub nail_socket_depth: f64,
    pub nail_taper_length: f64,
    /// Margin between the bayonet shaft and the innermost nail center
    pub nail_ring_clearance: f64,

    // ---- Bayonet mount ----
    pub scraper_shaft_diameter: f64,
    pub scraper_shaft_height: f64,
    pub scraper_socket_diameter: f64,
    pub scraper_socket_depth: f64,
    pub bayonet_tab_count: u32,
    pub bayonet_tab_height: f64,
    pub bayonet_tab_length: f64,
    pub bayonet_tab_protrusion: f64,
    /// Degrees of rotation to engage the lock
    pub bayonet_rotation_angle: f64,
    pub bayonet_slot_width: f64,
    pub bayonet_slot_vertical: f64,
    pub bayonet_lock_depth: f64,
    /// Fusion overlap where the shaft meets the scraper base
    pub scraper_boss_overlap: f64,

    // ---- Drain spout ----
    pub spout_outer_diameter: f64,
    pub spout_inner_diameter: f64,
    pub spout_length: f64,
    pub flange_diameter: f64,
    pub flange_thickness: f64,
    pub hex_size: f64,
    pub hex_thickness: f64,
    pub seal_groove_diameter: f64,
    pub seal_groove_width: f64,
    pub seal_groove_depth: f64,

    // ---- Storage scraper ----
    /// Uniform scale applied to the storage scraper
    pub scraper_scale: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            box_length: 200.0,
            box_width: 150.0,
            box_height: 150.0,
            wall_thickness: 4.0,
            fillet_radius: 8.0,

            slope_angle_deg: 2.0,
            channel_width: 12.0,
            channel_depth: 2.5,

            spout_position: SpoutPosition::Left,
            drain_hole_diameter: 17.0,
            drain_lip_height: 5.0,
            thread_major_diameter: 16.0,
            thread_pitch: 3.0,
            thread_length_box: 20.0,
            thread_length_spout: 18.0,
            drain_bore_diameter: 12.0,
            boss_outer_diameter: 22.4,
            boss_length: 15.0,

            foot_diameter: 10.0,
            foot_recess_depth: 2.0,
            foot_edge_margin: 18.0,

            lid_top_thickness: 5.0,
            recess_depth: 10.0,
            recess_clearance: 0.5,
            recess_overlap: 0.2,
            lid_recess_fillet: 2.0,

            handle_length: 70.0,
            handle_width: 20.0,
            handle_height: 12.0,
            handle_thickness: 5.0,
            storage_groove_diameter: 15.0,
            storage_groove_length: 80.0,
            ridge_slot_width: 2.7,
            ridge_slot_depth: 1.0,

            scraper_base_diameter: 28.0,
            scraper_base_height: 3.0,
            pin_count: 8,
            pin_reinforcement_height: 10.0,
            nail_hole_diameter: 1.4,
            nail_socket_diameter: 3.5,
            nail_socket_depth: 8.0,
            nail_taper_length: 2.0,
            nail_ring_clearance: 1.5,

            scraper_shaft_diameter: 14.0,
            scraper_shaft_height: 10.0,
            scraper_socket_diameter: 14.2,
            scraper_socket_depth: 10.0,
            bayonet_tab_count: 3,
            bayonet_tab_height: 3.0,
            bayonet_tab_length: 6.0,
            bayonet_tab_protrusion: 1.35,
            bayonet_rotation_angle: 60.0,
            bayonet_slot_width: 3.5,
            bayonet_slot_vertical: 6.0,
            bayonet_lock_depth: 3.0,
            scraper_boss_overlap: 0.3,

            spout_outer_diameter: 11.2,
            spout_inner_diameter: 8.0,
            spout_length: 60.0,
            flange_diameter: 24.0,
            flange_thickness: 4.0,
            hex_size: 20.8,
            hex_thickness: 6.0,
            seal_groove_diameter: 19.2,
            seal_groove_width: 2.0,
            seal_groove_depth: 1.5,

            scraper_scale: 0.95,
        }
    }
}

impl Dimensions {
    // ---- Derived placements ----

    /// Height of the drain axis above the box bottom.
    pub fn drain_center_height(&self) -> f64 {
        self.drain_lip_height + self.drain_hole_diameter / 2.0
    }

    /// Innermost allowed nail-hole center radius: just clear of the
    /// bayonet shaft.
    pub fn nail_ring_min_radius(&self) -> f64 {
        self.scraper_shaft_diameter / 2.0 + self.nail_ring_clearance
    }

    /// Outermost allowed nail-hole center radius, leaving an edge margin
    /// on the scraper base.
    pub fn nail_ring_max_radius(&self) -> f64 {
        self.scraper_base_diameter / 2.5
    }

    /// Total thickness a nail passes through: base plus reinforcement.
    pub fn scraper_base_total_thickness(&self) -> f64 {
        self.scraper_base_height + self.pin_reinforcement_height
    }

    /// Length of the press-fit section of a nail hole, below socket and
    /// taper, including the cut-through clearance.
    pub fn nail_through_length(&self) -> f64 {
        self.scraper_base_total_thickness() - self.nail_socket_depth - self.nail_taper_length
            + NAIL_THROUGH_CLEARANCE
    }

    /// Interior floor length between the walls.
    pub fn interior_length(&self) -> f64 {
        self.box_length - 2.0 * self.wall_thickness
    }

    /// Interior floor width between the walls.
    pub fn interior_width(&self) -> f64 {
        self.box_width - 2.0 * self.wall_thickness
    }

    // ---- Validation ----

    /// Checks the dimension set against its ranges and invariants.
    ///
    /// Every CLI and web entry point calls this before any geometry is
    /// constructed; an inconsistent set never reaches the kernel.
    pub fn validate(&self) -> Result<(), DimensionError> {
        self.check_ranges()?;
        self.check_invariants()
    }

    fn check_ranges(&self) -> Result<(), DimensionError> {
        let ranges: [(&'static str, f64, f64, f64); 9] = [
            ("boxLength", self.box_length, 100.0, 400.0),
            ("boxWidth", self.box_width, 80.0, 300.0),
            ("boxHeight", self.box_height, 80.0, 300.0),
            ("wallThickness", self.wall_thickness, 2.0, 8.0),
            ("threadMajorDiameter", self.thread_major_diameter, 10.0, 24.0),
            ("threadPitch", self.thread_pitch, 1.0, 5.0),
            ("spoutLength", self.spout_length, 20.0, 120.0),
            ("slopeAngleDeg", self.slope_angle_deg, 0.5, 8.0),
            ("scraperScale", self.scraper_scale, 0.5, 1.5),
        ];

        for (name, value, min, max) in ranges {
            if !(min..=max).contains(&value) {
                return Err(DimensionError::OutOfRange {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), DimensionError> {
        if self.fillet_radius * 2.0 >= self.box_width.min(self.box_length) {
            return Err(DimensionError::conflict(format!(
                "fillet radius {} too large for box footprint",
                self.fillet_radius
            )));
        }

        // Nail ring: centers strictly between the bayonet shaft and the
        // base edge
        let min_r = self.nail_ring_min_radius();
        let max_r = self.nail_ring_max_radius();
        if min_r >= max_r {
            return Err(DimensionError::conflict(format!(
                "nail ring collapses: min radius {min_r:.2} >= max radius {max_r:.2}"
            )));
        }
        if max_r + self.nail_socket_diameter / 2.0 >= self.scraper_base_diameter / 2.0 {
            return Err(DimensionError::conflict(
                "nail sockets would break through the scraper base edge",
            ));
        }

        // Nail holes must pass fully through the base
        if self.nail_socket_depth + self.nail_taper_length >= self.scraper_base_total_thickness() {
            return Err(DimensionError::conflict(
                "nail socket and taper exceed the scraper base thickness",
            ));
        }
        if self.nail_through_length() <= 0.0 {
            return Err(DimensionError::conflict(
                "nail through-hole length is not positive",
            ));
        }

        // Drain plumbing: liquid path must widen monotonically outward
        if self.drain_bore_diameter <= self.spout_inner_diameter {
            return Err(DimensionError::conflict(format!(
                "drain bore {} must exceed spout inner diameter {}",
                self.drain_bore_diameter, self.spout_inner_diameter
            )));
        }
        if self.spout_outer_diameter >= self.drain_bore_diameter {
            return Err(DimensionError::conflict(format!(
                "spout tube {} must fit inside the drain bore {}",
                self.spout_outer_diameter, self.drain_bore_diameter
            )));
        }
        if self.boss_outer_diameter < self.thread_major_diameter + 4.0 {
            return Err(DimensionError::conflict(
                "boss wall too thin around the thread",
            ));
        }
        if self.thread_length_box < self.wall_thickness + self.boss_length {
            return Err(DimensionError::conflict(
                "box thread shorter than wall plus boss",
            ));
        }
        if self.drain_center_height() + self.drain_hole_diameter > self.box_height / 2.0 {
            return Err(DimensionError::conflict(
                "drain opening too high for the box wall",
            ));
        }

        // Bayonet fit
        if self.scraper_socket_diameter <= self.scraper_shaft_diameter {
            return Err(DimensionError::conflict(
                "bayonet socket must be wider than the shaft",
            ));
        }
        if self.bayonet_slot_width <= self.bayonet_tab_height + 0.2 {
            return Err(DimensionError::conflict(
                "bayonet slot too narrow for the tab",
            ));
        }
        if self.scraper_socket_depth < self.bayonet_slot_vertical + self.bayonet_lock_depth {
            return Err(DimensionError::conflict(
                "bayonet socket shallower than entry slot plus lock groove",
            ));
        }

        // Seal stack: groove and ring must stay on the flange
        if self.seal_groove_diameter + 2.0 * self.seal_groove_width >= self.flange_diameter {
            return Err(DimensionError::conflict(
                "seal groove does not fit on the flange",
            ));
        }

        Ok(())
    }
}

//! Pure crop window geometry.
//!
//! Everything in this module is deterministic and free of state. The gesture
//! controller combines these functions with the host's current values to
//! produce proposals.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - The crop position is the offset of the media centre from the crop window
//!   centre, in rendered pixels, at the current zoom
//! - Percentage areas are relative to the rendered media (0 to 100)
//! - Pixel areas are relative to the media's natural size
//! - Origin of screen points is the top-left corner of the viewport

mod crop;
mod points;
mod rotation;

pub use crop::{
    compute_cropped_area, fit_crop_size, initial_crop_from_cropped_area_pixels,
    restrict_position, zoom_from_cropped_area_pixels, InitialCrop,
};
pub use points::{distance, midpoint, point_on_container, point_on_media, rotation_between};
pub use rotation::{rotate_around_midpoint, translate_size};

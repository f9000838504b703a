//! The host surface.
//!
//! The host owns the authoritative crop position, zoom, rotation and
//! measurements. The engine only sends proposals and events through this
//! trait; whether and how they are applied is up to the host.

use crate::{Area, MediaSize, Point, Size};

/// Notification sink implemented by the host.
///
/// Only [`CropperHost::crop_change`] is required. The remaining notifications
/// default to no-ops.
pub trait CropperHost {
    /// Proposed media position.
    fn crop_change(&mut self, crop: Point);

    /// Proposed zoom.
    fn zoom_change(&mut self, _zoom: f64) {}

    /// Proposed rotation in degrees.
    fn rotation_change(&mut self, _rotation: f64) {}

    /// The crop window size changed.
    fn crop_size_change(&mut self, _crop_size: Size) {}

    /// A gesture finished or the media loaded; the crop is settled.
    fn crop_complete(&mut self, _percentages: Area, _pixels: Area) {}

    /// The crop area changed for any reason.
    fn crop_area_change(&mut self, _percentages: Area, _pixels: Area) {}

    fn interaction_start(&mut self) {}

    fn interaction_end(&mut self) {}

    /// The media finished loading and was measured.
    fn media_loaded(&mut self, _media: MediaSize) {}

    /// Whether the host accepts zoom proposals.
    ///
    /// When false, wheel and pinch zoom are disabled.
    fn handles_zoom(&self) -> bool {
        true
    }

    /// Whether the host accepts rotation proposals.
    ///
    /// When false, pinch rotation is locked.
    fn handles_rotation(&self) -> bool {
        false
    }
}

//! Easycrop Core - crop window geometry and gesture engine
//!
//! This crate computes where a rectangular or round crop window sits over an
//! image or video, and turns raw pointer, touch and wheel input into zoom,
//! position and rotation proposals for the host that owns those values.
//!
//! # Modules
//!
//! - [`geometry`] - Pure coordinate math (crop sizing, restriction, crop areas)
//! - [`config`] - Host-owned properties read on every call
//! - [`input`] - Raw input records forwarded by the host
//! - [`session`] - Transient per-gesture state
//! - [`schedule`] - Frame coalescing and the wheel debounce
//! - [`host`] - The notification surface implemented by the host
//! - [`controller`] - Gesture state machine and sizing lifecycle
//!
//! The engine never mutates authoritative state. Every change is a proposal
//! sent through [`CropperHost`]; the host decides whether to apply it.

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod schedule;
pub mod session;

pub use config::{CropShape, CropperProps, ObjectFit, MAX_ZOOM, MIN_ZOOM};
pub use controller::CropController;
pub use error::CropperError;
pub use geometry::{
    compute_cropped_area, fit_crop_size, initial_crop_from_cropped_area_pixels,
    restrict_position, translate_size, zoom_from_cropped_area_pixels,
};
pub use host::CropperHost;
pub use input::{DeltaMode, MediaMeasurement, PointerKind, WheelInput};

use serde::{Deserialize, Serialize};

/// A 2D point in pixels (screen, container or media space depending on use).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero, negative or not a number.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Rendered and intrinsic size of the media element.
///
/// `width`/`height` follow the current layout scale, while
/// `natural_width`/`natural_height` are the source dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSize {
    pub width: f64,
    pub height: f64,
    pub natural_width: f64,
    pub natural_height: f64,
}

impl MediaSize {
    pub fn new(width: f64, height: f64, natural_width: f64, natural_height: f64) -> Self {
        Self {
            width,
            height,
            natural_width,
            natural_height,
        }
    }

    /// Rendered size as a [`Size`].
    pub fn rendered(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Ratio between rendered and natural width.
    pub fn scale(&self) -> f64 {
        self.width / self.natural_width
    }
}

/// A crop rectangle.
///
/// Depending on context the values are percentages of the media (0 to 100)
/// or pixels relative to the media's natural size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The crop reported back to the host, in both unit systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropData {
    /// Crop area in percentages of the media.
    #[serde(rename = "croppedArea")]
    pub percentages: Area,
    /// Crop area in natural media pixels.
    #[serde(rename = "croppedAreaPixels")]
    pub pixels: Area,
}

/// Measured bounding rectangle of the container, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

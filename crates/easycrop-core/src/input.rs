//! Raw input forwarded by the host.
//!
//! The host subscribes to pointer, touch, wheel, resize and media-load events
//! and hands their essential data to the controller in these forms.

use serde::{Deserialize, Serialize};

use crate::{ContainerRect, MediaSize, ObjectFit, Size};

/// Line height in pixels used to normalize line-based wheel deltas.
pub const LINE_HEIGHT: f64 = 40.0;
/// Page height in pixels used to normalize page-based wheel deltas.
pub const PAGE_HEIGHT: f64 = 800.0;

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Unit of a wheel delta, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// Map the DOM `deltaMode` code (0, 1, 2) to a mode. Unknown codes are pixels.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// A single wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelInput {
    /// Pointer position in screen coordinates.
    pub x: f64,
    pub y: f64,
    /// Raw vertical delta.
    pub delta_y: f64,
    #[serde(default)]
    pub delta_mode: DeltaMode,
    /// Event time in milliseconds, on the same clock the host passes to `tick`.
    pub timestamp_ms: f64,
}

impl WheelInput {
    /// Vertical delta normalized to pixels.
    pub fn pixel_y(&self) -> f64 {
        match self.delta_mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * LINE_HEIGHT,
            DeltaMode::Page => self.delta_y * PAGE_HEIGHT,
        }
    }
}

/// Media measurement taken once the media element has loaded.
///
/// The rendered size is optional: a host that cannot measure its element can
/// leave it out and the engine derives it from the object-fit policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMeasurement {
    pub natural_width: f64,
    pub natural_height: f64,
    #[serde(default)]
    pub rendered: Option<Size>,
}

impl MediaMeasurement {
    pub fn new(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
            rendered: None,
        }
    }

    /// Attach a measured rendered size.
    pub fn with_rendered(mut self, width: f64, height: f64) -> Self {
        self.rendered = Some(Size::new(width, height));
        self
    }

    /// Resolve into a full [`MediaSize`] for the given container.
    pub fn resolve(&self, object_fit: ObjectFit, container: &ContainerRect) -> MediaSize {
        let natural = Size::new(self.natural_width, self.natural_height);
        let rendered = self
            .rendered
            .unwrap_or_else(|| object_fit.rendered_size(natural, container.size()));

        MediaSize::new(
            rendered.width,
            rendered.height,
            self.natural_width,
            self.natural_height,
        )
    }
}

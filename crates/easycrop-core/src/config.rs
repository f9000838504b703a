//! Host-owned cropper properties.
//!
//! The engine reads these on every call and never keeps a copy beyond one
//! computation. Field names serialize in camelCase so that a JavaScript props
//! object maps onto [`CropperProps`] directly.

use serde::{Deserialize, Serialize};

use crate::{Area, Point, Size};

/// Default lower zoom bound.
pub const MIN_ZOOM: f64 = 1.0;
/// Default upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Shape of the crop window. Cosmetic only: geometry is always rectangular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropShape {
    #[default]
    Rect,
    Round,
}

/// How the media element is laid out inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Shrink the media to fit inside the container. Smaller media keeps
    /// its natural size.
    #[default]
    Contain,
    /// Media width matches the container width, height follows the ratio.
    HorizontalCover,
    /// Media height matches the container height, width follows the ratio.
    VerticalCover,
}

impl ObjectFit {
    /// Rendered media size for a given natural size and container size.
    ///
    /// Returns an empty size if either input is empty.
    pub fn rendered_size(self, natural: Size, container: Size) -> Size {
        if natural.is_empty() || container.is_empty() {
            return Size::default();
        }

        let media_aspect = natural.width / natural.height;
        match self {
            ObjectFit::Contain => {
                if natural.width <= container.width && natural.height <= container.height {
                    natural
                } else if container.width / container.height > media_aspect {
                    Size::new(container.height * media_aspect, container.height)
                } else {
                    Size::new(container.width, container.width / media_aspect)
                }
            }
            ObjectFit::HorizontalCover => {
                Size::new(container.width, container.width / media_aspect)
            }
            ObjectFit::VerticalCover => {
                Size::new(container.height * media_aspect, container.height)
            }
        }
    }
}

/// Cropper properties supplied by the host on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropperProps {
    /// Current media position relative to the crop window centre.
    pub crop: Point,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current rotation in degrees.
    pub rotation: f64,
    /// Crop window aspect ratio (width / height). Ignored when `crop_size` is set.
    pub aspect: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    pub crop_shape: CropShape,
    pub object_fit: ObjectFit,
    pub show_grid: bool,
    /// Wheel sensitivity multiplier.
    pub zoom_speed: f64,
    /// Keep the crop window inside the media.
    pub restrict_position: bool,
    /// Enable wheel zooming.
    pub zoom_with_scroll: bool,
    /// Explicit crop window size, overriding the fitted size.
    pub crop_size: Option<Size>,
    /// Crop to restore once the media has loaded, in natural pixels.
    pub initial_cropped_area_pixels: Option<Area>,
}

impl Default for CropperProps {
    fn default() -> Self {
        Self {
            crop: Point::default(),
            zoom: 1.0,
            rotation: 0.0,
            aspect: 4.0 / 3.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            crop_shape: CropShape::Rect,
            object_fit: ObjectFit::Contain,
            show_grid: true,
            zoom_speed: 1.0,
            restrict_position: true,
            zoom_with_scroll: true,
            crop_size: None,
            initial_cropped_area_pixels: None,
        }
    }
}

impl CropperProps {
    /// Create properties with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Aspect ratio used for every computation.
    ///
    /// An explicit `crop_size` takes precedence: its own ratio is used and the
    /// configured `aspect` is ignored. Integrations rely on this precedence, so
    /// it must not be changed to prefer `aspect`.
    pub fn effective_aspect(&self) -> f64 {
        match self.crop_size {
            Some(size) => size.width / size.height,
            None => self.aspect,
        }
    }

    /// Clamp a zoom value to `[min_zoom, max_zoom]`.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

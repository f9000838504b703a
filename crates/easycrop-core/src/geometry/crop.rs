//! Crop window sizing, position restriction and cropped area conversion.
//!
//! The crop window always sits at the centre of the container. The media is
//! moved underneath it: `crop` is the offset of the media centre from the
//! crop window centre, in rendered pixels at the current zoom.
//!
//! # Example
//!
//! ```ignore
//! use easycrop_core::geometry::{compute_cropped_area, fit_crop_size};
//! use easycrop_core::{MediaSize, Point};
//!
//! let media = MediaSize::new(500.0, 500.0, 1000.0, 1000.0);
//! let crop_size = fit_crop_size(500.0, 500.0, 500.0, 500.0, 1.0, 0.0);
//! let data = compute_cropped_area(Point::default(), &media, crop_size, 1.0, 1.0, 0.0, true);
//! assert_eq!(data.pixels.width, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::rotation::translate_size;
use crate::{Area, CropData, MediaSize, Point, Size};

/// Crop position and zoom recovered from a pixel crop area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCrop {
    pub crop: Point,
    pub zoom: f64,
}

/// Compute the size of the crop window.
///
/// The media's rotated bounding box is intersected with the container, and
/// the largest `aspect` rectangle that fits inside is returned.
///
/// # Arguments
///
/// * `media_width`, `media_height` - Rendered media size
/// * `container_width`, `container_height` - Container size
/// * `aspect` - Width / height of the crop window, must be > 0
/// * `rotation` - Media rotation in degrees
pub fn fit_crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> Size {
    let bounds = translate_size(media_width, media_height, rotation);
    let fitting_width = bounds.width.min(container_width);
    let fitting_height = bounds.height.min(container_height);

    if fitting_width > fitting_height * aspect {
        // Height-constrained
        Size::new(fitting_height * aspect, fitting_height)
    } else {
        // Width-constrained
        Size::new(fitting_width, fitting_width / aspect)
    }
}

/// Clamp a media position so the crop window never leaves the media.
///
/// Each axis is clamped to `[-max, max]` where
/// `max = (rotated_media_dim * zoom - crop_dim) / 2`.
pub fn restrict_position(
    position: Point,
    media: &MediaSize,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Point {
    let bounds = translate_size(media.width, media.height, rotation);

    Point {
        x: restrict_position_coord(position.x, bounds.width, crop_size.width, zoom),
        y: restrict_position_coord(position.y, bounds.height, crop_size.height, zoom),
    }
}

fn restrict_position_coord(position: f64, media_dim: f64, crop_dim: f64, zoom: f64) -> f64 {
    let max_position = media_dim * zoom / 2.0 - crop_dim / 2.0;
    // min(max(..)) rather than clamp: max_position may be negative when the
    // crop window is larger than the zoomed media.
    position.max(-max_position).min(max_position)
}

/// Compute the cropped area in percentages and in natural pixels.
///
/// When `restrict` is set and the media is not rotated, every value is
/// limited to the media bounds. A rotated media can legitimately need
/// negative offsets, so no limiting happens in that case.
///
/// The pixel size is corrected so that `width / height` matches `aspect`:
/// whichever dimension fills the media at zoom 1 is kept and the other is
/// derived from it.
pub fn compute_cropped_area(
    crop: Point,
    media: &MediaSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict: bool,
) -> CropData {
    let limit = restrict && rotation == 0.0;
    let limit_area = |max: f64, value: f64| {
        if limit {
            value.max(0.0).min(max)
        } else {
            value
        }
    };

    let percentages = Area {
        x: limit_area(
            100.0,
            ((media.width - crop_size.width / zoom) / 2.0 - crop.x / zoom) / media.width * 100.0,
        ),
        y: limit_area(
            100.0,
            ((media.height - crop_size.height / zoom) / 2.0 - crop.y / zoom) / media.height
                * 100.0,
        ),
        width: limit_area(100.0, crop_size.width / media.width * 100.0 / zoom),
        height: limit_area(100.0, crop_size.height / media.height * 100.0 / zoom),
    };

    let width_in_pixels = round_half_up(limit_area(
        media.natural_width,
        percentages.width * media.natural_width / 100.0,
    ));
    let height_in_pixels = round_half_up(limit_area(
        media.natural_height,
        percentages.height * media.natural_height / 100.0,
    ));

    let is_wider_than_high = media.natural_width >= media.natural_height * aspect;
    let size_pixels = if is_wider_than_high {
        Size::new(round_half_up(height_in_pixels * aspect), height_in_pixels)
    } else {
        Size::new(width_in_pixels, round_half_up(width_in_pixels / aspect))
    };

    let pixels = Area {
        x: round_half_up(limit_area(
            media.natural_width - size_pixels.width,
            percentages.x * media.natural_width / 100.0,
        )),
        y: round_half_up(limit_area(
            media.natural_height - size_pixels.height,
            percentages.y * media.natural_height / 100.0,
        )),
        width: size_pixels.width,
        height: size_pixels.height,
    };

    CropData {
        percentages,
        pixels,
    }
}

/// Recover the zoom that produced a pixel crop area.
///
/// With an explicit `crop_size` its larger dimension is the binding one and
/// is scaled by the media's rendered/natural ratio. Without it, the binding
/// axis is inferred by comparing the media to the area's aspect ratio.
pub fn zoom_from_cropped_area_pixels(
    pixels: &Area,
    media: &MediaSize,
    crop_size: Option<Size>,
) -> f64 {
    if let Some(crop_size) = crop_size {
        let media_zoom = media.scale();
        return if crop_size.height > crop_size.width {
            crop_size.height / media_zoom / pixels.height
        } else {
            crop_size.width / media_zoom / pixels.width
        };
    }

    let aspect = pixels.width / pixels.height;
    if media.natural_width >= media.natural_height * aspect {
        media.natural_height / pixels.height
    } else {
        media.natural_width / pixels.width
    }
}

/// Recover the crop position and zoom that produce a pixel crop area.
pub fn initial_crop_from_cropped_area_pixels(
    pixels: &Area,
    media: &MediaSize,
    crop_size: Option<Size>,
) -> InitialCrop {
    let zoom = zoom_from_cropped_area_pixels(pixels, media, crop_size);
    let crop_zoom = media.scale() * zoom;

    InitialCrop {
        crop: Point {
            x: ((media.natural_width - pixels.width) / 2.0 - pixels.x) * crop_zoom,
            y: ((media.natural_height - pixels.height) / 2.0 - pixels.y) * crop_zoom,
        },
        zoom,
    }
}

/// Round half-way cases towards positive infinity.
///
/// Pixel offsets can be negative for rotated media; rounding them towards
/// +inf keeps a crop shifted by half a pixel consistent on both sides of 0.
#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a media with natural size and a rendered scale.
    fn media_strategy() -> impl Strategy<Value = MediaSize> {
        (1000.0f64..=4000.0, 1000.0f64..=4000.0, 0.2f64..=1.0).prop_map(|(nw, nh, scale)| {
            MediaSize::new(nw * scale, nh * scale, nw, nh)
        })
    }

    /// Strategy for a container size.
    fn container_strategy() -> impl Strategy<Value = (f64, f64)> {
        (200.0f64..=1000.0, 200.0f64..=1000.0)
    }

    proptest! {
        /// Property: Restricting an already restricted position is a no-op.
        #[test]
        fn prop_restrict_is_idempotent(
            media in media_strategy(),
            (cw, ch) in (10.0f64..=1200.0, 10.0f64..=1200.0),
            (x, y) in (-3000.0f64..=3000.0, -3000.0f64..=3000.0),
            zoom in 1.0f64..=3.0,
            rotation in -180.0f64..=180.0,
        ) {
            let crop_size = Size::new(cw, ch);
            let once = restrict_position(Point::new(x, y), &media, crop_size, zoom, rotation);
            let twice = restrict_position(once, &media, crop_size, zoom, rotation);
            prop_assert_eq!(once, twice);
        }

        /// Property: A restricted position keeps the crop window inside the media.
        #[test]
        fn prop_restricted_crop_inside_media(
            media in media_strategy(),
            (cw, ch) in container_strategy(),
            aspect in 0.5f64..=2.0,
            (x, y) in (-3000.0f64..=3000.0, -3000.0f64..=3000.0),
            zoom in 1.0f64..=3.0,
        ) {
            let crop_size = fit_crop_size(media.width, media.height, cw, ch, aspect, 0.0);
            let pos = restrict_position(Point::new(x, y), &media, crop_size, zoom, 0.0);
            let data = compute_cropped_area(pos, &media, crop_size, aspect, zoom, 0.0, false);

            let tolerance = 1e-6;
            prop_assert!(data.percentages.x >= -tolerance);
            prop_assert!(data.percentages.y >= -tolerance);
            prop_assert!(data.percentages.x + data.percentages.width <= 100.0 + tolerance);
            prop_assert!(data.percentages.y + data.percentages.height <= 100.0 + tolerance);
        }

        /// Property: Restriction bounds hold for rotated media too.
        #[test]
        fn prop_restricted_within_rotated_bounds(
            media in media_strategy(),
            (cw, ch) in container_strategy(),
            aspect in 0.5f64..=2.0,
            (x, y) in (-3000.0f64..=3000.0, -3000.0f64..=3000.0),
            zoom in 1.0f64..=3.0,
            rotation in -180.0f64..=180.0,
        ) {
            let crop_size = fit_crop_size(media.width, media.height, cw, ch, aspect, rotation);
            let bounds = translate_size(media.width, media.height, rotation);
            let pos = restrict_position(Point::new(x, y), &media, crop_size, zoom, rotation);

            let max_x = (bounds.width * zoom - crop_size.width) / 2.0;
            let max_y = (bounds.height * zoom - crop_size.height) / 2.0;
            prop_assert!(pos.x.abs() <= max_x + 1e-9);
            prop_assert!(pos.y.abs() <= max_y + 1e-9);
        }

        /// Property: Pixel areas honour the aspect ratio within rounding.
        #[test]
        fn prop_pixels_match_aspect(
            media in media_strategy(),
            (cw, ch) in container_strategy(),
            aspect in 0.5f64..=2.0,
            (x, y) in (-3000.0f64..=3000.0, -3000.0f64..=3000.0),
            zoom in 1.0f64..=3.0,
        ) {
            let crop_size = fit_crop_size(media.width, media.height, cw, ch, aspect, 0.0);
            let pos = restrict_position(Point::new(x, y), &media, crop_size, zoom, 0.0);
            let data = compute_cropped_area(pos, &media, crop_size, aspect, zoom, 0.0, true);

            let drift = (data.pixels.width - data.pixels.height * aspect).abs();
            prop_assert!(drift <= aspect.max(1.0), "drift {} for aspect {}", drift, aspect);
        }

        /// Property: Zoom and crop position survive a trip through pixels.
        #[test]
        fn prop_pixels_round_trip(
            media in media_strategy(),
            (cw, ch) in container_strategy(),
            aspect in 0.5f64..=2.0,
            (x, y) in (-3000.0f64..=3000.0, -3000.0f64..=3000.0),
            zoom in 1.0f64..=3.0,
        ) {
            let crop_size = fit_crop_size(media.width, media.height, cw, ch, aspect, 0.0);
            let pos = restrict_position(Point::new(x, y), &media, crop_size, zoom, 0.0);
            let data = compute_cropped_area(pos, &media, crop_size, aspect, zoom, 0.0, true);
            let pixels = data.pixels;

            // Integer rounding of up to 1.5 natural pixels per dimension
            let relative = 2.0 / pixels.width.min(pixels.height);
            let initial = initial_crop_from_cropped_area_pixels(&pixels, &media, Some(crop_size));
            prop_assert!(
                (initial.zoom - zoom).abs() <= zoom * relative,
                "zoom {} recovered as {}", zoom, initial.zoom
            );

            let scale = media.scale();
            let natural_max = media.natural_width.max(media.natural_height);
            let position_tolerance = scale * initial.zoom * (2.0 + natural_max * relative);
            prop_assert!((initial.crop.x - pos.x).abs() <= position_tolerance);
            prop_assert!((initial.crop.y - pos.y).abs() <= position_tolerance);
        }
    }
}

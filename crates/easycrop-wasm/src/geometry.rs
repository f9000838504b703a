//! WASM bindings for the pure geometry functions.
//!
//! These let a JavaScript host compute crop areas without creating a
//! [`JsCropper`](crate::JsCropper), for example to restore a saved crop on the
//! server side of a rendering pipeline.

use easycrop_core::geometry;
use easycrop_core::{Area, MediaSize, Point, Size};
use wasm_bindgen::prelude::*;

use crate::types::{from_js, to_js};

/// Size of the crop window for the given media and container.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { width, height } = fit_crop_size(800, 600, 400, 400, 4 / 3, 0);
/// ```
#[wasm_bindgen]
pub fn fit_crop_size(
    media_width: f64,
    media_height: f64,
    container_width: f64,
    container_height: f64,
    aspect: f64,
    rotation: f64,
) -> Result<JsValue, JsValue> {
    to_js(&geometry::fit_crop_size(
        media_width,
        media_height,
        container_width,
        container_height,
        aspect,
        rotation,
    ))
}

/// Bounding box of a `width` x `height` rectangle rotated by `rotation` degrees.
#[wasm_bindgen]
pub fn translate_size(width: f64, height: f64, rotation: f64) -> Result<JsValue, JsValue> {
    to_js(&geometry::translate_size(width, height, rotation))
}

/// Clamp a crop position so the crop window stays inside the media.
#[wasm_bindgen]
pub fn restrict_position(
    crop: JsValue,
    media: JsValue,
    crop_size: JsValue,
    zoom: f64,
    rotation: f64,
) -> Result<JsValue, JsValue> {
    let crop: Point = from_js(crop, "crop")?;
    let media: MediaSize = from_js(media, "media size")?;
    let crop_size: Size = from_js(crop_size, "crop size")?;

    to_js(&geometry::restrict_position(crop, &media, crop_size, zoom, rotation))
}

/// Cropped area in percentages and natural pixels.
///
/// Returns `{ croppedArea, croppedAreaPixels }`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const media = { width: 500, height: 500, naturalWidth: 1000, naturalHeight: 1000 };
/// const { croppedAreaPixels } = compute_cropped_area(
///   { x: 0, y: 0 }, media, { width: 500, height: 500 }, 1, 2, 0, true,
/// );
/// ```
#[wasm_bindgen]
pub fn compute_cropped_area(
    crop: JsValue,
    media: JsValue,
    crop_size: JsValue,
    aspect: f64,
    zoom: f64,
    rotation: f64,
    restrict_position: bool,
) -> Result<JsValue, JsValue> {
    let crop: Point = from_js(crop, "crop")?;
    let media: MediaSize = from_js(media, "media size")?;
    let crop_size: Size = from_js(crop_size, "crop size")?;

    to_js(&geometry::compute_cropped_area(
        crop,
        &media,
        crop_size,
        aspect,
        zoom,
        rotation,
        restrict_position,
    ))
}

/// Zoom that produced a pixel crop area.
///
/// `crop_size` may be `undefined` when the crop window follows the aspect.
#[wasm_bindgen]
pub fn zoom_from_cropped_area_pixels(
    pixels: JsValue,
    media: JsValue,
    crop_size: JsValue,
) -> Result<f64, JsValue> {
    let pixels: Area = from_js(pixels, "cropped area pixels")?;
    let media: MediaSize = from_js(media, "media size")?;
    let crop_size: Option<Size> = from_js(crop_size, "crop size")?;

    Ok(geometry::zoom_from_cropped_area_pixels(&pixels, &media, crop_size))
}

/// Crop position and zoom that reproduce a pixel crop area.
///
/// Returns `{ crop, zoom }`.
#[wasm_bindgen]
pub fn initial_crop_from_cropped_area_pixels(
    pixels: JsValue,
    media: JsValue,
    crop_size: JsValue,
) -> Result<JsValue, JsValue> {
    let pixels: Area = from_js(pixels, "cropped area pixels")?;
    let media: MediaSize = from_js(media, "media size")?;
    let crop_size: Option<Size> = from_js(crop_size, "crop size")?;

    to_js(&geometry::initial_crop_from_cropped_area_pixels(
        &pixels, &media, crop_size,
    ))
}

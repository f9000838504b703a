//! Easycrop WASM - WebAssembly bindings for Easycrop
//!
//! This crate exposes the easycrop-core engine to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `geometry` - Free functions for crop sizing and cropped area conversion
//! - `cropper` - `JsCropper`, the gesture controller driven by DOM events
//! - `types` - Conversions between JS objects and core types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropper, compute_cropped_area } from '@easycrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const cropper = new JsCropper({ onCropChange: setCrop, onZoomChange: setZoom }, { aspect: 1 });
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod geometry;
mod types;

pub use cropper::JsCropper;
pub use geometry::{
    compute_cropped_area, fit_crop_size, initial_crop_from_cropped_area_pixels,
    restrict_position, translate_size, zoom_from_cropped_area_pixels,
};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

//! Error types for the cropper engine.

use thiserror::Error;

use crate::{MediaSize, Size};

/// Errors raised by the cropper engine.
///
/// Only [`CropperError::NotMounted`] is ever returned to the host. The other
/// variants describe configurations the engine skips over while layout
/// settles, and are only reported through logging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropperError {
    /// A container-relative transform was requested before the container was measured.
    #[error("The cropper is not mounted: no container measurement available")]
    NotMounted,

    /// The aspect ratio is zero, negative or not finite.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspect(f64),

    /// The media has no rendered or natural area yet.
    #[error("Media has no measurable size")]
    EmptyMedia,

    /// The container has no area yet.
    #[error("Container has no measurable size")]
    EmptyContainer,
}

/// Check that a crop window can be computed from these measurements.
pub(crate) fn validate_sizing(
    media: &MediaSize,
    container: Size,
    aspect: f64,
) -> Result<(), CropperError> {
    if !(aspect.is_finite() && aspect > 0.0) {
        return Err(CropperError::InvalidAspect(aspect));
    }
    let natural = Size::new(media.natural_width, media.natural_height);
    if media.rendered().is_empty() || natural.is_empty() {
        return Err(CropperError::EmptyMedia);
    }
    if container.is_empty() {
        return Err(CropperError::EmptyContainer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaSize {
        MediaSize::new(500.0, 500.0, 1000.0, 1000.0)
    }

    #[test]
    fn test_valid_sizing() {
        assert_eq!(validate_sizing(&media(), Size::new(500.0, 500.0), 1.0), Ok(()));
    }

    #[test]
    fn test_invalid_aspect() {
        let container = Size::new(500.0, 500.0);
        assert_eq!(
            validate_sizing(&media(), container, 0.0),
            Err(CropperError::InvalidAspect(0.0))
        );
        assert_eq!(
            validate_sizing(&media(), container, -1.0),
            Err(CropperError::InvalidAspect(-1.0))
        );
        assert!(matches!(
            validate_sizing(&media(), container, f64::INFINITY),
            Err(CropperError::InvalidAspect(_))
        ));
    }

    #[test]
    fn test_empty_media() {
        let unloaded = MediaSize::new(500.0, 500.0, 0.0, 0.0);
        assert_eq!(
            validate_sizing(&unloaded, Size::new(500.0, 500.0), 1.0),
            Err(CropperError::EmptyMedia)
        );
    }

    #[test]
    fn test_empty_container() {
        assert_eq!(
            validate_sizing(&media(), Size::new(0.0, 500.0), 1.0),
            Err(CropperError::EmptyContainer)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CropperError::InvalidAspect(-2.0).to_string(),
            "Invalid aspect ratio: -2"
        );
        assert!(CropperError::NotMounted.to_string().contains("not mounted"));
    }
}

//! Gesture controller and sizing lifecycle.
//!
//! [`CropController`] caches the measurements and the derived crop window
//! size, holds the transient [`InteractionState`], and turns host events into
//! proposals sent through a [`CropperHost`].
//!
//! # Lifecycle
//!
//! 1. `media_loaded` once the media element has dimensions
//! 2. `resize` whenever the container or media layout changes
//! 3. `props_changed` after the host applied new properties
//! 4. Pointer, wheel, frame and tick calls while the user interacts
//! 5. `teardown` when the surface goes away
//!
//! # Example
//!
//! ```ignore
//! let mut controller = CropController::new();
//! controller.media_loaded(&props, MediaMeasurement::new(4000.0, 3000.0), container, &mut host);
//! controller.pointer_down(&props, PointerKind::Mouse, &[Point::new(10.0, 10.0)], &mut host);
//! controller.pointer_move(&props, &[Point::new(30.0, 10.0)], &mut host);
//! controller.frame(&props, &mut host)?;
//! controller.pointer_up(&props, &mut host);
//! ```

mod gesture;
#[cfg(test)]
pub(crate) mod testing;

use tracing::debug;

use crate::error::validate_sizing;
use crate::geometry::{
    compute_cropped_area, fit_crop_size, initial_crop_from_cropped_area_pixels, point_on_container,
    restrict_position,
};
use crate::session::InteractionState;
use crate::{
    ContainerRect, CropData, CropperError, CropperHost, CropperProps, MediaMeasurement, MediaSize,
    Point, Size,
};

/// Crop window engine for one cropper surface.
#[derive(Debug, Default)]
pub struct CropController {
    measurement: Option<MediaMeasurement>,
    media: Option<MediaSize>,
    container: Option<ContainerRect>,
    crop_size: Option<Size>,
    state: InteractionState,
    torn_down: bool,
}

impl CropController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved media size from the last measurement.
    pub fn media_size(&self) -> Option<MediaSize> {
        self.media
    }

    /// Last container measurement.
    pub fn container(&self) -> Option<ContainerRect> {
        self.container
    }

    /// Current crop window size, once it could be computed.
    pub fn crop_size(&self) -> Option<Size> {
        self.crop_size
    }

    /// Read-only view of the transient interaction state.
    pub fn interaction(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Handle the media finishing its load.
    ///
    /// Measures, computes the crop window, applies the initial crop if one is
    /// configured (otherwise re-clamps the current position), then emits the
    /// crop data once.
    pub fn media_loaded<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        measurement: MediaMeasurement,
        container: ContainerRect,
        host: &mut H,
    ) {
        if self.torn_down {
            return;
        }

        let media = measurement.resolve(props.object_fit, &container);
        self.measurement = Some(measurement);
        self.media = Some(media);
        self.container = Some(container);
        debug!(
            natural_width = media.natural_width,
            natural_height = media.natural_height,
            width = media.width,
            height = media.height,
            "media loaded"
        );

        if self.compute_sizes(props, host) {
            match props.initial_cropped_area_pixels {
                Some(pixels) => {
                    let initial =
                        initial_crop_from_cropped_area_pixels(&pixels, &media, props.crop_size);
                    debug!(
                        x = initial.crop.x,
                        y = initial.crop.y,
                        zoom = initial.zoom,
                        "applying initial crop"
                    );
                    host.crop_change(initial.crop);
                    host.zoom_change(initial.zoom);

                    let initial_props = CropperProps {
                        crop: initial.crop,
                        zoom: initial.zoom,
                        ..props.clone()
                    };
                    self.emit_crop_data(&initial_props, host);
                }
                None => self.recompute_crop_position(props, host),
            }
        }

        host.media_loaded(media);
    }

    /// Handle a container resize or a media layout change.
    ///
    /// Pass a new `measurement` when the media was re-measured; otherwise the
    /// previous one is re-resolved against the new container.
    pub fn resize<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        container: ContainerRect,
        measurement: Option<MediaMeasurement>,
        host: &mut H,
    ) {
        if self.torn_down {
            return;
        }

        self.container = Some(container);
        if let Some(measurement) = measurement {
            self.measurement = Some(measurement);
        }
        self.resolve_media(props);
        self.refresh_sizes(props, host);
    }

    /// React to properties the host just applied.
    ///
    /// Changes are handled in priority order: object fit, rotation or aspect,
    /// zoom, explicit crop size, crop position. Only the first matching change
    /// is processed. The wheel toggle is handled independently.
    pub fn props_changed<H: CropperHost>(
        &mut self,
        prev: &CropperProps,
        next: &CropperProps,
        host: &mut H,
    ) {
        if self.torn_down {
            return;
        }

        let fit_changed = prev.object_fit != next.object_fit;
        if fit_changed {
            self.resolve_media(next);
        }

        if fit_changed || prev.rotation != next.rotation || prev.aspect != next.aspect {
            self.refresh_sizes(next, host);
        } else if prev.zoom != next.zoom {
            if self.crop_size.is_some() {
                host.crop_change(self.restricted(next, next.crop, next.zoom));
                self.emit_crop_area_change(next, host);
            }
        } else if prev.crop_size != next.crop_size {
            self.refresh_sizes(next, host);
        } else if prev.crop != next.crop {
            self.emit_crop_area_change(next, host);
        }

        if prev.zoom_with_scroll && !next.zoom_with_scroll && self.state.wheel.cancel() {
            debug!("wheel zoom disabled during a wheel session");
            host.interaction_end();
        }
    }

    /// Current crop data, or `None` before the crop window is known.
    ///
    /// The position is restricted first when restriction is enabled, so a
    /// zoom-out the host has not re-clamped yet still reports a valid area.
    pub fn crop_data(&self, props: &CropperProps) -> Option<CropData> {
        let (media, crop_size) = (self.media?, self.crop_size?);
        let crop = self.restricted(props, props.crop, props.zoom);

        Some(compute_cropped_area(
            crop,
            &media,
            crop_size,
            props.effective_aspect(),
            props.zoom,
            props.rotation,
            props.restrict_position,
        ))
    }

    /// Convert a screen point into container-centred coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CropperError::NotMounted`] if no container was measured yet.
    pub fn point_on_container(&self, point: Point) -> Result<Point, CropperError> {
        let container = self.container.as_ref().ok_or(CropperError::NotMounted)?;
        Ok(point_on_container(point, container))
    }

    /// Tear the surface down: cancel the pending frame and the wheel session.
    ///
    /// No notification is sent afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!("cropper torn down");
        self.state.reset();
        self.torn_down = true;
    }

    fn resolve_media(&mut self, props: &CropperProps) {
        if let (Some(measurement), Some(container)) = (self.measurement, self.container) {
            self.media = Some(measurement.resolve(props.object_fit, &container));
        }
    }

    /// Recompute the crop window, notifying the host if it changed.
    ///
    /// Returns false when the computation was skipped because measurements
    /// are missing or degenerate.
    fn compute_sizes<H: CropperHost>(&mut self, props: &CropperProps, host: &mut H) -> bool {
        let (Some(media), Some(container)) = (self.media, self.container) else {
            debug!("crop size skipped: media or container not measured yet");
            return false;
        };

        let aspect = props.effective_aspect();
        if let Err(err) = validate_sizing(&media, container.size(), aspect) {
            debug!(%err, "crop size skipped");
            return false;
        }

        let crop_size = props.crop_size.unwrap_or_else(|| {
            fit_crop_size(
                media.width,
                media.height,
                container.width,
                container.height,
                aspect,
                props.rotation,
            )
        });

        if self.crop_size != Some(crop_size) {
            debug!(width = crop_size.width, height = crop_size.height, "crop size changed");
            host.crop_size_change(crop_size);
        }
        self.crop_size = Some(crop_size);
        true
    }

    fn refresh_sizes<H: CropperHost>(&mut self, props: &CropperProps, host: &mut H) {
        if self.compute_sizes(props, host) {
            self.recompute_crop_position(props, host);
        }
    }

    /// Re-clamp the host's position against the current bounds.
    fn recompute_crop_position<H: CropperHost>(&self, props: &CropperProps, host: &mut H) {
        if self.crop_size.is_none() {
            return;
        }
        host.crop_change(self.restricted(props, props.crop, props.zoom));
        self.emit_crop_data(props, host);
    }

    /// Apply restriction to `crop` if the props ask for it.
    fn restricted(&self, props: &CropperProps, crop: Point, zoom: f64) -> Point {
        match (props.restrict_position, self.media, self.crop_size) {
            (true, Some(media), Some(crop_size)) => {
                restrict_position(crop, &media, crop_size, zoom, props.rotation)
            }
            _ => crop,
        }
    }

    fn emit_crop_data<H: CropperHost>(&self, props: &CropperProps, host: &mut H) {
        if let Some(data) = self.crop_data(props) {
            host.crop_complete(data.percentages, data.pixels);
            host.crop_area_change(data.percentages, data.pixels);
        }
    }

    fn emit_crop_area_change<H: CropperHost>(&self, props: &CropperProps, host: &mut H) {
        if let Some(data) = self.crop_data(props) {
            host.crop_area_change(data.percentages, data.pixels);
        }
    }
}

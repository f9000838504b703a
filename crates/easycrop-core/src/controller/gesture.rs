//! Pointer, pinch and wheel handling.
//!
//! # State machine
//!
//! ```text
//! Idle --1 pointer down--> Dragging --2nd finger--> Pinching
//!  ^                          |                        |
//!  +-------- pointer up ------+---- finger lifted -----+
//! ```
//!
//! Moves are only recorded; the computation runs on the next `frame` call,
//! and a newer move replaces one that has not run yet. Ending a gesture runs
//! the move still waiting for its frame before the crop is reported. The
//! wheel session runs independently of drag and pinch and ends once `tick`
//! observes 250ms without a wheel event.

use tracing::{debug, trace};

use super::CropController;
use crate::geometry::{distance, midpoint, point_on_media, restrict_position, rotation_between};
use crate::session::PendingMove;
use crate::{CropperError, CropperHost, CropperProps, Point, PointerKind, WheelInput};

impl CropController {
    /// Handle a pointer or touch going down.
    ///
    /// A mouse or a single touch starts a drag; exactly two touches start a
    /// pinch, upgrading a drag already in progress. Other touch counts are
    /// ignored.
    pub fn pointer_down<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        kind: PointerKind,
        points: &[Point],
        host: &mut H,
    ) {
        if self.torn_down {
            return;
        }

        let started = match (kind, points) {
            (PointerKind::Mouse, [point, ..]) | (PointerKind::Touch, [point]) => {
                debug!(?kind, "drag started");
                self.state.begin_drag(*point, props.crop)
            }
            (PointerKind::Touch, [a, b]) => {
                debug!("pinch started");
                self.state.begin_pinch(*a, *b, props.crop)
            }
            _ => return,
        };

        if started {
            host.interaction_start();
        }
    }

    /// Record pointer movement for the next frame.
    ///
    /// Ignored while no gesture is active. Two points while dragging upgrade
    /// the drag to a pinch. A single point while pinching means a finger
    /// lifted, which ends the gesture like [`CropController::pointer_up`].
    pub fn pointer_move<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        points: &[Point],
        host: &mut H,
    ) {
        if self.torn_down || self.state.is_idle() {
            return;
        }

        let pending = match points {
            [_] if self.state.is_pinching() => {
                debug!("pinch lost a finger");
                self.finish_gesture(props, host);
                return;
            }
            [point] => PendingMove::Drag(*point),
            [a, b] => {
                if !self.state.is_pinching() {
                    self.state.begin_pinch(*a, *b, props.crop);
                }
                PendingMove::Pinch(*a, *b)
            }
            _ => return,
        };

        if self.state.frame.schedule(pending) {
            trace!("pending move superseded");
        }
    }

    /// Run the pending move, if any. Call once per display frame.
    ///
    /// # Errors
    ///
    /// Returns [`CropperError::NotMounted`] if a pinch zoom runs before the
    /// container was measured.
    pub fn frame<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        host: &mut H,
    ) -> Result<(), CropperError> {
        if self.torn_down {
            return Ok(());
        }

        if let Some(pending) = self.state.frame.take() {
            self.run_move(props, pending, host)?;
        }
        Ok(())
    }

    /// End the active pointer gesture and report the settled crop.
    pub fn pointer_up<H: CropperHost>(&mut self, props: &CropperProps, host: &mut H) {
        if self.torn_down || self.state.is_idle() {
            return;
        }

        debug!("pointer gesture ended");
        self.finish_gesture(props, host);
    }

    /// Handle a wheel event: zoom around the pointer and extend the wheel session.
    ///
    /// # Errors
    ///
    /// Returns [`CropperError::NotMounted`] if the crop window is known but
    /// the container is not.
    pub fn wheel<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        input: WheelInput,
        host: &mut H,
    ) -> Result<(), CropperError> {
        if self.torn_down || !props.zoom_with_scroll {
            return Ok(());
        }

        let new_zoom = props.zoom - input.pixel_y() * props.zoom_speed / 200.0;
        self.zoom_at_point(props, new_zoom, Point::new(input.x, input.y), host)?;

        if self.state.wheel.refresh(input.timestamp_ms) {
            debug!("wheel session started");
            host.interaction_start();
        }
        Ok(())
    }

    /// Advance the clock; ends the wheel session once its deadline passed.
    pub fn tick<H: CropperHost>(&mut self, now_ms: f64, host: &mut H) {
        if self.torn_down {
            return;
        }
        if self.state.wheel.expire(now_ms) {
            debug!("wheel session ended");
            host.interaction_end();
        }
    }

    /// Zoom to `zoom` while keeping the media point under `point` fixed.
    ///
    /// Position and zoom are always proposed together; applying the zoom alone
    /// would make the media jump. A no-op until the crop window is known or if
    /// the host does not accept zoom proposals.
    ///
    /// # Errors
    ///
    /// Returns [`CropperError::NotMounted`] if no container was measured.
    pub fn zoom_at_point<H: CropperHost>(
        &self,
        props: &CropperProps,
        zoom: f64,
        point: Point,
        host: &mut H,
    ) -> Result<(), CropperError> {
        self.propose_zoom(props, zoom, point, host).map(|_| ())
    }

    /// Flush the pending move, then report the crop and end the interaction.
    ///
    /// The crop data reflects the flushed proposals, as if the host had
    /// applied them.
    fn finish_gesture<H: CropperHost>(&mut self, props: &CropperProps, host: &mut H) {
        let settled = match self.state.frame.take() {
            Some(pending) => self.run_move(props, pending, host).unwrap_or_else(|err| {
                debug!(%err, "pending move dropped");
                props.clone()
            }),
            None => props.clone(),
        };

        self.state.end_gesture();
        self.emit_crop_data(&settled, host);
        host.interaction_end();
    }

    /// Run one move and return `props` with its proposals applied.
    fn run_move<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        pending: PendingMove,
        host: &mut H,
    ) -> Result<CropperProps, CropperError> {
        match pending {
            PendingMove::Drag(point) => {
                let mut settled = props.clone();
                if let Some(position) = self.drag_to(props, point, host) {
                    settled.crop = position;
                }
                Ok(settled)
            }
            PendingMove::Pinch(a, b) => self.pinch_to(props, a, b, host),
        }
    }

    fn propose_zoom<H: CropperHost>(
        &self,
        props: &CropperProps,
        zoom: f64,
        point: Point,
        host: &mut H,
    ) -> Result<Option<(Point, f64)>, CropperError> {
        let (Some(media), Some(crop_size)) = (self.media, self.crop_size) else {
            return Ok(None);
        };
        if !host.handles_zoom() {
            return Ok(None);
        }

        let zoom_point = self.point_on_container(point)?;
        let zoom_target = point_on_media(zoom_point, props.crop, props.zoom);
        let new_zoom = props.clamp_zoom(zoom);

        let requested = Point {
            x: zoom_target.x * new_zoom - zoom_point.x,
            y: zoom_target.y * new_zoom - zoom_point.y,
        };
        let position = if props.restrict_position {
            restrict_position(requested, &media, crop_size, new_zoom, props.rotation)
        } else {
            requested
        };

        trace!(zoom = new_zoom, x = position.x, y = position.y, "zoom proposal");
        host.crop_change(position);
        host.zoom_change(new_zoom);
        Ok(Some((position, new_zoom)))
    }

    fn drag_to<H: CropperHost>(
        &self,
        props: &CropperProps,
        point: Point,
        host: &mut H,
    ) -> Option<Point> {
        let (media, crop_size) = (self.media?, self.crop_size?);
        let requested = self.state.drag()?.requested_position(point);
        let position = if props.restrict_position {
            restrict_position(requested, &media, crop_size, props.zoom, props.rotation)
        } else {
            requested
        };

        trace!(x = position.x, y = position.y, "drag proposal");
        host.crop_change(position);
        Some(position)
    }

    fn pinch_to<H: CropperHost>(
        &mut self,
        props: &CropperProps,
        a: Point,
        b: Point,
        host: &mut H,
    ) -> Result<CropperProps, CropperError> {
        let center = midpoint(a, b);
        let mut settled = props.clone();
        if let Some(position) = self.drag_to(props, center, host) {
            settled.crop = position;
        }

        let Some(last) = self.state.pinch_mut().map(|pinch| *pinch) else {
            return Ok(settled);
        };

        let current_distance = distance(a, b);
        if last.last_distance > 0.0 {
            let new_zoom = props.zoom * (current_distance / last.last_distance);
            if let Some((position, zoom)) = self.propose_zoom(props, new_zoom, center, host)? {
                settled.crop = position;
                settled.zoom = zoom;
            }
        }

        let current_rotation = rotation_between(a, b);
        if host.handles_rotation() {
            settled.rotation = props.rotation + (current_rotation - last.last_rotation);
            host.rotation_change(settled.rotation);
        }

        if let Some(pinch) = self.state.pinch_mut() {
            pinch.last_distance = current_distance;
            pinch.last_rotation = current_rotation;
        }
        Ok(settled)
    }
}

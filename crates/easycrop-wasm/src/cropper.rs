//! WASM bindings for the gesture controller.
//!
//! A [`JsCropper`] owns a [`CropController`] plus the latest props object the
//! page rendered with. Notifications are delivered to the callbacks passed at
//! construction (`onCropChange`, `onZoomChange`, ...). Callbacks are looked up
//! on every notification, so a missing callback simply drops that event.
//!
//! # Usage
//!
//! ```typescript
//! const cropper = new JsCropper({
//!   onCropChange: (crop) => setCrop(crop),
//!   onZoomChange: (zoom) => setZoom(zoom),
//!   onCropComplete: (area, pixels) => save(pixels),
//! }, { aspect: 4 / 3 });
//!
//! const natural = { naturalWidth: img.naturalWidth, naturalHeight: img.naturalHeight };
//! cropper.media_loaded(natural, rect);
//! canvas.onpointermove = (e) => cropper.pointer_move([{ x: e.clientX, y: e.clientY }]);
//! requestAnimationFrame(function loop(now) {
//!   cropper.frame();
//!   cropper.tick(now);
//!   requestAnimationFrame(loop);
//! });
//! ```

use easycrop_core::{
    Area, ContainerRect, CropController, CropperHost, CropperProps, MediaMeasurement, MediaSize,
    Point, Size, WheelInput,
};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::{from_js, parse_pointer_kind, to_js};

/// JavaScript callbacks, one per host notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Callback {
    CropChange,
    ZoomChange,
    RotationChange,
    CropSizeChange,
    CropComplete,
    CropAreaChange,
    InteractionStart,
    InteractionEnd,
    MediaLoaded,
}

impl Callback {
    /// Property name looked up on the callbacks object.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Callback::CropChange => "onCropChange",
            Callback::ZoomChange => "onZoomChange",
            Callback::RotationChange => "onRotationChange",
            Callback::CropSizeChange => "onCropSizeChange",
            Callback::CropComplete => "onCropComplete",
            Callback::CropAreaChange => "onCropAreaChange",
            Callback::InteractionStart => "onInteractionStart",
            Callback::InteractionEnd => "onInteractionEnd",
            Callback::MediaLoaded => "onMediaLoaded",
        }
    }
}

/// Host that forwards notifications to JS callback functions.
struct JsHost {
    callbacks: JsValue,
}

impl JsHost {
    fn function(&self, callback: Callback) -> Option<Function> {
        Reflect::get(&self.callbacks, &JsValue::from_str(callback.name()))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn emit(&self, callback: Callback, args: &[JsValue]) {
        let Some(function) = self.function(callback) else {
            return;
        };
        let args: Array = args.iter().collect();
        if let Err(err) = function.apply(&JsValue::NULL, &args) {
            warn(&format!("{} threw", callback.name()), &err);
        }
    }

    fn emit_value<T: Serialize>(&self, callback: Callback, value: &T) {
        match to_js(value) {
            Ok(value) => self.emit(callback, &[value]),
            Err(err) => warn(&format!("could not serialize {} argument", callback.name()), &err),
        }
    }

    fn emit_areas(&self, callback: Callback, percentages: Area, pixels: Area) {
        match (to_js(&percentages), to_js(&pixels)) {
            (Ok(percentages), Ok(pixels)) => self.emit(callback, &[percentages, pixels]),
            (Err(err), _) | (_, Err(err)) => {
                warn(&format!("could not serialize {} arguments", callback.name()), &err)
            }
        }
    }
}

impl CropperHost for JsHost {
    fn crop_change(&mut self, crop: Point) {
        self.emit_value(Callback::CropChange, &crop);
    }

    fn zoom_change(&mut self, zoom: f64) {
        self.emit(Callback::ZoomChange, &[JsValue::from_f64(zoom)]);
    }

    fn rotation_change(&mut self, rotation: f64) {
        self.emit(Callback::RotationChange, &[JsValue::from_f64(rotation)]);
    }

    fn crop_size_change(&mut self, crop_size: Size) {
        self.emit_value(Callback::CropSizeChange, &crop_size);
    }

    fn crop_complete(&mut self, percentages: Area, pixels: Area) {
        self.emit_areas(Callback::CropComplete, percentages, pixels);
    }

    fn crop_area_change(&mut self, percentages: Area, pixels: Area) {
        self.emit_areas(Callback::CropAreaChange, percentages, pixels);
    }

    fn interaction_start(&mut self) {
        self.emit(Callback::InteractionStart, &[]);
    }

    fn interaction_end(&mut self) {
        self.emit(Callback::InteractionEnd, &[]);
    }

    fn media_loaded(&mut self, media: MediaSize) {
        self.emit_value(Callback::MediaLoaded, &media);
    }

    fn handles_zoom(&self) -> bool {
        self.function(Callback::ZoomChange).is_some()
    }

    fn handles_rotation(&self) -> bool {
        self.function(Callback::RotationChange).is_some()
    }
}

fn warn(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(&format!("easycrop: {}", context)), err);
}

/// A cropper surface driven from JavaScript.
#[wasm_bindgen]
pub struct JsCropper {
    controller: CropController,
    host: JsHost,
    props: CropperProps,
}

#[wasm_bindgen]
impl JsCropper {
    /// Create a cropper.
    ///
    /// # Arguments
    /// * `callbacks` - Object holding the `on*` notification callbacks
    /// * `props` - Initial props; missing fields take their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(callbacks: JsValue, props: JsValue) -> Result<JsCropper, JsValue> {
        let props: Option<CropperProps> = from_js(props, "props")?;
        Ok(JsCropper {
            controller: CropController::new(),
            host: JsHost { callbacks },
            props: props.unwrap_or_default(),
        })
    }

    /// Replace the props after the page re-rendered with new values.
    ///
    /// Call this after applying any proposal the cropper sent, so that the
    /// next gesture step starts from the applied state.
    pub fn set_props(&mut self, props: JsValue) -> Result<(), JsValue> {
        let next: CropperProps = from_js(props, "props")?;
        let prev = std::mem::replace(&mut self.props, next);
        self.controller.props_changed(&prev, &self.props, &mut self.host);
        Ok(())
    }

    /// Current props as a plain object.
    pub fn props(&self) -> Result<JsValue, JsValue> {
        to_js(&self.props)
    }

    /// The media element finished loading.
    ///
    /// `measurement` is `{ naturalWidth, naturalHeight, rendered? }` and
    /// `container` is the container's `{ left, top, width, height }`.
    pub fn media_loaded(
        &mut self,
        measurement: JsValue,
        container: JsValue,
    ) -> Result<(), JsValue> {
        let measurement: MediaMeasurement = from_js(measurement, "media measurement")?;
        let container: ContainerRect = from_js(container, "container")?;
        self.controller
            .media_loaded(&self.props, measurement, container, &mut self.host);
        Ok(())
    }

    /// The container resized. Pass a new measurement if the media was re-measured.
    pub fn resize(&mut self, container: JsValue, measurement: JsValue) -> Result<(), JsValue> {
        let container: ContainerRect = from_js(container, "container")?;
        let measurement: Option<MediaMeasurement> = from_js(measurement, "media measurement")?;
        self.controller
            .resize(&self.props, container, measurement, &mut self.host);
        Ok(())
    }

    /// A pointer went down. `kind` is `"mouse"`, `"pen"` or `"touch"`.
    pub fn pointer_down(&mut self, kind: &str, points: JsValue) -> Result<(), JsValue> {
        let kind = parse_pointer_kind(kind).map_err(|e| JsValue::from_str(&e))?;
        let points: Vec<Point> = from_js(points, "points")?;
        self.controller
            .pointer_down(&self.props, kind, &points, &mut self.host);
        Ok(())
    }

    /// Pointer movement; processed on the next `frame` call.
    ///
    /// A single point during a pinch ends the gesture.
    pub fn pointer_move(&mut self, points: JsValue) -> Result<(), JsValue> {
        let points: Vec<Point> = from_js(points, "points")?;
        self.controller
            .pointer_move(&self.props, &points, &mut self.host);
        Ok(())
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up(&self.props, &mut self.host);
    }

    /// Wheel event: `{ x, y, deltaY, deltaMode?, timestampMs }`.
    pub fn wheel(&mut self, input: JsValue) -> Result<(), JsValue> {
        let input: WheelInput = from_js(input, "wheel input")?;
        self.controller
            .wheel(&self.props, input, &mut self.host)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run the pending pointer move. Call once per animation frame.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.controller
            .frame(&self.props, &mut self.host)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance the clock used by the wheel session.
    pub fn tick(&mut self, now_ms: f64) {
        self.controller.tick(now_ms, &mut self.host);
    }

    /// Zoom to `zoom` around the screen point (`x`, `y`).
    pub fn zoom_at_point(&mut self, zoom: f64, x: f64, y: f64) -> Result<(), JsValue> {
        self.controller
            .zoom_at_point(&self.props, zoom, Point::new(x, y), &mut self.host)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current `{ croppedArea, croppedAreaPixels }`, or `undefined` before load.
    pub fn crop_data(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.crop_data(&self.props))
    }

    /// Current crop window size, or `undefined` before load.
    pub fn crop_size(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.crop_size())
    }

    /// Cancel pending work. No callback is invoked afterwards.
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_names() {
        assert_eq!(Callback::CropChange.name(), "onCropChange");
        assert_eq!(Callback::CropComplete.name(), "onCropComplete");
        assert_eq!(Callback::CropAreaChange.name(), "onCropAreaChange");
        assert_eq!(Callback::MediaLoaded.name(), "onMediaLoaded");
    }

    #[test]
    fn test_callback_names_are_unique() {
        let all = [
            Callback::CropChange,
            Callback::ZoomChange,
            Callback::RotationChange,
            Callback::CropSizeChange,
            Callback::CropComplete,
            Callback::CropAreaChange,
            Callback::InteractionStart,
            Callback::InteractionEnd,
            Callback::MediaLoaded,
        ];
        let mut names: Vec<_> = all.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Callback that appends its first argument to `log`.
    fn recorder(log: &Array) -> Function {
        Function::new_with_args("value", "this.push(value === undefined ? null : value)").bind(log)
    }

    fn callbacks(crops: &Array, zooms: &Array, starts: &Array) -> JsValue {
        let callbacks = Object::new();
        Reflect::set(&callbacks, &"onCropChange".into(), &recorder(crops)).unwrap();
        Reflect::set(&callbacks, &"onZoomChange".into(), &recorder(zooms)).unwrap();
        Reflect::set(&callbacks, &"onInteractionStart".into(), &recorder(starts)).unwrap();
        callbacks.into()
    }

    fn loaded(callbacks: JsValue, props: &CropperProps) -> JsCropper {
        let mut cropper = JsCropper::new(callbacks, to_js(props).unwrap()).unwrap();
        let measurement = MediaMeasurement::new(1000.0, 1000.0).with_rendered(500.0, 500.0);
        let measurement = to_js(&measurement).unwrap();
        let container = to_js(&ContainerRect::new(0.0, 0.0, 500.0, 500.0)).unwrap();
        cropper.media_loaded(measurement, container).unwrap();
        cropper
    }

    fn square(zoom: f64) -> CropperProps {
        CropperProps {
            aspect: 1.0,
            zoom,
            ..CropperProps::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_media_loaded_reports_crop() {
        let (crops, zooms, starts) = (Array::new(), Array::new(), Array::new());
        let cropper = loaded(callbacks(&crops, &zooms, &starts), &square(1.0));

        assert_eq!(crops.length(), 1);
        let crop: Point = from_js(crops.get(0), "crop").unwrap();
        assert_eq!(crop, Point::new(0.0, 0.0));

        let size: Option<Size> = from_js(cropper.crop_size().unwrap(), "size").unwrap();
        assert_eq!(size, Some(Size::new(500.0, 500.0)));
    }

    #[wasm_bindgen_test]
    fn test_drag_runs_on_frame() {
        let (crops, zooms, starts) = (Array::new(), Array::new(), Array::new());
        let mut cropper = loaded(callbacks(&crops, &zooms, &starts), &square(2.0));

        let down = to_js(&vec![Point::new(100.0, 100.0)]).unwrap();
        cropper.pointer_down("mouse", down).unwrap();
        let moved = to_js(&vec![Point::new(120.0, 100.0)]).unwrap();
        cropper.pointer_move(moved).unwrap();
        assert_eq!(crops.length(), 1);

        cropper.frame().unwrap();
        assert_eq!(starts.length(), 1);
        let crop: Point = from_js(crops.get(1), "crop").unwrap();
        assert_eq!(crop, Point::new(20.0, 0.0));
    }

    #[wasm_bindgen_test]
    fn test_wheel_zooms() {
        let (crops, zooms, starts) = (Array::new(), Array::new(), Array::new());
        let mut cropper = loaded(callbacks(&crops, &zooms, &starts), &square(1.0));

        let input = WheelInput {
            x: 250.0,
            y: 250.0,
            delta_y: -100.0,
            delta_mode: Default::default(),
            timestamp_ms: 0.0,
        };
        cropper.wheel(to_js(&input).unwrap()).unwrap();
        assert_eq!(zooms.get(0).as_f64(), Some(1.5));
    }

    #[wasm_bindgen_test]
    fn test_missing_zoom_callback_disables_zoom() {
        let crops = Array::new();
        let callbacks = Object::new();
        Reflect::set(&callbacks, &"onCropChange".into(), &recorder(&crops)).unwrap();
        let mut cropper = loaded(callbacks.into(), &square(1.0));

        cropper.zoom_at_point(2.0, 250.0, 250.0).unwrap();
        assert_eq!(crops.length(), 1);
    }

    #[wasm_bindgen_test]
    fn test_throwing_callback_does_not_panic() {
        let callbacks = Object::new();
        let throwing = Function::new_no_args("throw new Error('boom')");
        Reflect::set(&callbacks, &"onCropChange".into(), &throwing).unwrap();
        let cropper = loaded(callbacks.into(), &square(1.0));
        assert!(!cropper.crop_data().unwrap().is_undefined());
    }

    #[wasm_bindgen_test]
    fn test_invalid_pointer_kind() {
        let mut cropper = JsCropper::new(Object::new().into(), JsValue::UNDEFINED).unwrap();
        let points = to_js(&vec![Point::default()]).unwrap();
        assert!(cropper.pointer_down("stylus", points).is_err());
    }

    #[wasm_bindgen_test]
    fn test_teardown_silences_callbacks() {
        let (crops, zooms, starts) = (Array::new(), Array::new(), Array::new());
        let mut cropper = loaded(callbacks(&crops, &zooms, &starts), &square(2.0));
        cropper.teardown();

        let points = to_js(&vec![Point::default()]).unwrap();
        cropper.pointer_down("touch", points).unwrap();
        cropper.frame().unwrap();
        assert_eq!(crops.length(), 1);
        assert_eq!(starts.length(), 0);
    }
}

//! Recording host for controller tests.

use crate::{Area, CropperHost, MediaSize, Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Crop(Point),
    Zoom(f64),
    Rotation(f64),
    CropSize(Size),
    Complete(Area, Area),
    AreaChange(Area, Area),
    InteractionStart,
    InteractionEnd,
    MediaLoaded(MediaSize),
}

/// Host that records every notification in order.
#[derive(Debug, Clone)]
pub(crate) struct RecordingHost {
    pub events: Vec<Event>,
    pub zoom_enabled: bool,
    pub rotation_enabled: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            zoom_enabled: true,
            rotation_enabled: false,
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn crops(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Crop(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn zooms(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Zoom(z) => Some(*z),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Rotation(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn crop_sizes(&self) -> Vec<Size> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::CropSize(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn completes(&self) -> usize {
        self.count(|e| matches!(e, Event::Complete(..)))
    }

    pub fn area_changes(&self) -> usize {
        self.count(|e| matches!(e, Event::AreaChange(..)))
    }

    pub fn starts(&self) -> usize {
        self.count(|e| matches!(e, Event::InteractionStart))
    }

    pub fn ends(&self) -> usize {
        self.count(|e| matches!(e, Event::InteractionEnd))
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl CropperHost for RecordingHost {
    fn crop_change(&mut self, crop: Point) {
        self.events.push(Event::Crop(crop));
    }

    fn zoom_change(&mut self, zoom: f64) {
        self.events.push(Event::Zoom(zoom));
    }

    fn rotation_change(&mut self, rotation: f64) {
        self.events.push(Event::Rotation(rotation));
    }

    fn crop_size_change(&mut self, crop_size: Size) {
        self.events.push(Event::CropSize(crop_size));
    }

    fn crop_complete(&mut self, percentages: Area, pixels: Area) {
        self.events.push(Event::Complete(percentages, pixels));
    }

    fn crop_area_change(&mut self, percentages: Area, pixels: Area) {
        self.events.push(Event::AreaChange(percentages, pixels));
    }

    fn interaction_start(&mut self) {
        self.events.push(Event::InteractionStart);
    }

    fn interaction_end(&mut self) {
        self.events.push(Event::InteractionEnd);
    }

    fn media_loaded(&mut self, media: MediaSize) {
        self.events.push(Event::MediaLoaded(media));
    }

    fn handles_zoom(&self) -> bool {
        self.zoom_enabled
    }

    fn handles_rotation(&self) -> bool {
        self.rotation_enabled
    }
}

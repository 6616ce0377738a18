use crate::interface::LayoutChild;
use wrapflow_types::geometry::{Rect, Size};

/// A child that records every constraint and rectangle it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingChild {
    pub intrinsic: Size,
    pub desired: Size,
    pub constraints: Vec<Size>,
    pub rects: Vec<Rect>,
}

impl RecordingChild {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn last_rect(&self) -> Option<Rect> {
        self.rects.last().copied()
    }
}

impl LayoutChild for RecordingChild {
    fn measure(&mut self, constraint: Size) {
        self.constraints.push(constraint);
        self.desired = self.intrinsic;
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.rects.push(rect);
    }
}

pub fn recording_children(dims: &[(f32, f32)]) -> Vec<RecordingChild> {
    dims.iter().map(|&(w, h)| RecordingChild::new(w, h)).collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

use serde::{Deserialize, Serialize};

/// A positioned rectangle in the coordinate space of the arranging panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A `(width, height)` pair.
///
/// Either dimension may be `f32::INFINITY` when used as a measure constraint,
/// meaning the child may size to its content along that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// A constraint that leaves both axes unbounded.
    pub fn infinite() -> Self {
        Self {
            width: f32::INFINITY,
            height: f32::INFINITY,
        }
    }

    pub fn has_bounded_width(self) -> bool {
        self.width.is_finite()
    }

    pub fn has_bounded_height(self) -> bool {
        self.height.is_finite()
    }

    /// True when neither dimension is NaN or negative.
    pub fn is_well_formed(self) -> bool {
        !(self.width.is_nan() || self.height.is_nan() || self.width < 0.0 || self.height < 0.0)
    }
}

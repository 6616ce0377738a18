use crate::LayoutError;
use crate::interface::LayoutChild;
use wrapflow_types::geometry::{Rect, Size};

/// A leaf child with a fixed intrinsic size.
///
/// Its desired size is the intrinsic size regardless of the constraint, so a
/// box wider than the panel stays wider. It remembers the last constraint it
/// was measured against and the last rectangle it was arranged into.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxElement {
    pub id: Option<String>,
    intrinsic: Size,
    desired: Size,
    constraint: Option<Size>,
    arranged: Option<Rect>,
}

impl BoxElement {
    pub fn new(intrinsic: Size) -> Self {
        Self {
            id: None,
            intrinsic,
            desired: Size::zero(),
            constraint: None,
            arranged: None,
        }
    }

    /// Builds the `index`-th child of a panel, rejecting NaN, negative or infinite sizes.
    pub fn checked(index: usize, intrinsic: Size) -> Result<Self, LayoutError> {
        let finite = intrinsic.width.is_finite() && intrinsic.height.is_finite();
        if !finite || !intrinsic.is_well_formed() {
            return Err(LayoutError::InvalidSize {
                index,
                width: intrinsic.width,
                height: intrinsic.height,
            });
        }
        Ok(Self::new(intrinsic))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The constraint passed to the most recent measure, if any.
    pub fn last_constraint(&self) -> Option<Size> {
        self.constraint
    }

    /// The rectangle assigned by the most recent arrange, if any.
    pub fn arranged_rect(&self) -> Option<Rect> {
        self.arranged
    }
}

impl LayoutChild for BoxElement {
    fn measure(&mut self, constraint: Size) {
        self.constraint = Some(constraint);
        self.desired = self.intrinsic;
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.arranged = Some(rect);
    }
}

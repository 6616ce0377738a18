use wrapflow_types::geometry::{Rect, Size};

/// The capabilities a panel needs from each of its children.
///
/// The host owns the children; a panel only borrows them for the duration of
/// a single measure or arrange pass.
pub trait LayoutChild {
    /// Measures the child against `constraint` and caches the result, which
    /// is then available from [`LayoutChild::desired_size`].
    fn measure(&mut self, constraint: Size);

    /// The size cached by the last call to [`LayoutChild::measure`].
    fn desired_size(&self) -> Size;

    /// Places the child in the panel's coordinate space.
    fn arrange(&mut self, rect: Rect);
}

impl<T: LayoutChild + ?Sized> LayoutChild for &mut T {
    fn measure(&mut self, constraint: Size) {
        (**self).measure(constraint)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

impl<T: LayoutChild + ?Sized> LayoutChild for Box<T> {
    fn measure(&mut self, constraint: Size) {
        (**self).measure(constraint)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

/// Sizes handed to the arrange pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrangeContext {
    /// The area the parent assigned to the panel.
    pub final_size: Size,
    /// The panel's resolved render size, used as the row height whenever a
    /// single row is stretched to fill the panel.
    pub render_size: Size,
}

impl ArrangeContext {
    /// A context whose render size equals the final size.
    pub fn new(final_size: Size) -> Self {
        Self {
            final_size,
            render_size: final_size,
        }
    }

    pub fn with_render_size(mut self, render_size: Size) -> Self {
        self.render_size = render_size;
        self
    }
}

/// The two entry points a host container calls during its layout cycle.
pub trait Panel {
    /// Measures every child and returns the size the panel needs.
    ///
    /// Must not move any child.
    fn measure_layout<C: LayoutChild>(&self, children: &mut [C], available: Size) -> Size;

    /// Positions every child using the sizes cached by the last measure pass.
    ///
    /// Returns the size actually consumed, which is always `ctx.final_size`.
    fn arrange_layout_with<C: LayoutChild>(
        &self,
        children: &mut [C],
        ctx: ArrangeContext,
    ) -> Size;

    /// [`Panel::arrange_layout_with`] with the final size doubling as render size.
    fn arrange_layout<C: LayoutChild>(&self, children: &mut [C], final_size: Size) -> Size {
        self.arrange_layout_with(children, ArrangeContext::new(final_size))
    }
}

/// Reads back the desired sizes of `children` in order.
pub fn desired_sizes<C: LayoutChild>(children: &[C]) -> Vec<Size> {
    children.iter().map(LayoutChild::desired_size).collect()
}

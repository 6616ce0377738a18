use crate::algorithms::{
    Line, is_unbroken, pack_lines, place_lines, place_single_line, stacked_size,
};
use crate::config::{LayoutConfig, WrapMode};
use crate::interface::{ArrangeContext, LayoutChild, Panel, desired_sizes};
use serde::Serialize;
use wrapflow_types::geometry::{Rect, Size};

/// Where an arrange pass put the children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrangement {
    pub lines: Vec<Line>,
    /// One rectangle per child, in child order.
    pub rects: Vec<Rect>,
    /// True when the children share one row stretched to the render height.
    pub stretched: bool,
    /// The size reported back to the host.
    pub size: Size,
}

/// A panel that flows its children left to right and wraps them onto new
/// rows when the available width runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WrapPanel {
    config: LayoutConfig,
}

impl WrapPanel {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn greedy() -> Self {
        Self::new(LayoutConfig::with_mode(WrapMode::Greedy))
    }

    pub fn stretch() -> Self {
        Self::new(LayoutConfig::with_mode(WrapMode::Stretch))
    }

    pub fn mode(&self) -> WrapMode {
        self.config.mode
    }

    /// Measures every child against the full `available` size and returns
    /// the widest line by the summed line heights.
    ///
    /// Children never get a tighter per-line width constraint.
    pub fn compute_required_size<C: LayoutChild>(
        &self,
        children: &mut [C],
        available: Size,
    ) -> Size {
        for child in children.iter_mut() {
            child.measure(available);
        }

        let lines = pack_lines(
            children.iter().map(LayoutChild::desired_size),
            available.width,
        );
        let size = stacked_size(&lines);
        log::debug!(
            "{} wrap panel measured {} children into {} lines: {:.2} x {:.2}",
            self.config.mode,
            children.len(),
            lines.len(),
            size.width,
            size.height
        );
        size
    }

    /// Whether the summed desired widths fit within `final_width`.
    pub fn children_fit_in_one_line<C: LayoutChild>(children: &[C], final_width: f32) -> bool {
        fits_in_one_line(children.iter().map(LayoutChild::desired_size), final_width)
    }

    /// Computes the arrangement for children with the given desired sizes
    /// without touching any child.
    pub fn plan(&self, desired: &[Size], ctx: ArrangeContext) -> Arrangement {
        let stretch_fits = self.config.mode == WrapMode::Stretch
            && fits_in_one_line(desired.iter().copied(), ctx.final_size.width);

        if stretch_fits {
            single_line_arrangement(desired, ctx)
        } else {
            self.multi_line_arrangement(desired, ctx)
        }
    }

    /// Positions every child on one row at `y = 0`, each `render_height` tall.
    pub fn arrange_single_line<C: LayoutChild>(&self, children: &mut [C], render_height: f32) {
        let desired = desired_sizes(children);
        apply(children, &place_single_line(&desired, render_height));
    }

    /// Wraps children onto as many rows as needed. Each row is as tall as its
    /// tallest child.
    ///
    /// In greedy mode a result that never broke a line is placed at the
    /// render height instead, unless `stretch_single_line` is turned off.
    pub fn arrange_multi_line<C: LayoutChild>(
        &self,
        children: &mut [C],
        ctx: ArrangeContext,
    ) -> Size {
        let desired = desired_sizes(children);
        let arrangement = self.multi_line_arrangement(&desired, ctx);
        apply(children, &arrangement.rects);
        arrangement.size
    }

    /// Arranges the children and reports the lines and rectangles used.
    pub fn arrange_children<C: LayoutChild>(
        &self,
        children: &mut [C],
        ctx: ArrangeContext,
    ) -> Arrangement {
        let desired = desired_sizes(children);
        let arrangement = self.plan(&desired, ctx);
        apply(children, &arrangement.rects);

        log::debug!(
            "{} wrap panel arranged {} children in {} lines (stretched: {}) within {:.2} x {:.2}",
            self.config.mode,
            children.len(),
            arrangement.lines.len(),
            arrangement.stretched,
            ctx.final_size.width,
            ctx.final_size.height
        );
        arrangement
    }

    fn multi_line_arrangement(&self, desired: &[Size], ctx: ArrangeContext) -> Arrangement {
        let lines = pack_lines(desired.iter().copied(), ctx.final_size.width);
        let stretch_unbroken = self.config.mode == WrapMode::Greedy
            && self.config.stretch_single_line
            && is_unbroken(&lines);

        if stretch_unbroken {
            return single_line_arrangement(desired, ctx);
        }

        Arrangement {
            rects: place_lines(desired, &lines),
            lines,
            stretched: false,
            size: ctx.final_size,
        }
    }
}

impl Panel for WrapPanel {
    fn measure_layout<C: LayoutChild>(&self, children: &mut [C], available: Size) -> Size {
        self.compute_required_size(children, available)
    }

    fn arrange_layout_with<C: LayoutChild>(
        &self,
        children: &mut [C],
        ctx: ArrangeContext,
    ) -> Size {
        self.arrange_children(children, ctx).size
    }
}

fn fits_in_one_line(desired: impl Iterator<Item = Size>, final_width: f32) -> bool {
    desired.map(|size| size.width).sum::<f32>() <= final_width
}

fn single_line_arrangement(desired: &[Size], ctx: ArrangeContext) -> Arrangement {
    let render_height = ctx.render_size.height;
    let mut lines = pack_lines(desired.iter().copied(), f32::INFINITY);
    for line in &mut lines {
        line.height = render_height;
    }

    Arrangement {
        rects: place_single_line(desired, render_height),
        lines,
        stretched: true,
        size: ctx.final_size,
    }
}

fn apply<C: LayoutChild>(children: &mut [C], rects: &[Rect]) {
    debug_assert_eq!(children.len(), rects.len());
    for (child, rect) in children.iter_mut().zip(rects) {
        child.arrange(*rect);
    }
}

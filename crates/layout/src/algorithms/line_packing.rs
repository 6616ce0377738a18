use serde::Serialize;
use std::ops::Range;
use wrapflow_types::geometry::Size;

/// One row of children, covering the index range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    /// Sum of the desired widths in the line.
    pub width: f32,
    /// Tallest desired height in the line.
    pub height: f32,
    /// A singleton line whose only child is wider than the available width.
    pub oversized: bool,
}

impl Line {
    fn empty_at(start: usize) -> Self {
        Self {
            start,
            end: start,
            width: 0.0,
            height: 0.0,
            oversized: false,
        }
    }

    fn starting_with(index: usize, size: Size) -> Self {
        Self {
            start: index,
            end: index + 1,
            width: size.width,
            height: size.height,
            oversized: false,
        }
    }

    fn oversized(index: usize, size: Size) -> Self {
        Self {
            oversized: true,
            ..Self::starting_with(index, size)
        }
    }

    fn extend(&mut self, size: Size) {
        self.end += 1;
        self.width += size.width;
        self.height = self.height.max(size.height);
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Fold state for greedy left-to-right line packing.
///
/// Children are pushed in order. A child that would overflow the open line
/// closes it; a child that alone overflows `available_width` gets a line of
/// its own and the following child opens a fresh one.
#[derive(Debug, Clone)]
pub struct LinePacker {
    available_width: f32,
    next_index: usize,
    current: Line,
    lines: Vec<Line>,
}

impl LinePacker {
    pub fn new(available_width: f32) -> Self {
        Self {
            available_width,
            next_index: 0,
            current: Line::empty_at(0),
            lines: Vec::new(),
        }
    }

    pub fn push(mut self, size: Size) -> Self {
        let index = self.next_index;
        self.next_index += 1;

        // Strict comparison: a child that exactly fills the row stays on it.
        if self.current.width + size.width > self.available_width {
            self.close_current();
            if size.width > self.available_width {
                self.lines.push(Line::oversized(index, size));
                self.current = Line::empty_at(index + 1);
            } else {
                self.current = Line::starting_with(index, size);
            }
        } else {
            self.current.extend(size);
        }
        self
    }

    pub fn finish(mut self) -> Vec<Line> {
        self.close_current();
        self.lines
    }

    fn close_current(&mut self) {
        if !self.current.is_empty() {
            log::trace!(
                "closing line {:?} ({:.2} x {:.2})",
                self.current.range(),
                self.current.width,
                self.current.height
            );
            self.lines.push(self.current);
        }
    }
}

/// Partitions children with the given desired sizes into lines no wider than
/// `available_width`, except for oversized singleton lines.
pub fn pack_lines<I>(sizes: I, available_width: f32) -> Vec<Line>
where
    I: IntoIterator<Item = Size>,
{
    sizes
        .into_iter()
        .fold(LinePacker::new(available_width), LinePacker::push)
        .finish()
}

/// The size a stack of lines occupies: widest line by summed heights.
pub fn stacked_size(lines: &[Line]) -> Size {
    lines.iter().fold(Size::zero(), |acc, line| {
        Size::new(acc.width.max(line.width), acc.height + line.height)
    })
}

/// True when packing produced at most one ordinary line, i.e. no child ever
/// forced a break.
pub fn is_unbroken(lines: &[Line]) -> bool {
    match lines {
        [] => true,
        [only] => !only.oversized,
        _ => false,
    }
}

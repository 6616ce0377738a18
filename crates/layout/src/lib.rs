use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Child {index} has invalid size {width} x {height}; expected finite, non-negative values.")]
    InvalidSize { index: usize, width: f32, height: f32 },
    #[error("Unknown wrap mode '{0}', expected 'greedy' or 'stretch'.")]
    UnknownMode(String),
}

pub mod algorithms;
pub mod config;
pub mod elements;
pub mod interface;
pub mod nodes;

pub use self::config::{LayoutConfig, WrapMode};
pub use self::elements::BoxElement;
pub use self::nodes::{Arrangement, WrapPanel};

// Re-export geometry types so hosts need not depend on the types crate directly
pub use wrapflow_types::geometry::{Rect, Size};

// Re-export interface types used by hosts
pub use self::interface::{ArrangeContext, LayoutChild, Panel, desired_sizes};
pub use self::algorithms::Line;

#[cfg(test)]
mod test_utils;

pub mod error;
pub mod scene;

pub use error::WrapflowError;
pub use scene::{ChildLayout, Scene, SceneChild, SceneLayout, SceneSize, run_scene};

pub use wrapflow_layout::{
    ArrangeContext, Arrangement, BoxElement, LayoutChild, LayoutConfig, LayoutError, Line, Panel,
    WrapMode, WrapPanel,
};
pub use wrapflow_types::{Rect, Size};

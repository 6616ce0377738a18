#[allow(dead_code)]
pub mod fixtures;

use serde_json::Value;
use wrapflow::{Rect, SceneLayout, WrapflowError};

#[allow(dead_code)]
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs a scene given as a JSON value.
#[allow(dead_code)]
pub fn layout_scene(scene: &Value) -> Result<SceneLayout, WrapflowError> {
    let json = serde_json::to_string(scene)?;
    let scene = wrapflow::Scene::from_json(&json)?;
    wrapflow::run_scene(&scene)
}

/// The arranged rectangles of a scene layout, in child order.
#[allow(dead_code)]
pub fn rects(layout: &SceneLayout) -> Vec<Rect> {
    layout.children.iter().map(|child| child.rect).collect()
}

/// Asserts that a scene layout placed its children at the given `(x, y, width, height)` rects.
#[macro_export]
macro_rules! assert_rects {
    ($layout:expr, [$(($x:expr, $y:expr, $w:expr, $h:expr)),* $(,)?]) => {{
        let expected: Vec<wrapflow::Rect> = vec![$(wrapflow::Rect::new($x, $y, $w, $h)),*];
        assert_eq!($crate::common::rects(&$layout), expected);
    }};
}

//! Scene documents: a headless host for running a wrap panel over plain boxes.
//!
//! A scene describes the panel configuration, the size offered by the parent
//! and the intrinsic size of every child. [`run_scene`] performs both layout
//! passes and reports where each child ended up.

use crate::WrapflowError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wrapflow_layout::{
    ArrangeContext, BoxElement, LayoutChild, LayoutConfig, LayoutError, Line, Panel, WrapMode,
    WrapPanel,
};
use wrapflow_types::geometry::{Rect, Size};

/// A size whose dimensions may be left unconstrained (`null` or missing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSize {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl SceneSize {
    pub fn bounded(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Unconstrained dimensions become `f32::INFINITY`.
    pub fn resolve(&self) -> Size {
        Size::new(
            self.width.unwrap_or(f32::INFINITY),
            self.height.unwrap_or(f32::INFINITY),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneChild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(flatten)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub available: SceneSize,
    /// The final size handed to the arrange pass. Negotiated from the
    /// available and measured sizes when absent.
    #[serde(default, rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_size: Option<Size>,
    #[serde(default)]
    pub children: Vec<SceneChild>,
}

impl Scene {
    pub fn new(mode: WrapMode, available: SceneSize) -> Self {
        Self {
            layout: LayoutConfig::with_mode(mode),
            available,
            final_size: None,
            render_size: None,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, width: f32, height: f32) -> Self {
        self.children.push(SceneChild {
            id: None,
            width,
            height,
        });
        self
    }

    pub fn from_json(json: &str) -> Result<Self, WrapflowError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WrapflowError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects children whose size is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.elements().map(|_| ())
    }

    /// Builds one [`BoxElement`] per child, in document order.
    pub fn elements(&self) -> Result<Vec<BoxElement>, LayoutError> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let element = BoxElement::checked(index, Size::new(child.width, child.height))?;
                Ok(match &child.id {
                    Some(id) => element.with_id(id.clone()),
                    None => element,
                })
            })
            .collect()
    }

    pub fn panel(&self) -> WrapPanel {
        WrapPanel::new(self.layout)
    }

    /// The final size for the arrange pass: the explicit `final` size when
    /// given, otherwise each bounded available dimension, falling back to the
    /// measured dimension where the parent left it unconstrained.
    pub fn negotiate_final_size(&self, measured: Size) -> Size {
        if let Some(final_size) = self.final_size {
            return final_size;
        }
        let available = self.available.resolve();
        Size::new(
            if available.has_bounded_width() { available.width } else { measured.width },
            if available.has_bounded_height() { available.height } else { measured.height },
        )
    }
}

/// Where a single child ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub desired: Size,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLayout {
    pub mode: WrapMode,
    /// Result of the measure pass.
    pub measured: Size,
    /// Size returned by the arrange pass.
    pub arranged: Size,
    pub stretched: bool,
    pub lines: Vec<Line>,
    pub children: Vec<ChildLayout>,
}

/// Runs the measure and arrange passes over the scene's children.
pub fn run_scene(scene: &Scene) -> Result<SceneLayout, WrapflowError> {
    let mut children = scene.elements()?;
    let panel = scene.panel();

    let available = scene.available.resolve();
    let measured = panel.measure_layout(&mut children, available);

    let final_size = scene.negotiate_final_size(measured);
    let ctx = match scene.render_size {
        Some(render_size) => ArrangeContext::new(final_size).with_render_size(render_size),
        None => ArrangeContext::new(final_size),
    };
    let arrangement = panel.arrange_children(&mut children, ctx);

    log::info!(
        "Laid out {} children in {} lines ({} mode)",
        children.len(),
        arrangement.lines.len(),
        panel.mode()
    );

    let children = children
        .into_iter()
        .map(|element| ChildLayout {
            desired: element.desired_size(),
            rect: element.arranged_rect().unwrap_or_default(),
            id: element.id,
        })
        .collect();

    Ok(SceneLayout {
        mode: panel.mode(),
        measured,
        arranged: arrangement.size,
        stretched: arrangement.stretched,
        lines: arrangement.lines,
        children,
    })
}

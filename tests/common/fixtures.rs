use serde_json::{Value, json};

/// A child box with the given intrinsic size.
pub fn child(width: f32, height: f32) -> Value {
    json!({ "width": width, "height": height })
}

/// A named child box with the given intrinsic size.
pub fn named_child(id: &str, width: f32, height: f32) -> Value {
    json!({ "id": id, "width": width, "height": height })
}

/// A scene with a bounded available size and the given children.
pub fn scene(mode: &str, width: f32, height: f32, children: Vec<Value>) -> Value {
    json!({
        "mode": mode,
        "available": { "width": width, "height": height },
        "children": children
    })
}

/// A scene whose available height is left unconstrained.
pub fn scene_with_open_height(mode: &str, width: f32, children: Vec<Value>) -> Value {
    json!({
        "mode": mode,
        "available": { "width": width, "height": null },
        "children": children
    })
}

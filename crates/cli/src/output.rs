//! Text and JSON renderings of a planned path.

use anyhow::Result;
use detour::Path;
use serde::Serialize;

pub const RESULT_PREFIX: &str =
    "A polygonal line that connect point A and B and does not cross polygonal line L has vertexes";

#[derive(Debug, Serialize)]
struct PathDoc {
    path: Vec<[f64; 2]>,
    vertices: usize,
    /// `(segment, edge)` of the first residual crossing, if any.
    residual_crossing: Option<(usize, usize)>,
}

/// `<prefix> (x y), (x y), ....`
pub fn render_text(path: &Path) -> String {
    format!("{RESULT_PREFIX} {path}.")
}

pub fn render_json(path: &Path, residual_crossing: Option<(usize, usize)>) -> Result<String> {
    let doc = PathDoc {
        path: path
            .vertices()
            .iter()
            .map(|v| [v.x.value(), v.y.value()])
            .collect(),
        vertices: path.len(),
        residual_crossing,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

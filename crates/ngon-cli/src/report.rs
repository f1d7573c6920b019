use std::path::Path;

use anyhow::{Context, Result};
use ngondoc::{Document, Ngon};
use serde::Serialize;
use serde_json::{json, Value};

/// Per-figure row of the JSON report.
#[derive(Debug, Serialize)]
pub struct FigureSummary {
    pub index: usize,
    pub kind: &'static str,
    pub vertices: usize,
    pub area: f64,
    pub center: [f64; 2],
    pub points: Vec<[f64; 2]>,
}

impl FigureSummary {
    fn of(index: usize, fig: &Ngon) -> Self {
        let c = fig.centroid();
        Self {
            index,
            kind: fig.name(),
            vertices: fig.vertex_count(),
            area: fig.area(),
            center: [c.x, c.y],
            points: fig.vertices().iter().map(|v| [v.x, v.y]).collect(),
        }
    }
}

/// Load a saved document and describe it as JSON.
pub fn summarize(path: &Path) -> Result<Value> {
    let mut doc = Document::new();
    doc.load(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    let figures: Vec<FigureSummary> = doc
        .iter()
        .enumerate()
        .map(|(i, f)| FigureSummary::of(i, f))
        .collect();
    let total_area: f64 = figures.iter().map(|f| f.area).sum();
    Ok(json!({
        "file": path.to_string_lossy(),
        "version": ngondoc::VERSION,
        "count": figures.len(),
        "total_area": total_area,
        "figures": figures,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn summary_lists_figures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "2\n3 0 0 1 0\n4 2 2 3 2\n").unwrap();
        let report = summarize(&path).unwrap();
        assert_eq!(report["count"], 2);
        assert_eq!(report["figures"][0]["kind"], "Triangle");
        assert_eq!(report["figures"][1]["vertices"], 4);
        assert_eq!(report["figures"][1]["points"].as_array().unwrap().len(), 4);
        let total = report["total_area"].as_f64().unwrap();
        assert!((total - (3.0 * 3f64.sqrt() / 4.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn missing_file_has_context() {
        let dir = tempdir().unwrap();
        let err = summarize(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("reading document"));
    }
}

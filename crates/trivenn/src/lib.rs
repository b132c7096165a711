#![forbid(unsafe_code)]

//! `trivenn` turns (center, surface-function) tables into three-circle
//! overlap diagrams.
//!
//! The root re-exports the data layer. Rendering is opt-in:
//!
//! - `render`: layout + SVG output (`trivenn::render`)
//! - `raster`: PNG output via pure-Rust SVG rasterization

pub use trivenn_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use trivenn_render::model::VennDiagramLayout;
    pub use trivenn_render::svg::{SvgRenderOptions, render_venn_svg};
    pub use trivenn_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use trivenn_render::{Error, LayoutOptions, Result, layout_overlap_map};

    #[cfg(feature = "raster")]
    pub mod raster;

    use trivenn_core::OverlapMap;

    /// Converts an arbitrary string into a conservative SVG `id` token so
    /// multiple diagrams can share a document without their scoped CSS and
    /// internal ids colliding.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "venn-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 5);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "venn-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "venn" {
            return "venn-untitled".to_string();
        }
        out.to_string()
    }

    /// One-call helper: selects the first 3 sets of `map` and renders SVG.
    pub fn render_overlap_svg(
        title: &str,
        map: &OverlapMap,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_overlap_map(title, map, layout_options)?;
        Ok(render_venn_svg(&layout, svg_options))
    }

}

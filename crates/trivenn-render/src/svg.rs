use std::fmt::Write as _;

use crate::model::VennDiagramLayout;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Optional root `<svg id>` value, also used to scope the CSS block.
    pub diagram_id: Option<String>,
}

pub fn render_venn_svg(layout: &VennDiagramLayout, options: &SvgRenderOptions) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("trivenn");
    let diagram_id_esc = escape_xml(diagram_id);

    let vb_w = layout.bounds.width().max(1.0);
    let vb_h = layout.bounds.height().max(1.0);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{diagram_id_esc}" width="100%" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="{min_x} {min_y} {w} {h}" style="max-width: {max_w}px; background-color: white;" role="graphics-document document" aria-roledescription="venn">"#,
        min_x = fmt(layout.bounds.min_x),
        min_y = fmt(layout.bounds.min_y),
        w = fmt(vb_w),
        h = fmt(vb_h),
        max_w = fmt(vb_w),
    );

    let css = venn_css(diagram_id);
    let _ = write!(&mut out, r#"<style>{css}</style>"#);
    out.push_str(r#"<g/>"#);

    out.push_str("<g>");
    for circle in &layout.circles {
        let _ = write!(
            &mut out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" class="vennCircle"/>"#,
            cx = fmt(circle.cx),
            cy = fmt(circle.cy),
            r = fmt(circle.r),
            fill = escape_xml(&circle.fill),
        );
    }

    for circle in &layout.circles {
        let _ = write!(
            &mut out,
            r#"<text x="{x}" y="{y}" class="vennSetLabel">{text}</text>"#,
            x = fmt(circle.label_x),
            y = fmt(circle.label_y),
            text = escape_xml(&circle.label),
        );
    }

    for region in &layout.regions {
        let _ = write!(
            &mut out,
            r#"<text x="{x}" y="{y}" class="vennRegionCount" data-region="{id}">{count}</text>"#,
            x = fmt(region.x),
            y = fmt(region.y),
            id = escape_xml(&region.id),
            count = region.count,
        );
    }

    let _ = write!(
        &mut out,
        r#"<text x="{x}" y="{y}" class="vennTitleText">{text}</text>"#,
        x = fmt(layout.title_x),
        y = fmt(layout.title_y),
        text = escape_xml(&layout.title),
    );

    out.push_str("</g></svg>\n");
    out
}

fn venn_css(diagram_id: &str) -> String {
    let id = escape_xml(diagram_id);
    let font = r#""trebuchet ms",verdana,arial,sans-serif"#;
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"#{id} .vennCircle{{stroke:black;stroke-width:2px;fill-opacity:0.45;}}#{id} .vennSetLabel{{font-family:{font};font-size:17px;fill:black;text-anchor:middle;}}#{id} .vennRegionCount{{font-family:{font};font-size:17px;fill:#333;text-anchor:middle;}}#{id} .vennTitleText{{text-anchor:middle;font-size:25px;fill:black;font-family:{font};}}"#,
    );
    out
}

fn fmt(v: f64) -> String {
    // Every coordinate here is a canvas constant or a clamped label anchor,
    // so two decimals round-trip them without dragging float noise into
    // the attribute text.
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 100.0).round() / 100.0;
    let mut s = format!("{rounded:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

// All attribute values are double-quoted, so the four markup characters
// below are the only ones that can break out of this renderer's output.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

use indexmap::IndexSet;
use trivenn_core::NamedSet;

use crate::model::{Bounds, VennCircleLayout, VennDiagramLayout, VennRegionLayout};
use crate::text::{TextMeasurer, TextStyle};
use crate::{Error, Result};

// Canvas matches the original tool's 8x6in figure at 100 dpi.
const CANVAS_W: f64 = 800.0;
const CANVAS_H: f64 = 600.0;

const RADIUS: f64 = 150.0;
// Two circles on the upper row, one centered below. Every pairwise center
// distance stays under 2r so all 7 regions exist.
const CENTER_A: (f64, f64) = (330.0, 250.0);
const CENTER_B: (f64, f64) = (470.0, 250.0);
const CENTER_C: (f64, f64) = (400.0, 370.0);

const TITLE_Y: f64 = 40.0;
const CANVAS_MARGIN: f64 = 8.0;

const SET_LABEL_FONT_SIZE: f64 = 17.0;
const TITLE_FONT_SIZE: f64 = 25.0;

// Per-circle fills in set order; translucency comes from the CSS class.
const PALETTE: [&str; 3] = ["#d62728", "#2ca02c", "#1f77b4"];

/// Region anchors for the fixed circle arrangement, keyed by membership
/// mask over (A, B, C). Approximate centroids of each exclusive region.
const REGION_ANCHORS: [(&str, f64, f64); 7] = [
    ("100", 275.0, 215.0),
    ("010", 525.0, 215.0),
    ("110", 400.0, 212.0),
    ("001", 400.0, 448.0),
    ("101", 340.0, 330.0),
    ("011", 460.0, 330.0),
    ("111", 400.0, 292.0),
];

/// Lays out a three-circle overlap diagram for the given named sets.
///
/// Geometry is fixed; only labels and region cardinalities vary with the
/// input. Set order maps to circles A (upper left), B (upper right),
/// C (lower center). A measurer reporting non-finite widths is rejected
/// with [`Error::InvalidModel`] before any anchor is computed from it.
pub fn layout_venn_diagram(
    title: &str,
    sets: &[NamedSet; 3],
    measurer: &dyn TextMeasurer,
) -> Result<VennDiagramLayout> {
    let label_style = TextStyle {
        font_family: None,
        font_size: SET_LABEL_FONT_SIZE,
    };

    let centers = [CENTER_A, CENTER_B, CENTER_C];
    // Label anchors sit just outside each circle, pushed away from the
    // other two so they do not collide with region counts.
    let label_anchors = [
        (CENTER_A.0 - RADIUS * 0.6, CENTER_A.1 - RADIUS - 14.0),
        (CENTER_B.0 + RADIUS * 0.6, CENTER_B.1 - RADIUS - 14.0),
        (CENTER_C.0, CENTER_C.1 + RADIUS + 28.0),
    ];

    let mut circles = Vec::with_capacity(3);
    for (i, set) in sets.iter().enumerate() {
        let (cx, cy) = centers[i];
        let (raw_x, label_y) = label_anchors[i];
        let half_width = measured_half_width(measurer, &set.label, &label_style)?;
        let label_x = clamp_x(raw_x, half_width);
        circles.push(VennCircleLayout {
            label: set.label.clone(),
            cx,
            cy,
            r: RADIUS,
            fill: PALETTE[i].to_string(),
            label_x,
            label_y,
        });
    }

    let members = [&sets[0].members, &sets[1].members, &sets[2].members];
    let mut regions = Vec::with_capacity(REGION_ANCHORS.len());
    for &(id, x, y) in &REGION_ANCHORS {
        let region_members = exclusive_members(&members, id);
        regions.push(VennRegionLayout {
            id: id.to_string(),
            count: region_members.len(),
            members: region_members,
            x,
            y,
        });
    }

    let title_style = TextStyle {
        font_family: None,
        font_size: TITLE_FONT_SIZE,
    };
    let title_half_width = measured_half_width(measurer, title, &title_style)?;
    let title_x = clamp_x(CANVAS_W / 2.0, title_half_width);

    Ok(VennDiagramLayout {
        bounds: Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: CANVAS_W,
            max_y: CANVAS_H,
        },
        title: title.to_string(),
        title_x,
        title_y: TITLE_Y,
        circles,
        regions,
    })
}

fn measured_half_width(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
) -> Result<f64> {
    let width = measurer.measure(text, style).width;
    if !(width.is_finite() && width >= 0.0) {
        return Err(Error::InvalidModel {
            message: format!("measured width {width} for {text:?} is unusable"),
        });
    }
    Ok(width / 2.0)
}

fn clamp_x(x: f64, half_width: f64) -> f64 {
    let lo = CANVAS_MARGIN + half_width;
    let hi = CANVAS_W - CANVAS_MARGIN - half_width;
    if lo > hi {
        // Label wider than the canvas; center it and let it overflow evenly.
        return CANVAS_W / 2.0;
    }
    x.clamp(lo, hi)
}

/// Members belonging to every circle whose mask bit is `1` and to no circle
/// whose bit is `0`. Order follows the first included set.
fn exclusive_members(sets: &[&IndexSet<String>; 3], mask: &str) -> Vec<String> {
    let included: Vec<usize> = mask
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'1')
        .map(|(i, _)| i)
        .collect();
    let excluded: Vec<usize> = mask
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b != b'1')
        .map(|(i, _)| i)
        .collect();

    let Some(&first) = included.first() else {
        return Vec::new();
    };

    sets[first]
        .iter()
        .filter(|m| included.iter().all(|&i| sets[i].contains(*m)))
        .filter(|m| excluded.iter().all(|&i| !sets[i].contains(*m)))
        .cloned()
        .collect()
}

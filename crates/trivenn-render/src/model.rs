use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One diagram circle with its set label anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VennCircleLayout {
    pub label: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    /// Anchor of the set label drawn outside the circle (middle-anchored).
    pub label_x: f64,
    pub label_y: f64,
}

/// One of the 7 exclusive regions of a three-set diagram.
///
/// `id` is the membership mask over the three circles in layout order, e.g.
/// `"110"` for the part of A∩B outside C.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VennRegionLayout {
    pub id: String,
    pub count: usize,
    pub members: Vec<String>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VennDiagramLayout {
    pub bounds: Bounds,
    pub title: String,
    pub title_x: f64,
    pub title_y: f64,
    /// Always 3, in first-seen set order.
    pub circles: Vec<VennCircleLayout>,
    /// Always 7, one per membership mask.
    pub regions: Vec<VennRegionLayout>,
}

#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for three-set overlap (Venn) diagrams.
//!
//! The geometry is fixed: three equal circles on an 800×600 canvas, two on
//! an upper row and one centered below. Region labels carry exclusive
//! intersection cardinalities; overlap areas are not proportional to them.

pub mod model;
pub mod svg;
pub mod text;
pub mod venn;

use std::sync::Arc;

use trivenn_core::OverlapMap;

use crate::model::VennDiagramLayout;
use crate::text::{DeterministicTextMeasurer, TextMeasurer};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sets(#[from] trivenn_core::Error),
    #[error("invalid diagram model: {message}")]
    InvalidModel { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

/// Lays out a diagram from the first 3 sets of `map`.
///
/// Fails with [`trivenn_core::Error::NotEnoughSets`] when the map has fewer
/// than 3 distinct keys; nothing is drawn in that case.
pub fn layout_overlap_map(
    title: &str,
    map: &OverlapMap,
    options: &LayoutOptions,
) -> Result<VennDiagramLayout> {
    let sets = map.first_three()?;
    venn::layout_venn_diagram(title, &sets, options.text_measurer.as_ref())
}

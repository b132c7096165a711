use trivenn::render::raster::{RasterError, RasterOptions, render_overlap_png};
use trivenn::render::{LayoutOptions, SvgRenderOptions};
use trivenn::{OverlapMap, RawEntry, normalize_entries};

fn sample_map() -> OverlapMap {
    let rows = normalize_entries(&[
        RawEntry::new("North", "alpha, beta"),
        RawEntry::new("South", "beta, gamma"),
        RawEntry::new("East", "alpha, gamma"),
    ]);
    OverlapMap::by_center(&rows)
}

#[test]
fn renders_png_bytes_with_the_png_signature() {
    let bytes = render_overlap_png(
        "Centers by Shared Surface Functions",
        &sample_map(),
        &LayoutOptions::default(),
        &SvgRenderOptions::default(),
        &RasterOptions {
            scale: 1.0,
            background: Some("white".to_string()),
        },
    )
    .expect("png bytes");

    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
}

#[test]
fn propagates_the_set_count_precondition() {
    let rows = normalize_entries(&[RawEntry::new("North", "alpha"), RawEntry::new("South", "beta")]);
    let map = OverlapMap::by_center(&rows);
    let err = render_overlap_png(
        "Centers",
        &map,
        &LayoutOptions::default(),
        &SvgRenderOptions::default(),
        &RasterOptions::default(),
    )
    .expect_err("two sets must not rasterize");
    assert!(matches!(err, RasterError::Render(_)));
    assert!(err.to_string().contains("3 distinct center labels"));
}

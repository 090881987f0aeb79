use super::*;

#[test]
fn unpremultiply_restores_straight_colour() {
    let mut px = [64u8, 0, 32, 128];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, [128, 0, 64, 128]);

    let mut opaque = [10u8, 20, 30, 255];
    unpremultiply_in_place(&mut opaque);
    assert_eq!(opaque, [10, 20, 30, 255]);
}

#[test]
fn rasterizes_a_plain_rect() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"><rect width="4" height="3" fill="#ff0000"/></svg>"##;
    let frame = rasterize_svg(svg).unwrap();
    assert_eq!((frame.width, frame.height), (4, 3));
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 0), None);
}

#[test]
fn invalid_svg_is_a_render_error() {
    let err = rasterize_svg("<not-svg").unwrap_err();
    assert!(matches!(err, FibTreeError::Render(_)));
}

#[test]
fn font_database_is_loaded_once() {
    let a = font_db();
    let b = svg_options().fontdb;
    assert!(Arc::ptr_eq(&a, &b));
}

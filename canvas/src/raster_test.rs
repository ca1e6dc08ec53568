use super::*;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const RED: Rgb = Rgb::new(255, 0, 0);

fn raster(w: u32, h: u32) -> Raster {
    Raster::new(Size::new(w, h))
}

// =============================================================
// Basics
// =============================================================

#[test]
fn new_raster_is_transparent() {
    let r = raster(4, 3);
    assert_eq!(r.size(), Size::new(4, 3));
    assert_eq!(r.count(TRANSPARENT), 12);
}

#[test]
fn pixel_out_of_range_is_none() {
    let r = raster(4, 3);
    assert_eq!(r.pixel(4, 0), None);
    assert_eq!(r.pixel(0, 3), None);
}

#[test]
fn set_pixel_out_of_range_is_ignored() {
    let mut r = raster(2, 2);
    r.set_pixel(5, 5, RED.to_rgba());
    assert_eq!(r.count(TRANSPARENT), 4);
}

#[test]
fn fill_then_clear() {
    let mut r = raster(3, 3);
    r.fill(RED);
    assert_eq!(r.count(RED.to_rgba()), 9);
    r.clear();
    assert_eq!(r.count(TRANSPARENT), 9);
}

#[test]
fn zero_sized_raster_has_no_pixels() {
    let mut r = raster(0, 10);
    r.stroke_segment(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 3.0, BLACK);
    assert_eq!(r.pixel(0, 0), None);
}

// =============================================================
// Strokes
// =============================================================

#[test]
fn horizontal_stroke_covers_its_width() {
    let mut r = raster(20, 20);
    r.stroke_segment(Point::new(2.0, 10.0), Point::new(17.0, 10.0), 4.0, BLACK);
    for y in 8..12 {
        assert_eq!(r.pixel(10, y), Some(BLACK.to_rgba()), "y = {y}");
    }
    assert_eq!(r.pixel(10, 6), Some(TRANSPARENT));
    assert_eq!(r.pixel(10, 13), Some(TRANSPARENT));
}

#[test]
fn stroke_has_round_caps() {
    let mut r = raster(30, 30);
    r.stroke_segment(Point::new(10.0, 15.0), Point::new(20.0, 15.0), 6.0, BLACK);
    // Cap extends past the endpoint along the axis...
    assert_eq!(r.pixel(7, 14), Some(BLACK.to_rgba()));
    // ...but the corner of the bounding square stays empty.
    assert_eq!(r.pixel(7, 12), Some(TRANSPARENT));
}

#[test]
fn diagonal_stroke_passes_through_midpoint() {
    let mut r = raster(50, 50);
    r.stroke_segment(Point::new(0.0, 0.0), Point::new(40.0, 40.0), 3.0, RED);
    assert_eq!(r.pixel(20, 20), Some(RED.to_rgba()));
    assert_eq!(r.pixel(30, 10), Some(TRANSPARENT));
}

#[test]
fn zero_length_stroke_paints_a_dot() {
    let mut r = raster(10, 10);
    r.stroke_segment(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 4.0, BLACK);
    assert_eq!(r.pixel(5, 5), Some(BLACK.to_rgba()));
    assert_eq!(r.pixel(0, 0), Some(TRANSPARENT));
}

#[test]
fn stroke_is_clipped_to_raster() {
    let mut r = raster(10, 10);
    r.stroke_segment(Point::new(-50.0, 5.0), Point::new(50.0, 5.0), 2.0, BLACK);
    assert_eq!(r.pixel(0, 5), Some(BLACK.to_rgba()));
    assert_eq!(r.pixel(9, 5), Some(BLACK.to_rgba()));
}

#[test]
fn non_positive_or_nan_width_draws_nothing() {
    let mut r = raster(10, 10);
    r.stroke_segment(Point::new(0.0, 5.0), Point::new(9.0, 5.0), 0.0, BLACK);
    r.stroke_segment(Point::new(0.0, 5.0), Point::new(9.0, 5.0), f64::NAN, BLACK);
    assert_eq!(r.count(TRANSPARENT), 100);
}

#[test]
fn non_finite_endpoints_draw_nothing() {
    let mut r = raster(10, 10);
    r.stroke_segment(Point::new(f64::INFINITY, 5.0), Point::new(9.0, 5.0), 2.0, BLACK);
    assert_eq!(r.count(TRANSPARENT), 100);
}

// =============================================================
// Rectangles and blits
// =============================================================

#[test]
fn fill_rect_covers_exact_area() {
    let mut r = raster(10, 10);
    r.fill_rect(2.0, 3.0, 4.0, 2.0, RED);
    assert_eq!(r.count(RED.to_rgba()), 8);
    assert_eq!(r.pixel(2, 3), Some(RED.to_rgba()));
    assert_eq!(r.pixel(5, 4), Some(RED.to_rgba()));
    assert_eq!(r.pixel(6, 4), Some(TRANSPARENT));
}

#[test]
fn blit_copies_one_to_one_and_clips() {
    let mut src = raster(4, 4);
    src.fill(RED);
    let mut dst = raster(6, 6);
    dst.blit(&src, 4, -2);
    // Only the 2x2 overlap lands.
    assert_eq!(dst.count(RED.to_rgba()), 4);
    assert_eq!(dst.pixel(4, 0), Some(RED.to_rgba()));
    assert_eq!(dst.pixel(5, 1), Some(RED.to_rgba()));
    assert_eq!(dst.pixel(3, 0), Some(TRANSPARENT));
}

#[test]
fn blit_copies_transparent_pixels_too() {
    let src = raster(2, 2);
    let mut dst = raster(2, 2);
    dst.fill(BLACK);
    dst.blit(&src, 0, 0);
    assert_eq!(dst.count(TRANSPARENT), 4);
}

#![allow(clippy::float_cmp)]

use super::*;

/// Every character is 10 px wide regardless of font.
fn mono(s: &str) -> f64 {
    10.0 * s.chars().count() as f64
}

// =============================================================
// wrap_lines
// =============================================================

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap_lines("два агла", 200.0, mono), vec!["два агла"]);
}

#[test]
fn wraps_before_the_word_that_overflows() {
    // "aaa bbb" is 70 px, "aaa bbb ccc" is 110 px.
    assert_eq!(wrap_lines("aaa bbb ccc ddd", 100.0, mono), vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn overlong_word_gets_its_own_line() {
    assert_eq!(
        wrap_lines("a hippopotomonstrosesquipedalian b", 50.0, mono),
        vec!["a", "hippopotomonstrosesquipedalian", "b"]
    );
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(wrap_lines("  x   y\n z ", 1000.0, mono), vec!["x y z"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_lines("", 100.0, mono).is_empty());
    assert!(wrap_lines("   ", 100.0, mono).is_empty());
}

#[test]
fn measurer_sees_the_font() {
    let mut fonts = Vec::new();
    let text = PageText { heading: "h".into(), body: "b".into(), ..PageText::default() };
    let _layout = PageLayout::compose(&text, Size::new(400, 300), |font, _| {
        fonts.push(font.to_owned());
        0.0
    });
    // Single words are never measured; nothing to wrap.
    assert!(fonts.is_empty());

    let text = PageText { heading: "h h".into(), body: "b b".into(), ..PageText::default() };
    let _layout = PageLayout::compose(&text, Size::new(400, 300), |font, _| {
        fonts.push(font.to_owned());
        0.0
    });
    assert_eq!(fonts, vec![PAGE_HEADING_FONT.to_owned(), PAGE_BODY_FONT.to_owned()]);
}

// =============================================================
// PageLayout
// =============================================================

fn sample_text() -> PageText {
    PageText {
        title: "Мате-Ментор | Интерактивна тетратка".into(),
        heading: "Лекција: Агли".into(),
        body: "Задача: aaa bbb ccc ddd eee".into(),
        footer: "2026-10-16".into(),
    }
}

#[test]
fn page_is_as_wide_as_the_drawing() {
    let layout = PageLayout::compose(&sample_text(), Size::new(600, 400), |_, s| mono(s));
    assert_eq!(layout.size.width, 600);
    assert_eq!(layout.divider_span(), (40.0, 560.0));
    assert_eq!(layout.band_height, 100.0);
}

#[test]
fn text_flows_down_the_page() {
    // A 200 px page leaves 120 px for text.
    let layout = PageLayout::compose(&sample_text(), Size::new(200, 100), |_, s| mono(s));

    let ys: Vec<f64> = layout.lines.iter().map(|l| l.y).collect();
    // title, 2 heading lines, 3 body lines
    assert_eq!(ys, vec![60.0, 150.0, 182.0, 234.0, 264.0, 294.0]);
    assert_eq!(layout.lines[1].text, "Лекција:");
    assert_eq!(layout.lines[3].text, "Задача: aaa");
    assert_eq!(layout.lines[4].text, "bbb ccc ddd");
    assert_eq!(layout.lines[5].text, "eee");

    // Last body line at 294, so the text block ends at 324.
    assert_eq!(layout.divider_y, 354.0);
    assert_eq!(layout.drawing_y, 384.0);
    assert_eq!(layout.size.height, 384 + 100 + 60);
    assert_eq!(layout.footer.y, 544.0 - 25.0);
}

#[test]
fn placed_text_carries_style() {
    let layout = PageLayout::compose(&sample_text(), Size::new(800, 100), |_, s| mono(s));
    assert_eq!(layout.lines[0].font, PAGE_TITLE_FONT);
    assert_eq!(layout.lines[0].color, PAGE_TITLE_COLOR);
    assert_eq!(layout.lines[1].font, PAGE_HEADING_FONT);
    assert_eq!(layout.lines[2].color, PAGE_BODY_COLOR);
    assert_eq!(layout.footer.text, "2026-10-16");
    assert!(layout.lines.iter().all(|l| l.x == 40.0));
}

#[test]
fn empty_heading_and_body_still_leave_room_for_the_drawing() {
    let layout = PageLayout::compose(&PageText::default(), Size::new(300, 200), |_, s| mono(s));
    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.drawing_y, 150.0 + 20.0 + 60.0);
    assert_eq!(layout.size.height, 230 + 200 + 60);
}

#[test]
fn empty_drawing_is_not_exportable() {
    for drawing in [Size::new(0, 400), Size::new(600, 0)] {
        let result = PageLayout::for_export(&sample_text(), drawing, |_, s| mono(s));
        assert_eq!(result.err(), Some(SurfaceError::EmptySurface));
    }
}

#[test]
fn export_layout_matches_composed_layout() {
    let drawing = Size::new(600, 400);
    let exported = PageLayout::for_export(&sample_text(), drawing, |_, s| mono(s));
    assert_eq!(exported, Ok(PageLayout::compose(&sample_text(), drawing, |_, s| mono(s))));
}

use super::*;
use crate::foundation::core::Point;
use crate::template::registry::TemplateId;

const EPS: f64 = 1e-9;

fn slots(id: TemplateId, n: usize, size: u32, borders: bool) -> Vec<Rect> {
    slot_rects(id.template(), n, size, gap_for(borders))
}

fn overlaps(a: &Rect, b: &Rect) -> bool {
    let i = a.intersect(*b);
    i.width() > EPS && i.height() > EPS
}

#[test]
fn gap_depends_on_borders() {
    assert_eq!(gap_for(true), 4.0);
    assert_eq!(gap_for(false), 0.0);
}

#[test]
fn grid4_with_borders_matches_reference_scenario() {
    let s = slots(TemplateId::Grid4, 4, 1200, true);
    assert_eq!(s.len(), 4);
    for r in &s {
        assert!((r.width() - 598.0).abs() < EPS);
        assert!((r.height() - 598.0).abs() < EPS);
    }
    assert_eq!(s[0].origin(), Point::new(0.0, 0.0));
    assert_eq!(s[1].origin(), Point::new(602.0, 0.0));
    assert_eq!(s[2].origin(), Point::new(0.0, 602.0));
    assert_eq!(s[3].origin(), Point::new(602.0, 602.0));
}

#[test]
fn grid_rows_and_columns_tile_the_canvas() {
    for (id, n) in [(TemplateId::Grid4, 2usize), (TemplateId::Grid9, 3usize)] {
        for size in [300u32, 1000, 1200, 1201] {
            for borders in [false, true] {
                let gap = gap_for(borders);
                let s = slots(id, 0, size, borders);
                assert_eq!(s.len(), n * n);
                for row in 0..n {
                    let cells = &s[row * n..row * n + n];
                    let total: f64 =
                        cells.iter().map(Rect::width).sum::<f64>() + gap * (n as f64 - 1.0);
                    assert!((total - f64::from(size)).abs() < 1e-6, "{id} row {row}");
                    assert!((cells[n - 1].x1 - f64::from(size)).abs() < 1e-6);
                }
                for col in 0..n {
                    let total: f64 = (0..n).map(|row| s[row * n + col].height()).sum::<f64>()
                        + gap * (n as f64 - 1.0);
                    assert!((total - f64::from(size)).abs() < 1e-6, "{id} col {col}");
                }
            }
        }
    }
}

#[test]
fn grid_is_row_major() {
    let s = slots(TemplateId::Grid9, 9, 900, false);
    assert_eq!(s[5].origin(), Point::new(600.0, 300.0));
    assert_eq!(s[7].origin(), Point::new(300.0, 600.0));
}

#[test]
fn triangle_always_has_three_slots() {
    for n in [0usize, 1, 3, 8] {
        let s = slots(TemplateId::Triangle, n, 1200, true);
        assert_eq!(s.len(), 3);
        for r in &s {
            assert!((r.width() - 596.0).abs() < EPS);
            assert!((r.height() - 596.0).abs() < EPS);
        }
    }
}

#[test]
fn triangle_positions() {
    let s = slots(TemplateId::Triangle, 3, 1200, false);
    assert_eq!(s[0], Rect::new(300.0, 0.0, 900.0, 600.0));
    assert_eq!(s[1], Rect::new(0.0, 600.0, 600.0, 1200.0));
    assert_eq!(s[2], Rect::new(600.0, 600.0, 1200.0, 1200.0));

    let s = slots(TemplateId::Triangle, 3, 1200, true);
    assert_eq!(s[0], Rect::new(302.0, 4.0, 898.0, 600.0));
    assert_eq!(s[1], Rect::new(4.0, 602.0, 600.0, 1198.0));
    assert_eq!(s[2], Rect::new(602.0, 602.0, 1198.0, 1198.0));
}

#[test]
fn horizontal_two_images_without_borders() {
    let s = slots(TemplateId::Horizontal, 2, 1200, false);
    assert_eq!(
        s,
        vec![
            Rect::new(0.0, 0.0, 600.0, 1200.0),
            Rect::new(600.0, 0.0, 1200.0, 1200.0)
        ]
    );
}

#[test]
fn vertical_is_transpose_of_horizontal() {
    let h = slots(TemplateId::Horizontal, 5, 1000, true);
    let v = slots(TemplateId::Vertical, 5, 1000, true);
    assert_eq!(h.len(), v.len());
    for (a, b) in h.iter().zip(&v) {
        assert_eq!(*a, Rect::new(b.y0, b.x0, b.y1, b.x1));
    }
}

#[test]
fn strips_cap_at_template_max_and_handle_empty() {
    assert!(slots(TemplateId::Horizontal, 0, 1200, true).is_empty());
    assert_eq!(slots(TemplateId::Horizontal, 10, 1200, true).len(), 6);
    assert_eq!(slots(TemplateId::Vertical, 10, 1200, false).len(), 6);
}

#[test]
fn slots_never_overlap_and_stay_on_canvas() {
    let on_canvas = |r: &Rect| {
        r.x0 >= -1e-6 && r.y0 >= -1e-6 && r.x1 <= 1200.0 + 1e-6 && r.y1 <= 1200.0 + 1e-6
    };
    for id in TemplateId::ALL {
        for borders in [false, true] {
            let s = slots(id, id.template().max_images, 1200, borders);
            for (i, a) in s.iter().enumerate() {
                assert!(on_canvas(a), "{id} slot {i} leaves canvas");
                for b in &s[i + 1..] {
                    assert!(!overlaps(a, b), "{id}: {a:?} overlaps {b:?}");
                }
            }
        }
    }
}

#[test]
fn slot_geometry_is_deterministic() {
    for id in TemplateId::ALL {
        assert_eq!(slots(id, 4, 777, true), slots(id, 4, 777, true));
    }
}

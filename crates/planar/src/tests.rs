use super::*;
use proptest::prelude::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};

fn pt() -> impl Strategy<Value = Pt<i64>> {
    (-1000i64..=1000, -1000i64..=1000).prop_map(|(x, y)| Pt::new(x, y))
}

fn nonzero_pt() -> impl Strategy<Value = Pt<i64>> {
    pt().prop_filter("zero vector has no angle", |p| !p.is_zero())
}

fn to_f64(p: Pt<i64>) -> Pt<f64> {
    Pt::new(p.x as f64, p.y as f64)
}

proptest! {
    #[test]
    fn orient_swaps_sign(a in pt(), b in pt(), c in pt()) {
        prop_assert_eq!(orient(a, b, c), -orient(a, c, b));
        // cyclic shifts keep the sign
        prop_assert_eq!(orient(a, b, c), orient(b, c, a));
    }

    #[test]
    fn orient_zero_on_collinear(a in pt(), b in pt(), k in -5i64..=5) {
        let c = a + (b - a) * k;
        prop_assert_eq!(orient(a, b, c), 0);
        prop_assert!(on_segment(a, b, c) == (0..=1).contains(&k) || a == b);
    }

    #[test]
    fn cross_antisymmetric_dot_symmetric(v in nonzero_pt(), w in nonzero_pt()) {
        prop_assert_eq!(cross(v, w), -cross(w, v));
        prop_assert_eq!(dot(v, w), dot(w, v));
        prop_assert_eq!(cross(v, w), dot(perp(v), w));
    }

    #[test]
    fn line_through_contains_both_points(p in pt(), q in pt()) {
        prop_assume!(p != q);
        let l = Line::through(p, q);
        prop_assert_eq!(l.side(p), 0);
        prop_assert_eq!(l.side(q), 0);
        prop_assert!(l.cmp_proj(p, q));
    }

    #[test]
    fn intersection_lies_on_both_lines(p in pt(), q in pt(), r in pt(), s in pt()) {
        prop_assume!(p != q && r != s);
        let l1 = Line::through(to_f64(p), to_f64(q));
        let l2 = Line::through(to_f64(r), to_f64(s));
        match intersect(&l1, &l2) {
            Some(x) => {
                for l in [l1, l2] {
                    let scale = l.v.abs() * x.abs() + l.c.abs() + 1.0;
                    prop_assert!(
                        l.side(x).abs() <= 1e-9 * scale,
                        "side={} scale={}",
                        l.side(x),
                        scale
                    );
                }
            }
            None => prop_assert_eq!(cross(q - p, s - r), 0),
        }
    }

    #[test]
    fn polar_order_survives_uniform_scaling(
        v in prop::collection::vec(nonzero_pt(), 1..30),
        k in 1i64..=7,
    ) {
        let mut a = v.clone();
        polar_sort(&mut a);
        let mut b: Vec<_> = v.iter().map(|&p| p * k).collect();
        polar_sort(&mut b);
        let a_scaled: Vec<_> = a.iter().map(|&p| p * k).collect();
        prop_assert_eq!(a_scaled, b);
        // lower half (and +x axis) always precedes the upper half
        let first_upper = a.iter().position(|&p| half(p)).unwrap_or(a.len());
        prop_assert!(a[first_upper..].iter().all(|&p| half(p)));
    }

    #[test]
    fn polar_sort_around_matches_translated_sort(
        v in prop::collection::vec(pt(), 1..30),
        o in pt(),
    ) {
        let v: Vec<_> = v.into_iter().filter(|&p| p != o).collect();
        let mut around = v.clone();
        polar_sort_around(&mut around, o);
        let mut shifted: Vec<_> = v.iter().map(|&p| p - o).collect();
        polar_sort(&mut shifted);
        let back: Vec<_> = shifted.into_iter().map(|p| p + o).collect();
        prop_assert_eq!(around, back);
    }

    #[test]
    fn hull_is_convex_and_covers_inputs(v in prop::collection::vec(pt(), 1..40)) {
        let hull = convex_hull(&v);
        prop_assert!(is_convex(&hull));
        match hull.len() {
            0 => prop_assert!(false, "non-empty input gave empty hull"),
            1 => prop_assert!(v.iter().all(|&p| p == hull[0])),
            2 => prop_assert!(v.iter().all(|&p| on_segment(hull[0], hull[1], p))),
            _ => {
                prop_assert!(signed_area2(&hull) > 0);
                for &p in &v {
                    prop_assert!(in_polygon(&hull, p, false));
                }
            }
        }
    }

    #[test]
    fn containment_is_translation_invariant(
        v in prop::collection::vec(pt(), 3..20),
        a in pt(),
        t in pt(),
    ) {
        let hull = convex_hull(&v);
        prop_assume!(hull.len() >= 3);
        let moved: Vec<_> = hull.iter().map(|&p| p + t).collect();
        prop_assert_eq!(in_polygon(&hull, a, true), in_polygon(&moved, a + t, true));
        prop_assert_eq!(in_polygon(&hull, a, false), in_polygon(&moved, a + t, false));
    }

    #[test]
    fn reversing_polygon_negates_signed_area(v in prop::collection::vec(pt(), 3..20)) {
        let rev: Vec<_> = v.iter().rev().copied().collect();
        prop_assert_eq!(signed_area2(&v), -signed_area2(&rev));
    }

    #[test]
    fn proper_inter_agrees_with_sign_test(a in pt(), b in pt(), c in pt(), d in pt()) {
        let (fa, fb, fc, fd) = (to_f64(a), to_f64(b), to_f64(c), to_f64(d));
        let x = proper_inter(fa, fb, fc, fd);
        prop_assert_eq!(x.is_some(), crosses_properly(a, b, c, d));
        if let Some(x) = x {
            prop_assert!(seg_point(fa, fb, x) < 1e-6);
            prop_assert!(seg_point(fc, fd, x) < 1e-6);
            prop_assert_eq!(seg_seg(fa, fb, fc, fd), 0.0);
        }
    }

    #[test]
    fn segment_distance_is_symmetric(a in pt(), b in pt(), c in pt(), d in pt()) {
        let (fa, fb, fc, fd) = (to_f64(a), to_f64(b), to_f64(c), to_f64(d));
        prop_assert_eq!(seg_seg(fa, fb, fc, fd), seg_seg(fc, fd, fa, fb));
        prop_assert!(seg_seg(fa, fb, fc, fd) <= (fa - fc).abs() + 1e-9);
    }
}

#[test]
fn unit_square_reference_values() {
    let sq = [
        Pt::new(0.0, 0.0),
        Pt::new(1.0, 0.0),
        Pt::new(1.0, 1.0),
        Pt::new(0.0, 1.0),
    ];
    assert!(in_polygon(&sq, Pt::new(0.5, 0.5), true));
    assert!(!in_polygon(&sq, Pt::new(2.0, 2.0), true));
    assert!(!in_polygon(&sq, Pt::new(0.5, 0.0), true));
    assert!(in_polygon(&sq, Pt::new(0.5, 0.0), false));
    assert_eq!(area(&sq), 1.0);
    assert!(is_convex(&sq));
    assert!(!is_convex(&[
        Pt::new(0.0, 0.0),
        Pt::new(2.0, 0.0),
        Pt::new(1.0, 1.0),
        Pt::new(2.0, 2.0),
    ]));
}

#[test]
fn reflection_is_an_involution_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut draw = || Pt::new(rng.gen_range(-10.0f64..10.0), rng.gen_range(-10.0f64..10.0));
        let (p, q, x) = (draw(), draw(), draw());
        if p == q {
            continue;
        }
        let l = Line::through(p, q);
        let back = l.refl(l.refl(x));
        assert!((back - x).abs() < 1e-9);
        // projection is the midpoint of x and its mirror image
        let mid = (x + l.refl(x)) * 0.5;
        assert!((mid - l.proj(x)).abs() < 1e-9);
        assert!(l.side(l.proj(x)).abs() < 1e-9 * (l.v.abs() * x.abs() + l.c.abs() + 1.0));
    }
}

#[test]
fn star_polygons_contain_their_kernel() {
    use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
    for index in 0..25 {
        let p = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 7, index });
        assert!(in_polygon(&p, Pt::new(0.0, 0.0), true));
        assert!(area(&p) > 0.0);
        // each vertex is on the boundary, hence excluded strictly
        for &v in &p {
            assert!(!in_polygon(&p, v, true));
            assert!(in_polygon(&p, v, false));
        }
    }
}

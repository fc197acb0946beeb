#![forbid(unsafe_code)]

//! Shape fills on a [`Surface`].
//!
//! Every fill is a direct scan over the shape's pixel bounding box, testing
//! each integer pixel coordinate and writing through
//! [`Surface::set_pixel`]. Which pixels a shape covers is part of the
//! observable contract, so the scans stay O(area) rather than switching to
//! scanline/edge-table algorithms.
//!
//! Coordinates snap with
//! [`round_half_up`](bitpaint_core::geometry::round_half_up)
//! (`floor(v + 0.5)`), not [`f64::round`].

use bitpaint_core::geometry::{PixelRect, RectF};

use crate::color::{CompositeMode, Rgb};
use crate::surface::Surface;

/// Tolerance below which a cross product or half-axis counts as zero.
pub const EPSILON: f64 = 1e-9;

/// Extension trait for filling shapes on a surface.
pub trait Raster {
    /// Fill an axis-aligned rectangle.
    ///
    /// Edges snap to the pixel grid. The lower bounds clamp to 0 and the upper
    /// bounds clamp to `dimension - 1`, then the half-open range is filled, so a
    /// rectangle reaching past the right or bottom edge never touches the last
    /// column or row. Non-positive sizes fill nothing.
    fn fill_rectangle(&mut self, mode: CompositeMode, color: Rgb, rect: RectF);

    /// Fill a triangle given in either winding order.
    ///
    /// A pixel is inside when, for each edge, its cross product agrees in sign
    /// with the triangle's own. Values within [`EPSILON`] of zero agree with
    /// anything, so pixels on an edge are covered and a collinear triangle
    /// covers its whole bounding box. Non-finite vertices fill nothing.
    fn fill_triangle(
        &mut self,
        mode: CompositeMode,
        color: Rgb,
        a: (f64, f64),
        b: (f64, f64),
        c: (f64, f64),
    );

    /// Fill the axis-aligned ellipse inscribed in `rect`.
    ///
    /// Half-axes below [`EPSILON`] fill nothing.
    fn fill_ellipse(&mut self, mode: CompositeMode, color: Rgb, rect: RectF);

    /// Fill a square-capped line of the given width as two triangles.
    ///
    /// A zero-length line has no direction and collapses to the pixels around
    /// its single point.
    fn fill_line(
        &mut self,
        mode: CompositeMode,
        color: Rgb,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
    );
}

impl Raster for Surface<'_> {
    fn fill_rectangle(&mut self, mode: CompositeMode, color: Rgb, rect: RectF) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "fill_rectangle",
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height
        )
        .entered();

        let snapped = rect.snap();
        let clamped = PixelRect::new(
            snapped.x0.max(0),
            snapped.y0.max(0),
            snapped.x1.min(self.width() as i64 - 1),
            snapped.y1.min(self.height() as i64 - 1),
        );

        for (x, y) in clamped.pixels() {
            self.set_pixel(x, y, mode, color);
        }
    }

    fn fill_triangle(
        &mut self,
        mode: CompositeMode,
        color: Rgb,
        a: (f64, f64),
        b: (f64, f64),
        c: (f64, f64),
    ) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("fill_triangle").entered();

        if ![a.0, a.1, b.0, b.1, c.0, c.1].iter().all(|v| v.is_finite()) {
            return;
        }

        // Inclusive on both ends, hence the +1 on the far edges.
        let bbox = PixelRect::new(
            a.0.min(b.0).min(c.0).floor() as i64,
            a.1.min(b.1).min(c.1).floor() as i64,
            (a.0.max(b.0).max(c.0).ceil() as i64).saturating_add(1),
            (a.1.max(b.1).max(c.1).ceil() as i64).saturating_add(1),
        )
        .intersection(&self.bounds());

        // Z-components of the reference cross products.
        let z0 = cross(a, b, c);
        let z1 = cross(b, c, a);
        let z2 = cross(c, a, b);

        for (i, j) in bbox.pixels() {
            let p = (i as f64, j as f64);
            if same_sign(z0, cross(a, p, c))
                && same_sign(z1, cross(b, p, a))
                && same_sign(z2, cross(c, p, b))
            {
                self.set_pixel(i, j, mode, color);
            }
        }
    }

    fn fill_ellipse(&mut self, mode: CompositeMode, color: Rgb, rect: RectF) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "fill_ellipse",
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height
        )
        .entered();

        let dw = rect.width / 2.0;
        let dh = rect.height / 2.0;
        if !(dw >= EPSILON && dh >= EPSILON) {
            return;
        }

        let cx = rect.x + dw;
        let cy = rect.y + dh;
        let kx = 1.0 / dw;
        let ky = 1.0 / dh;

        let bbox = rect.snap().intersection(&self.bounds());
        for j in bbox.y0..bbox.y1 {
            let dy = (j as f64 - cy) * ky;
            let dydy = dy * dy;
            for i in bbox.x0..bbox.x1 {
                let dx = (i as f64 - cx) * kx;
                if dx * dx + dydy <= 1.0 {
                    self.set_pixel(i, j, mode, color);
                }
            }
        }
    }

    fn fill_line(
        &mut self,
        mode: CompositeMode,
        color: Rgb,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
    ) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?from, ?to, width, "fill_line");

        let (tx, ty) = half_normal(to.0 - from.0, to.1 - from.1, width);
        let (x0, y0) = from;
        let (x1, y1) = to;

        self.fill_triangle(
            mode,
            color,
            (x0 - tx, y0 - ty),
            (x0 + tx, y0 + ty),
            (x1 + tx, y1 + ty),
        );
        self.fill_triangle(
            mode,
            color,
            (x0 - tx, y0 - ty),
            (x1 + tx, y1 + ty),
            (x1 - tx, y1 - ty),
        );
    }
}

/// Z-component of `(p - o) × (q - o)`.
#[inline]
fn cross(o: (f64, f64), p: (f64, f64), q: (f64, f64)) -> f64 {
    (p.0 - o.0) * (q.1 - o.1) - (q.0 - o.0) * (p.1 - o.1)
}

/// False only when the two values are both clearly non-zero with opposite signs.
#[inline]
fn same_sign(a: f64, b: f64) -> bool {
    !((a >= EPSILON && b <= -EPSILON) || (a <= -EPSILON && b >= EPSILON))
}

/// Unit normal of `(dx, dy)` scaled to half of `width`.
///
/// A zero-length direction yields a zero vector.
#[inline]
fn half_normal(dx: f64, dy: f64, width: f64) -> (f64, f64) {
    let (mut tx, mut ty) = (-dy, dx);
    let len = (tx * tx + ty * ty).sqrt();
    if len >= EPSILON {
        tx /= len;
        ty /= len;
    }
    (tx * width * 0.5, ty * width * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelBuffer;

    const C: Rgb = Rgb(0x00ab_cdef);

    fn lit(buf: &PixelBuffer) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for y in 0..buf.height() as i64 {
            for x in 0..buf.width() as i64 {
                if buf.get(x, y) != Some(Rgb::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // --- Rectangle ---

    #[test]
    fn rectangle_fills_exact_block() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.surface()
            .fill_rectangle(CompositeMode::Set, C, RectF::new(0.0, 0.0, 10.0, 10.0));
        for y in 0..20 {
            for x in 0..20 {
                let expected = if x < 10 && y < 10 { C } else { Rgb::BLACK };
                assert_eq!(buf.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn rectangle_rounds_half_up() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.surface()
            .fill_rectangle(CompositeMode::Set, C, RectF::new(1.5, 2.49, 2.0, 1.0));
        // x: [2, 4), y: [2, 3)
        assert_eq!(lit(&buf), vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn rectangle_past_edge_skips_last_row_and_column() {
        let mut buf = PixelBuffer::new(6, 4);
        buf.surface()
            .fill_rectangle(CompositeMode::Set, C, RectF::new(-3.0, -3.0, 100.0, 100.0));
        let lit = lit(&buf);
        assert_eq!(lit.len(), 5 * 3);
        assert!(lit.iter().all(|&(x, y)| x < 5 && y < 3));
    }

    #[test]
    fn rectangle_degenerate_fills_nothing() {
        let mut buf = PixelBuffer::new(10, 10);
        let mut s = buf.surface();
        s.fill_rectangle(CompositeMode::Set, C, RectF::new(2.0, 2.0, 0.0, 5.0));
        s.fill_rectangle(CompositeMode::Set, C, RectF::new(2.0, 2.0, 5.0, -1.0));
        s.fill_rectangle(CompositeMode::Set, C, RectF::new(50.0, 50.0, 5.0, 5.0));
        s.fill_rectangle(CompositeMode::Set, C, RectF::new(f64::NAN, 0.0, 5.0, 5.0));
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn rectangle_xor_twice_restores() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.surface().clear(Rgb(0x102030));
        let before = buf.clone();
        let mut s = buf.surface();
        let r = RectF::new(1.2, 3.7, 6.1, 4.4);
        s.fill_rectangle(CompositeMode::Xor, Rgb::WHITE, r);
        s.fill_rectangle(CompositeMode::Xor, Rgb::WHITE, r);
        assert_eq!(buf, before);
    }

    // --- Triangle ---

    #[test]
    fn triangle_interior_and_exterior_both_windings() {
        let ccw = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
        let cw = [(0.0, 0.0), (0.0, 10.0), (10.0, 0.0)];
        for [a, b, c] in [ccw, cw] {
            let mut buf = PixelBuffer::new(20, 20);
            buf.surface().fill_triangle(CompositeMode::Set, C, a, b, c);
            assert_eq!(buf.get(1, 1), Some(C));
            assert_eq!(buf.get(9, 9), Some(Rgb::BLACK));
        }
    }

    #[test]
    fn triangle_edges_are_inclusive() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.surface()
            .fill_triangle(CompositeMode::Set, C, (0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        // On the hypotenuse and the vertices.
        assert_eq!(buf.get(5, 5), Some(C));
        assert_eq!(buf.get(0, 0), Some(C));
        assert_eq!(buf.get(10, 0), Some(C));
        assert_eq!(buf.get(0, 10), Some(C));
        assert_eq!(buf.get(6, 5), Some(Rgb::BLACK));
        // x + y <= 10 over the 11x11 box.
        assert_eq!(lit(&buf).len(), 66);
    }

    #[test]
    fn collinear_triangle_fills_bounding_box() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.surface()
            .fill_triangle(CompositeMode::Set, C, (0.0, 0.0), (4.0, 4.0), (2.0, 2.0));
        assert_eq!(lit(&buf).len(), 25);
    }

    #[test]
    fn triangle_clipped_by_surface() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.surface().fill_triangle(
            CompositeMode::Set,
            C,
            (-100.0, -100.0),
            (100.0, -100.0),
            (0.0, 100.0),
        );
        assert!(buf.pixels().iter().any(|&p| p == C.0));
    }

    #[test]
    fn triangle_with_nan_vertex_fills_nothing() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.surface()
            .fill_triangle(CompositeMode::Set, C, (0.0, 0.0), (f64::NAN, 0.0), (0.0, 9.0));
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn triangle_off_surface_fills_nothing() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.surface()
            .fill_triangle(CompositeMode::Set, C, (10.0, 10.0), (20.0, 10.0), (10.0, 20.0));
        assert!(lit(&buf).is_empty());
    }

    // --- Ellipse ---

    #[test]
    fn ellipse_center_in_corners_out() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.surface()
            .fill_ellipse(CompositeMode::Set, C, RectF::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(buf.get(5, 5), Some(C));
        for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9)] {
            assert_eq!(buf.get(x, y), Some(Rgb::BLACK), "corner ({x}, {y})");
        }
        // Axis extremes within the half-open box.
        assert_eq!(buf.get(0, 5), Some(C));
        assert_eq!(buf.get(5, 0), Some(C));
        assert_eq!(buf.get(10, 5), Some(Rgb::BLACK));
    }

    #[test]
    fn ellipse_is_symmetric_about_center() {
        let mut buf = PixelBuffer::new(30, 30);
        buf.surface()
            .fill_ellipse(CompositeMode::Set, C, RectF::new(4.0, 6.0, 16.0, 10.0));
        // Center (12, 11): mirror pixels around it agree.
        for (x, y) in lit(&buf) {
            let (mx, my) = (24 - x, 22 - y);
            if mx < 20 && my < 16 {
                assert_eq!(buf.get(mx, my), Some(C), "mirror of ({x}, {y})");
            }
        }
    }

    #[test]
    fn ellipse_degenerate_fills_nothing() {
        let mut buf = PixelBuffer::new(10, 10);
        let mut s = buf.surface();
        s.fill_ellipse(CompositeMode::Set, C, RectF::new(2.0, 2.0, 0.0, 5.0));
        s.fill_ellipse(CompositeMode::Set, C, RectF::new(2.0, 2.0, 5.0, 1e-12));
        s.fill_ellipse(CompositeMode::Set, C, RectF::new(2.0, 2.0, -5.0, -5.0));
        s.fill_ellipse(CompositeMode::Set, C, RectF::new(2.0, 2.0, f64::NAN, 4.0));
        assert!(lit(&buf).is_empty());
    }

    // --- Line ---

    #[test]
    fn horizontal_line_has_square_caps() {
        let mut buf = PixelBuffer::new(20, 12);
        buf.surface()
            .fill_line(CompositeMode::Set, C, (2.0, 5.0), (12.0, 5.0), 2.0);
        for x in 2..=12 {
            for y in 4..=6 {
                assert_eq!(buf.get(x, y), Some(C), "({x}, {y})");
            }
        }
        assert_eq!(buf.get(1, 5), Some(Rgb::BLACK));
        assert_eq!(buf.get(13, 5), Some(Rgb::BLACK));
        assert_eq!(buf.get(7, 3), Some(Rgb::BLACK));
        assert_eq!(buf.get(7, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn line_direction_does_not_matter() {
        let mut a = PixelBuffer::new(30, 30);
        let mut b = PixelBuffer::new(30, 30);
        // Normal is exactly (-3, 4).
        a.surface()
            .fill_line(CompositeMode::Set, C, (3.0, 4.0), (15.0, 13.0), 10.0);
        b.surface()
            .fill_line(CompositeMode::Set, C, (15.0, 13.0), (3.0, 4.0), 10.0);
        assert!(a.pixels().iter().any(|&p| p == C.0));
        assert_eq!(a, b);
    }

    #[test]
    fn diagonal_line_covers_its_axis() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.surface()
            .fill_line(CompositeMode::Set, C, (2.0, 2.0), (15.0, 15.0), 2.0);
        for i in 2..=15 {
            assert_eq!(buf.get(i, i), Some(C), "({i}, {i})");
        }
        assert_eq!(buf.get(15, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn zero_length_line_collapses_to_point() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.surface()
            .fill_line(CompositeMode::Set, C, (5.0, 5.0), (5.0, 5.0), 4.0);
        assert_eq!(lit(&buf), vec![(5, 5)]);
    }

    #[test]
    fn half_normal_is_perpendicular() {
        let (tx, ty) = half_normal(3.0, 4.0, 10.0);
        assert!((tx - -4.0).abs() < 1e-12);
        assert!((ty - 3.0).abs() < 1e-12);
        assert_eq!(half_normal(0.0, 0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn same_sign_is_permissive_near_zero() {
        assert!(same_sign(1.0, 2.0));
        assert!(same_sign(-1.0, -2.0));
        assert!(!same_sign(1.0, -2.0));
        assert!(!same_sign(-1.0, 2.0));
        assert!(same_sign(0.0, -2.0));
        assert!(same_sign(1.0, -1e-10));
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn pt() -> impl Strategy<Value = (f64, f64)> {
            (-10.0f64..40.0, -10.0f64..40.0)
        }

        // Integer vertices keep the cross products exact.
        fn ipt() -> impl Strategy<Value = (f64, f64)> {
            (-10i32..40, -10i32..40).prop_map(|(x, y)| (x as f64, y as f64))
        }

        proptest! {
            #[test]
            fn triangle_winding_is_irrelevant(a in ipt(), b in ipt(), c in ipt()) {
                let mut p = PixelBuffer::new(32, 32);
                let mut q = PixelBuffer::new(32, 32);
                p.surface().fill_triangle(CompositeMode::Set, C, a, b, c);
                q.surface().fill_triangle(CompositeMode::Set, C, a, c, b);
                prop_assert_eq!(p, q);
            }

            #[test]
            fn triangle_covers_its_vertices_when_on_surface(a in pt(), b in pt(), c in pt()) {
                let mut buf = PixelBuffer::new(32, 32);
                let a = (a.0.round(), a.1.round());
                buf.surface().fill_triangle(CompositeMode::Set, C, a, b, c);
                if (0.0..32.0).contains(&a.0) && (0.0..32.0).contains(&a.1) {
                    prop_assert_eq!(buf.get(a.0 as i64, a.1 as i64), Some(C));
                }
            }

            #[test]
            fn ellipse_stays_inside_its_box(
                x in -10.0f64..30.0, y in -10.0f64..30.0,
                w in 0.0f64..30.0, h in 0.0f64..30.0,
            ) {
                let mut buf = PixelBuffer::new(32, 32);
                let r = RectF::new(x, y, w, h);
                buf.surface().fill_ellipse(CompositeMode::Set, C, r);
                let snapped = r.snap();
                for (px, py) in lit(&buf) {
                    prop_assert!(snapped.contains(px, py));
                }
            }

            #[test]
            fn xor_fills_twice_restore(
                a in pt(), b in pt(), base in 0u32..=0xff_ffff,
            ) {
                let mut buf = PixelBuffer::new(32, 32);
                buf.surface().clear(Rgb(base));
                let before = buf.clone();
                let mut s = buf.surface();
                let r = RectF::new(a.0, a.1, b.0, b.1);
                s.fill_ellipse(CompositeMode::Xor, Rgb::WHITE, r);
                s.fill_ellipse(CompositeMode::Xor, Rgb::WHITE, r);
                s.fill_rectangle(CompositeMode::Xor, Rgb::WHITE, r);
                s.fill_rectangle(CompositeMode::Xor, Rgb::WHITE, r);
                s.fill_triangle(CompositeMode::Xor, Rgb::WHITE, a, b, (a.0, b.1));
                s.fill_triangle(CompositeMode::Xor, Rgb::WHITE, a, b, (a.0, b.1));
                prop_assert_eq!(buf, before);
            }
        }
    }
}

use crate::{PlotTransform, SurfacePoint};
use marketlab_core::models::{CurveKind, Equilibrium, InterventionEffect, MarketCurve};

/// A straight segment on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Segment start
    pub from: SurfacePoint,
    /// Segment end
    pub to: SurfacePoint,
}

/// The consumer-surplus triangle in surface coordinates.
///
/// The triangle spans from the demand intercept (clipped to the price-axis
/// maximum) down to the equilibrium price, closed against the price axis:
/// vertices `(0, min(intercept, max_p))`, `(q*, p*)`, `(0, p*)`. Returns
/// `None` without an equilibrium.
pub fn consumer_surplus_triangle(
    demand: &MarketCurve,
    eq: Option<&Equilibrium>,
    transform: &PlotTransform,
) -> Option<[SurfacePoint; 3]> {
    let eq = eq?;
    let top = demand.intercept().min(transform.max_p());
    Some([
        transform.to_surface(0.0, top),
        transform.to_surface(eq.quantity, eq.price),
        transform.to_surface(0.0, eq.price),
    ])
}

/// The horizontal span of a binding intervention, plus its label midpoint.
///
/// For a surplus this runs from quantity demanded to quantity supplied at
/// the control price; for a shortage the other way around, so the span is
/// always left-to-right. The renderer draws its band around this segment and
/// centers the SURPLUS/SHORTAGE text on the midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlBand {
    /// The left-to-right extent of the gap at the control price
    pub span: Segment,
    /// The center of the span, where the gap label sits
    pub label_anchor: SurfacePoint,
}

/// Computes the band for a binding control effect at its price.
///
/// Returns `None` for a non-binding effect, since there is no gap to show.
pub fn control_band(
    effect: &InterventionEffect,
    control_price: f64,
    transform: &PlotTransform,
) -> Option<ControlBand> {
    let (lo, hi) = match effect {
        InterventionEffect::NoEffect => return None,
        // Floor: demanded < supplied; ceiling: supplied < demanded.
        InterventionEffect::Surplus(q) => (q.demanded, q.supplied),
        InterventionEffect::Shortage(q) => (q.supplied, q.demanded),
    };
    let from = transform.to_surface(lo, control_price);
    let to = transform.to_surface(hi, control_price);
    Some(ControlBand {
        span: Segment { from, to },
        label_anchor: SurfacePoint {
            x: (from.x + to.x) / 2.0,
            y: from.y,
        },
    })
}

/// The dashed guide segments from the equilibrium point to each axis.
///
/// One runs horizontally to the price axis, the other vertically down to the
/// quantity axis. Returns `None` without an equilibrium.
pub fn equilibrium_guides(
    eq: Option<&Equilibrium>,
    transform: &PlotTransform,
) -> Option<[Segment; 2]> {
    let eq = eq?;
    let point = transform.to_surface(eq.quantity, eq.price);
    let padding = transform.padding();
    Some([
        Segment {
            from: point,
            to: SurfacePoint {
                x: padding.left,
                y: point.y,
            },
        },
        Segment {
            from: point,
            to: SurfacePoint {
                x: point.x,
                y: padding.top + transform.plot_height(),
            },
        },
    ])
}

/// Whether the equilibrium marker should be drawn at all.
///
/// The marker renders only when the point lies within the plotted axis
/// ranges, bounds inclusive: an equilibrium exactly on `max_q` or `max_p`
/// is valid and must render; only points strictly outside disappear.
pub fn equilibrium_marker_visible(eq: &Equilibrium, transform: &PlotTransform) -> bool {
    eq.quantity >= 0.0
        && eq.quantity <= transform.max_q()
        && eq.price >= 0.0
        && eq.price <= transform.max_p()
}

/// A suggested anchor for a curve's "D" or "S" text label.
///
/// Demand anchors near the bottom of its visible run (at price 1), supply
/// near the top (at one unit below the price-axis maximum), both clamped one
/// unit inside the quantity axis. Returns `None` when the anchor quantity is
/// not positive (the curve has no visible run to label there).
pub fn curve_label_anchor(
    curve: &MarketCurve,
    transform: &PlotTransform,
) -> Option<SurfacePoint> {
    let q = match curve.kind() {
        CurveKind::Demand => curve.quantity_at(1.0),
        CurveKind::Supply => curve.quantity_at(transform.max_p() - 1.0),
    }
    .min(transform.max_q() - 1.0);
    if q > 0.0 {
        Some(transform.to_surface(q, curve.price_at(q)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlab_core::models::{analyze_ceiling, analyze_floor, equilibrium};

    fn textbook() -> (MarketCurve, MarketCurve, Equilibrium, PlotTransform) {
        let demand = MarketCurve::new(CurveKind::Demand, 10.0, 1.0).unwrap();
        let supply = MarketCurve::new(CurveKind::Supply, 1.0, 1.0).unwrap();
        let eq = equilibrium(&demand, &supply).unwrap();
        (demand, supply, eq, PlotTransform::default())
    }

    #[test]
    fn test_surplus_band_runs_left_to_right() {
        let (demand, supply, eq, t) = textbook();
        let effect = analyze_floor(&demand, &supply, Some(&eq), 7.0);
        let band = control_band(&effect, 7.0, &t).unwrap();
        assert!(band.span.from.x < band.span.to.x);
        assert_eq!(band.span.from, t.to_surface(3.0, 7.0));
        assert_eq!(band.span.to, t.to_surface(6.0, 7.0));
    }

    #[test]
    fn test_shortage_band_runs_left_to_right() {
        let (demand, supply, eq, t) = textbook();
        let effect = analyze_ceiling(&demand, &supply, Some(&eq), 3.0);
        let band = control_band(&effect, 3.0, &t).unwrap();
        assert!(band.span.from.x < band.span.to.x);
        assert_eq!(band.span.from, t.to_surface(2.0, 3.0));
        assert_eq!(band.span.to, t.to_surface(7.0, 3.0));
    }

    #[test]
    fn test_no_band_for_redundant_control() {
        let (demand, supply, eq, t) = textbook();
        let effect = analyze_floor(&demand, &supply, Some(&eq), 2.0);
        assert_eq!(control_band(&effect, 2.0, &t), None);
    }

    #[test]
    fn test_surplus_triangle_clips_to_price_axis_maximum() {
        let (_, supply, _, t) = textbook();
        let tall_demand = MarketCurve::new(CurveKind::Demand, 20.0, 1.0).unwrap();
        let eq = equilibrium(&tall_demand, &supply).unwrap();
        let tri = consumer_surplus_triangle(&tall_demand, Some(&eq), &t).unwrap();
        // Top vertex clamps at max_p, i.e. the top edge of the plot.
        assert_eq!(tri[0], t.to_surface(0.0, 12.0));
    }

    #[test]
    fn test_marker_visible_exactly_at_bounds() {
        let (_, _, _, t) = textbook();
        let on_edge = Equilibrium {
            quantity: 12.0,
            price: 12.0,
        };
        assert!(equilibrium_marker_visible(&on_edge, &t));
        let outside = Equilibrium {
            quantity: 12.0 + 1e-9,
            price: 6.0,
        };
        assert!(!equilibrium_marker_visible(&outside, &t));
    }

    #[test]
    fn test_guides_reach_both_axes() {
        let (_, _, eq, t) = textbook();
        let [horizontal, vertical] = equilibrium_guides(Some(&eq), &t).unwrap();
        assert_eq!(horizontal.to.x, t.padding().left);
        assert_eq!(vertical.to.y, t.padding().top + t.plot_height());
    }

    #[test]
    fn test_label_anchor_absent_for_offscreen_run() {
        let t = PlotTransform::default();
        // Demand already below price 1 at q=0: no visible run to label.
        let demand = MarketCurve::new(CurveKind::Demand, 0.5, 1.0).unwrap();
        assert_eq!(curve_label_anchor(&demand, &t), None);
    }

    #[test]
    fn test_label_anchors_present_for_textbook_curves() {
        let (demand, supply, _, t) = textbook();
        // Demand labeled at q = min(11, 9) = 9; supply at q = min(11, 10) = 10.
        assert_eq!(
            curve_label_anchor(&demand, &t),
            Some(t.to_surface(9.0, 1.0))
        );
        assert_eq!(
            curve_label_anchor(&supply, &t),
            Some(t.to_surface(10.0, 11.0))
        );
    }
}

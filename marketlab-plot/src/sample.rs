use crate::{PlotTransform, SurfacePoint};
use marketlab_core::models::MarketCurve;

/// The default quantity increment used when sampling a curve for drawing.
pub const DEFAULT_SAMPLE_STEP: f64 = 0.1;

/// A sampled curve: one or more disconnected polylines on the drawing
/// surface.
///
/// A curve that stays inside the plotted price range is a single polyline.
/// Whenever a sample's price leaves `[0, max_p]`, the current polyline ends
/// and a new one starts at the next in-range sample; the out-of-range
/// samples are dropped, never clamped. Clamping would visually fold the
/// curve along the axis boundary; breaking the subpath is the contract the
/// renderer relies on.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SamplePath(pub Vec<Vec<SurfacePoint>>);

impl SamplePath {
    /// The disconnected polylines, in sampling order.
    pub fn polylines(&self) -> &[Vec<SurfacePoint>] {
        &self.0
    }

    /// Whether no sample at all fell inside the plotted range.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Samples a market curve over `0 ..= max_q` at the given quantity step.
///
/// See [`SamplePath`] for the segment-break contract. The final sample lands
/// exactly on `max_q` even when the step does not divide it evenly.
pub fn sample_curve(curve: &MarketCurve, transform: &PlotTransform, step: f64) -> SamplePath {
    sample_relation(|q| curve.price_at(q), transform, step)
}

/// Samples an arbitrary quantity→price relation over `0 ..= max_q`.
///
/// This is the generic worker behind [`sample_curve`], also used for the
/// Engel and cross-price panels where the axes carry different meanings but
/// the geometry is identical: the dependent value must stay within
/// `[0, max_p]` or the polyline breaks.
///
/// A step that is not strictly positive cannot advance the sweep and yields
/// an empty path.
pub fn sample_relation(
    f: impl Fn(f64) -> f64,
    transform: &PlotTransform,
    step: f64,
) -> SamplePath {
    if !(step > 0.0) {
        return SamplePath::default();
    }
    let mut polylines = Vec::new();
    let mut current: Vec<SurfacePoint> = Vec::new();
    let mut breaks = 0usize;

    let max_q = transform.max_q();
    let max_p = transform.max_p();
    let steps = (max_q / step).floor() as usize;

    let mut push_sample = |q: f64, current: &mut Vec<SurfacePoint>| {
        let p = f(q);
        if p < 0.0 || p > max_p {
            if !current.is_empty() {
                polylines.push(std::mem::take(current));
                breaks += 1;
            }
        } else {
            current.push(transform.to_surface(q, p));
        }
    };

    for i in 0..=steps {
        push_sample(i as f64 * step, &mut current);
    }
    // Close the sweep exactly at the axis maximum.
    if steps as f64 * step < max_q {
        push_sample(max_q, &mut current);
    }

    if !current.is_empty() {
        polylines.push(current);
    }
    if breaks > 0 {
        tracing::trace!(breaks, "curve left the plotted range while sampling");
    }
    SamplePath(polylines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlab_core::models::{CurveKind, MarketCurve};

    fn transform() -> PlotTransform {
        PlotTransform::default()
    }

    #[test]
    fn test_in_range_curve_is_one_polyline() {
        // Demand from (0, 10) down to (12, -2): exits below zero near q=10,
        // so the tail samples are dropped but the path never splits in two
        // separate visible regions.
        let curve = MarketCurve::new(CurveKind::Demand, 10.0, 1.0).unwrap();
        let path = sample_curve(&curve, &transform(), DEFAULT_SAMPLE_STEP);
        assert_eq!(path.polylines().len(), 1);
    }

    #[test]
    fn test_flat_curve_spans_full_axis() {
        let curve = MarketCurve::new(CurveKind::Supply, 5.0, 0.0).unwrap();
        let path = sample_curve(&curve, &transform(), DEFAULT_SAMPLE_STEP);
        assert_eq!(path.polylines().len(), 1);
        // 121 interior samples plus none dropped: q = 0.0, 0.1, ..., 12.0
        assert_eq!(path.polylines()[0].len(), 121);
    }

    #[test]
    fn test_out_of_range_samples_break_not_clamp() {
        // Intercept above max_p: the first samples are out of range, the
        // polyline starts only once the curve descends into view.
        let t = transform();
        let curve = MarketCurve::new(CurveKind::Demand, 20.0, 1.0).unwrap();
        let path = sample_curve(&curve, &t, DEFAULT_SAMPLE_STEP);
        assert_eq!(path.polylines().len(), 1);
        let first = path.polylines()[0][0];
        // No point may sit above the plot rectangle's top edge.
        assert!(first.y >= t.padding().top - 1e-9);
        for line in path.polylines() {
            for pt in line {
                assert!(pt.y >= t.padding().top - 1e-9);
                assert!(pt.y <= t.padding().top + t.plot_height() + 1e-9);
            }
        }
    }

    #[test]
    fn test_entirely_out_of_range_curve_is_empty() {
        let curve = MarketCurve::new(CurveKind::Supply, 100.0, 1.0).unwrap();
        let path = sample_curve(&curve, &transform(), DEFAULT_SAMPLE_STEP);
        assert!(path.is_empty());
    }

    #[test]
    fn test_relation_can_split_into_multiple_segments() {
        // A vee-shaped relation dips below zero in the middle of the sweep,
        // so the sampler must emit two disconnected polylines.
        let path = sample_relation(|q| (q - 6.0).abs() - 1.0, &transform(), 0.1);
        assert_eq!(path.polylines().len(), 2);
    }

    #[test]
    fn test_non_positive_step_yields_empty_path() {
        let curve = MarketCurve::new(CurveKind::Supply, 1.0, 1.0).unwrap();
        assert!(sample_curve(&curve, &transform(), 0.0).is_empty());
        assert!(sample_curve(&curve, &transform(), -0.1).is_empty());
        assert!(sample_curve(&curve, &transform(), f64::NAN).is_empty());
    }

    #[test]
    fn test_final_sample_lands_on_axis_maximum() {
        let t = transform();
        let curve = MarketCurve::new(CurveKind::Supply, 1.0, 0.5).unwrap();
        let path = sample_curve(&curve, &t, 0.7);
        let last = *path.polylines().last().unwrap().last().unwrap();
        let expected = t.to_surface(12.0, curve.price_at(12.0));
        assert_eq!(last, expected);
    }
}

use crate::{PlotTransform, Segment, SurfacePoint};

/// The default spacing between axis ticks and gridlines.
pub const DEFAULT_TICK_STEP: f64 = 2.0;

/// Tick values from zero to `max` inclusive at the given spacing.
///
/// A step that is not strictly positive cannot advance the sweep and yields
/// no ticks.
pub fn axis_ticks(max: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    if !(step > 0.0) {
        return ticks;
    }
    let mut v = 0.0;
    while v <= max {
        ticks.push(v);
        v += step;
    }
    ticks
}

/// Vertical gridlines at each quantity tick, spanning the plot height.
pub fn quantity_gridlines(transform: &PlotTransform, step: f64) -> Vec<Segment> {
    let top = transform.padding().top;
    let bottom = top + transform.plot_height();
    axis_ticks(transform.max_q(), step)
        .into_iter()
        .map(|q| {
            let x = transform.to_surface(q, 0.0).x;
            Segment {
                from: SurfacePoint { x, y: top },
                to: SurfacePoint { x, y: bottom },
            }
        })
        .collect()
}

/// Horizontal gridlines at each price tick, spanning the plot width.
pub fn price_gridlines(transform: &PlotTransform, step: f64) -> Vec<Segment> {
    let left = transform.padding().left;
    let right = left + transform.plot_width();
    axis_ticks(transform.max_p(), step)
        .into_iter()
        .map(|p| {
            let y = transform.to_surface(0.0, p).y;
            Segment {
                from: SurfacePoint { x: left, y },
                to: SurfacePoint { x: right, y },
            }
        })
        .collect()
}

/// The L-shaped axis polyline: top of the price axis, down to the origin,
/// right to the end of the quantity axis.
pub fn axis_polyline(transform: &PlotTransform) -> [SurfacePoint; 3] {
    let padding = transform.padding();
    let origin = transform.origin();
    [
        SurfacePoint {
            x: padding.left,
            y: padding.top,
        },
        origin,
        SurfacePoint {
            x: padding.left + transform.plot_width(),
            y: origin.y,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_include_both_ends() {
        assert_eq!(axis_ticks(12.0, 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_non_positive_step_yields_no_ticks() {
        assert!(axis_ticks(12.0, 0.0).is_empty());
        assert!(axis_ticks(12.0, -2.0).is_empty());
        assert!(axis_ticks(12.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_gridline_counts_match_ticks() {
        let t = PlotTransform::default();
        assert_eq!(quantity_gridlines(&t, DEFAULT_TICK_STEP).len(), 7);
        assert_eq!(price_gridlines(&t, DEFAULT_TICK_STEP).len(), 7);
    }

    #[test]
    fn test_axis_polyline_corners() {
        let t = PlotTransform::default();
        let [top, corner, right] = axis_polyline(&t);
        assert_eq!((top.x, top.y), (55.0, 30.0));
        assert_eq!((corner.x, corner.y), (55.0, 330.0));
        assert_eq!((right.x, right.y), (410.0, 330.0));
    }
}

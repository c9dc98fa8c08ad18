use super::MarketCurve;

/// The market-clearing point: the quantity and price at which quantity
/// demanded equals quantity supplied.
///
/// Always derived, never stored; recompute from the current curves whenever
/// they change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equilibrium {
    /// The market-clearing quantity
    pub quantity: f64,
    /// The market-clearing price
    pub price: f64,
}

/// Computes the intersection of a demand and a supply curve in closed form.
///
/// Returns `None` when no economically meaningful equilibrium exists:
///
/// - the slopes sum to zero (parallel curves, no unique intersection), or
/// - the intersection falls outside the first quadrant (strictly negative
///   quantity or price).
///
/// A quantity or price of exactly zero is valid, as is one exactly at the
/// plot's axis maxima; clipping against the axes is the plot layer's
/// concern, not this function's.
///
/// The computation is a pure function of its inputs: identical curves yield
/// bit-identical results on every call.
pub fn equilibrium(demand: &MarketCurve, supply: &MarketCurve) -> Option<Equilibrium> {
    let denom = demand.slope() + supply.slope();
    if denom == 0.0 {
        return None;
    }
    let quantity = (demand.intercept() - supply.intercept()) / denom;
    let price = demand.intercept() - demand.slope() * quantity;
    if quantity < 0.0 || price < 0.0 {
        return None;
    }
    Some(Equilibrium { quantity, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurveKind;

    fn curves(di: f64, ds: f64, si: f64, ss: f64) -> (MarketCurve, MarketCurve) {
        (
            MarketCurve::new(CurveKind::Demand, di, ds).unwrap(),
            MarketCurve::new(CurveKind::Supply, si, ss).unwrap(),
        )
    }

    #[test]
    fn test_textbook_equilibrium() {
        let (demand, supply) = curves(10.0, 1.0, 1.0, 1.0);
        let eq = equilibrium(&demand, &supply).unwrap();
        assert_eq!(eq.quantity, 4.5);
        assert_eq!(eq.price, 5.5);
    }

    #[test]
    fn test_equilibrium_lies_on_both_curves() {
        // The price derived from either side must agree within fp tolerance.
        for (di, ds, si, ss) in [
            (10.0, 1.0, 1.0, 1.0),
            (13.0, 0.5, 0.5, 2.0),
            (12.0, 3.0, 2.0, 0.25),
            (8.0, 0.1, 1.0, 0.1),
        ] {
            let (demand, supply) = curves(di, ds, si, ss);
            let eq = equilibrium(&demand, &supply).unwrap();
            assert!((demand.price_at(eq.quantity) - eq.price).abs() < 1e-9);
            assert!((supply.price_at(eq.quantity) - eq.price).abs() < 1e-9);
        }
    }

    #[test]
    fn test_parallel_slopes_have_no_equilibrium() {
        // Both flat at different prices: slopes sum to zero.
        let (demand, supply) = curves(10.0, 0.0, 2.0, 0.0);
        assert_eq!(equilibrium(&demand, &supply), None);

        // Mirror-image slopes also cancel.
        let (demand, supply) = curves(10.0, -1.0, 1.0, 1.0);
        assert_eq!(equilibrium(&demand, &supply), None);
    }

    #[test]
    fn test_intersection_outside_first_quadrant_is_none() {
        // Supply starts above the entire demand curve: q* < 0.
        let (demand, supply) = curves(5.0, 1.0, 9.0, 1.0);
        assert_eq!(equilibrium(&demand, &supply), None);
    }

    #[test]
    fn test_zero_quantity_equilibrium_is_valid() {
        // Curves meeting exactly on the price axis still clear the market.
        let (demand, supply) = curves(5.0, 1.0, 5.0, 1.0);
        let eq = equilibrium(&demand, &supply).unwrap();
        assert_eq!(eq.quantity, 0.0);
        assert_eq!(eq.price, 5.0);
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let (demand, supply) = curves(13.0, 0.7, 0.3, 1.9);
        let a = equilibrium(&demand, &supply).unwrap();
        let b = equilibrium(&demand, &supply).unwrap();
        assert_eq!(a.quantity.to_bits(), b.quantity.to_bits());
        assert_eq!(a.price.to_bits(), b.price.to_bits());
    }

    #[test]
    fn test_near_flat_demand_price_approaches_intercept() {
        // An almost perfectly elastic demand pins the price at its intercept.
        let (demand, supply) = curves(10.0, 0.0001, 1.0, 1.0);
        let eq = equilibrium(&demand, &supply).unwrap();
        assert!((eq.price - 10.0).abs() < 0.01);
    }
}

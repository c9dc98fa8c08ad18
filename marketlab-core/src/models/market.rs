use super::{
    analyze_ceiling, analyze_floor, equilibrium, CurveError, CurveKind, Equilibrium,
    InterventionEffect, MarketCurve,
};

/// A price floor or ceiling as configured by the user.
///
/// The control keeps its price while disabled so re-enabling it restores the
/// previous setting; a disabled control contributes nothing to evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceControl {
    /// Whether the control participates in evaluation
    pub enabled: bool,
    /// The mandated minimum (floor) or maximum (ceiling) price
    pub price: f64,
}

impl PriceControl {
    /// An enabled control at the given price.
    pub fn enabled(price: f64) -> Self {
        Self {
            enabled: true,
            price,
        }
    }
}

/// The full input to one market evaluation: both curves plus any price
/// controls.
///
/// A `MarketState` is an immutable value. It is constructed fresh from the
/// current input parameters on every recompute and never mutated in place;
/// each change produces a new state and a new [`MarketReport`]. This keeps
/// every evaluation a pure function of visible inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    /// The demand side of the market
    pub demand: MarketCurve,
    /// The supply side of the market
    pub supply: MarketCurve,
    /// An optional price floor
    pub floor: Option<PriceControl>,
    /// An optional price ceiling
    pub ceiling: Option<PriceControl>,
}

/// Everything derived from one evaluation of a [`MarketState`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketReport {
    /// The market-clearing point, if one exists in the first quadrant
    pub equilibrium: Option<Equilibrium>,
    /// The floor's effect, present only when a floor is enabled
    pub floor: Option<InterventionEffect>,
    /// The ceiling's effect, present only when a ceiling is enabled
    pub ceiling: Option<InterventionEffect>,
}

impl MarketState {
    /// A market with no price controls.
    pub fn free(demand: MarketCurve, supply: MarketCurve) -> Self {
        Self {
            demand,
            supply,
            floor: None,
            ceiling: None,
        }
    }

    /// Evaluates the market: equilibrium first, then each enabled control
    /// against it.
    ///
    /// Floor and ceiling are analyzed independently and do not interact. If
    /// both are enabled and both bind, the report simply carries both
    /// effects; reconciling a market under two simultaneous binding controls
    /// is deliberately not attempted.
    pub fn evaluate(&self) -> MarketReport {
        let eq = equilibrium(&self.demand, &self.supply);
        let floor = self.floor.filter(|c| c.enabled).map(|c| {
            analyze_floor(&self.demand, &self.supply, eq.as_ref(), c.price)
        });
        let ceiling = self.ceiling.filter(|c| c.enabled).map(|c| {
            analyze_ceiling(&self.demand, &self.supply, eq.as_ref(), c.price)
        });
        MarketReport {
            equilibrium: eq,
            floor,
            ceiling,
        }
    }
}

/// The baseline curve parameters that user adjustments are applied to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseMarket {
    /// Demand price-axis intercept before any shift
    pub demand_intercept: f64,
    /// Supply price-axis intercept before any shift
    pub supply_intercept: f64,
}

impl Default for BaseMarket {
    fn default() -> Self {
        Self {
            demand_intercept: 10.0,
            supply_intercept: 1.0,
        }
    }
}

/// The slider-level inputs of the interactive graph.
///
/// Shifts move a curve without changing its steepness: a positive demand
/// shift raises the demand intercept, a positive supply shift lowers the
/// supply intercept (both read as "shift right" on the plot). Elasticity
/// coefficients set the slopes as reciprocals: a higher coefficient means a
/// flatter curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketAdjustments {
    /// Rightward (+) or leftward (−) shift of the demand curve
    pub demand_shift: f64,
    /// Price elasticity of demand; sets the demand slope to its reciprocal
    pub demand_elasticity: f64,
    /// Rightward (+) or leftward (−) shift of the supply curve
    pub supply_shift: f64,
    /// Price elasticity of supply; sets the supply slope to its reciprocal
    pub supply_elasticity: f64,
}

impl Default for MarketAdjustments {
    fn default() -> Self {
        Self {
            demand_shift: 0.0,
            demand_elasticity: 1.0,
            supply_shift: 0.0,
            supply_elasticity: 1.0,
        }
    }
}

impl MarketAdjustments {
    /// Applies the adjustments to a baseline, producing the pair of curves.
    pub fn apply(&self, base: &BaseMarket) -> Result<(MarketCurve, MarketCurve), CurveError> {
        let demand = MarketCurve::from_elasticity(
            CurveKind::Demand,
            base.demand_intercept + self.demand_shift,
            self.demand_elasticity,
        )?;
        let supply = MarketCurve::from_elasticity(
            CurveKind::Supply,
            base.supply_intercept - self.supply_shift,
            self.supply_elasticity,
        )?;
        Ok((demand, supply))
    }
}

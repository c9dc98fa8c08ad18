use super::{Equilibrium, MarketCurve};

/// The quantities on each side of the market at a binding control price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlQuantities {
    /// Quantity demanded at the control price, clamped to be non-negative
    pub demanded: f64,
    /// Quantity supplied at the control price, clamped to be non-negative
    pub supplied: f64,
    /// The absolute gap between the two sides
    pub gap: f64,
}

/// The effect of a price floor or ceiling on the market.
///
/// A control that is redundant with the free-market equilibrium (a floor at
/// or below it, a ceiling at or above it) has no effect; a binding floor
/// produces a surplus, a binding ceiling a shortage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum InterventionEffect {
    /// The control does not alter the market-clearing outcome
    NoEffect,
    /// Excess supply at a binding price floor
    Surplus(ControlQuantities),
    /// Excess demand at a binding price ceiling
    Shortage(ControlQuantities),
}

impl InterventionEffect {
    /// The quantity gap opened by the control; zero when it does not bind.
    pub fn gap(&self) -> f64 {
        match self {
            Self::NoEffect => 0.0,
            Self::Surplus(q) | Self::Shortage(q) => q.gap,
        }
    }

    /// Whether the control actually alters the market outcome.
    pub fn is_binding(&self) -> bool {
        !matches!(self, Self::NoEffect)
    }
}

/// Analyzes a price floor against the market.
///
/// A floor binds only when set strictly above the equilibrium price and the
/// curves actually produce excess supply there; with no equilibrium there is
/// nothing to bind against. Degenerate slopes (a flat curve whose inverse is
/// pinned to zero quantity) fall through the `supplied > demanded` guard and
/// report no effect, which is the conservative answer.
pub fn analyze_floor(
    demand: &MarketCurve,
    supply: &MarketCurve,
    eq: Option<&Equilibrium>,
    floor_price: f64,
) -> InterventionEffect {
    let Some(eq) = eq else {
        return InterventionEffect::NoEffect;
    };
    if floor_price <= eq.price {
        return InterventionEffect::NoEffect;
    }
    let demanded = demand.quantity_at(floor_price).max(0.0);
    let supplied = supply.quantity_at(floor_price).max(0.0);
    if supplied > demanded {
        InterventionEffect::Surplus(ControlQuantities {
            demanded,
            supplied,
            gap: supplied - demanded,
        })
    } else {
        InterventionEffect::NoEffect
    }
}

/// Analyzes a price ceiling against the market.
///
/// Symmetric to [`analyze_floor`]: a ceiling binds only when set strictly
/// below the equilibrium price and quantity demanded exceeds quantity
/// supplied there, producing a shortage.
pub fn analyze_ceiling(
    demand: &MarketCurve,
    supply: &MarketCurve,
    eq: Option<&Equilibrium>,
    ceiling_price: f64,
) -> InterventionEffect {
    let Some(eq) = eq else {
        return InterventionEffect::NoEffect;
    };
    if ceiling_price >= eq.price {
        return InterventionEffect::NoEffect;
    }
    let demanded = demand.quantity_at(ceiling_price).max(0.0);
    let supplied = supply.quantity_at(ceiling_price).max(0.0);
    if demanded > supplied {
        InterventionEffect::Shortage(ControlQuantities {
            demanded,
            supplied,
            gap: demanded - supplied,
        })
    } else {
        InterventionEffect::NoEffect
    }
}

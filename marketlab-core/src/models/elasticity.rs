use super::{CurveKind, MarketCurve};

/// Qualitative band for a price elasticity coefficient (PED or PES).
///
/// The cut points are fixed and inclusive exactly as written; no rounding is
/// applied before comparison. They match the bands shown in the elasticity
/// reference tables of the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PriceElasticityBand {
    /// `v <= 0.15`: quantity barely responds to price at all
    PerfectlyInelastic,
    /// `0.15 < v < 0.9`
    Inelastic,
    /// `0.9 <= v <= 1.1`
    UnitElastic,
    /// `1.1 < v < 3.9`
    Elastic,
    /// `v >= 3.9`: quantity is unboundedly responsive to price
    PerfectlyElastic,
}

impl PriceElasticityBand {
    /// Classifies a coefficient into its band.
    pub fn classify(value: f64) -> Self {
        if value <= 0.15 {
            Self::PerfectlyInelastic
        } else if value < 0.9 {
            Self::Inelastic
        } else if value <= 1.1 {
            Self::UnitElastic
        } else if value < 3.9 {
            Self::Elastic
        } else {
            Self::PerfectlyElastic
        }
    }

    /// Human-readable label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PerfectlyInelastic => "Perfectly inelastic",
            Self::Inelastic => "Inelastic",
            Self::UnitElastic => "Unit elastic",
            Self::Elastic => "Elastic",
            Self::PerfectlyElastic => "Perfectly elastic",
        }
    }
}

/// Classification of a good by its income elasticity of demand (IED).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum IncomeElasticityClass {
    /// `v > 1`: demand grows faster than income
    Luxury,
    /// `0 < v <= 1`: demand grows with income, but slower
    Necessity,
    /// `v <= 0`: demand falls as income rises
    Inferior,
}

impl IncomeElasticityClass {
    /// Classifies an income elasticity coefficient.
    pub fn classify(value: f64) -> Self {
        if value > 1.0 {
            Self::Luxury
        } else if value > 0.0 {
            Self::Necessity
        } else {
            Self::Inferior
        }
    }
}

/// Classification of a pair of goods by their cross-price elasticity (CED).
///
/// Coefficients within ±0.05 of zero are treated as unrelated goods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CrossElasticityClass {
    /// `v > 0.05`: a price rise in one good raises demand for the other
    Substitute,
    /// `v < -0.05`: a price rise in one good lowers demand for the other
    Complement,
    /// `|v| <= 0.05`
    Unrelated,
}

impl CrossElasticityClass {
    /// Classifies a cross-price elasticity coefficient.
    pub fn classify(value: f64) -> Self {
        if value > 0.05 {
            Self::Substitute
        } else if value < -0.05 {
            Self::Complement
        } else {
            Self::Unrelated
        }
    }
}

/// A linear Engel curve: quantity demanded as a function of income.
///
/// `Q = base_quantity + coefficient · (income − base_income)`, anchored at a
/// reference income level. The coefficient is the income elasticity of the
/// good; its sign determines whether the curve rises (normal good) or falls
/// (inferior good) with income.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngelCurve {
    /// The reference income the curve is anchored at
    pub base_income: f64,
    /// Quantity demanded at the reference income
    pub base_quantity: f64,
    /// Income elasticity coefficient (slope of the curve)
    pub coefficient: f64,
}

impl EngelCurve {
    /// Quantity demanded at the given income level.
    pub fn quantity_at(&self, income: f64) -> f64 {
        self.base_quantity + self.coefficient * (income - self.base_income)
    }
}

/// A linear cross-price relation: demand for one good as a function of
/// another good's price.
///
/// `Q = base_quantity + coefficient · (other_price − base_price)`; a positive
/// coefficient indicates substitutes, a negative one complements.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossPriceCurve {
    /// The reference price of the other good
    pub base_price: f64,
    /// Quantity demanded at the reference price
    pub base_quantity: f64,
    /// Cross-price elasticity coefficient (slope of the relation)
    pub coefficient: f64,
}

impl CrossPriceCurve {
    /// Quantity demanded of this good at the other good's price.
    pub fn quantity_at(&self, other_price: f64) -> f64 {
        self.base_quantity + self.coefficient * (other_price - self.base_price)
    }
}

/// Direction of a total-revenue change between two prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RevenueDirection {
    /// Revenue is higher at the second price
    Rising,
    /// Revenue is lower at the second price
    Falling,
    /// Revenue is unchanged
    Unchanged,
}

/// Total revenue (`P·Q`) along a demand curve at two prices.
///
/// This is the classic elasticity demonstration: cutting the price raises
/// revenue when demand is elastic and lowers it when demand is inelastic.
/// Quantities are clamped to be non-negative before multiplying.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevenueComparison {
    /// The first price and the revenue earned there
    pub from: (f64, f64),
    /// The second price and the revenue earned there
    pub to: (f64, f64),
    /// Which way revenue moved
    pub direction: RevenueDirection,
}

impl RevenueComparison {
    /// Compares total revenue on `demand` between two prices.
    ///
    /// Returns `None` when the curve is not a demand curve; revenue along a
    /// supply curve is not what this comparison demonstrates.
    pub fn across_prices(demand: &MarketCurve, p_from: f64, p_to: f64) -> Option<Self> {
        if demand.kind() != CurveKind::Demand {
            return None;
        }
        let revenue = |p: f64| p * demand.quantity_at(p).max(0.0);
        let from = (p_from, revenue(p_from));
        let to = (p_to, revenue(p_to));
        let direction = if to.1 > from.1 {
            RevenueDirection::Rising
        } else if to.1 < from.1 {
            RevenueDirection::Falling
        } else {
            RevenueDirection::Unchanged
        };
        Some(Self {
            from,
            to,
            direction,
        })
    }
}

/// Stand-in slope for a perfectly inelastic (vertical) curve.
///
/// An elasticity coefficient of exactly zero has no finite reciprocal, so
/// [`MarketCurve::from_elasticity`] substitutes this value instead of letting
/// `NaN` or `inf` enter the pipeline. The curve is steep enough to leave the
/// plotted price range within a negligible quantity step, which is all a
/// vertical curve means for rendering purposes.
pub const DEGENERATE_SLOPE: f64 = 9999.0;

/// Which side of the market a curve describes.
///
/// The sign convention for the slope term differs between the two: demand
/// price falls as quantity rises, supply price rises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CurveKind {
    /// Downward-sloping willingness to pay: `P = intercept − slope·Q`
    Demand,
    /// Upward-sloping willingness to sell: `P = intercept + slope·Q`
    Supply,
}

/// A linear curve for one side of the market.
///
/// The intercept is the price at zero quantity; the slope is the price change
/// per unit of quantity, applied with the sign convention of [`CurveKind`].
/// Both values must be finite; validation happens on construction (and on
/// deserialization, via the DTO round-trip), so downstream math never has to
/// re-check for `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MarketCurveDto", into = "MarketCurveDto")
)]
pub struct MarketCurve {
    kind: CurveKind,
    intercept: f64,
    slope: f64,
}

impl MarketCurve {
    /// Creates a curve, validating that intercept and slope are finite.
    pub fn new(kind: CurveKind, intercept: f64, slope: f64) -> Result<Self, CurveError> {
        Self::try_from(MarketCurveDto {
            kind,
            intercept,
            slope,
        })
    }

    /// Creates a curve from an elasticity coefficient.
    ///
    /// This is the slider semantic of the interactive graph: the coefficient
    /// controls how flat the curve is (`slope = 1 / coefficient`), with a
    /// coefficient of exactly zero special-cased to [`DEGENERATE_SLOPE`]
    /// (a perfectly inelastic, effectively vertical curve).
    pub fn from_elasticity(
        kind: CurveKind,
        intercept: f64,
        coefficient: f64,
    ) -> Result<Self, CurveError> {
        let slope = if coefficient == 0.0 {
            DEGENERATE_SLOPE
        } else {
            coefficient.recip()
        };
        Self::new(kind, intercept, slope)
    }

    /// Which side of the market this curve describes.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The price at zero quantity.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The magnitude of the price change per unit quantity.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The price this curve associates with quantity `q`.
    pub fn price_at(&self, q: f64) -> f64 {
        match self.kind {
            CurveKind::Demand => self.intercept - self.slope * q,
            CurveKind::Supply => self.intercept + self.slope * q,
        }
    }

    /// The quantity this curve associates with price `p`.
    ///
    /// A zero slope makes the inverse undefined (a flat curve pins the price,
    /// not the quantity); this returns `0.0` in that case rather than failing.
    /// Callers treat a flat curve as infinitely elastic and clamp downstream,
    /// which is exactly what the intervention analysis does.
    pub fn quantity_at(&self, p: f64) -> f64 {
        if self.slope == 0.0 {
            return 0.0;
        }
        match self.kind {
            CurveKind::Demand => (self.intercept - p) / self.slope,
            CurveKind::Supply => (p - self.intercept) / self.slope,
        }
    }
}

/// DTO to ensure that we always validate when we deserialize from an
/// untrusted source.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct MarketCurveDto {
    /// Which side of the market the curve describes
    pub kind: CurveKind,
    /// Price at zero quantity
    pub intercept: f64,
    /// Price change per unit quantity (sign handled by `kind`)
    pub slope: f64,
}

impl From<MarketCurve> for MarketCurveDto {
    fn from(value: MarketCurve) -> Self {
        Self {
            kind: value.kind,
            intercept: value.intercept,
            slope: value.slope,
        }
    }
}

impl TryFrom<MarketCurveDto> for MarketCurve {
    type Error = CurveError;

    fn try_from(value: MarketCurveDto) -> Result<Self, Self::Error> {
        if value.intercept.is_nan() || value.slope.is_nan() {
            return Err(CurveError::NaN);
        }
        if value.intercept.is_infinite() || value.slope.is_infinite() {
            return Err(CurveError::Infinity);
        }
        Ok(Self {
            kind: value.kind,
            intercept: value.intercept,
            slope: value.slope,
        })
    }
}

/// Errors that can occur when constructing a market curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Error when the intercept or slope is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when the intercept or slope is infinite
    #[error("Intercepts and slopes cannot be infinite")]
    Infinity,
}

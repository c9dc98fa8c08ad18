mod curve;
mod elasticity;
mod equilibrium;
mod intervention;
mod market;

pub use curve::{CurveError, CurveKind, MarketCurve, MarketCurveDto, DEGENERATE_SLOPE};
pub use elasticity::{
    CrossElasticityClass, CrossPriceCurve, EngelCurve, IncomeElasticityClass,
    PriceElasticityBand, RevenueComparison, RevenueDirection,
};
pub use equilibrium::{equilibrium, Equilibrium};
pub use intervention::{analyze_ceiling, analyze_floor, ControlQuantities, InterventionEffect};
pub use market::{BaseMarket, MarketAdjustments, MarketReport, MarketState, PriceControl};

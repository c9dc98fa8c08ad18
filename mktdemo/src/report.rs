//! Assembly of one market evaluation into a serializable report.

use marketlab_core::models::{
    Equilibrium, InterventionEffect, MarketAdjustments, MarketState, PriceElasticityBand,
    RevenueComparison, RevenueDirection,
};
use marketlab_plot::{sample_curve, PlotTransform, SamplePath, DEFAULT_SAMPLE_STEP};
use serde::Serialize;

/// The price pair for the total-revenue demonstration: what happens to
/// `P·Q` on the demand curve when the price is cut from 4 to 3.
const REVENUE_DEMO_PRICES: (f64, f64) = (4.0, 3.0);

/// The sampled drawing geometry, included on request.
#[derive(Debug, Clone, Serialize)]
pub struct ReportGeometry {
    /// The demand curve's polylines on the drawing surface
    pub demand: SamplePath,
    /// The supply curve's polylines on the drawing surface
    pub supply: SamplePath,
}

/// Everything a consumer needs to describe one evaluated market.
#[derive(Debug, Clone, Serialize)]
pub struct MarketGraphReport {
    /// The catalog id this evaluation came from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    /// The evaluated input state
    pub state: MarketState,
    /// The market-clearing point, absent when the market cannot clear
    pub equilibrium: Option<Equilibrium>,
    /// The floor's effect, present only when a floor was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<InterventionEffect>,
    /// The ceiling's effect, present only when a ceiling was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<InterventionEffect>,
    /// Qualitative band of the demand elasticity input
    pub demand_band: PriceElasticityBand,
    /// Qualitative band of the supply elasticity input
    pub supply_band: PriceElasticityBand,
    /// Total revenue on the demand curve across the demonstration price cut
    pub revenue: Option<RevenueComparison>,
    /// Sampled curve geometry, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<ReportGeometry>,
}

impl MarketGraphReport {
    /// Evaluates a state and assembles the report.
    pub fn build(
        scenario: Option<String>,
        state: MarketState,
        adjustments: &MarketAdjustments,
        transform: &PlotTransform,
        with_geometry: bool,
    ) -> Self {
        let evaluation = state.evaluate();
        tracing::debug!(?evaluation, "market evaluated");

        let geometry = with_geometry.then(|| ReportGeometry {
            demand: sample_curve(&state.demand, transform, DEFAULT_SAMPLE_STEP),
            supply: sample_curve(&state.supply, transform, DEFAULT_SAMPLE_STEP),
        });

        Self {
            scenario,
            state,
            equilibrium: evaluation.equilibrium,
            floor: evaluation.floor,
            ceiling: evaluation.ceiling,
            demand_band: PriceElasticityBand::classify(adjustments.demand_elasticity),
            supply_band: PriceElasticityBand::classify(adjustments.supply_elasticity),
            revenue: RevenueComparison::across_prices(
                &state.demand,
                REVENUE_DEMO_PRICES.0,
                REVENUE_DEMO_PRICES.1,
            ),
            geometry,
        }
    }

    /// Renders the report as a short human-readable summary.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(id) = &self.scenario {
            lines.push(format!("scenario: {id}"));
        }
        match &self.equilibrium {
            Some(eq) => lines.push(format!(
                "equilibrium: Q* = {:.2}, P* = {:.2}",
                eq.quantity, eq.price
            )),
            None => lines.push("equilibrium: none (market cannot clear)".into()),
        }
        lines.push(format!(
            "elasticity: demand {}, supply {}",
            self.demand_band.label(),
            self.supply_band.label()
        ));
        if let Some(rev) = &self.revenue {
            let direction = match rev.direction {
                RevenueDirection::Rising => "rising",
                RevenueDirection::Falling => "falling",
                RevenueDirection::Unchanged => "unchanged",
            };
            lines.push(format!(
                "revenue: {:.2} at P = {:.2}, {:.2} at P = {:.2} ({direction})",
                rev.from.1, rev.from.0, rev.to.1, rev.to.0
            ));
        }
        if let Some(effect) = &self.floor {
            lines.push(describe_control("floor", effect));
        }
        if let Some(effect) = &self.ceiling {
            lines.push(describe_control("ceiling", effect));
        }
        lines.join("\n")
    }
}

fn describe_control(name: &str, effect: &InterventionEffect) -> String {
    match effect {
        InterventionEffect::NoEffect => format!("{name}: no effect (redundant)"),
        InterventionEffect::Surplus(q) => format!(
            "{name}: SURPLUS of {:.2} (demanded {:.2}, supplied {:.2})",
            q.gap, q.demanded, q.supplied
        ),
        InterventionEffect::Shortage(q) => format!(
            "{name}: SHORTAGE of {:.2} (demanded {:.2}, supplied {:.2})",
            q.gap, q.demanded, q.supplied
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlab_core::models::{BaseMarket, PriceControl};

    fn textbook_report(floor: Option<f64>, with_geometry: bool) -> MarketGraphReport {
        let adjustments = MarketAdjustments::default();
        let (demand, supply) = adjustments.apply(&BaseMarket::default()).unwrap();
        let state = MarketState {
            demand,
            supply,
            floor: floor.map(PriceControl::enabled),
            ceiling: None,
        };
        MarketGraphReport::build(
            None,
            state,
            &adjustments,
            &PlotTransform::default(),
            with_geometry,
        )
    }

    #[test]
    fn test_report_carries_evaluation() {
        let report = textbook_report(Some(7.0), false);
        assert_eq!(report.equilibrium.unwrap().price, 5.5);
        assert_eq!(report.floor.unwrap().gap(), 3.0);
        assert_eq!(report.demand_band, PriceElasticityBand::UnitElastic);
        assert!(report.geometry.is_none());
    }

    #[test]
    fn test_geometry_included_on_request() {
        let report = textbook_report(None, true);
        let geometry = report.geometry.unwrap();
        assert!(!geometry.demand.is_empty());
        assert!(!geometry.supply.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let report = textbook_report(Some(7.0), false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["equilibrium"]["quantity"], 4.5);
        assert_eq!(json["floor"]["kind"], "surplus");
        // Disabled sections are omitted entirely.
        assert!(json.get("ceiling").is_none());
    }

    #[test]
    fn test_report_compares_revenue_across_the_price_cut() {
        // Textbook demand (intercept 10, slope 1): cutting the price from 4
        // to 3 moves revenue from 24 to 21 on the inelastic lower segment.
        let report = textbook_report(None, false);
        let rev = report.revenue.unwrap();
        assert_eq!(rev.from, (4.0, 24.0));
        assert_eq!(rev.to, (3.0, 21.0));
        assert_eq!(rev.direction, RevenueDirection::Falling);

        let text = report.render_text();
        assert!(text.contains("24.00 at P = 4.00"));
        assert!(text.contains("(falling)"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["revenue"]["direction"], "falling");
    }

    #[test]
    fn test_text_rendering_mentions_the_gap() {
        let report = textbook_report(Some(7.0), false);
        let text = report.render_text();
        assert!(text.contains("Q* = 4.50"));
        assert!(text.contains("SURPLUS of 3.00"));
    }
}

//! The canned scenario catalog.
//!
//! Each scenario pairs a short narrative with the slider parameters that
//! demonstrate it. The core never sees scenario identities; a scenario is
//! converted into a plain `MarketState` before evaluation, so the catalog is
//! just an external configuration table.

use crate::Map;
use marketlab_core::models::{
    BaseMarket, CurveError, MarketAdjustments, MarketState, PriceControl,
};
use serde::Serialize;

/// The curated grouping used when listing scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    /// Non-price factors moving the demand curve
    Demand,
    /// Non-price factors moving the supply curve
    Supply,
    /// Simultaneous shifts or elasticity interplay
    Combined,
    /// Price floors, ceilings and engineered scarcity
    Controls,
}

impl ScenarioCategory {
    /// The tag text shown next to a scenario title.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Demand => "Demand Shift",
            Self::Supply => "Supply Shift",
            Self::Combined => "Combined",
            Self::Controls => "Price Controls",
        }
    }
}

/// The parameters a scenario applies to the interactive graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScenarioParams {
    /// Slider-level curve adjustments
    pub adjustments: MarketAdjustments,
    /// A price floor to enable, if any
    pub floor: Option<f64>,
    /// A price ceiling to enable, if any
    pub ceiling: Option<f64>,
}

impl ScenarioParams {
    const fn shifts(demand_shift: f64, supply_shift: f64) -> Self {
        Self {
            adjustments: MarketAdjustments {
                demand_shift,
                demand_elasticity: 1.0,
                supply_shift,
                supply_elasticity: 1.0,
            },
            floor: None,
            ceiling: None,
        }
    }

    /// Builds the market state this scenario describes.
    pub fn to_state(&self, base: &BaseMarket) -> Result<MarketState, CurveError> {
        let (demand, supply) = self.adjustments.apply(base)?;
        Ok(MarketState {
            demand,
            supply,
            floor: self.floor.map(PriceControl::enabled),
            ceiling: self.ceiling.map(PriceControl::enabled),
        })
    }
}

/// A named preset: parameters plus the one-line story they illustrate.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Scenario {
    /// Display title
    pub title: &'static str,
    /// Listing group
    pub category: ScenarioCategory,
    /// One-line summary of cause and effect
    pub summary: &'static str,
    /// The parameters to apply
    pub params: ScenarioParams,
}

/// The built-in catalog, in curated order, keyed by stable id.
pub fn catalog() -> Map<&'static str, Scenario> {
    let mut scenarios = Map::default();
    let mut add = |id, scenario| {
        scenarios.insert(id, scenario);
    };

    add(
        "income-up-normal",
        Scenario {
            title: "Income rises (Normal Good)",
            category: ScenarioCategory::Demand,
            summary: "Consumer income increases, so demand for normal goods rises.",
            params: ScenarioParams::shifts(3.0, 0.0),
        },
    );
    add(
        "income-up-inferior",
        Scenario {
            title: "Income rises (Inferior Good)",
            category: ScenarioCategory::Demand,
            summary: "Consumer income increases, so demand for inferior goods falls.",
            params: ScenarioParams::shifts(-3.0, 0.0),
        },
    );
    add(
        "substitute-price-up",
        Scenario {
            title: "Substitute Price Rises",
            category: ScenarioCategory::Demand,
            summary: "A rival product becomes more expensive, raising demand for this one.",
            params: ScenarioParams::shifts(3.0, 0.0),
        },
    );
    add(
        "complement-price-up",
        Scenario {
            title: "Complement Price Rises",
            category: ScenarioCategory::Demand,
            summary: "A complementary product becomes more expensive, lowering demand.",
            params: ScenarioParams::shifts(-3.0, 0.0),
        },
    );
    add(
        "tastes-increase",
        Scenario {
            title: "Consumer Tastes/Preferences Shift",
            category: ScenarioCategory::Demand,
            summary: "The product becomes fashionable, raising demand at every price.",
            params: ScenarioParams::shifts(3.0, 0.0),
        },
    );
    add(
        "input-costs-up",
        Scenario {
            title: "Input Costs Increase",
            category: ScenarioCategory::Supply,
            summary: "Production becomes more expensive, so supply decreases.",
            params: ScenarioParams::shifts(0.0, -3.0),
        },
    );
    add(
        "technology-up",
        Scenario {
            title: "Technology Improvement",
            category: ScenarioCategory::Supply,
            summary: "Better technology lets firms produce more at each price.",
            params: ScenarioParams::shifts(0.0, 3.0),
        },
    );
    add(
        "regulations-up",
        Scenario {
            title: "Government Regulations Increase",
            category: ScenarioCategory::Supply,
            summary: "Compliance costs rise, so firms supply less at each price.",
            params: ScenarioParams::shifts(0.0, -2.0),
        },
    );
    add(
        "new-suppliers",
        Scenario {
            title: "New Suppliers Enter Market",
            category: ScenarioCategory::Supply,
            summary: "More firms enter, increasing total supply at each price.",
            params: ScenarioParams::shifts(0.0, 3.0),
        },
    );
    add(
        "business-expectations",
        Scenario {
            title: "Business Expectations Change",
            category: ScenarioCategory::Supply,
            summary: "Firms hold back supply in anticipation of higher future prices.",
            params: ScenarioParams::shifts(0.0, -2.0),
        },
    );
    add(
        "combined-growth",
        Scenario {
            title: "Economic Growth (D↑ and S↑)",
            category: ScenarioCategory::Combined,
            summary: "Demand and supply both increase; quantity rises, price is ambiguous.",
            params: ScenarioParams::shifts(3.0, 3.0),
        },
    );
    add(
        "combined-stagflation",
        Scenario {
            title: "Cost-Push (D unchanged, S↓)",
            category: ScenarioCategory::Combined,
            summary: "A supply shock with inelastic supply: prices spike, output falls.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 0.0,
                    demand_elasticity: 1.0,
                    supply_shift: -4.0,
                    supply_elasticity: 0.4,
                },
                floor: None,
                ceiling: None,
            },
        },
    );
    add(
        "price-floor",
        Scenario {
            title: "Price Floor (Minimum Price)",
            category: ScenarioCategory::Controls,
            summary: "A minimum price above equilibrium creates a persistent surplus.",
            params: ScenarioParams {
                floor: Some(7.0),
                ..ScenarioParams::shifts(0.0, 0.0)
            },
        },
    );
    add(
        "price-ceiling",
        Scenario {
            title: "Price Ceiling (Maximum Price)",
            category: ScenarioCategory::Controls,
            summary: "A maximum price below equilibrium creates a persistent shortage.",
            params: ScenarioParams {
                ceiling: Some(3.0),
                ..ScenarioParams::shifts(0.0, 0.0)
            },
        },
    );
    add(
        "inelastic-supply-demand-up",
        Scenario {
            title: "Demand ↑ with Inelastic Supply",
            category: ScenarioCategory::Combined,
            summary: "With steep supply, a demand increase mostly raises the price.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 3.0,
                    demand_elasticity: 1.0,
                    supply_shift: 0.0,
                    supply_elasticity: 0.3,
                },
                floor: None,
                ceiling: None,
            },
        },
    );
    add(
        "elastic-supply-demand-up",
        Scenario {
            title: "Demand ↑ with Elastic Supply",
            category: ScenarioCategory::Combined,
            summary: "With flat supply, a demand increase mostly raises the quantity.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 3.0,
                    demand_elasticity: 1.0,
                    supply_shift: 0.0,
                    supply_elasticity: 3.0,
                },
                floor: None,
                ceiling: None,
            },
        },
    );
    add(
        "inelastic-demand-supply-up",
        Scenario {
            title: "Supply ↑ with Inelastic Demand",
            category: ScenarioCategory::Combined,
            summary: "With steep demand, a supply increase mostly lowers the price.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 0.0,
                    demand_elasticity: 0.3,
                    supply_shift: 3.0,
                    supply_elasticity: 1.0,
                },
                floor: None,
                ceiling: None,
            },
        },
    );
    add(
        "elastic-demand-supply-up",
        Scenario {
            title: "Supply ↑ with Elastic Demand",
            category: ScenarioCategory::Combined,
            summary: "With flat demand, a supply increase mostly raises the quantity.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 0.0,
                    demand_elasticity: 3.0,
                    supply_shift: 3.0,
                    supply_elasticity: 1.0,
                },
                floor: None,
                ceiling: None,
            },
        },
    );
    add(
        "engineered-shortage",
        Scenario {
            title: "Engineered Shortage (Strategic)",
            category: ScenarioCategory::Controls,
            summary: "Selling below equilibrium on purpose creates scarcity and buzz.",
            params: ScenarioParams {
                adjustments: MarketAdjustments {
                    demand_shift: 2.0,
                    demand_elasticity: 0.6,
                    supply_shift: -2.0,
                    supply_elasticity: 0.4,
                },
                floor: None,
                ceiling: Some(3.5),
            },
        },
    );

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_stable() {
        let scenarios = catalog();
        assert_eq!(scenarios.len(), 19);
        // Listing order starts with the demand-side stories.
        assert_eq!(
            scenarios.get_index(0).unwrap().0,
            &"income-up-normal"
        );
        assert!(scenarios.contains_key("engineered-shortage"));
    }

    #[test]
    fn test_every_scenario_builds_a_state() {
        let base = BaseMarket::default();
        for (id, scenario) in catalog() {
            let state = scenario.params.to_state(&base);
            assert!(state.is_ok(), "scenario {id} must build");
        }
    }

    #[test]
    fn test_control_scenarios_bind() {
        let base = BaseMarket::default();
        let scenarios = catalog();

        let floor = scenarios["price-floor"].params.to_state(&base).unwrap();
        assert!(floor.evaluate().floor.unwrap().is_binding());

        let ceiling = scenarios["price-ceiling"].params.to_state(&base).unwrap();
        assert!(ceiling.evaluate().ceiling.unwrap().is_binding());

        let engineered = scenarios["engineered-shortage"]
            .params
            .to_state(&base)
            .unwrap();
        assert!(engineered.evaluate().ceiling.unwrap().is_binding());
    }

    #[test]
    fn test_growth_scenario_raises_quantity() {
        let base = BaseMarket::default();
        let scenarios = catalog();

        let baseline = ScenarioParams::shifts(0.0, 0.0)
            .to_state(&base)
            .unwrap()
            .evaluate()
            .equilibrium
            .unwrap();
        let growth = scenarios["combined-growth"]
            .params
            .to_state(&base)
            .unwrap()
            .evaluate()
            .equilibrium
            .unwrap();
        assert!(growth.quantity > baseline.quantity);
    }
}

use super::super::domain::{CategoryKind, DifficultyTier, ImpactTier};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReductionStrategy {
    pub id: &'static str,
    pub category: CategoryKind,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactTier,
    pub difficulty: DifficultyTier,
    /// kg CO₂ saved per year when adopted.
    pub potential_reduction: f64,
    pub icon: &'static str,
}

impl ReductionStrategy {
    /// Ease-weighted impact used for ranking within a category.
    pub const fn score(&self) -> u8 {
        self.impact.weight() + self.difficulty.weight()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyCatalog {
    strategies: &'static [ReductionStrategy],
}

impl StrategyCatalog {
    pub fn standard() -> Self {
        Self {
            strategies: &STANDARD_STRATEGIES,
        }
    }

    /// Every strategy in declaration order.
    pub fn strategies(&self) -> &'static [ReductionStrategy] {
        self.strategies
    }

    pub fn for_category(&self, category: CategoryKind) -> Vec<&'static ReductionStrategy> {
        self.strategies
            .iter()
            .filter(|strategy| strategy.category == category)
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&'static ReductionStrategy> {
        self.strategies.iter().find(|strategy| strategy.id == id)
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_STRATEGIES: [ReductionStrategy; 14] = [
    ReductionStrategy {
        id: "public-transport",
        category: CategoryKind::Transportation,
        title: "Use Public Transportation",
        description: "Replace car trips with bus, train, or subway when possible",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 2_300.0,
        icon: "🚌",
    },
    ReductionStrategy {
        id: "bike-walk",
        category: CategoryKind::Transportation,
        title: "Bike or Walk More",
        description: "Replace short car trips with walking or cycling",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 1_200.0,
        icon: "🚲",
    },
    ReductionStrategy {
        id: "electric-vehicle",
        category: CategoryKind::Transportation,
        title: "Switch to Electric Vehicle",
        description: "Consider an electric or hybrid vehicle for your next car",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Hard,
        potential_reduction: 3_500.0,
        icon: "⚡",
    },
    ReductionStrategy {
        id: "reduce-flights",
        category: CategoryKind::Transportation,
        title: "Reduce Air Travel",
        description: "Choose virtual meetings or local vacations when possible",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Medium,
        potential_reduction: 2_800.0,
        icon: "✈️",
    },
    ReductionStrategy {
        id: "led-bulbs",
        category: CategoryKind::HomeEnergy,
        title: "Switch to LED Bulbs",
        description: "Replace incandescent bulbs with energy-efficient LEDs",
        impact: ImpactTier::Low,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 180.0,
        icon: "💡",
    },
    ReductionStrategy {
        id: "smart-thermostat",
        category: CategoryKind::HomeEnergy,
        title: "Install Smart Thermostat",
        description: "Optimize heating and cooling with programmable controls",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Medium,
        potential_reduction: 900.0,
        icon: "🌡️",
    },
    ReductionStrategy {
        id: "insulation",
        category: CategoryKind::HomeEnergy,
        title: "Improve Home Insulation",
        description: "Add insulation to reduce heating and cooling needs",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Hard,
        potential_reduction: 1_800.0,
        icon: "🏠",
    },
    ReductionStrategy {
        id: "solar-panels",
        category: CategoryKind::HomeEnergy,
        title: "Install Solar Panels",
        description: "Generate clean electricity from solar energy",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Hard,
        potential_reduction: 4_200.0,
        icon: "☀️",
    },
    ReductionStrategy {
        id: "energy-efficient-appliances",
        category: CategoryKind::HomeEnergy,
        title: "Energy Star Appliances",
        description: "Choose ENERGY STAR certified appliances",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Medium,
        potential_reduction: 650.0,
        icon: "📱",
    },
    ReductionStrategy {
        id: "plant-based-diet",
        category: CategoryKind::Lifestyle,
        title: "Eat More Plant-Based Meals",
        description: "Reduce meat consumption, especially beef and lamb",
        impact: ImpactTier::High,
        difficulty: DifficultyTier::Medium,
        potential_reduction: 1_400.0,
        icon: "🥬",
    },
    ReductionStrategy {
        id: "local-seasonal-food",
        category: CategoryKind::Lifestyle,
        title: "Buy Local & Seasonal",
        description: "Choose locally grown, seasonal produce",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 420.0,
        icon: "🌱",
    },
    ReductionStrategy {
        id: "reduce-food-waste",
        category: CategoryKind::Lifestyle,
        title: "Reduce Food Waste",
        description: "Plan meals and compost organic waste",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 380.0,
        icon: "🗑️",
    },
    ReductionStrategy {
        id: "buy-less-stuff",
        category: CategoryKind::Lifestyle,
        title: "Mindful Consumption",
        description: "Buy only what you need and choose quality over quantity",
        impact: ImpactTier::Medium,
        difficulty: DifficultyTier::Medium,
        potential_reduction: 800.0,
        icon: "🛍️",
    },
    ReductionStrategy {
        id: "repair-reuse",
        category: CategoryKind::Lifestyle,
        title: "Repair & Reuse",
        description: "Fix items instead of replacing them",
        impact: ImpactTier::Low,
        difficulty: DifficultyTier::Easy,
        potential_reduction: 240.0,
        icon: "🔧",
    },
];

use serde::{Deserialize, Serialize};

/// Top-level emission domain. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Transportation,
    #[serde(alias = "homeEnergy")]
    HomeEnergy,
    Lifestyle,
}

impl CategoryKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Transportation, Self::HomeEnergy, Self::Lifestyle]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::HomeEnergy => "Home Energy",
            Self::Lifestyle => "Diet & Lifestyle",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Transportation => "🚗",
            Self::HomeEnergy => "🏠",
            Self::Lifestyle => "🍽️",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Transportation => "Car, public transport, and flights",
            Self::HomeEnergy => "Electricity, gas, and heating",
            Self::Lifestyle => "Food choices and consumption",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "transportation" => Some(Self::Transportation),
            "home_energy" | "homeenergy" => Some(Self::HomeEnergy),
            "lifestyle" => Some(Self::Lifestyle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
        }
    }
}

/// Carried for interface compatibility; no factor depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatConsumption {
    High,
    #[default]
    Medium,
    Low,
    Vegetarian,
    Vegan,
}

impl MeatConsumption {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High meat",
            Self::Medium => "Medium meat",
            Self::Low => "Low meat",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingHabits {
    High,
    #[default]
    Medium,
    Low,
}

impl ShoppingHabits {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Frequent shopper",
            Self::Medium => "Moderate shopper",
            Self::Low => "Minimal shopper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

impl ImpactTier {
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high impact",
            Self::Medium => "medium impact",
            Self::Low => "low impact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub const fn weight(self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::Hard => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportationActivity {
    /// Miles driven per year.
    pub car_miles: f64,
    pub fuel_type: FuelType,
    /// Miles travelled on buses, trains, and subways per year.
    pub public_transport_miles: f64,
    pub flight_hours: f64,
}

impl Default for TransportationActivity {
    fn default() -> Self {
        Self {
            car_miles: 0.0,
            fuel_type: FuelType::Gasoline,
            public_transport_miles: 0.0,
            flight_hours: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeEnergyActivity {
    /// Monthly electricity use.
    pub electricity_kwh: f64,
    /// Monthly natural gas use.
    pub natural_gas_therms: f64,
    /// Annual heating oil use.
    pub heating_oil_gallons: f64,
    /// Annual propane use.
    pub propane_gallons: f64,
    pub household_size: u32,
    pub home_size: HomeSize,
}

impl Default for HomeEnergyActivity {
    fn default() -> Self {
        Self {
            electricity_kwh: 0.0,
            natural_gas_therms: 0.0,
            heating_oil_gallons: 0.0,
            propane_gallons: 0.0,
            household_size: 1,
            home_size: HomeSize::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleActivity {
    pub meat_consumption: MeatConsumption,
    pub shopping_habits: ShoppingHabits,
    pub waste_reduction: bool,
    pub recycling: bool,
    pub composting: bool,
}

/// Complete activity record for a single calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInput {
    pub transportation: TransportationActivity,
    pub home_energy: HomeEnergyActivity,
    pub lifestyle: LifestyleActivity,
}

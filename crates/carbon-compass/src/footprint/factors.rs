//! Emission coefficients (kg CO₂e per unit) and the fixed comparison baselines.
//!
//! | Source           | Unit   | kg CO₂e |
//! |------------------|--------|---------|
//! | Gasoline car     | mile   | 0.89    |
//! | Diesel car       | mile   | 1.02    |
//! | Hybrid car       | mile   | 0.55    |
//! | Electric car     | mile   | 0.15    |
//! | Public transport | mile   | 0.33    |
//! | Flight           | mile   | 0.82    |
//! | Electricity      | kWh    | 0.92    |
//! | Natural gas      | therm  | 5.3     |
//! | Heating oil      | gallon | 10.15   |
//! | Propane          | gallon | 5.75    |
//!
//! Diet and shopping are flat annual figures per consumption level and live in
//! the same table as [`DietFactors`] and [`ShoppingFactors`].

use super::domain::{FuelType, MeatConsumption, ShoppingHabits};
use serde::Serialize;

/// Average cruise distance covered per flight hour.
pub const MILES_PER_FLIGHT_HOUR: f64 = 600.0;

/// US average, kg CO₂ per year.
pub const NATIONAL_AVERAGE_KG: f64 = 16_000.0;
/// Global average, kg CO₂ per year.
pub const GLOBAL_AVERAGE_KG: f64 = 4_800.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactorTable {
    pub version: &'static str,
    pub gasoline_per_mile: f64,
    pub diesel_per_mile: f64,
    pub hybrid_per_mile: f64,
    pub electric_per_mile: f64,
    pub public_transport_per_mile: f64,
    pub flight_per_mile: f64,
    pub electricity_per_kwh: f64,
    pub natural_gas_per_therm: f64,
    pub heating_oil_per_gallon: f64,
    pub propane_per_gallon: f64,
    pub diet: DietFactors,
    pub shopping: ShoppingFactors,
}

/// Annual diet emissions, kg CO₂ per year, by meat consumption level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DietFactors {
    pub high_meat: f64,
    pub medium_meat: f64,
    pub low_meat: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

/// Annual consumer goods emissions, kg CO₂ per year, by shopping level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoppingFactors {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl EmissionFactorTable {
    pub const STANDARD: Self = Self {
        version: "2024.1",
        gasoline_per_mile: 0.89,
        diesel_per_mile: 1.02,
        hybrid_per_mile: 0.55,
        electric_per_mile: 0.15,
        public_transport_per_mile: 0.33,
        flight_per_mile: 0.82,
        electricity_per_kwh: 0.92,
        natural_gas_per_therm: 5.3,
        heating_oil_per_gallon: 10.15,
        propane_per_gallon: 5.75,
        diet: DietFactors {
            high_meat: 1_800.0,
            medium_meat: 1_200.0,
            low_meat: 800.0,
            vegetarian: 600.0,
            vegan: 400.0,
        },
        shopping: ShoppingFactors {
            high: 2_400.0,
            medium: 1_200.0,
            low: 600.0,
        },
    };

    pub const fn car_per_mile(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Gasoline => self.gasoline_per_mile,
            FuelType::Diesel => self.diesel_per_mile,
            FuelType::Hybrid => self.hybrid_per_mile,
            FuelType::Electric => self.electric_per_mile,
        }
    }

    /// Annual diet emissions by meat consumption level.
    pub const fn diet_annual(&self, level: MeatConsumption) -> f64 {
        match level {
            MeatConsumption::High => self.diet.high_meat,
            MeatConsumption::Medium => self.diet.medium_meat,
            MeatConsumption::Low => self.diet.low_meat,
            MeatConsumption::Vegetarian => self.diet.vegetarian,
            MeatConsumption::Vegan => self.diet.vegan,
        }
    }

    /// Annual consumer goods emissions by shopping level.
    pub const fn shopping_annual(&self, level: ShoppingHabits) -> f64 {
        match level {
            ShoppingHabits::High => self.shopping.high,
            ShoppingHabits::Medium => self.shopping.medium,
            ShoppingHabits::Low => self.shopping.low,
        }
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

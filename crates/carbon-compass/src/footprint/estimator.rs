use super::domain::{
    ActivityInput, CategoryKind, HomeEnergyActivity, LifestyleActivity, TransportationActivity,
};
use super::factors::{
    EmissionFactorTable, GLOBAL_AVERAGE_KG, MILES_PER_FLIGHT_HOUR, NATIONAL_AVERAGE_KG,
};
use serde::{Deserialize, Serialize};

const HOUSEHOLD_SHARING_FACTOR: f64 = 0.7;
const WASTE_REDUCTION_DISCOUNT: f64 = 0.10;
const RECYCLING_DISCOUNT: f64 = 0.05;
const COMPOSTING_DISCOUNT: f64 = 0.05;

/// Emissions attributed to a single domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionCategory {
    pub id: CategoryKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// kg CO₂ per year.
    pub emissions: f64,
    /// Share of the total, 0-100. Zero when the total is zero.
    #[serde(default)]
    pub percentage: f64,
}

impl EmissionCategory {
    fn new(id: CategoryKind, emissions: f64, total: f64) -> Self {
        Self {
            id,
            name: id.label().to_string(),
            icon: id.icon().to_string(),
            description: id.description().to_string(),
            emissions,
            percentage: share_of(emissions, total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonBaselines {
    pub national_average: f64,
    pub global_average: f64,
}

impl Default for ComparisonBaselines {
    fn default() -> Self {
        Self {
            national_average: NATIONAL_AVERAGE_KG,
            global_average: GLOBAL_AVERAGE_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonResult {
    pub total_emissions: f64,
    /// Always transportation, home energy, lifestyle in that order.
    pub categories: Vec<EmissionCategory>,
    pub comparison: ComparisonBaselines,
}

impl CarbonResult {
    pub fn category(&self, kind: CategoryKind) -> Option<&EmissionCategory> {
        self.categories.iter().find(|category| category.id == kind)
    }
}

/// Stateless estimator applying an emission factor table to activity data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintEstimator {
    factors: EmissionFactorTable,
}

impl FootprintEstimator {
    pub fn new(factors: EmissionFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    pub fn estimate(&self, input: &ActivityInput) -> CarbonResult {
        let transportation = self.transportation(&input.transportation);
        let home_energy = self.home_energy(&input.home_energy);
        let lifestyle = self.lifestyle(&input.lifestyle);
        let total = transportation + home_energy + lifestyle;

        tracing::debug!(
            transportation,
            home_energy,
            lifestyle,
            total,
            factors = self.factors.version,
            "estimated annual footprint"
        );

        CarbonResult {
            total_emissions: total,
            categories: vec![
                EmissionCategory::new(CategoryKind::Transportation, transportation, total),
                EmissionCategory::new(CategoryKind::HomeEnergy, home_energy, total),
                EmissionCategory::new(CategoryKind::Lifestyle, lifestyle, total),
            ],
            comparison: ComparisonBaselines::default(),
        }
    }

    pub fn transportation(&self, activity: &TransportationActivity) -> f64 {
        let car = activity.car_miles * self.factors.car_per_mile(activity.fuel_type);
        let public_transport =
            activity.public_transport_miles * self.factors.public_transport_per_mile;
        let flights = activity.flight_hours * MILES_PER_FLIGHT_HOUR * self.factors.flight_per_mile;
        car + public_transport + flights
    }

    /// Electricity and gas are monthly figures while oil and propane are
    /// annual; the sum is reported as annual without normalization.
    pub fn home_energy(&self, activity: &HomeEnergyActivity) -> f64 {
        let raw = activity.electricity_kwh * self.factors.electricity_per_kwh
            + activity.natural_gas_therms * self.factors.natural_gas_per_therm
            + activity.heating_oil_gallons * self.factors.heating_oil_per_gallon
            + activity.propane_gallons * self.factors.propane_per_gallon;
        raw / household_adjustment(activity.household_size)
    }

    pub fn lifestyle(&self, activity: &LifestyleActivity) -> f64 {
        let base = self.factors.diet_annual(activity.meat_consumption)
            + self.factors.shopping_annual(activity.shopping_habits);
        base * practice_multiplier(activity)
    }
}

/// Estimate with the standard factor table.
pub fn estimate(input: &ActivityInput) -> CarbonResult {
    FootprintEstimator::default().estimate(input)
}

pub(crate) fn household_adjustment(household_size: u32) -> f64 {
    if household_size <= 1 {
        1.0
    } else {
        f64::from(household_size) * HOUSEHOLD_SHARING_FACTOR
    }
}

/// Fraction of lifestyle emissions left after practices. Each discount is
/// taken off in turn starting from 1.0.
pub(crate) fn practice_multiplier(activity: &LifestyleActivity) -> f64 {
    let mut multiplier = 1.0;
    if activity.waste_reduction {
        multiplier -= WASTE_REDUCTION_DISCOUNT;
    }
    if activity.recycling {
        multiplier -= RECYCLING_DISCOUNT;
    }
    if activity.composting {
        multiplier -= COMPOSTING_DISCOUNT;
    }
    multiplier
}

/// A zero total yields a zero share for every category. Any other total,
/// including NaN, is divided through as-is.
pub(crate) fn share_of(emissions: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        100.0 * emissions / total
    }
}

use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::footprint::domain::{
    ActivityInput, CategoryKind, FuelType, HomeEnergyActivity, HomeSize, LifestyleActivity,
    MeatConsumption, ShoppingHabits, TransportationActivity,
};
use crate::footprint::estimator::EmissionCategory;
use crate::footprint::router::footprint_router;
use crate::footprint::service::FootprintService;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

/// Gasoline commuter, single-person household, no sustainable practices.
pub(super) fn commuter_input() -> ActivityInput {
    ActivityInput {
        transportation: TransportationActivity {
            car_miles: 12_000.0,
            fuel_type: FuelType::Gasoline,
            public_transport_miles: 0.0,
            flight_hours: 0.0,
        },
        home_energy: HomeEnergyActivity {
            electricity_kwh: 900.0,
            natural_gas_therms: 75.0,
            heating_oil_gallons: 0.0,
            propane_gallons: 0.0,
            household_size: 1,
            home_size: HomeSize::Medium,
        },
        lifestyle: LifestyleActivity {
            meat_consumption: MeatConsumption::Medium,
            shopping_habits: ShoppingHabits::Medium,
            waste_reduction: false,
            recycling: false,
            composting: false,
        },
    }
}

pub(super) fn frequent_flyer_input() -> ActivityInput {
    let mut input = commuter_input();
    input.transportation.fuel_type = FuelType::Diesel;
    input.transportation.public_transport_miles = 1_500.0;
    input.transportation.flight_hours = 20.0;
    input.home_energy.heating_oil_gallons = 400.0;
    input.home_energy.propane_gallons = 120.0;
    input.home_energy.household_size = 4;
    input.lifestyle.meat_consumption = MeatConsumption::High;
    input.lifestyle.shopping_habits = ShoppingHabits::High;
    input
}

pub(super) fn category(id: CategoryKind, emissions: f64) -> EmissionCategory {
    EmissionCategory {
        id,
        name: id.label().to_string(),
        icon: id.icon().to_string(),
        description: id.description().to_string(),
        emissions,
        percentage: 0.0,
    }
}

pub(super) fn router() -> axum::Router {
    footprint_router(Arc::new(FootprintService::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

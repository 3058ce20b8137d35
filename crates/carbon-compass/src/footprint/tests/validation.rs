use super::common::*;
use crate::footprint::domain::ActivityInput;
use crate::footprint::service::FootprintService;
use crate::footprint::validation::InputError;

#[test]
fn realistic_inputs_pass_validation() {
    assert_eq!(commuter_input().validate(), Ok(()));
    assert_eq!(frequent_flyer_input().validate(), Ok(()));
    assert_eq!(ActivityInput::default().validate(), Ok(()));
}

#[test]
fn first_negative_quantity_is_reported() {
    let mut input = commuter_input();
    input.home_energy.propane_gallons = -4.0;
    input.transportation.car_miles = -1.5;

    assert_eq!(
        input.validate(),
        Err(InputError::NegativeQuantity {
            field: "car_miles",
            value: -1.5,
        })
    );
}

#[test]
fn non_finite_quantities_are_rejected() {
    let mut input = commuter_input();
    input.home_energy.electricity_kwh = f64::INFINITY;

    assert_eq!(
        input.validate(),
        Err(InputError::NonFiniteQuantity {
            field: "electricity_kwh",
        })
    );

    input.home_energy.electricity_kwh = f64::NAN;
    assert!(matches!(
        input.validate(),
        Err(InputError::NonFiniteQuantity { .. })
    ));
}

#[test]
fn empty_household_is_rejected() {
    let mut input = commuter_input();
    input.home_energy.household_size = 0;

    let error = input.validate().expect_err("household must be occupied");

    assert_eq!(error, InputError::EmptyHousehold);
    assert_eq!(error.to_string(), "household size must be at least 1");
}

#[test]
fn service_validates_before_estimating() {
    let service = FootprintService::default();
    let mut input = commuter_input();

    let outcome = service.estimate(&input).expect("valid input");
    assert_close(outcome.result.total_emissions, 14_305.5);

    input.transportation.flight_hours = -1.0;
    assert!(service.estimate(&input).is_err());
    assert!(service.report(&input).is_err());
}

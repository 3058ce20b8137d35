use super::domain::ActivityInput;

/// Rejections raised before activity data reaches the estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must not be negative (found {value})")]
    NegativeQuantity { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteQuantity { field: &'static str },
    #[error("household size must be at least 1")]
    EmptyHousehold,
}

impl ActivityInput {
    /// Checks the bounds the estimator itself does not enforce.
    pub fn validate(&self) -> Result<(), InputError> {
        let transportation = &self.transportation;
        let home = &self.home_energy;
        let quantities = [
            ("car_miles", transportation.car_miles),
            (
                "public_transport_miles",
                transportation.public_transport_miles,
            ),
            ("flight_hours", transportation.flight_hours),
            ("electricity_kwh", home.electricity_kwh),
            ("natural_gas_therms", home.natural_gas_therms),
            ("heating_oil_gallons", home.heating_oil_gallons),
            ("propane_gallons", home.propane_gallons),
        ];

        for (field, value) in quantities {
            if !value.is_finite() {
                return Err(InputError::NonFiniteQuantity { field });
            }
            if value < 0.0 {
                return Err(InputError::NegativeQuantity { field, value });
            }
        }

        if home.household_size == 0 {
            return Err(InputError::EmptyHousehold);
        }

        Ok(())
    }
}

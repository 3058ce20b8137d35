use super::super::domain::{
    ActivityInput, FuelType, HomeEnergyActivity, HomeSize, LifestyleActivity, MeatConsumption,
    ShoppingHabits, TransportationActivity,
};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ActivityRecord {
    pub(crate) household: Option<String>,
    pub(crate) input: ActivityInput,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ActivityRow>() {
        let row = record?;
        records.push(ActivityRecord {
            household: row.household.clone(),
            input: row.into_input(),
        });
    }

    Ok(records)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActivityRow {
    #[serde(deserialize_with = "empty_string_as_none")]
    household: Option<String>,
    car_miles: Option<f64>,
    fuel_type: Option<FuelType>,
    public_transport_miles: Option<f64>,
    flight_hours: Option<f64>,
    electricity_kwh: Option<f64>,
    natural_gas_therms: Option<f64>,
    heating_oil_gallons: Option<f64>,
    propane_gallons: Option<f64>,
    household_size: Option<u32>,
    home_size: Option<HomeSize>,
    meat_consumption: Option<MeatConsumption>,
    shopping_habits: Option<ShoppingHabits>,
    #[serde(deserialize_with = "lenient_flag")]
    waste_reduction: bool,
    #[serde(deserialize_with = "lenient_flag")]
    recycling: bool,
    #[serde(deserialize_with = "lenient_flag")]
    composting: bool,
}

impl ActivityRow {
    fn into_input(self) -> ActivityInput {
        let transportation = TransportationActivity::default();
        let home_energy = HomeEnergyActivity::default();
        let lifestyle = LifestyleActivity::default();

        ActivityInput {
            transportation: TransportationActivity {
                car_miles: self.car_miles.unwrap_or(transportation.car_miles),
                fuel_type: self.fuel_type.unwrap_or(transportation.fuel_type),
                public_transport_miles: self
                    .public_transport_miles
                    .unwrap_or(transportation.public_transport_miles),
                flight_hours: self.flight_hours.unwrap_or(transportation.flight_hours),
            },
            home_energy: HomeEnergyActivity {
                electricity_kwh: self.electricity_kwh.unwrap_or(home_energy.electricity_kwh),
                natural_gas_therms: self
                    .natural_gas_therms
                    .unwrap_or(home_energy.natural_gas_therms),
                heating_oil_gallons: self
                    .heating_oil_gallons
                    .unwrap_or(home_energy.heating_oil_gallons),
                propane_gallons: self.propane_gallons.unwrap_or(home_energy.propane_gallons),
                household_size: self.household_size.unwrap_or(home_energy.household_size),
                home_size: self.home_size.unwrap_or(home_energy.home_size),
            },
            lifestyle: LifestyleActivity {
                meat_consumption: self.meat_consumption.unwrap_or(lifestyle.meat_consumption),
                shopping_habits: self.shopping_habits.unwrap_or(lifestyle.shopping_habits),
                waste_reduction: self.waste_reduction,
                recycling: self.recycling,
                composting: self.composting,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("'{raw}' is not a yes/no value"))
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "x" => Some(true),
        "false" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn parse_flag_for_tests(raw: &str) -> Option<bool> {
    parse_flag(raw)
}

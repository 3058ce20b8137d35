use carbon_compass::footprint::{
    classify, estimate, recommend, ActivityInput, CategoryKind, FootprintLevel, FootprintReport,
    FuelType, HomeEnergyActivity, LifestyleActivity, MeatConsumption, ShoppingHabits,
    TransportationActivity,
};

fn suburban_household() -> ActivityInput {
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
            ..HomeEnergyActivity::default()
        },
        lifestyle: LifestyleActivity {
            meat_consumption: MeatConsumption::Medium,
            shopping_habits: ShoppingHabits::Medium,
            ..LifestyleActivity::default()
        },
    }
}

#[test]
fn estimate_classify_recommend_pipeline() {
    let result = estimate(&suburban_household());
    assert!((result.total_emissions - 14_305.5).abs() < 1e-6);

    let classification = classify(result.total_emissions);
    assert_eq!(classification.level, FootprintLevel::Average);

    let strategies = recommend(result.total_emissions, &result.categories);
    assert_eq!(strategies.len(), 8);
    assert_eq!(strategies[0].id, "public-transport");
    assert_eq!(strategies[0].category, CategoryKind::Transportation);
    assert_eq!(strategies[7].category, CategoryKind::HomeEnergy);
}

#[test]
fn switching_to_electric_and_plant_based_lowers_the_level() {
    let mut input = suburban_household();
    let before = FootprintReport::generate(&input);

    input.transportation.fuel_type = FuelType::Electric;
    input.lifestyle.meat_consumption = MeatConsumption::Vegan;
    input.lifestyle.waste_reduction = true;
    input.lifestyle.recycling = true;
    input.lifestyle.composting = true;
    let after = FootprintReport::generate(&input);

    assert!(after.result.total_emissions < before.result.total_emissions);
    assert_eq!(before.classification.level, FootprintLevel::Average);
    // 1800 transport, 1225.5 home, 1280 lifestyle
    assert!((after.result.total_emissions - 4_305.5).abs() < 1e-6);
    assert_eq!(after.classification.level, FootprintLevel::Excellent);
}

#[test]
fn report_summary_is_serializable_for_clients() {
    let summary = FootprintReport::generate(&suburban_household()).summary();

    let json = serde_json::to_string(&summary).expect("serialize summary");

    assert!(json.contains("\"dominant_category\":\"transportation\""));
    assert!(json.contains("\"baseline_label\":\"US Average\""));
    assert!(json.contains("public-transport"));
}

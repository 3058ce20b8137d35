use crate::infra::{read_activity_input, snapshot_households, HouseholdSnapshot};
use carbon_compass::config::AppConfig;
use carbon_compass::error::AppError;
use carbon_compass::footprint::{
    ActivityCsvImporter, ActivityInput, CategoryKind, FootprintReport, FootprintService,
    FuelType, HomeEnergyActivity, LifestyleActivity, MeatConsumption, ReductionStrategy,
    ShoppingHabits, StrategyCatalog, TransportationActivity,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Activity input JSON document
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Activity CSV export, one household per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the batch report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StrategiesArgs {
    /// Only list strategies for one category (transportation, home-energy, lifestyle)
    #[arg(long, value_parser = crate::infra::parse_category)]
    pub(crate) category: Option<CategoryKind>,
}

fn configured_service() -> Result<FootprintService, AppError> {
    let config = AppConfig::load()?;
    Ok(FootprintService::new(config.recommendations))
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let input = read_activity_input(&args.input)?;
    let report = configured_service()?.report(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let households = ActivityCsvImporter::from_path(&args.csv)?;
    let snapshots = snapshot_households(&configured_service()?, households)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    println!("Batch footprint report ({} households)", snapshots.len());
    for snapshot in &snapshots {
        println!("- {}", describe_snapshot(snapshot));
    }
    Ok(())
}

pub(crate) fn run_strategies(args: StrategiesArgs) -> Result<(), AppError> {
    match args.category {
        Some(kind) => println!("{} {} strategies", kind.icon(), kind.label()),
        None => println!("Reduction strategy catalog"),
    }
    for strategy in catalog_listing(args.category) {
        println!(
            "- [{}] {} ({}, {}): up to {:.0} kg CO₂ per year",
            strategy.category.label(),
            strategy.title,
            strategy.impact.label(),
            strategy.difficulty.label(),
            strategy.potential_reduction
        );
        println!("    {}", strategy.description);
    }
    Ok(())
}

fn catalog_listing(category: Option<CategoryKind>) -> Vec<&'static ReductionStrategy> {
    let catalog = StrategyCatalog::standard();
    match category {
        Some(kind) => catalog.for_category(kind),
        None => catalog.strategies().iter().collect(),
    }
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let input = sample_commuter();
    let report = FootprintService::default().report(&input)?;

    println!("Carbon footprint demo");
    println!(
        "Household: {} car, {:.0} miles/yr | {:.0} kWh, {:.0} therms | {}, {}",
        input.transportation.fuel_type.label(),
        input.transportation.car_miles,
        input.home_energy.electricity_kwh,
        input.home_energy.natural_gas_therms,
        input.lifestyle.meat_consumption.label(),
        input.lifestyle.shopping_habits.label()
    );
    println!();
    render_report(&report);
    Ok(())
}

fn sample_commuter() -> ActivityInput {
    ActivityInput {
        transportation: TransportationActivity {
            car_miles: 12_000.0,
            fuel_type: FuelType::Gasoline,
            ..TransportationActivity::default()
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

fn describe_snapshot(snapshot: &HouseholdSnapshot) -> String {
    let mut line = format!(
        "{}: {:.0} kg CO₂ ({})",
        snapshot.household,
        snapshot.total_emissions,
        snapshot.level.label()
    );
    if let Some(kind) = snapshot.dominant_category {
        line.push_str(&format!(", largest source {}", kind.label()));
    }
    if let Some(strategy) = snapshot.top_strategy {
        line.push_str(&format!(", start with {strategy}"));
    }
    line
}

pub(crate) fn render_report(report: &FootprintReport) {
    let summary = report.summary();

    println!(
        "Total footprint: {:.0} kg CO₂ per year ({})",
        summary.total_emissions,
        summary.level.label()
    );
    println!("{}", summary.level_message);

    println!("\nCategory breakdown");
    for entry in &summary.categories {
        println!(
            "- {} {}: {:.0} kg ({:.1}%)",
            entry.icon, entry.category_label, entry.emissions, entry.percentage
        );
    }

    println!("\nBaseline comparison");
    for comparison in &summary.comparisons {
        println!(
            "- {:.0}% {} the {} ({:.0} kg)",
            comparison.delta_pct,
            comparison.position.label(),
            comparison.baseline_label,
            comparison.reference_emissions
        );
    }

    if summary.recommendations.is_empty() {
        println!("\nRecommended strategies: none");
    } else {
        println!("\nRecommended strategies");
        for strategy in &summary.recommendations {
            println!(
                "- {} [{}] {}: up to {:.0} kg/yr ({}, {})",
                strategy.icon,
                strategy.category_label,
                strategy.title,
                strategy.potential_reduction,
                strategy.impact_label,
                strategy.difficulty_label
            );
        }
        println!(
            "Combined potential: {:.0} kg CO₂ per year",
            summary.total_potential_reduction
        );
    }

    if !summary.observations.is_empty() {
        println!("\nObservations");
        for note in &summary.observations {
            println!("- {}", note);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_compass::footprint::FootprintLevel;

    #[test]
    fn sample_commuter_lands_in_the_average_band() {
        let report = FootprintService::default()
            .report(&sample_commuter())
            .expect("valid sample");

        assert!((report.result.total_emissions - 14_305.5).abs() < 1e-6);
        assert_eq!(report.classification.level, FootprintLevel::Average);
    }

    #[test]
    fn catalog_listing_filters_by_category() {
        assert_eq!(catalog_listing(None).len(), 14);
        let home = catalog_listing(Some(CategoryKind::HomeEnergy));
        assert_eq!(home.len(), 5);
        assert!(home
            .iter()
            .all(|strategy| strategy.category == CategoryKind::HomeEnergy));
        assert_eq!(home[0].id, "led-bulbs");
    }

    #[test]
    fn snapshot_lines_name_the_dominant_category_and_first_strategy() {
        let report = FootprintReport::generate(&sample_commuter());
        let snapshot = HouseholdSnapshot::from_report("Maple Street".to_string(), &report);

        assert_eq!(
            describe_snapshot(&snapshot),
            "Maple Street: 14306 kg CO₂ (Average), largest source Transportation, start with public-transport"
        );
    }
}

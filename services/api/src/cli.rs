use crate::demo::{
    run_demo, run_estimate, run_import, run_strategies, EstimateArgs, ImportArgs, StrategiesArgs,
};
use crate::server;
use carbon_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Carbon Compass",
    about = "Estimate household carbon footprints and rank reduction strategies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate a single household from an activity JSON document
    Estimate(EstimateArgs),
    /// Report on every household in an activity CSV export
    Import(ImportArgs),
    /// List the reduction strategy catalog
    Strategies(StrategiesArgs),
    /// Walk through the sample commuter household end to end
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Import(args) => run_import(args),
        Command::Strategies(args) => run_strategies(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_compass::footprint::CategoryKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["carbon-compass-api"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn strategies_accepts_kebab_case_category() {
        let cli = Cli::try_parse_from([
            "carbon-compass-api",
            "strategies",
            "--category",
            "home-energy",
        ])
        .expect("parse");
        match cli.command {
            Some(Command::Strategies(args)) => {
                assert_eq!(args.category, Some(CategoryKind::HomeEnergy));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected_at_parse_time() {
        let result =
            Cli::try_parse_from(["carbon-compass-api", "strategies", "--category", "aviation"]);
        assert!(result.is_err());
    }
}

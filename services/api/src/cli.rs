use crate::demo::{run_catalog, run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use autogenius::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AutoGenius",
    about = "Match shoppers to vehicles from the command line or over HTTP",
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
    /// List every vehicle in the showroom catalog
    Catalog,
    /// Answer the questionnaire with flags and print ranked recommendations
    Recommend(RecommendArgs),
    /// Walk through a set of representative shopper profiles
    Demo(DemoArgs),
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
        Command::Catalog => run_catalog(),
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogenius::workflows::recommendations::{FuelPreference, VehicleCategory};

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["autogenius-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_flags_parse_into_typed_answers() {
        let cli = Cli::try_parse_from([
            "autogenius-api",
            "recommend",
            "--budget-min",
            "50000",
            "--budget-max",
            "100000",
            "--type",
            "electric",
            "--type",
            "SUV",
            "--fuel",
            "electric",
        ])
        .expect("parses");

        let Some(Command::Recommend(args)) = cli.command else {
            panic!("expected recommend command");
        };
        assert_eq!(args.budget_min, 50_000);
        assert_eq!(
            args.car_types,
            vec![VehicleCategory::Electric, VehicleCategory::Suv]
        );
        assert_eq!(args.fuel, FuelPreference::Electric);
    }

    #[test]
    fn unknown_category_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["autogenius-api", "recommend", "--type", "truck"]);
        assert!(result.is_err());
    }
}

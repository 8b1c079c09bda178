use crate::report::{run_catalog_check, run_recommend};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use unimatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "unimatch",
    about = "Rank universities for a student profile and serve the recommendation API",
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
    /// Print ranked recommendations for a single profile
    Recommend(RecommendArgs),
    /// Inspect the reference catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Load the catalog and report loaded and skipped records
    Check(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured catalog file
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Catalog file to rank against (defaults to CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Unified national test score (0-140)
    #[arg(long)]
    pub(crate) ent_score: Option<i64>,
    /// Preferred city, matched case-insensitively
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Preferred specialty; repeat for several
    #[arg(long = "specialty")]
    pub(crate) specialties: Vec<String>,
    /// Funding preference: grant, paid or any
    #[arg(long)]
    pub(crate) budget: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog file to inspect (defaults to CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Catalog {
            command: CatalogCommand::Check(args),
        } => run_catalog_check(args),
    }
}

use crate::demo::{
    run_classify, run_dashboard, run_demo, run_directory, ClassifyArgs, DashboardCommand,
    DemoArgs, DirectoryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tsp_tracker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TSP Tracker",
    about = "Track facility performance and technical support pathways from the command line",
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
    /// Classify a single indicator value against its thresholds
    Classify(ClassifyArgs),
    /// List supported facilities, optionally filtered
    Directory(DirectoryArgs),
    /// Print a site or district dashboard as JSON
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },
    /// Run an end-to-end demo: facility selection, quarterly entry and dashboards
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
        Command::Classify(args) => run_classify(args),
        Command::Directory(args) => run_directory(args),
        Command::Dashboard { command } => run_dashboard(command),
        Command::Demo(args) => run_demo(args),
    }
}

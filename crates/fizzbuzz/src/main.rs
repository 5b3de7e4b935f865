use crate::prelude::*;
use clap::Parser;

mod convert;
mod prelude;
mod run;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Validate and convert five-number batches from the command line, print the classic FizzBuzz sequence, or serve the conversion API over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "FIZZBUZZ_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert a batch of five numbers given as an argument or read from stdin
    Convert(crate::convert::App),

    /// Print the FizzBuzz sequence for a range of numbers
    Run(crate::run::App),

    /// Serve the FizzBuzz conversion API over HTTP
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global).await,
        SubCommands::Run(sub_app) => crate::run::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
}

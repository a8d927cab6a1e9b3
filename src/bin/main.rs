use clap::Parser;
use cmake_step::{cli::input::CliArgs, utils::logger::config_logger, worker::run_cmake_step};
use color_eyre::Result;
use env_logger::Target;

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout)
        .expect("Error configuring the logger");
    log::info!("Launching a new cmake-step program");
    run_cmake_step(&cli_args)?;
    log::info!("Tasks successfully finished");

    Ok(())
}

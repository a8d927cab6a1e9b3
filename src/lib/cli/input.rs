use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use cmake_step::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "build"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Build);
///
/// let parser = CliArgs::parse_from(["", "--root", "sample-project", "show"]);
/// assert_eq!(parser.root, Some(String::from("sample-project")));
/// assert_eq!(parser.command, Command::Show);
///
/// let parser = CliArgs::parse_from([
///     "", "--match-files", "release", "--cmake-path", "/opt/cmake/bin/cmake", "build"
/// ]);
/// assert_eq!(parser.match_files, Some(String::from("release")));
/// assert_eq!(parser.cmake_path, Some(String::from("/opt/cmake/bin/cmake")));
/// ```
#[derive(Parser, Debug)]
#[command(name = "cmake-step")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.1")]
#[command(
    about = "cmake-step is a runner for CMake driven build steps",
    long_about = "cmake-step assembles the `cmake --build` invocation declared \
    by the configuration files of the project and runs or displays it"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "cmake-step maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(short, long, help = "The root path where the configuration files are searched for")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Filters the detected configuration files, keeping the ones whose name contains the given value"
    )]
    pub match_files: Option<String>,

    #[arg(
        long,
        help = "Path of the cmake executable to launch, overriding the configured one"
    )]
    pub cmake_path: Option<String>,
}

/// [`Command`] - The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Executes every build step declared by the detected configuration files
    Build,
    /// Prints the command line generated for every build step without executing it
    Show,
}

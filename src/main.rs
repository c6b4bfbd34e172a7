use clap::Parser;

use term_plot::cli::{Cli, Commands};
use term_plot::commands::{run_config, run_init, run_plot};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        None => run_plot(&cli),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

use clap::Parser;
use colored::Colorize;
use deslop_core::cli::{self, Cli};
use deslop_core::exit::DeslopExit;

fn main() -> DeslopExit {
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(DeslopExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            DeslopExit::Error
        }
    }
}

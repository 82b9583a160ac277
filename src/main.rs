use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use sudogrid::core::config::CliOverrides;
use sudogrid::startup;

#[derive(Parser)]
#[command(name = "sudogrid", about = "Editable 9×9 number grid for the terminal")]
struct Args {
    /// Config file (default: ~/.sudogrid/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Glyph shown in empty cells
    #[arg(short, long)]
    placeholder: Option<char>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cli = CliOverrides {
        placeholder: args.placeholder,
        log_file: args.log_file,
    };

    match startup::start(args.config.as_deref(), &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            startup::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

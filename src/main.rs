use clap::Parser;
use perm_aggregate::cli::commands::{cmd_compare, cmd_query, cmd_summarize};
use perm_aggregate::cli::config::{Cli, Commands, load_config, resolve_log_level};
use perm_aggregate::telemetry::init_telemetry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let level = resolve_log_level(&config.logging.level, cli.verbose);
    init_telemetry(&config.logging, &level);

    match cli.command {
        Commands::Summarize { payload, lang } => {
            cmd_summarize(&payload, lang.as_deref(), &config)?;
        }
        Commands::Query { input, prefix } => {
            cmd_query(&input, prefix.as_deref())?;
        }
        Commands::Compare { left, right } => {
            if !cmd_compare(&left, &right)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

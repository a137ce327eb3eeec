use repoprobe::cli::commands::{CliArgs, Commands};
use repoprobe::cli::handlers::{handle_parse_url, handle_scan, handle_validate};
use repoprobe::util::logging::{config_from_env, init_logging, parse_level, LoggingConfig};
use repoprobe::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging(logging_config(&args));

    debug!("repoprobe v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Scan(scan_args) => handle_scan(scan_args, args.quiet),
        Commands::ParseUrl(url_args) => handle_parse_url(url_args),
        Commands::Validate(validate_args) => handle_validate(validate_args, args.quiet),
    };

    std::process::exit(exit_code);
}

/// Command-line flags override the level read from the environment.
fn logging_config(args: &CliArgs) -> LoggingConfig {
    let config = config_from_env();

    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        config.level
    };

    LoggingConfig { level, ..config }
}

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, OutputFormatArg, ParseUrlArgs, ScanArgs, ValidateArgs};
pub use output::{OutputFormat, OutputFormatter};

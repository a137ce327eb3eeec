use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_MAX_MANIFEST_BYTES;

/// Repository onboarding probe
#[derive(Parser, Debug)]
#[command(
    name = "repoprobe",
    about = "Resolve git remotes, validate project payloads and detect workspace stacks",
    version,
    author,
    long_about = "repoprobe inspects a checked-out workspace's top-level manifests to detect \
                  languages and frameworks, and turns them into agent mode, pipeline, linter \
                  and formatter recommendations. It also resolves git remote URLs into \
                  owner/repo/provider and validates project payloads."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect languages, frameworks and recommendations in a workspace",
        long_about = "Scans the top level of a workspace directory for known manifest files.\n\n\
                      Examples:\n  \
                      repoprobe scan\n  \
                      repoprobe scan /path/to/checkout --format json"
    )]
    Scan(ScanArgs),

    #[command(
        about = "Resolve a git remote URL into owner, repo and provider",
        long_about = "Examples:\n  \
                      repoprobe parse-url https://github.com/octocat/hello-world.git\n  \
                      repoprobe parse-url git@gitlab.com:group/project.git --format json"
    )]
    ParseUrl(ParseUrlArgs),

    #[command(
        about = "Validate a project create or update payload",
        long_about = "Runs the same checks the platform applies before storing a project.\n\n\
                      Examples:\n  \
                      repoprobe validate --name api --repo-url git@github.com:acme/api.git\n  \
                      repoprobe validate --provider claude --allow-provider claude --allow-provider codex --name api\n  \
                      repoprobe validate --update --name ''"
    )]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[arg(value_name = "PATH", help = "Workspace directory (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_MANIFEST_BYTES,
        help = "Maximum bytes read from each manifest"
    )]
    pub max_manifest_bytes: usize,

    #[arg(short = 'o', long, value_name = "FILE", help = "Write output to file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseUrlArgs {
    #[arg(value_name = "URL")]
    pub url: String,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, help = "Validate as a partial update instead of a create")]
    pub update: bool,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub repo_url: Option<String>,

    #[arg(long)]
    pub provider: Option<String>,

    #[arg(
        long = "allow-provider",
        value_name = "PROVIDER",
        help = "Registered provider; repeat for several. Omit to skip the membership check"
    )]
    pub allowed_providers: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

//! Command handlers for the `repoprobe` binary. Each returns a process exit code.

use std::env;
use std::path::Path;
use tracing::{debug, error, info};

use super::commands::{ParseUrlArgs, ScanArgs, ValidateArgs};
use super::output::OutputFormatter;
use crate::config::ScanConfig;
use crate::repo_url::parse_repo_url;
use crate::stack::StackDetector;
use crate::validation::{
    validate_create_request, validate_update_request, CreateRequest, UpdateRequest,
};

pub fn handle_scan(args: &ScanArgs, quiet: bool) -> i32 {
    let workspace = match &args.path {
        Some(path) => path.clone(),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Failed to get current directory: {}", e);
                return 1;
            }
        },
    };
    debug!("Workspace path: {}", workspace.display());

    let config = ScanConfig::default().with_max_manifest_bytes(args.max_manifest_bytes);
    let detector = StackDetector::new().with_config(config);

    let result = match detector.scan(&workspace) {
        Ok(result) => result,
        Err(e) => {
            error!("Scan failed: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    let output = match formatter.format_scan(&result) {
        Ok(out) => out,
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            return 1;
        }
    };

    emit(&output, args.output.as_deref(), quiet)
}

pub fn handle_parse_url(args: &ParseUrlArgs) -> i32 {
    let parsed = match parse_repo_url(&args.url) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_repo_url(&parsed) {
        Ok(out) => {
            print!("{}", terminated(out));
            0
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            1
        }
    }
}

pub fn handle_validate(args: &ValidateArgs, quiet: bool) -> i32 {
    let outcome = if args.update {
        let req = UpdateRequest {
            name: args.name.clone(),
            description: args.description.clone(),
            repo_url: args.repo_url.clone(),
            provider: args.provider.clone(),
            config: None,
        };
        validate_update_request(&req)
    } else {
        let req = CreateRequest {
            name: args.name.clone().unwrap_or_default(),
            description: args.description.clone().unwrap_or_default(),
            repo_url: args.repo_url.clone().unwrap_or_default(),
            provider: args.provider.clone().unwrap_or_default(),
            config: None,
        };
        validate_create_request(&req, &args.allowed_providers)
    };

    match outcome {
        Ok(()) => {
            if !quiet {
                println!("valid");
            }
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            2
        }
    }
}

fn emit(output: &str, target: Option<&Path>, quiet: bool) -> i32 {
    match target {
        Some(file) => match std::fs::write(file, output) {
            Ok(()) => {
                info!("Output written to: {}", file.display());
                if !quiet {
                    println!("Output written to: {}", file.display());
                }
                0
            }
            Err(e) => {
                error!("Failed to write output to file: {}", e);
                1
            }
        },
        None => {
            print!("{}", terminated(output.to_string()));
            0
        }
    }
}

fn terminated(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::OutputFormatArg;
    use std::fs;
    use tempfile::TempDir;

    fn scan_args(path: &Path, output: Option<&Path>) -> ScanArgs {
        ScanArgs {
            path: Some(path.to_path_buf()),
            format: OutputFormatArg::Json,
            max_manifest_bytes: 4096,
            output: output.map(Path::to_path_buf),
        }
    }

    #[test]
    fn test_scan_writes_output_file() {
        let workspace = TempDir::new().unwrap();
        fs::write(workspace.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();
        let out_dir = TempDir::new().unwrap();
        let out_file = out_dir.path().join("scan.json");

        let code = handle_scan(&scan_args(workspace.path(), Some(&out_file)), true);
        assert_eq!(code, 0);

        let written = fs::read_to_string(&out_file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["languages"][0]["name"], "rust");
    }

    #[test]
    fn test_scan_missing_path_fails() {
        let workspace = TempDir::new().unwrap();
        let missing = workspace.path().join("nope");
        assert_eq!(handle_scan(&scan_args(&missing, None), true), 1);
    }

    #[test]
    fn test_scan_rejects_zero_limit() {
        let workspace = TempDir::new().unwrap();
        let mut args = scan_args(workspace.path(), None);
        args.max_manifest_bytes = 0;
        assert_eq!(handle_scan(&args, true), 1);
    }

    #[test]
    fn test_parse_url_exit_codes() {
        let ok = ParseUrlArgs {
            url: "https://github.com/octocat/hello-world".to_string(),
            format: OutputFormatArg::Json,
        };
        assert_eq!(handle_parse_url(&ok), 0);

        let bad = ParseUrlArgs {
            url: "ftp://example.com/a/b".to_string(),
            format: OutputFormatArg::Human,
        };
        assert_eq!(handle_parse_url(&bad), 1);
    }

    #[test]
    fn test_validate_exit_codes() {
        let mut args = ValidateArgs {
            update: false,
            name: Some("api".to_string()),
            description: None,
            repo_url: None,
            provider: Some("codex".to_string()),
            allowed_providers: vec!["claude".to_string()],
        };
        assert_eq!(handle_validate(&args, true), 2);

        args.allowed_providers.push("codex".to_string());
        assert_eq!(handle_validate(&args, true), 0);

        args.update = true;
        args.name = Some(String::new());
        assert_eq!(handle_validate(&args, true), 2);
    }

    #[test]
    fn test_terminated() {
        assert_eq!(terminated("a".to_string()), "a\n");
        assert_eq!(terminated("a\n".to_string()), "a\n");
    }
}

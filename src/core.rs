use clap::Parser;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, LogFormat};
use crate::config::Config;
use crate::context::Environment;
use crate::curl::{
    collect_warnings, decompose, format_curl_pretty, format_import_error, format_warnings, generate_curl_command,
    handle_curl_import, normalize_protocol,
};
use crate::errors::CurlkitError;
use crate::models::{ImportResult, ParsedCurlRequest};
use crate::status::ExitStatus;
use crate::variables::Variables;

/// What a single invocation writes, and how it exits
#[derive(Debug)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: Vec<String>,
    pub status: ExitStatus,
}

/// Main entry point for the CLI.
///
/// Handles argument parsing, configuration loading, and dispatches to the
/// importer.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let merged_args = merge_default_options(args, &config, &env);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(&parsed);

    if let Some(e) = config_error {
        eprintln!("{}", env.paint_stderr("33", &format!("Warning: Failed to load config: {}", e)));
    }

    if let Some(shell) = &parsed.generate_completions {
        generate_completions(shell);
        return ExitStatus::Success;
    }

    if parsed.generate_manpage {
        return match generate_manpage() {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, &env),
        };
    }

    let command = match read_command(&parsed, &env) {
        Ok(command) => command,
        Err(e) => return handle_error(e, &env),
    };

    match execute(&parsed, &config, &env, &command) {
        Ok(outcome) => {
            for line in &outcome.stderr {
                eprintln!("{}", line);
            }
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", outcome.stdout) {
                return handle_error(e.into(), &env);
            }
            outcome.status
        }
        Err(e) => handle_error(e, &env),
    }
}

/// Import `command` and render the result
pub fn execute(args: &Args, config: &Config, env: &Environment, command: &str) -> Result<Outcome, CurlkitError> {
    let variables = load_variables(args, config)?;
    let result = handle_curl_import(command);
    let mut stderr = Vec::new();

    let result = match result.data() {
        Some(data) => {
            let data = post_process(data, &variables, args.normalize_url)?;
            let warnings = collect_warnings(&data);
            if !warnings.is_empty() {
                stderr.push(env.paint_stderr("33", &format_warnings(&warnings)));
            }
            ImportResult::ok(data, warnings)
        }
        None => {
            let error = result.error().unwrap_or("Failed to parse cURL command");
            let shown = if args.raw_errors || !config.import.friendly_errors {
                error.to_string()
            } else {
                format_import_error(error)
            };
            stderr.push(env.paint_stderr("31", &format!("Error: {}", shown)));
            ImportResult::err(error)
        }
    };

    let status = ExitStatus::from_import(&result);

    let stdout = match (args.curl, result.data()) {
        (true, Some(data)) => {
            let cmd = generate_curl_command(data);
            if env.stdout_colors {
                format_curl_pretty(&cmd)
            } else {
                cmd
            }
        }
        (true, None) => String::new(),
        (false, _) if args.compact => serde_json::to_string(&result)?,
        (false, _) => serde_json::to_string_pretty(&result)?,
    };

    Ok(Outcome { stdout, stderr, status })
}

/// Variables from the config's env file, then --env-file, then --var
fn load_variables(args: &Args, config: &Config) -> Result<Variables, CurlkitError> {
    let mut variables = Variables::new();

    for path in config.import.env_file.iter().chain(args.env_file.iter()) {
        variables.merge(&Variables::load_file(path)?);
    }

    for pair in &args.vars {
        variables.insert_pair(pair)?;
    }

    Ok(variables)
}

/// Apply variables and URL normalization to an imported request
fn post_process(
    data: &ParsedCurlRequest,
    variables: &Variables,
    normalize_url: bool,
) -> Result<ParsedCurlRequest, CurlkitError> {
    let mut request = variables.apply(data)?;

    if normalize_url {
        let suggestion = normalize_protocol(&request.url);
        if suggestion.needed {
            tracing::debug!(url = %suggestion.normalized_url, "Prepended URL scheme");
            request.url = suggestion.normalized_url;
        }
    }

    // Substitution or a new scheme can turn a verbatim URL into a parseable one
    if request.url.contains('?') {
        let split = decompose(&request.url);
        if split.base_url != request.url {
            request.url = split.base_url;
            request.params.extend(split.params);
        }
    }

    Ok(request)
}

fn read_command(args: &Args, env: &Environment) -> Result<String, CurlkitError> {
    if !args.reads_stdin() {
        return Ok(args.command.clone().unwrap_or_default());
    }

    if env.stdin_isatty {
        eprintln!("Paste a curl command, then press Ctrl-D:");
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn init_logging(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("curlkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match args.log_format.unwrap_or_default() {
        LogFormat::Json => builder.json().try_init().ok(),
        LogFormat::Text => builder.try_init().ok(),
    };
}

fn merge_default_options(args: Vec<String>, config: &Config, env: &Environment) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config.default_options.iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        eprintln!(
            "{}",
            env.paint_stderr(
                "33",
                &format!("Warning: Positional arguments in default_options are ignored: {:?}", positional)
            )
        );
        eprintln!("Only flags (starting with -) can be used in default_options.");
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));
    merged
}

fn handle_error(error: CurlkitError, env: &Environment) -> ExitStatus {
    eprintln!("{}", env.paint_stderr("31", &format!("Error: {}", error)));
    ExitStatus::Error
}

fn generate_completions(shell: &crate::cli::Shell) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        crate::cli::Shell::Bash => ClapShell::Bash,
        crate::cli::Shell::Zsh => ClapShell::Zsh,
        crate::cli::Shell::Fish => ClapShell::Fish,
        crate::cli::Shell::PowerShell => ClapShell::PowerShell,
        crate::cli::Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, "curlkit", &mut std::io::stdout());
}

fn generate_manpage() -> Result<(), CurlkitError> {
    use clap::CommandFactory;

    let cmd = Args::command();
    let man = clap_mangen::Man::new(cmd);
    man.render(&mut std::io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["curlkit"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config() -> Config {
        Config::parse("", std::path::Path::new("/tmp")).unwrap()
    }

    #[test]
    fn test_execute_success_json() {
        let out = execute(&args(&[]), &config(), &Environment::plain(), "curl http://x.com/a?b=1").unwrap();
        assert_eq!(out.status, ExitStatus::Success);
        assert!(out.stderr.is_empty());
        let json: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["url"], "http://x.com/a");
        assert_eq!(json["data"]["params"][0]["key"], "b");
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn test_execute_failure_friendly() {
        let out = execute(&args(&[]), &config(), &Environment::plain(), "wget http://x.com").unwrap();
        assert_eq!(out.status, ExitStatus::Error);
        assert_eq!(out.stderr, vec!["Error: Please paste a valid cURL command starting with \"curl\""]);
        let json: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
        assert_eq!(json["error"], "Command must start with \"curl\"");
    }

    #[test]
    fn test_execute_failure_raw() {
        let out = execute(&args(&["--raw-errors"]), &config(), &Environment::plain(), "curl -X POST").unwrap();
        assert_eq!(out.stderr, vec!["Error: No URL found in cURL command"]);
    }

    #[test]
    fn test_execute_warnings_on_stderr() {
        let out = execute(
            &args(&["--compact"]),
            &config(),
            &Environment::plain(),
            "curl http://x.com -H 'A: 1' -H 'a: 2'",
        )
        .unwrap();
        assert_eq!(out.status, ExitStatus::Success);
        assert_eq!(out.stderr, vec!["Note: Duplicate headers found: a"]);
        assert!(!out.stdout.contains('\n'));
    }

    #[test]
    fn test_execute_variables_and_normalize() {
        let out = execute(
            &args(&["--var", "host=api", "--normalize-url", "--curl"]),
            &config(),
            &Environment::plain(),
            "curl {{host}}.example.com/v1/items?limit=5",
        )
        .unwrap();
        assert_eq!(out.stdout, "curl -X GET 'https://api.example.com/v1/items?limit=5'");
    }

    #[test]
    fn test_execute_bad_var() {
        let err = execute(&args(&["--var", "oops"]), &config(), &Environment::plain(), "curl http://x.com");
        assert!(matches!(err, Err(CurlkitError::Argument(_))));
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        init_logging(&args(&["--debug"]));
        init_logging(&args(&["--log-format", "json"]));
    }

    #[test]
    fn test_merge_default_options() {
        let mut config = config();
        config.default_options = vec!["--compact".to_string(), "stray".to_string()];
        let merged = merge_default_options(
            vec!["curlkit".to_string(), "curl http://x.com".to_string()],
            &config,
            &Environment::plain(),
        );
        assert_eq!(merged, vec!["curlkit", "--compact", "curl http://x.com"]);
    }
}

//! Phrasal CLI entry point.

use std::env;
use std::process::ExitCode;

use phrasal_runtime::{Repl, RuntimeConfig, Session, init_logging};
use tracing::info;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    show_tree: bool,
    json_output: bool,
    strict_keys: bool,
    max_depth: Option<usize>,
    config_path: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--tree" => config.show_tree = true,
            "--json" => config.json_output = true,
            "--strict" => config.strict_keys = true,
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-depth requires a value".into());
                }
                let depth: usize = args[i]
                    .parse()
                    .map_err(|_| format!("invalid --max-depth value: {}", args[i]))?;
                if depth == 0 {
                    return Err("--max-depth must be at least 1".into());
                }
                config.max_depth = Some(depth);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a path".into());
                }
                config.config_path = Some(args[i].clone());
            }
            "-" => config.files.push("-".to_string()),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(path.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

/// Builds the runtime configuration: file first, then flags on top.
fn runtime_config(cli: &CliConfig) -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config_path {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    if cli.show_tree {
        config.show_tree = true;
    }
    if cli.json_output {
        config.json_output = true;
    }
    if cli.strict_keys {
        config.expansion.strict_keys = true;
    }
    if let Some(depth) = cli.max_depth {
        config.expansion.max_depth = depth;
    }
    Ok(config)
}

/// Returns `Ok(false)` when any request file was rejected.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("phrasal {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let config = runtime_config(&cli)?;
    init_logging(&config.log_level);
    info!(files = cli.files.len(), batch = cli.batch_mode, "starting");

    let mut session = Session::new(config);
    let mut all_ok = true;

    for file in &cli.files {
        match session.generate_file(file) {
            Ok(generation) => println!("{}", session.render(&generation)),
            Err(e) => {
                all_ok = false;
                eprintln!("\x1b[31m{}\x1b[0m", session.render_error(&e));
            }
        }
    }

    // Standard input has been consumed, so there is nothing left to read from.
    if cli.batch_mode || cli.files.iter().any(|file| file == "-") {
        return Ok(all_ok);
    }

    let mut repl = Repl::new(session)?;
    if !cli.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(all_ok)
}

fn print_help() {
    println!(
        "\x1b[1mPhrasal\x1b[0m - Expands JSON phrase specifications into sentences

\x1b[1mUSAGE:\x1b[0m
    phrasal [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Request files to realise before starting the REPL (- for stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Realise files and exit (no REPL)
    -v, --verbose      Log at debug level
    --tree             Print the phrase tree after each sentence
    --json             Print results and errors as JSON
    --max-depth N      Maximum nesting depth of composite nodes (default 64)
    --strict           Reject keys a node does not recognise
    --config PATH      Load settings from a JSON file

\x1b[1mENVIRONMENT:\x1b[0m
    PHRASAL_LOG        Log filter, e.g. phrasal_spec=trace (falls back to RUST_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    phrasal                          Start interactive REPL
    phrasal -b request.json          Realise request.json and exit
    echo '{{...}}' | phrasal --json -    Realise a request from stdin as JSON
    phrasal --tree -b a.json b.json  Realise several files, printing trees

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show commands
    :tree [on|off]       Toggle tree output
    :depth [N]           Show or set the maximum nesting depth
    :quit                Exit REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use md2code::config::load_config;
use md2code::types::DEFAULT_MAX_FILENAME_LENGTH;
use md2code::{extract_file, ExtensionTable, NamingScheme, Options};
use std::env;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let matches = Command::new("md2code")
        .version(env!("CARGO_PKG_VERSION"))
        .about("md2code: extracts fenced code blocks from a markdown file into one file per block.")
        .arg(
            Arg::new("input")
                .help("Path to the markdown file")
                .value_name("MARKDOWN_FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output_dir")
                .help("Directory to save extracted code blocks")
                .value_name("OUTPUT_DIR")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Report every block found and saved")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("scheme")
                .long("scheme")
                .value_name("SCHEME")
                .help("File naming scheme: 'heading' (default) or 'simple'")
                .value_parser(value_parser!(NamingScheme)),
        )
        .arg(
            Arg::new("max_name_length")
                .long("max-name-length")
                .value_name("N")
                .help("Longest file name, extension excluded, for the heading scheme (default 50)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML config file (default: md2code.yml or md2code.yaml if present)")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing markdown file argument")?;
    let output_dir = matches
        .get_one::<PathBuf>("output_dir")
        .context("missing output directory argument")?;

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path), &cwd)?
        .unwrap_or_default();

    // CLI flags beat the config file, which beats built-in defaults
    let options = Options {
        verbose,
        scheme: matches
            .get_one::<NamingScheme>("scheme")
            .copied()
            .or(config.scheme)
            .unwrap_or_default(),
        max_filename_length: matches
            .get_one::<usize>("max_name_length")
            .copied()
            .or(config.max_filename_length)
            .unwrap_or(DEFAULT_MAX_FILENAME_LENGTH),
    };
    debug!("Options: {:?}", options);

    let extensions = ExtensionTable::with_overrides(&config.extensions);
    let written = extract_file(input, output_dir, &extensions, &options)
        .with_context(|| format!("Failed to extract code blocks from {}", input.display()))?;

    debug!("Done, {} files written", written.len());
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let mut filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_err() {
        if let Ok(directive) = format!("md2code={}", level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

// Command-line interface for the wiki toolchain
//
// The wiki program works on plain page files: it formats markup into HTML, compares two
// revisions of a page and searches a directory of pages. The core capabilities live in
// the wiki-babel crate; this binary only reads files, picks settings and prints results.
//
// Usage:
//  wiki format <input> [-o <file>] [--allow-file-scheme]   - Format markup into an HTML fragment
//  wiki diff <old> <new> [--style <style>] [--width <n>]    - Compare two revisions line by line
//  wiki search <dir> <keyword>... [--json]                  - Find pages containing keywords
//  wiki blocks                                              - List block formatters in priority order
//
// Configuration:
//
// Settings come from the embedded defaults, then a wiki.toml in the working directory, then
// the file given with --config. Command-line flags win over all of them.

mod pages;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wiki_babel::diff::{extract_diff, render_side_by_side, render_unified, side_by_side, DiffStyle};
use wiki_babel::search::{emphasize, search, split_keywords};
use wiki_babel::{BlockRegistry, FormatOptions, WikiFormatter};
use wiki_config::{ConfigError, Loader, WikiConfig, LOCAL_CONFIG_FILE};

fn build_cli() -> Command {
    Command::new("wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for formatting, comparing and searching wiki pages")
        .long_about(
            "wiki is a command-line tool for working with wiki markup pages.\n\n\
            Commands:\n  \
            - format: Translate wiki markup into an HTML fragment\n  \
            - diff:   Compare two revisions of a page line by line\n  \
            - search: Find pages in a directory that contain keywords\n  \
            - blocks: List the block formatters in priority order\n\n\
            Examples:\n  \
            wiki format FrontPage.wiki                 # HTML to stdout\n  \
            wiki format FrontPage.wiki -o front.html   # HTML to a file\n  \
            wiki diff old.wiki new.wiki --style json   # Diff runs as JSON\n  \
            wiki search pages/ '\"two words\"' rust      # Phrase and word search",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .about("Format wiki markup into HTML")
                .long_about(
                    "Translate a wiki markup page into an HTML fragment.\n\n\
                    Use '-' as the input to read from stdin. Output goes to stdout\n\
                    by default, or use -o to write a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("allow-file-scheme")
                        .long("allow-file-scheme")
                        .help("Accept file: URLs in links")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("diff")
                .about("Compare two revisions of a page")
                .arg(
                    Arg::new("old")
                        .help("Old revision")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("new")
                        .help("New revision")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .help("Output style: unified, side-by-side or json")
                        .value_parser(|s: &str| s.parse::<DiffStyle>()),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Left column width for side-by-side output")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search a directory of pages")
                .long_about(
                    "Search every page file below a directory.\n\n\
                    Keywords are joined and split again, so a phrase can be kept together\n\
                    with double quotes inside the argument: '\"two words\"'. A page is\n\
                    reported once, for the first keyword it contains.",
                )
                .arg(
                    Arg::new("dir")
                        .help("Directory holding the pages")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("keywords")
                        .help("Keywords to look for")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print hits as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("blocks").about("List block formatters in priority order"))
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.subcommand().map(|(_, sub_matches)| sub_matches),
    );

    match matches.subcommand() {
        Some(("format", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_format_command(input, output, &config);
        }
        Some(("diff", sub_matches)) => {
            let old = sub_matches.get_one::<String>("old").expect("old is required");
            let new = sub_matches.get_one::<String>("new").expect("new is required");
            handle_diff_command(old, new, &config);
        }
        Some(("search", sub_matches)) => {
            let dir = sub_matches.get_one::<String>("dir").expect("dir is required");
            let keywords: Vec<&str> = sub_matches
                .get_many::<String>("keywords")
                .expect("keywords are required")
                .map(|s| s.as_str())
                .collect();
            let json = sub_matches.get_flag("json");
            handle_search_command(dir, &keywords, json, &config);
        }
        Some(("blocks", _)) => {
            handle_blocks_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr),
    );
    let _ = subscriber.try_init();
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        return source;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the format command
fn handle_format_command(input: &str, output: Option<&str>, config: &WikiConfig) {
    let source = read_input(input);
    let formatter = WikiFormatter::new(FormatOptions::from(&config.markup));
    let html = formatter.format(&source);

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            }
            tracing::info!(input, output = path, "wrote html");
        }
        None => println!("{html}"),
    }
}

/// Handle the diff command
fn handle_diff_command(old: &str, new: &str, config: &WikiConfig) {
    let old_source = read_input(old);
    let new_source = read_input(new);
    let old_lines: Vec<&str> = old_source.lines().collect();
    let new_lines: Vec<&str> = new_source.lines().collect();

    let runs = extract_diff(&old_lines, &new_lines);
    match config.diff.style {
        DiffStyle::Unified => print!("{}", render_unified(&runs)),
        DiffStyle::SideBySide => {
            let rows = side_by_side(&runs);
            print!("{}", render_side_by_side(&rows, config.diff.width));
        }
        DiffStyle::Json => match serde_json::to_string_pretty(&runs) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing diff: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Handle the search command
fn handle_search_command(dir: &str, keywords: &[&str], json: bool, config: &WikiConfig) {
    let pages = pages::load_pages(Path::new(dir), &config.search.extensions).unwrap_or_else(|e| {
        eprintln!("Error reading pages from '{dir}': {e}");
        std::process::exit(1);
    });
    let keywords = split_keywords(&keywords.join(" "));
    let hits = search(&pages, &keywords);

    if json {
        let values: Vec<serde_json::Value> = hits
            .iter()
            .map(|hit| {
                let mut value = serde_json::json!(hit);
                if let (true, Some(line)) = (config.search.emphasize, &hit.line) {
                    value["excerpt"] = serde_json::Value::String(emphasize(line, &keywords));
                }
                value
            })
            .collect();
        match serde_json::to_string_pretty(&values) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing hits: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if hits.is_empty() {
        eprintln!("No pages found.");
        return;
    }
    for hit in &hits {
        println!("{}: {}", hit.name, hit.title);
        if let Some(line) = &hit.line {
            println!("    {line}");
        }
    }
}

fn handle_blocks_command() {
    println!("Block formatters (in priority order):\n");
    let registry = BlockRegistry::default();
    for block in registry.iter() {
        println!("  {:<16} {}", block.name(), block.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>, flags: Option<&ArgMatches>) -> WikiConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match flags {
        Some(flags) => apply_config_overrides(loader, flags),
        None => Ok(loader),
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Command-line flags are layered last, over every configuration file.
fn apply_config_overrides(mut loader: Loader, matches: &ArgMatches) -> Result<Loader, ConfigError> {
    if matches.try_get_one::<bool>("allow-file-scheme").ok().flatten() == Some(&true) {
        loader = loader.set_override("markup.allow_file_scheme", true)?;
    }
    if let Ok(Some(style)) = matches.try_get_one::<DiffStyle>("style") {
        loader = loader.set_override("diff.style", style.as_str())?;
    }
    if let Ok(Some(width)) = matches.try_get_one::<usize>("width") {
        loader = loader.set_override("diff.width", *width as i64)?;
    }
    Ok(loader)
}

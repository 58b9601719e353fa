use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of DiffStyle::NAMES from wiki-babel
// We need to duplicate this here since build scripts can't access src/ modules
const DIFF_STYLES: &[&str] = &["unified", "side-by-side", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for formatting, comparing and searching wiki pages")
        .arg_required_else_help(true)
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
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("allow-file-scheme")
                        .long("allow-file-scheme")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("diff")
                .about("Compare two revisions of a page")
                .arg(Arg::new("old").required(true).index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("new").required(true).index(2).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_parser(clap::builder::PossibleValuesParser::new(DIFF_STYLES)),
                )
                .arg(Arg::new("width").long("width").value_hint(ValueHint::Other)),
        )
        .subcommand(
            Command::new("search")
                .about("Search a directory of pages")
                .arg(Arg::new("dir").required(true).index(1).value_hint(ValueHint::DirPath))
                .arg(Arg::new("keywords").required(true).num_args(1..).index(2))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("blocks").about("List block formatters in priority order"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "wiki", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "wiki", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "wiki", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

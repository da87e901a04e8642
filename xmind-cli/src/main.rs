// Command-line interface for xmind2md
//
// This binary converts XMind (.xmind) mind-map packages into Markdown
// outlines. All conversion logic lives in the xmind-outline crate; this
// layer only parses arguments, loads configuration, and reports results.
//
// The defaults come from xmind-config (embedded xmind.default.toml, layered
// with an optional xmind.toml or an explicit --config file); the disable
// flags and --max-depth override whatever the configuration says.
//
// Usage:
//  xmind2md input.xmind [-o output.md] [--max-depth N]
//           [--no-notes] [--no-labels] [--no-markers] [--config PATH]

use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::{Path, PathBuf};
use xmind_config::{Loader, XmindConfig};
use xmind_outline::{convert_to_outline, OutlineOptions};

const PREVIEW_LINES: usize = 40;

fn build_cli() -> Command {
    Command::new("xmind2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert XMind (.xmind) files to Markdown (.md)")
        .long_about(
            "xmind2md converts XMind mind-map packages into Markdown outlines.\n\n\
            Both package schemas are supported:\n  \
            - content.json (XMind Zen / 2020)\n  \
            - content.xml  (XMind 8)\n\n\
            Sheets become '#' headings, root topics '##' headings, and child\n\
            topics nested bullet lists. Notes render as blockquotes, labels as\n\
            inline code spans, markers in angle brackets.\n\n\
            Examples:\n  \
            xmind2md plan.xmind                      # Writes plan.md\n  \
            xmind2md plan.xmind -o outline.md        # Explicit output path\n  \
            xmind2md plan.xmind --max-depth 2        # Truncate deep branches\n  \
            xmind2md plan.xmind --no-notes           # Skip note blocks",
        )
        .arg(
            Arg::new("input")
                .help("Path to input .xmind file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path to output .md file (defaults to the input name with .md)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .help("Limit output depth (0 = only first-level topics)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("no-notes")
                .long("no-notes")
                .help("Do not include topic notes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-labels")
                .long("no-labels")
                .help("Do not include topic labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-markers")
                .long("no-markers")
                .help("Do not include topic markers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an xmind.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let options = outline_options(&config, &matches);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let input_path = Path::new(input);
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| input_path.with_extension("md"));

    let text = convert_to_outline(input_path, Some(&output_path), &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!("Converted to: {}", output_path.display());
    println!("--- Preview (first {PREVIEW_LINES} lines) ---");
    for line in text.lines().take(PREVIEW_LINES) {
        println!("{line}");
    }
}

/// Configuration values first, then CLI flags on top.
fn outline_options(config: &XmindConfig, matches: &clap::ArgMatches) -> OutlineOptions {
    let mut options = OutlineOptions::from(&config.outline);
    if matches.get_flag("no-notes") {
        options.notes = false;
    }
    if matches.get_flag("no-labels") {
        options.labels = false;
    }
    if matches.get_flag("no-markers") {
        options.markers = false;
    }
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        options.max_depth = Some(*depth as usize);
    }
    options
}

fn load_cli_config(explicit_path: Option<&str>) -> XmindConfig {
    let loader = Loader::new().with_optional_file("xmind.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

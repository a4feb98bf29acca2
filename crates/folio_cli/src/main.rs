//! Projects-page probe for a content directory.
//!
//! # Responsibility
//! - Load a content directory and print the sized projects grid.
//! - Keep output deterministic so content edits can be checked quickly.
//!
//! Usage:
//!   folio_cli <content_dir> [--search TEXT] [--category NAME] [--sort recent|tech]
//!             [--pattern small,small,large] [--config FILE] [--log-dir DIR]

use folio_core::{
    build_showcase, default_log_level, init_logging, ContentStore, ShowcaseQuery, SiteConfig,
    SizePattern, CATEGORY_ALL,
};
use std::env;
use std::process::ExitCode;

#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedArgs {
    content_dir: Option<String>,
    search: String,
    category: Option<String>,
    sort: Option<String>,
    pattern: Option<String>,
    config: Option<String>,
    log_dir: Option<String>,
    help: bool,
    version: bool,
}

impl ParsedArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut opts = ParsedArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let arg = arg.as_str();
            let mut value_for = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| format!("missing value for {flag}"))
            };
            match arg {
                "--help" | "-h" => opts.help = true,
                "--version" | "-V" => opts.version = true,
                "--search" | "-s" => opts.search = value_for(arg)?,
                "--category" | "-c" => opts.category = Some(value_for(arg)?),
                "--sort" => opts.sort = Some(value_for(arg)?),
                "--pattern" => opts.pattern = Some(value_for(arg)?),
                "--config" => opts.config = Some(value_for(arg)?),
                "--log-dir" => opts.log_dir = Some(value_for(arg)?),
                flag if flag.starts_with('-') => return Err(format!("unknown option: {flag}")),
                positional => {
                    if opts.content_dir.is_some() {
                        return Err(format!("unexpected argument: {positional}"));
                    }
                    opts.content_dir = Some(positional.to_string());
                }
            }
        }

        Ok(opts)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match ParsedArgs::parse(&args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    if opts.help {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if opts.version {
        println!("folio_core version={}", folio_core::core_version());
        return ExitCode::SUCCESS;
    }
    let Some(content_dir) = opts.content_dir.as_deref() else {
        print_usage();
        return ExitCode::from(2);
    };

    if let Some(log_dir) = opts.log_dir.as_deref() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(content_dir, &opts) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run(content_dir: &str, opts: &ParsedArgs) -> Result<Vec<String>, String> {
    let store = ContentStore::load_dir(content_dir).map_err(|err| err.to_string())?;
    let config = match opts.config.as_deref() {
        Some(path) => SiteConfig::load(path).map_err(|err| err.to_string())?,
        None => SiteConfig::default(),
    };
    let pattern = match opts.pattern.as_deref() {
        Some(raw) => SizePattern::parse_list(raw).map_err(|err| err.to_string())?,
        None => config.grid.pattern.clone(),
    };
    let query = ShowcaseQuery::from_inputs(
        &opts.search,
        opts.category.as_deref().unwrap_or(CATEGORY_ALL),
        opts.sort.as_deref().unwrap_or_default(),
        config.default_sort,
    );

    let view = build_showcase(store.projects(), &query, &pattern);
    let mut lines = Vec::with_capacity(view.cards.len() + 2);
    if let Some(featured) = view.featured {
        lines.push(format!("featured\t{}\t{}", year_label(featured.year), featured.title));
    }
    for card in &view.cards {
        lines.push(format!(
            "{}\t{}\t{}",
            card.size.as_str(),
            year_label(card.record.year),
            card.record.title
        ));
    }
    if view.is_empty() {
        lines.push(
            store
                .text_or("projects.empty", "No projects match.")
                .to_string(),
        );
    }
    Ok(lines)
}

fn year_label(year: Option<i32>) -> String {
    year.map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_usage() {
    eprintln!(
        "usage: folio_cli <content_dir> [--search TEXT] [--category NAME] [--sort recent|tech] \
         [--pattern small,small,large] [--config FILE] [--log-dir DIR]"
    );
}

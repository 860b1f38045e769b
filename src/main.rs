//! findthename - creative domain name suggestions from the command line
//!
//! Runs every naming strategy over a word, then filters, sorts and prints the results or lets the
//! user pick favorites interactively.

use anyhow::{Context, Result};
use findthename::{
    apply_filters,
    engine::normalize,
    group_by_strategy, sort_suggestions, AppConfig, FavoritesStore, FilterState, FindTheNameError,
    SortOption, StrategyName, Suggestion, SuggestionEngine, TldType, VERSION,
};
use rand::Rng;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LIMIT: usize = 30;

/// Placeholder words for the interactive prompt
const SAMPLE_WORDS: &[&str] = &[
    "stream", "delicious", "focus", "genius", "famous", "spark", "harbor", "pixel", "cloud kitchen",
];

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    words: Vec<String>,
    limit: usize,
    strategies: Vec<StrategyName>,
    tld_types: Vec<TldType>,
    min_tld_len: Option<usize>,
    max_tld_len: Option<usize>,
    sort: SortOption,
    filter: Option<String>,
    json: bool,
    pick: bool,
    show_favorites: bool,
    clear_favorites: bool,
    update_tlds: Option<PathBuf>,
    help: bool,
    version: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            limit: DEFAULT_LIMIT,
            strategies: Vec::new(),
            tld_types: Vec::new(),
            min_tld_len: None,
            max_tld_len: None,
            sort: SortOption::default(),
            filter: None,
            json: false,
            pick: false,
            show_favorites: false,
            clear_favorites: false,
            update_tlds: None,
            help: false,
            version: false,
        }
    }
}

impl CliArgs {
    fn parse<I>(args: I) -> findthename::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-V" | "--version" => parsed.version = true,
                "--json" => parsed.json = true,
                "--pick" => parsed.pick = true,
                "--favorites" => parsed.show_favorites = true,
                "--clear-favorites" => parsed.clear_favorites = true,
                "-n" | "--limit" => parsed.limit = parse_number(&arg, &value_for(&arg, &mut args)?)?,
                "-s" | "--strategy" => parsed.strategies.push(value_for(&arg, &mut args)?.parse()?),
                "-t" | "--tld-type" => parsed.tld_types.push(value_for(&arg, &mut args)?.parse()?),
                "--min-tld-len" => parsed.min_tld_len = Some(parse_number(&arg, &value_for(&arg, &mut args)?)?),
                "--max-tld-len" => parsed.max_tld_len = Some(parse_number(&arg, &value_for(&arg, &mut args)?)?),
                "--sort" => parsed.sort = value_for(&arg, &mut args)?.parse()?,
                "-f" | "--filter" => parsed.filter = Some(value_for(&arg, &mut args)?),
                "--update-tlds" => parsed.update_tlds = Some(PathBuf::from(value_for(&arg, &mut args)?)),
                "--" => parsed.words.extend(args.by_ref()),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(FindTheNameError::cli(format!("Unknown option '{}'", flag)));
                }
                _ => parsed.words.push(arg),
            }
        }

        if let (Some(min), Some(max)) = (parsed.min_tld_len, parsed.max_tld_len) {
            if min > max {
                return Err(FindTheNameError::cli(format!(
                    "--min-tld-len ({}) is greater than --max-tld-len ({})",
                    min, max
                )));
            }
        }

        Ok(parsed)
    }

    fn filter_state(&self) -> FilterState {
        let mut filter = FilterState::default();
        if !self.strategies.is_empty() {
            filter.strategies = self.strategies.iter().copied().collect();
        }
        if !self.tld_types.is_empty() {
            filter.tld_types = self.tld_types.iter().copied().collect();
        }
        if let Some(min) = self.min_tld_len {
            filter.tld_length_min = min;
        }
        if let Some(max) = self.max_tld_len {
            filter.tld_length_max = max;
        }
        if let Some(text) = &self.filter {
            filter.search_within = text.clone();
        }
        filter
    }
}

fn value_for(flag: &str, args: &mut impl Iterator<Item = String>) -> findthename::Result<String> {
    args.next()
        .ok_or_else(|| FindTheNameError::cli(format!("{} needs a value", flag)))
}

fn parse_number(flag: &str, value: &str) -> findthename::Result<usize> {
    value
        .parse()
        .map_err(|_| FindTheNameError::cli(format!("{} expects a number, got '{}'", flag, value)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Initialize the library
    if let Err(e) = findthename::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args = match CliArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if args.help {
        print_help();
        return;
    }
    if args.version {
        println!("findthename {}", VERSION);
        return;
    }

    if let Err(e) = run(args).await {
        match e.downcast_ref::<FindTheNameError>() {
            Some(err) => eprintln!("{}\n   ({:#})", err.user_message(), e),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Main findthename workflow
async fn run(args: CliArgs) -> Result<()> {
    if let Some(path) = &args.update_tlds {
        return update_tlds(path).await;
    }

    if args.clear_favorites || args.show_favorites {
        let favorites = FavoritesStore::open(AppConfig::favorites_path_from_env());
        if args.clear_favorites {
            favorites.clear();
            persist(&favorites);
            println!("🗑️  Favorites cleared");
            return Ok(());
        }
        return show_favorites(&favorites, args.json);
    }

    let config = AppConfig::from_env().context("reading FINDTHENAME_* settings")?;
    let favorites = FavoritesStore::open(&config.favorites_path);

    let input = if args.words.is_empty() {
        prompt_for_word()?
    } else {
        args.words.join(" ")
    };

    if normalize(&input).len() < 2 {
        println!("💡 Enter a word with at least two letters or digits to get suggestions.");
        return Ok(());
    }

    let catalog = config.load_catalog().await.context("loading the TLD catalog")?;
    let engine_config = config.engine_config().context("loading word lists")?;
    let engine = SuggestionEngine::new(Arc::new(catalog), engine_config);

    let suggestions = engine.suggest(&input);
    let mut shown = apply_filters(&suggestions, &args.filter_state(), engine.catalog());
    sort_suggestions(&mut shown, args.sort);
    let matched = shown.len();
    shown.truncate(args.limit);
    tracing::debug!(total = suggestions.len(), matched, shown = shown.len(), "suggestions ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    display_suggestions(&input, &shown, matched, &favorites);

    if args.pick && !shown.is_empty() {
        pick_favorites(&shown, &favorites)?;
    }

    Ok(())
}

/// Ask for a word, suggesting a random sample
fn prompt_for_word() -> findthename::Result<String> {
    let mut rng = rand::thread_rng();
    let placeholder = SAMPLE_WORDS[rng.gen_range(0..SAMPLE_WORDS.len())];

    let word = inquire::Text::new("🔎 Word or phrase:")
        .with_placeholder(placeholder)
        .with_help_message("Several words also produce initials")
        .prompt()?;
    Ok(word)
}

fn display_suggestions(input: &str, shown: &[Suggestion], matched: usize, favorites: &FavoritesStore) {
    println!("🌐 findthename - suggestions for \"{}\"", input.trim());
    println!("═══════════════════════════════════════════════════");

    if shown.is_empty() {
        println!();
        println!("❌ Nothing matched. Try relaxing the filters.");
        return;
    }

    for (strategy, group) in group_by_strategy(shown) {
        println!();
        println!("{} ({})", strategy.label(), group.len());
        for suggestion in group {
            let star = if favorites.is_favorite(suggestion) { "⭐" } else { "  " };
            let multi = if suggestion.is_multi_level { "  multi-level" } else { "" };
            println!("   {} {:<32} {:>3}{}", star, suggestion.domain, suggestion.score, multi);
        }
    }

    println!();
    println!("📊 Showing {} of {} suggestions", shown.len(), matched);
}

/// Interactive multi-select; selected entries become favorites, deselected ones are dropped
fn pick_favorites(shown: &[Suggestion], favorites: &FavoritesStore) -> Result<()> {
    let options: Vec<String> = shown.iter().map(|s| s.domain.clone()).collect();
    let defaults: Vec<usize> = shown
        .iter()
        .enumerate()
        .filter(|(_, s)| favorites.is_favorite(s))
        .map(|(i, _)| i)
        .collect();

    let selected = inquire::MultiSelect::new("⭐ Toggle favorites:", options)
        .with_default(&defaults)
        .with_page_size(15)
        .prompt()
        .map_err(FindTheNameError::from)?;

    let mut changed = 0;
    for suggestion in shown {
        let wanted = selected.contains(&suggestion.domain);
        if wanted != favorites.is_favorite(suggestion) {
            favorites.toggle(suggestion);
            changed += 1;
        }
    }

    if changed > 0 {
        persist(favorites);
    }
    println!("⭐ {} favorites ({} changed)", favorites.len(), changed);
    Ok(())
}

fn show_favorites(favorites: &FavoritesStore, json: bool) -> Result<()> {
    let list = favorites.list();
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if list.is_empty() {
        println!("⭐ No favorites yet. Use --pick to add some.");
        return Ok(());
    }

    println!("⭐ Favorites ({})", list.len());
    for suggestion in &list {
        println!("   {:<32} {:>3}  {}", suggestion.domain, suggestion.score, suggestion.strategy.label());
    }
    Ok(())
}

/// Save failures are reported and otherwise ignored
fn persist(favorites: &FavoritesStore) {
    if let Err(e) = favorites.save() {
        tracing::warn!(path = %favorites.path().display(), error = %e, "failed to save favorites");
        eprintln!("{}", e.user_message());
    }
}

#[cfg(feature = "iana")]
async fn update_tlds(path: &Path) -> Result<()> {
    use findthename::tld::{save_entries, IanaSource, TldSource};
    use findthename::TldCatalog;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Downloading the IANA TLD list...");

    let downloaded = IanaSource::new().load().await;
    spinner.finish_and_clear();
    let entries = downloaded.context("downloading the IANA TLD list")?;

    let catalog = TldCatalog::new(entries.clone())?;
    save_entries(&entries, path).await?;

    println!("✅ Saved {} TLDs to {}", catalog.len(), path.display());
    for (tld_type, count) in catalog.type_counts() {
        println!("   {:<6} {}", tld_type.to_string(), count);
    }
    println!("💡 Set FINDTHENAME_TLD_FILE={} to use it", path.display());
    Ok(())
}

#[cfg(not(feature = "iana"))]
async fn update_tlds(_path: &Path) -> Result<()> {
    Err(FindTheNameError::config("this build has no IANA support (enable the `iana` feature)").into())
}

fn print_help() {
    println!("🌐 findthename - creative domain name suggestions");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    findthename [OPTIONS] [WORD...]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --limit <N>          Number of suggestions to show (default: {})", DEFAULT_LIMIT);
    println!("    -s, --strategy <NAME>    Only this strategy, repeatable:");
    println!("                             domainHack, prefix, suffix, abbreviation, altSpelling, wordPlay");
    println!("    -t, --tld-type <TYPE>    Only this TLD type, repeatable: ccTLD, gTLD, sTLD");
    println!("        --min-tld-len <N>    Shortest TLD to show");
    println!("        --max-tld-len <N>    Longest TLD to show");
    println!("        --sort <KEY>         score (default), alpha or length");
    println!("    -f, --filter <TEXT>      Only domains containing TEXT");
    println!("        --json               Print JSON instead of a table");
    println!("        --pick               Choose favorites interactively");
    println!("        --favorites          List saved favorites");
    println!("        --clear-favorites    Remove all favorites");
    println!("        --update-tlds <PATH> Download the IANA TLD list to PATH");
    println!("    -h, --help               Show this help");
    println!("    -V, --version            Show the version");
    println!();
    println!("EXAMPLES:");
    println!("    findthename stream                     # stre.am, getstream.com, strm.io, ...");
    println!("    findthename -s domainHack delicious    # delicio.us");
    println!("    findthename \"open source hub\" --json   # initials included");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    FINDTHENAME_TLD_FILE      JSON TLD catalog (default: built-in list)");
    println!("    FINDTHENAME_FAVORITES     Favorites file (default: output/favorites.json)");
    println!("    FINDTHENAME_MAX_RESULTS   Suggestions kept per run (default: 500)");
    println!("    FINDTHENAME_PREFIXES      Prefix word list file");
    println!("    FINDTHENAME_SUFFIXES      Suffix word list file");
    println!("    FINDTHENAME_COMBINERS     Wordplay word list file");
    println!("    FINDTHENAME_POPULAR_TLDS  Comma-separated popular TLDs");
    println!("    RUST_LOG                  Log filter (default: warn)");
}

//! Heterograph CLI: find phrases that sound exactly like another phrase.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use heterograph_core::heterograph::find_heterographs;
use heterograph_core::language::{dictionary, tokenize};
use heterograph_core::source::{
    load_dictionary, DictionarySource, DEFAULT_DICTIONARY_URL, DICTIONARY_VERSION,
};
use heterograph_core::{Lexicon, QueryLimits};

#[derive(Parser, Debug)]
#[command(
    name = "heterograph",
    about = "List word sequences that sound exactly like a phrase",
    version,
)]
struct Cli {
    /// Phrase to re-spell
    #[arg(required = true)]
    phrase: Vec<String>,

    /// Local CMU-format dictionary file (overrides --url)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Dictionary download URL
    #[arg(long, default_value = DEFAULT_DICTIONARY_URL)]
    url: String,

    /// Dictionary version tag used to validate the cache
    #[arg(long, default_value = DICTIONARY_VERSION)]
    dict_version: String,

    /// Disable the dictionary cache
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Fail on the first malformed dictionary line instead of skipping it
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Maximum number of phrase pronunciations
    #[arg(long, default_value_t = QueryLimits::default().max_candidates)]
    max_candidates: usize,

    /// Maximum number of heterographs per pronunciation
    #[arg(long, default_value_t = QueryLimits::default().max_heterographs)]
    max_heterographs: usize,

    /// Search every pronunciation of the phrase, not just the first
    #[arg(long, default_value_t = false)]
    all_pronunciations: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn build_lexicon(text: &str, strict: bool) -> Result<Lexicon> {
    let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
    let lexicon = if strict {
        let entries = dictionary::parse_strict(text)?;
        Lexicon::from_entries_parallel(&entries, threads)
    } else {
        let parsed = dictionary::parse(text);
        Lexicon::from_entries_parallel(&parsed.entries, threads)
    };
    let stats = lexicon.stats();
    log::info!(
        "Lexicon: {} words, {} pronunciations, {} trie nodes",
        stats.words,
        stats.pronunciations,
        stats.trie_nodes
    );
    Ok(lexicon)
}

fn run(cli: Cli) -> Result<()> {
    let source = match &cli.dictionary {
        Some(path) => DictionarySource::File(path.clone()),
        None => DictionarySource::Url(cli.url.clone()),
    };
    let text = load_dictionary(&source, &cli.dict_version, !cli.no_cache)?;
    let lexicon = build_lexicon(&text, cli.strict)?;

    let phrase = cli.phrase.join(" ");
    let words = tokenize::words(&phrase);
    log::info!("Words entered: {:?}", words);

    let limits = QueryLimits {
        max_candidates: cli.max_candidates,
        max_heterographs: cli.max_heterographs,
    };
    let result = find_heterographs(&lexicon, &words, &limits, cli.all_pronunciations)
        .with_context(|| format!("No heterographs for {:?}", phrase))?;

    if !result.unknown_words.is_empty() {
        log::warn!(
            "Not in dictionary, ignored: {}",
            result.unknown_words.join(", ")
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for set in &result.sets {
        println!("[{}]", set.pronunciation);
        if set.heterographs.is_empty() {
            println!("  (no heterographs)");
        }
        for phrase in &set.heterographs {
            println!("  {}", phrase);
        }
    }

    Ok(())
}

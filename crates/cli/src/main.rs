use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{DevStore, DEFAULT_DEVS_URL};
use filter_engine::{recompute, Combinator, DevFilterEngine, FilterCriteria, FilterEvent, Language};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod render;
mod repl;

use render::CardRenderer;

/// dev-finder - Developer directory search
#[derive(Parser)]
#[command(name = "dev-finder")]
#[command(about = "Search a developer directory by name and programming language", long_about = None)]
struct Cli {
    /// Endpoint returning the JSON array of developers
    #[arg(short, long, default_value = DEFAULT_DEVS_URL)]
    url: String,

    /// Read developers from a local JSON file instead of the endpoint
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter once and print the matching developers
    List {
        /// Name search text (accents, case and spaces are ignored)
        #[arg(long)]
        name: Option<String>,

        /// Accepted language; repeat for several (default: all three)
        #[arg(long = "lang", value_enum)]
        languages: Vec<LanguageArg>,

        /// Accept no language at all
        #[arg(long, conflicts_with = "languages")]
        no_lang: bool,

        /// How accepted languages are combined
        #[arg(long, value_enum, default_value = "or")]
        combinator: CombinatorArg,

        /// Print the result as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Edit the filter line by line and watch the listing update
    Interactive,

    /// Time recomputation under random criteria
    Benchmark {
        /// Number of recomputations to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    Java,
    Javascript,
    Python,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Java => Language::Java,
            LanguageArg::Javascript => Language::JavaScript,
            LanguageArg::Python => Language::Python,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CombinatorArg {
    And,
    Or,
}

impl From<CombinatorArg> for Combinator {
    fn from(arg: CombinatorArg) -> Self {
        match arg {
            CombinatorArg::And => Combinator::And,
            CombinatorArg::Or => Combinator::Or,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Nothing is filtered or rendered before the load completes
    let mut engine = DevFilterEngine::pending();
    engine.finish_loading(load_store(&cli).await);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            name,
            languages,
            no_lang,
            combinator,
            json,
        } => {
            let wanted = if no_lang {
                Vec::new()
            } else if languages.is_empty() {
                Language::ALL.to_vec()
            } else {
                languages.into_iter().map(Language::from).collect()
            };
            handle_list(engine, name, &wanted, combinator.into(), json)?
        }
        Commands::Interactive => repl::run(engine).await?,
        Commands::Benchmark { iterations } => handle_benchmark(&engine, iterations)?,
    }

    Ok(())
}

/// Load the directory once. A failure is logged and leaves an empty store.
async fn load_store(cli: &Cli) -> DevStore {
    let start = Instant::now();
    let result = match &cli.file {
        Some(path) => {
            eprintln!("Loading developers from {}...", path.display());
            DevStore::load_from_file(path)
        }
        None => {
            eprintln!("Fetching developers from {}...", cli.url);
            DevStore::fetch(&cli.url).await
        }
    };

    match result {
        Ok(store) => {
            eprintln!(
                "{} Loaded {} developers in {:?}",
                "✓".green(),
                store.len(),
                start.elapsed()
            );
            store
        }
        Err(err) => {
            tracing::error!("Could not load developers: {}", err);
            DevStore::new()
        }
    }
}

/// Handle the 'list' command
fn handle_list(
    mut engine: DevFilterEngine,
    name: Option<String>,
    wanted: &[Language],
    combinator: Combinator,
    json: bool,
) -> Result<()> {
    // Drive the engine through the same events the interactive mode uses
    if let Some(name) = name {
        engine.dispatch(FilterEvent::NameQueryChanged(name));
    }
    for language in Language::ALL {
        if engine.criteria().accepts(language) != wanted.contains(&language) {
            engine.dispatch(FilterEvent::LanguageToggled(language));
        }
    }
    engine.dispatch(FilterEvent::CombinatorSelected(combinator));

    if json {
        let output = serde_json::json!({
            "criteria": engine.criteria(),
            "total": engine.total_count(),
            "devs": engine.visible(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize developers")?
        );
    } else {
        engine.render(&mut CardRenderer::new(std::io::stdout()))?;
    }
    Ok(())
}

/// Mean of `count` timings summing to `total`; any count is safe
fn average_latency(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    total.div_f64(count as f64)
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &DevFilterEngine, iterations: usize) -> Result<()> {
    if iterations == 0 {
        anyhow::bail!("--iterations must be at least 1");
    }

    let records = engine.store().records();
    let queries = ["", "a", "an", "ma", "jo", "silva", "zz"];
    let mut rng = rand::rng();

    // Random criteria, generated up front so only recompute is timed
    let criteria: Vec<FilterCriteria> = (0..iterations)
        .map(|_| FilterCriteria {
            name_query: queries[rng.random_range(0..queries.len())].to_string(),
            accepted_languages: Language::ALL
                .into_iter()
                .filter(|_| rng.random_bool(0.5))
                .collect(),
            combinator: if rng.random_bool(0.5) { Combinator::And } else { Combinator::Or },
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut matched = 0usize;
    for c in &criteria {
        let start = Instant::now();
        matched += recompute(records, c).len();
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = average_latency(total_time, timings.len());
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Records: {}", records.len());
    println!("Recomputations: {}", iterations);
    println!("Average matches: {:.1}", matched as f64 / iterations as f64);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} recomputations/second", throughput);

    Ok(())
}

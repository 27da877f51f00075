use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use record_search::{sample, Record, SearchConfig, SearchEngine};

mod cli;

use cli::{Args, Command};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("record_search=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_collection(source: &cli::SourceArgs) -> anyhow::Result<Vec<Record>> {
    match &source.records {
        Some(path) => sample::load_records(path)
            .with_context(|| format!("loading records from {}", path.display())),
        None => Ok(sample::sample_records(source.sample, source.seed)),
    }
}

fn print_records(title: &str, records: &[&Record]) {
    println!("{title}: {} record(s)", records.len());
    for record in records {
        println!("  {record}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let default_top_k = config.default_top_k;
    let default_max = config.default_max_results;

    let mut engine = SearchEngine::with_config(config).context("invalid search config")?;
    engine
        .initialize(load_collection(&args.source)?)
        .context("initializing search engine")?;

    match args.command {
        Command::Search { query, top_k } => {
            let results = engine.semantic_search(&query, top_k.unwrap_or(default_top_k))?;
            println!("Semantic search for \"{query}\": {} result(s)", results.len());
            for result in results {
                println!("  {:>6.2}%  {}", result.score * 100.0, result.record);
            }
        }
        Command::Filter {
            query,
            passed,
            failed,
            science,
            max,
        } => {
            let results = engine.search_with_filters(
                &query,
                Command::passed_filter(passed, failed),
                science.then_some(true),
                max.unwrap_or(default_max),
            )?;
            print_records("Filtered search", &results);
        }
        Command::Passed { max } => {
            print_records("Passed (A or B)", &engine.search_passed(max.unwrap_or(default_max))?);
        }
        Command::Failed { max } => {
            print_records(
                "Failed (C, D or F)",
                &engine.search_failed(max.unwrap_or(default_max))?,
            );
        }
        Command::Science { max } => {
            print_records(
                "Science subjects",
                &engine.search_by_category(max.unwrap_or(default_max))?,
            );
        }
        Command::All => {
            let all: Vec<&Record> = engine.records().iter().collect();
            print_records("All records", &all);
        }
        Command::Count => {
            println!("{}", engine.record_count());
        }
    }

    Ok(())
}

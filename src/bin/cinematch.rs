use anyhow::Context;
use cinematch::{
    CinematchConfig, CinematchError, DEMO_QUERY, InMemoryCatalog, Recommender,
    render_recommendation, validate_limit,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};


const OVERVIEW_WIDTH: usize = 120;

const USAGE: &str = "usage: cinematch [--config PATH] [--json] [QUERY] [N]";


#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<String>,
    json: bool,
    query: Option<String>,
    count: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help,
}

/// A negative number is taken as the result count even without a query, so
/// it reaches validation instead of being ranked as query text.
fn parse_args(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut args = Args::default();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--config" => {
                let path = raw.next().context("--config needs a path")?;
                args.config_path = Some(path);
            }
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.parse::<i64>().is_err() => {
                anyhow::bail!("unknown option {arg:?}\n{USAGE}")
            }
            _ if arg.starts_with('-') && args.count.is_none() => args.count = Some(arg),
            _ if args.query.is_none() => args.query = Some(arg),
            _ if args.count.is_none() => args.count = Some(arg),
            _ => anyhow::bail!("unexpected argument {arg:?}\n{USAGE}"),
        }
    }
    Ok(Command::Run(args))
}

/// Result count from the command line, or `default` when none was given.
fn resolve_count(raw: Option<&str>, default: usize) -> cinematch::Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let n: i64 = raw.trim().parse().map_err(|_| {
        CinematchError::validation(format!("result count must be an integer, got {raw:?}"))
    })?;
    validate_limit(n)
}

fn main() -> anyhow::Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };
    let config = CinematchConfig::load(args.config_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {path}"))?,
        None => InMemoryCatalog::sample(),
    };

    let count = resolve_count(args.count.as_deref(), config.default_limit)?;

    let query = args.query.as_deref().unwrap_or(DEMO_QUERY);
    let recommender = Recommender::with_config(catalog, &config);
    let recommendations = recommender.recommend(query, count)?;
    info!("Ranked {} recommendations", recommendations.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!("Movie Recommendation System");
    println!("{}", "-".repeat(50));
    println!("User Preferences: {query}");
    println!("\nRecommended Movies:");
    for (i, rec) in recommendations.iter().enumerate() {
        println!("\n{}", render_recommendation(i + 1, rec, OVERVIEW_WIDTH));
    }

    Ok(())
}

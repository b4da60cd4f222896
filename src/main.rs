use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ingatlan_scout::config::{Config, DEFAULT_SECRETS_PATH};
use ingatlan_scout::interpreter::openai::{DEFAULT_API_BASE, DEFAULT_MODEL};
use ingatlan_scout::interpreter::OpenAiService;
use ingatlan_scout::{build_url, display, history, QueryInterpreter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Turn a free-text Hungarian property search into an ingatlan.com link
#[derive(Debug, Parser)]
#[command(name = "ingatlan-scout", version)]
struct Cli {
    /// Search text; omit to read one query per line from stdin
    query: Option<String>,

    #[arg(long, env = "INGATLAN_SCOUT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// TOML file holding OPENAI_API_KEY
    #[arg(long, default_value = DEFAULT_SECRETS_PATH)]
    secrets: PathBuf,

    /// Skip the model and use keyword extraction only
    #[arg(long)]
    offline: bool,

    /// Print the structured filter as JSON
    #[arg(long)]
    debug: bool,

    /// Append each interpretation to this file as one JSON line
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("🏠 Ingatlan Scout");

    let interpreter = if cli.offline {
        QueryInterpreter::offline()
    } else {
        let config = Config::load(&cli.secrets, cli.model.clone(), cli.api_base.clone())?;
        let service = OpenAiService::with_endpoint(config.api_key, config.model, config.api_base)?;
        QueryInterpreter::new(Box::new(service))
    };

    if let Some(query) = &cli.query {
        return run_query(&cli, &interpreter, query).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Írd ide, milyen ingatlant keresel: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        // A failed save should not end the session
        if let Err(err) = run_query(&cli, &interpreter, query).await {
            eprintln!("❌ {:#}", err);
        }
        println!();
    }

    Ok(())
}

async fn run_query(cli: &Cli, interpreter: &QueryInterpreter, query: &str) -> Result<()> {
    let interpretation = interpreter.interpret(query).await;
    let search = build_url(&interpretation.filter);

    println!("{}", display::status_banner(&interpretation));
    match &search {
        Some(search) => {
            print!("{}", display::filter_summary(&interpretation.filter));
            println!("{}", display::search_link(search));
        }
        None => println!("{}", display::empty_warning()),
    }

    if cli.debug {
        println!("{}", serde_json::to_string_pretty(&interpretation.filter)?);
    }

    if let Some(path) = &cli.save {
        history::append(path, query, &interpretation, search.as_ref()).await?;
        info!("💾 Saved interpretation to {}", path.display());
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "flights-cli")]
#[command(about = "Query a running flight-stats service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the raw flight board
    Records,
    /// Count all flights, or those for one country
    Count {
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Count landed flights
    Inbound {
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Count departed flights
    Outbound {
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Count flights at least ten minutes late
    Delayed,
    /// Most popular destination city
    MostPopular,
    /// First outbound/inbound pair for a short trip
    QuickGetaway,
    /// Service liveness
    Health,
}

impl Commands {
    fn segments(&self) -> Vec<&str> {
        fn counted<'a>(mut base: Vec<&'a str>, country: &'a Option<String>) -> Vec<&'a str> {
            base.push("count");
            if let Some(c) = country {
                base.push(c);
            }
            base
        }

        match self {
            Commands::Records => vec![],
            Commands::Count { country } => counted(vec!["flights"], country),
            Commands::Inbound { country } => counted(vec!["flights", "inbound"], country),
            Commands::Outbound { country } => counted(vec!["flights", "outbound"], country),
            Commands::Delayed => vec!["flights", "delayed", "count"],
            Commands::MostPopular => vec!["flights", "most-popular"],
            Commands::QuickGetaway => vec!["flights", "quick-getaway"],
            Commands::Health => vec!["health"],
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut url = Url::parse(&cli.url)?;
    url.path_segments_mut()
        .map_err(|_| format!("cannot use '{}' as a base URL", cli.url))?
        .pop_if_empty()
        .extend(cli.command.segments());
    let res = client.get(url).send().await?;

    if !print_response(res).await? {
        std::process::exit(1);
    }
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(false);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(true)
}

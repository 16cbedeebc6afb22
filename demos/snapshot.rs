use market_snapshot::{SnapClient, Snapshotter, TechnicalOutcome, Vader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("market_snapshot=info")),
        )
        .init();

    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "AAPL".to_string());

    // GNews rejects unauthenticated searches; without a key the sentiment half stays empty.
    let mut builder = SnapClient::builder();
    if let Ok(token) = std::env::var("GNEWS_API_KEY") {
        builder = builder.news_token(token);
    }
    let client = builder.build()?;
    let model = Vader::default();

    let snap = Snapshotter::new(&client, &model).snapshot(&symbol).await?;

    match &snap.technical {
        TechnicalOutcome::Ready { report } => {
            println!("--- Technical summary for {} ---", snap.symbol);
            for row in report {
                println!(
                    "{:<11} {:<7} {:<11} buy {:>2} sell {:>2} neutral {:>2}  close {}",
                    row.interval,
                    row.exchange,
                    row.summary.recommendation.as_str(),
                    row.summary.buy,
                    row.summary.sell,
                    row.summary.neutral,
                    row.closing_price
                        .map_or_else(|| "n/a".to_string(), |c| format!("{c:.2}")),
                );
            }
        }
        TechnicalOutcome::NotFound { message, .. } => println!("{message}"),
        TechnicalOutcome::EnrichmentFailed { reason, .. } => {
            println!("No closing price for {}: {reason}", snap.symbol);
        }
        TechnicalOutcome::Failed { reason } => println!("Technical lookup failed: {reason}"),
    }
    println!();

    println!("--- Headline sentiment ---");
    for h in &snap.sentiment.headlines {
        println!("{:>8}  {:+.4}  {}", h.category.as_str(), h.score.compound, h.headline);
    }
    for (category, count) in snap.sentiment.summary.iter() {
        println!("{category}: {count}");
    }
    println!();

    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

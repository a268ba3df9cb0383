use bayes_rs::classifier::BayesModel;
use bayes_rs::config::Config;
use bayes_rs::corpus;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bayes-rs", about = "Naive-Bayes spam/ham message classifier")]
struct Args {
    /// Path to the tab-separated training corpus (overrides config.toml)
    #[arg(long)]
    corpus: Option<String>,

    /// Emit classification results as JSON
    #[arg(long)]
    json: bool,

    /// Messages to classify (defaults to two demo messages)
    messages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Classification {
    message: String,
    spam: bool,
    ham_score: f64,
    spam_score: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level = match config.logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let corpus_path = args.corpus.unwrap_or(config.corpus.path);

    info!("Loading training corpus from {}", corpus_path);
    let records = corpus::load_corpus(&corpus_path)?;
    info!("Loaded {} training records", records.len());

    let mut model = BayesModel::new();
    model.train_all(records);
    model.finalize();

    let summary = model.summary();
    info!(
        "Trained on {} ham / {} spam messages, {} distinct words",
        summary.ham_messages, summary.spam_messages, summary.vocabulary_size
    );

    let messages = if args.messages.is_empty() {
        vec!["hello Free".to_string(), "I love you".to_string()]
    } else {
        args.messages
    };

    let mut results = Vec::new();
    for message in messages {
        let (ham_score, spam_score) = model.scores(&message);
        let spam = model.classify(&message);
        debug!(
            "'{}': ham_score={} spam_score={}",
            message, ham_score, spam_score
        );
        results.push(Classification {
            message,
            spam,
            ham_score,
            spam_score,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!(
                "{} = {}",
                result.message,
                if result.spam { "spam" } else { "ham" }
            );
        }
    }

    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flashgen::{Flashcard, FlashcardSet, GeminiClient, GeneratorOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "flashgen", about = "Generate study flashcards with a language model", version)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate flashcards from a topic, a block of text, or a URL
    Generate {
        /// Topic, text, or http(s) URL
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        topic: Option<String>,

        /// Read the topic from a text file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write the generated set to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config file with generator options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Model identifier (overrides config and FLASHGEN_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// API key (overrides config and GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Parse a saved model reply into flashcards without calling the service
    Parse {
        /// Text file holding the raw reply
        #[arg(short, long)]
        input: PathBuf,

        /// Write the parsed set to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the prompt that would be sent for a topic
    Prompt {
        topic: String,
    },

    /// List the flashcards stored in an exported CSV file
    Show {
        #[arg(short, long)]
        input: PathBuf,
    },
}

async fn load_options(
    config: Option<&Path>,
    model: Option<String>,
    api_key: Option<String>,
) -> Result<GeneratorOptions> {
    let options = match config {
        Some(path) => GeneratorOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorOptions::default(),
    };
    let options = options.with_env_overrides().with_overrides(api_key, model);
    options.validate()?;
    Ok(options)
}

fn card_line(number: usize, card: &Flashcard) -> String {
    format!("{:>3}. {} - {}", number, card.term, card.definition)
}

fn print_cards(cards: &FlashcardSet) {
    for (i, card) in cards.iter().enumerate() {
        println!("{}", card_line(i + 1, card));
    }
}

async fn finish(cards: &FlashcardSet, output: Option<&Path>) -> Result<()> {
    print_cards(cards);
    if let Some(output) = output {
        flashgen::export_csv(cards, output).await?;
        println!("Exported {} flashcards -> {}", cards.len(), output.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Generate {
            topic,
            file,
            output,
            config,
            model,
            api_key,
        } => {
            let topic = match (topic, file) {
                (Some(topic), _) => topic,
                (None, Some(path)) => flashgen::import_text(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => bail!("Provide a topic or --file"),
            };

            let options = load_options(config.as_deref(), model, api_key).await?;
            let client = GeminiClient::new(&options)?;
            let cards = flashgen::generate_flashcards(&client, &options, &topic).await?;
            finish(&cards, output.as_deref()).await?;
        }

        Commands::Parse { input, output } => {
            let raw = flashgen::import_text(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let cards = FlashcardSet::parse(&raw);
            if cards.is_empty() {
                bail!(flashgen::FlashcardError::NoValidFlashcards);
            }
            finish(&cards, output.as_deref()).await?;
        }

        Commands::Prompt { topic } => {
            let topic = topic.trim();
            if topic.is_empty() {
                bail!(flashgen::FlashcardError::EmptyInput);
            }
            log::debug!("Input classified as {:?}", flashgen::classify(topic));
            println!("{}", flashgen::build_prompt(topic));
        }

        Commands::Show { input } => {
            let cards = flashgen::load_from_csv(&input).await?;
            print_cards(&cards);
            println!("{} flashcards", cards.len());
        }
    }

    Ok(())
}

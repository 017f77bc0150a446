use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use song_recommender::config::RecommendationSettings;
use song_recommender::error::RecommendError;
use song_recommender::recommend::{title_case, RecommendationPage};
use song_recommender::{load_context, HybridRecommender, RecommenderContext};

use rustyline::{
    completion::Completer,
    highlight::Highlighter,
    history::FileHistory,
    validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the directory with the recommender artifacts.
    #[clap(value_parser = parse_path)]
    pub artifacts_dir: PathBuf,
}

#[derive(Parser)]
#[command(name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Songs that sound like the given one.
    Content {
        song_name: String,
        artist_name: String,

        #[clap(short, default_value_t = RecommendationSettings::default().default_k)]
        k: usize,
    },

    /// Blends content similarity with what other listeners played.
    Hybrid {
        song_name: String,
        artist_name: String,

        #[clap(short, default_value_t = RecommendationSettings::default().default_k)]
        k: usize,

        /// From 1 (personalized) to 9 (diverse).
        #[clap(
            short,
            long,
            default_value_t = RecommendationSettings::default().default_diversity,
            conflicts_with = "weight"
        )]
        diversity: u8,

        /// Weight of content similarity in [0, 1], overrides diversity.
        #[clap(short, long)]
        weight: Option<f64>,
    },

    /// Shows the catalog entry of a song.
    Lookup {
        song_name: String,
        artist_name: String,
    },

    /// Shows catalog and interaction counts.
    Stats,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const PROMPT: &str = ">> ";

fn render_page(page: &RecommendationPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Currently Playing");
    let _ = writeln!(
        out,
        "  {} - {}",
        page.now_playing.name, page.now_playing.artist
    );
    if !page.now_playing.preview_reference.is_empty() {
        let _ = writeln!(out, "  {}", page.now_playing.preview_reference);
    }
    let _ = writeln!(out, "\nNext Up");
    if page.up_next.is_empty() {
        let _ = writeln!(out, "  (nothing to recommend)");
    }
    for track in page.up_next.iter() {
        let _ = writeln!(
            out,
            "  {:>2}. {} - {}",
            track.position, track.name, track.artist
        );
    }
    out
}

fn recommendation_result(
    result: Result<RecommendationPage, RecommendError>,
    song_name: &str,
) -> CommandExecutionResult {
    match result {
        Ok(page) => {
            print!("{}", render_page(&page));
            CommandExecutionResult::Ok
        }
        Err(RecommendError::NotFound(_)) => CommandExecutionResult::Error(format!(
            "Sorry, we couldn't find {} in our database. Please try another song.",
            title_case(song_name)
        )),
        Err(err) => CommandExecutionResult::Error(format!("{}", err)),
    }
}

fn execute_command(line: String, context: &RecommenderContext) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            println!("{} {}", PROMPT, &line);
            match cli.command {
                InnerCommand::Content {
                    song_name,
                    artist_name,
                    k,
                } => {
                    return recommendation_result(
                        context.content_recommendation(&song_name, &artist_name, k),
                        &song_name,
                    );
                }
                InnerCommand::Hybrid {
                    song_name,
                    artist_name,
                    k,
                    diversity,
                    weight,
                } => {
                    let recommender = match weight {
                        Some(weight) => HybridRecommender::new(k, weight),
                        None => HybridRecommender::with_diversity(k, diversity),
                    };
                    let recommender = match recommender {
                        Ok(x) => x,
                        Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                    };
                    return recommendation_result(
                        context.hybrid_recommendation(&song_name, &artist_name, &recommender),
                        &song_name,
                    );
                }
                InnerCommand::Lookup {
                    song_name,
                    artist_name,
                } => {
                    let catalog = context.content().catalog();
                    match catalog
                        .find(&song_name, &artist_name)
                        .and_then(|row| catalog.get(row))
                    {
                        Ok(entry) => println!("{:#?}", entry),
                        Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                    }
                }
                InnerCommand::Stats => {
                    println!("{:#?}", context.stats());
                }
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct MyHelper {
    commands_names: Vec<String>,
}

impl MyHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();
        MyHelper { commands_names }
    }
}

impl Completer for MyHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        Ok((0, matches))
    }
}

impl Highlighter for MyHelper {}

impl Validator for MyHelper {}

impl Helper for MyHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let context = load_context(&cli_args.artifacts_dir).with_context(|| {
        format!(
            "Could not load recommender artifacts from {}",
            cli_args.artifacts_dir.display()
        )
    })?;

    InnerCli::command().print_long_help()?;

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<MyHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(MyHelper::new()));

    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &context) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        eprintln!("{}", err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

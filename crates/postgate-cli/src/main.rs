use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use postgate_core::{CandidatePost, PostgateConfig, ValidationResult};
use postgate_engine::{FileCorpus, ValidationEngine};

#[derive(Parser)]
#[command(
    name = "postgate",
    version,
    about = "Content quality and duplicate checks for generated posts"
)]
struct Cli {
    /// Directory holding postgate.toml. Defaults to the current directory.
    #[arg(long, global = true)]
    config_root: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a candidate post (JSON) and print the verdict
    Validate {
        /// Candidate post file: {"title", "body", "topic", "mode_flags"}
        #[arg(long)]
        post: PathBuf,
        /// Accepted-posts corpus (JSON array or JSON Lines)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Skip hook-repetition and corpus-similarity checks
        #[arg(long)]
        no_duplicates: bool,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the similarity ratio between two text files
    Similarity { a: PathBuf, b: PathBuf },

    /// Print the resolved configuration as TOML
    Config,
}

fn load_config(root: Option<&Path>) -> anyhow::Result<PostgateConfig> {
    let root = match root {
        Some(r) => r.to_path_buf(),
        None => std::env::current_dir()?,
    };
    PostgateConfig::load(&root).with_context(|| format!("loading config from {}", root.display()))
}

fn read_post(path: &Path) -> anyhow::Result<CandidatePost> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing post {}", path.display()))
}

fn print_verdict(result: &ValidationResult) {
    println!("{}", if result.passes() { "PASS" } else { "FAIL" });
    for issue in result.issues() {
        println!("  issue:   {issue}");
    }
    for warning in result.warnings() {
        println!("  warning: {warning}");
    }
    println!("  checks run: {}", result.details().len());
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if cli.json_logs {
        postgate_core::tracing::init_tracing_json();
    } else {
        postgate_core::tracing::init_tracing();
    }

    match cli.cmd {
        Command::Validate {
            post,
            corpus,
            no_duplicates,
            json,
        } => {
            let config = load_config(cli.config_root.as_deref())?;
            let candidate = read_post(&post)?;
            let mut engine = ValidationEngine::new(config);
            if let Some(path) = corpus {
                engine = engine.with_corpus_source(Arc::new(FileCorpus::new(path)));
            }

            let result = engine.validate(&candidate, !no_duplicates);
            if json {
                println!("{}", result.to_json()?);
            } else {
                print_verdict(&result);
            }
            tracing::debug!(passes = result.passes(), "verdict printed");
            Ok(if result.passes() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Similarity { a, b } => {
            let a_text =
                std::fs::read_to_string(&a).with_context(|| format!("reading {}", a.display()))?;
            let b_text =
                std::fs::read_to_string(&b).with_context(|| format!("reading {}", b.display()))?;
            println!("{:.4}", postgate_similarity::similarity(&a_text, &b_text));
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            let config = load_config(cli.config_root.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn validate_flags_parse() {
        let cli = Cli::parse_from([
            "postgate",
            "validate",
            "--post",
            "post.json",
            "--corpus",
            "corpus.jsonl",
            "--no-duplicates",
            "--json",
        ]);
        match cli.cmd {
            Command::Validate {
                post,
                corpus,
                no_duplicates,
                json,
            } => {
                assert_eq!(post, PathBuf::from("post.json"));
                assert_eq!(corpus, Some(PathBuf::from("corpus.jsonl")));
                assert!(no_duplicates);
                assert!(json);
            }
            _ => panic!("expected validate"),
        }
    }
}

//! hengine — command-line front end for the TF-IDF search engine.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use hengine::{
    load_corpus, rank_documents, relevance_label, select_documents, summary_line, CorpusFormat,
    CorpusOptions, DisplayOptions, HengineResult, PubSub, RankedDocument, SearchEngine, SearchHit,
};

#[derive(Parser)]
#[command(name = "hengine", version, about = "Rank short documents against free-text queries")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one query and print the ranked documents
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Query terms, separated by single spaces
        query: String,

        /// Show at most N documents
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide matched documents scoring below this TF-IDF value
        #[arg(long)]
        min_score: Option<f64>,

        /// Print the shown documents as JSON
        #[arg(long)]
        json: bool,
    },
    /// List indexed terms in traversal order with their document counts
    Terms {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Read queries from stdin, one per line
    Repl {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Print corpus and index sizes
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// Corpus file: one document per line, or a JSON array
    corpus: PathBuf,

    /// Corpus layout
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Index documents as written instead of lowercasing them
    #[arg(long)]
    keep_case: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    Lines,
    Json,
}

impl CorpusArgs {
    fn options(&self) -> CorpusOptions {
        let format = match self.format {
            FormatArg::Auto => CorpusFormat::Auto,
            FormatArg::Lines => CorpusFormat::Lines,
            FormatArg::Json => CorpusFormat::Json,
        };
        CorpusOptions {
            format,
            lowercase: !self.keep_case,
        }
    }

    fn load(&self) -> HengineResult<(Vec<String>, SearchEngine)> {
        let documents = load_corpus(&self.corpus, &self.options())?;
        let engine = SearchEngine::build(&documents)?;
        Ok((documents, engine))
    }
}

fn render(out: &mut impl Write, documents: &[String], hits: &[SearchHit]) -> io::Result<()> {
    write_documents(out, hits, &rank_documents(documents, hits))
}

fn write_documents(
    out: &mut impl Write,
    hits: &[SearchHit],
    shown: &[RankedDocument<'_>],
) -> io::Result<()> {
    writeln!(out, "{}", summary_line(hits))?;
    for doc in shown {
        writeln!(out, "\n[{}] {}", doc.document_id, relevance_label(doc.score))?;
        writeln!(out, "{}", doc.text)?;
    }
    Ok(())
}

/// Rank every hit of `query` first, then apply the display flags to the
/// ranked documents.
fn run_search(
    out: &mut impl Write,
    documents: &[String],
    engine: &SearchEngine,
    query: &str,
    options: &DisplayOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let hits = engine.search(query);
    let shown = select_documents(documents, &hits, options);
    if json {
        serde_json::to_writer_pretty(&mut *out, &shown)?;
        writeln!(out)?;
    } else {
        write_documents(out, &hits, &shown)?;
    }
    Ok(())
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();

    match command {
        Command::Search {
            corpus,
            query,
            limit,
            min_score,
            json,
        } => {
            let (documents, engine) = corpus.load()?;
            let options = DisplayOptions { limit, min_score };
            run_search(&mut stdout.lock(), &documents, &engine, &query, &options, json)?;
        }
        Command::Terms { corpus } => {
            let (_, engine) = corpus.load()?;
            let mut out = stdout.lock();
            for (term, postings) in engine.index().entries() {
                writeln!(out, "{term}\t{}", postings.len())?;
            }
        }
        Command::Stats { corpus } => {
            let (_, engine) = corpus.load()?;
            let mut out = stdout.lock();
            writeln!(out, "documents: {}", engine.total_docs())?;
            writeln!(out, "terms:     {}", engine.index().len())?;
            writeln!(out, "nodes:     {}", engine.index().node_count())?;
        }
        Command::Repl { corpus } => {
            let (documents, engine) = corpus.load()?;
            let documents = Rc::new(documents);
            let failure: Rc<RefCell<Option<io::Error>>> = Rc::new(RefCell::new(None));

            let mut bus: PubSub<Vec<SearchHit>> = PubSub::new();
            {
                let documents = Rc::clone(&documents);
                let failure = Rc::clone(&failure);
                bus.subscribe("results", move |hits: &Vec<SearchHit>| {
                    if let Err(e) = render(&mut io::stdout().lock(), &documents, hits) {
                        failure.borrow_mut().get_or_insert(e);
                    }
                });
            }

            for line in io::stdin().lock().lines() {
                let line = line?;
                bus.notify(&engine.search(&line));
                if let Some(e) = failure.borrow_mut().take() {
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hengine: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> (Vec<String>, SearchEngine) {
        let documents: Vec<String> = docs.iter().map(|d| d.to_string()).collect();
        let engine = SearchEngine::build(&documents).unwrap();
        (documents, engine)
    }

    fn search_output(docs: &[&str], args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let Command::Search {
            query,
            limit,
            min_score,
            json,
            ..
        } = cli.command
        else {
            panic!("expected search command");
        };
        let (documents, engine) = corpus(docs);
        let mut out = Vec::new();
        let options = DisplayOptions { limit, min_score };
        run_search(&mut out, &documents, &engine, &query, &options, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn shown_ids(output: &str) -> Vec<usize> {
        output
            .lines()
            .filter_map(|line| line.strip_prefix('['))
            .filter_map(|rest| rest.split(']').next())
            .filter_map(|id| id.parse().ok())
            .collect()
    }

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::try_parse_from([
            "hengine", "-vv", "search", "jobs.txt", "rust remote", "--limit", "3",
            "--min-score", "0.1", "--keep-case", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Search {
                corpus,
                query,
                limit,
                min_score,
                json,
            } => {
                assert_eq!(corpus.corpus, PathBuf::from("jobs.txt"));
                assert_eq!(query, "rust remote");
                assert_eq!(limit, Some(3));
                assert_eq!(min_score, Some(0.1));
                assert!(!json);
                let options = corpus.options();
                assert_eq!(options.format, CorpusFormat::Json);
                assert!(!options.lowercase);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_no_match_prints_whole_corpus() {
        let output = search_output(&["the cat", "the dog"], &["hengine", "search", "c.txt", "zebra"]);
        assert!(output.starts_with("0 documents found."));
        assert_eq!(shown_ids(&output), vec![0, 1]);
    }

    #[test]
    fn test_min_score_filtering_every_match_prints_none() {
        let output = search_output(
            &["the cat sat", "the dog sat", "the cat ran"],
            &["hengine", "search", "c.txt", "the", "--min-score", "0.01"],
        );
        assert!(output.starts_with("3 documents found."));
        assert!(shown_ids(&output).is_empty());
    }

    #[test]
    fn test_limit_counts_documents() {
        let output = search_output(
            &["x y", "x", "z"],
            &["hengine", "search", "c.txt", "y y x", "--limit", "2"],
        );
        let mut ids = shown_ids(&output);
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_json_output_lists_shown_documents() {
        let output = search_output(
            &["the cat sat", "the dog sat", "the cat ran"],
            &["hengine", "search", "c.txt", "cat", "--json"],
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["document_id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![0, 2]);
    }
}

//! Scholastic Bible command-line tool
//!
//! Verse lookup across the Douay-Rheims, Vulgate, Septuagint and Hebrew
//! corpora, plus generation of the canonical site data.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scholastic_bible::books::list_books;
use scholastic_bible::config::{CorpusPaths, GeneratorConfig};
use scholastic_bible::db::{export_database, load_corpus_stats};
use scholastic_bible::generate::{generate, load_document};
use scholastic_bible::index::{build_search_index, search_index_stats};
use scholastic_bible::lookup::{Library, LookupError, LookupResponse};
use scholastic_bible::output::{
    print_corpus_stats, print_generate_summary, print_search_index_summary, print_verification,
    write_json_file,
};
use scholastic_bible::translations::{list_translations, resolve_translation};

#[derive(Parser)]
#[command(name = "bible")]
#[command(about = "Verse lookup across Douay-Rheims, Vulgate, Septuagint and Hebrew texts")]
#[command(version)]
struct Cli {
    /// Root of the source texts [default: texts]
    #[arg(long, global = true)]
    texts_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a chapter or verse range
    ///
    /// Example: bible lookup vulgate Genesis 1 1-3
    Lookup {
        /// Translation name or alias (dr, vulgate, lxx, hebrew, latin, greek, ...)
        translation: String,

        /// Book name or abbreviation
        book: String,

        /// Chapter number
        chapter: String,

        /// Verse number or range such as 5-9
        verse: Option<String>,

        /// Print a JSON object with `output` or `error`
        #[arg(long)]
        json: bool,
    },

    /// List translations and their aliases
    Translations,

    /// List books with per-translation availability
    Books,

    /// Build the canonical bible.json from the Douay-Rheims source and patches
    Generate {
        /// Douay-Rheims source file [default: <texts-dir>/douay-rheims/douay-rheims.txt]
        #[arg(long)]
        source: Option<PathBuf>,

        /// Directory of *.json patch files [default: patches]
        #[arg(long)]
        patches_dir: Option<PathBuf>,

        /// Output path [default: site/src/data/bible.json]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write the search index [default path: site/public/search-index.json]
        #[arg(long)]
        with_index: bool,
    },

    /// Build the search index (and optionally a SQLite database) from bible.json
    Index {
        /// Generated canonical document [default: site/src/data/bible.json]
        #[arg(long)]
        input: Option<PathBuf>,

        /// Search index output [default: site/public/search-index.json]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also export to this SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Show statistics of an exported database
    Stats {
        /// Path to the exported SQLite database
        #[arg(long)]
        db: PathBuf,
    },

    /// Parse every book of a translation and report sizes
    Verify {
        /// Translation name or alias
        translation: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let corpus_paths = cli
        .texts_dir
        .as_ref()
        .map(CorpusPaths::from_texts_dir)
        .unwrap_or_default();

    match cli.command {
        Commands::Lookup {
            translation,
            book,
            chapter,
            verse,
            json,
        } => {
            let library = Library::new(corpus_paths);
            let result = library.lookup_verse(&translation, &book, &chapter, verse.as_deref());

            if json {
                let failed = result.is_err();
                let response = LookupResponse::from(result);
                println!("{}", serde_json::to_string_pretty(&response)?);
                if failed {
                    std::process::exit(1);
                }
            } else {
                println!("{}", result?);
            }
        }

        Commands::Translations => {
            println!("{}", list_translations());
        }

        Commands::Books => {
            println!("{}", list_books());
        }

        Commands::Generate {
            source,
            patches_dir,
            output,
            with_index,
        } => {
            // Start with the standard layout, then overlay explicit flags
            let defaults = GeneratorConfig {
                source: corpus_paths.douay_rheims,
                ..GeneratorConfig::default()
            };
            let config = GeneratorConfig {
                source: source.unwrap_or(defaults.source),
                patches_dir: patches_dir.unwrap_or(defaults.patches_dir),
                output: output.unwrap_or(defaults.output),
                search_index: defaults.search_index,
            };

            let (document, report) = generate(&config, !cli.quiet)?;

            if with_index {
                let index = build_search_index(&document);
                write_json_file(&index, &config.search_index, false)?;
                if !cli.quiet {
                    print_search_index_summary(&search_index_stats(&document), &config.search_index);
                }
            }

            if !cli.quiet {
                print_generate_summary(&report, &config.output);
            }
        }

        Commands::Index { input, output, db } => {
            let defaults = GeneratorConfig::default();
            let input = input.unwrap_or(defaults.output);
            let output = output.unwrap_or(defaults.search_index);

            if !cli.quiet {
                eprintln!("Loading {}...", input.display());
            }
            let document = load_document(&input)?;
            let index = build_search_index(&document);
            write_json_file(&index, &output, false)?;

            if let Some(db_path) = db {
                if !cli.quiet {
                    eprintln!("Exporting to {}...", db_path.display());
                }
                export_database(&document, &db_path)?;
            }

            if !cli.quiet {
                print_search_index_summary(&search_index_stats(&document), &output);
            }
        }

        Commands::Stats { db } => {
            let stats = load_corpus_stats(&db)?;
            print_corpus_stats(&stats);
        }

        Commands::Verify { translation } => {
            let resolved = resolve_translation(&translation).ok_or_else(|| {
                LookupError::UnknownTranslation {
                    input: translation.clone(),
                }
            })?;

            let library = Library::new(corpus_paths);
            let checks = library.verify(resolved, !cli.quiet);
            let failed = print_verification(&checks);
            if failed > 0 {
                return Err(format!("{} of {} books failed to load", failed, checks.len()).into());
            }
        }
    }

    Ok(())
}

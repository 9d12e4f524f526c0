use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use codename_core::error::Result;
use codename_core::model::generator::Generator;
use codename_core::model::used_names::{MalformedPolicy, UsedNameSet};
use codename_core::source::{self, WordKind, WordSource};

/// Generate a unique two-word code name (adjective + noun).
///
/// Word lists default to the snapshot compiled into the binary; pass local
/// files or `--remote` to use other sources. With `--used`, previously
/// generated names are excluded, and `--append` records the new one.
#[derive(Parser)]
#[command(name = "codename")]
#[command(about = "Generate a unique adjective-noun code name", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a local adjectives file (one word per line)
    #[arg(short, long)]
    adjectives: Option<PathBuf>,

    /// Path to a local nouns file (one word per line)
    #[arg(short, long)]
    nouns: Option<PathBuf>,

    /// Path to the file of already used code names
    #[arg(short, long)]
    used: Option<PathBuf>,

    /// Append the generated code name to the used code names file
    #[arg(long, requires = "used")]
    append: bool,

    /// Fetch the word lists from the corpora URLs instead of the bundled snapshot
    #[arg(long)]
    remote: bool,
}

impl Cli {
    /// Picks the source for one slot: a local file wins, otherwise the
    /// bundled snapshot or the remote list when `--remote` is set.
    fn word_source(&self, path: &Option<PathBuf>) -> WordSource {
        match path {
            Some(path) => WordSource::Local(path.clone()),
            None if self.remote => WordSource::Remote,
            None => WordSource::Bundled,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let adjectives = cli.word_source(&cli.adjectives).load(WordKind::Adjective)?;
    let nouns = cli.word_source(&cli.nouns).load(WordKind::Noun)?;

    let used = match &cli.used {
        Some(path) => UsedNameSet::load(path, MalformedPolicy::Skip)?,
        None => UsedNameSet::new(),
    };

    info!(
        "loaded {} adjectives, {} nouns, {} used names",
        adjectives.len(),
        nouns.len(),
        used.len()
    );

    let generator = Generator::new(adjectives, nouns, used)?;
    let name = generator.generate(&mut rand::rng())?;

    println!("{name}");

    if cli.append {
        // Present by construction, --append requires --used
        if let Some(path) = &cli.used {
            source::append_used_name(path, &name)?;
            info!("recorded {} in {}", name, path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use title_gen_core::io::{export_rows, read_word_list};
use title_gen_core::model::word_lists::{default_features, DEFAULT_MODEL};
use title_gen_core::{GenerationSettings, Generator, WordLists};

#[derive(Parser, Debug)]
#[command(name = "title-gen")]
#[command(about = "Generate listing titles and keyword lists from word lists")]
struct Args {
    /// Product model inserted in every title
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Feature phrases file, one per line (built-in list if omitted)
    #[arg(short, long)]
    features: Option<PathBuf>,

    /// Marketing phrases file, one per line (built-in list if omitted)
    #[arg(short = 'k', long)]
    marketing: Option<PathBuf>,

    /// Number of rows to generate
    #[arg(short, long, default_value_t = 50)]
    num: usize,

    /// Seed for a reproducible batch
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the rows to this CSV file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spread generation over worker threads
    #[arg(short, long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    // Missing files fall back to the built-in lists; an empty marketing
    // list is replaced by the defaults inside WordLists
    let features = match &args.features {
        Some(path) => read_word_list(path)?,
        None => default_features(),
    };
    let marketing = match &args.marketing {
        Some(path) => read_word_list(path)?,
        None => Vec::new(),
    };

    let lists = WordLists::new(args.model, features, marketing)?;
    let generator = Generator::new(lists, GenerationSettings::default());
    log::debug!(
        "Title window {:?}, keyword budget {}..={}",
        generator.settings().title_window(),
        generator.settings().keyword_target(),
        generator.settings().keyword_ceiling()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let rows = if args.parallel {
        generator.generate_parallel(args.num, &mut rng)
    } else {
        generator.generate(args.num, &mut rng)
    };

    match &args.output {
        Some(path) => export_rows(path, &rows)?,
        None => {
            log::info!("Printing {} rows to stdout", rows.len());
            for (i, row) in rows.iter().enumerate() {
                println!("#{} {}", i + 1, row.title);
                for keyword in row.keywords.lines() {
                    println!("    {}", keyword);
                }
            }
        }
    }

    Ok(())
}

use clap::error::ErrorKind;
use clap::Parser;
use pocket_tools::{init_logging, sample_permutations, sampling_rng, DEFAULT_SAMPLE_SIZE};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Prints a random sample (with replacement) of the permutations of a word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct PermuteCli {
    /// Word whose characters are permuted
    word: String,
    /// Number of permutations to draw
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    count: usize,
    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = match PermuteCli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
            ) {
                eprintln!("Exactly one argument is required");
            }
            eprint!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(false);
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: PermuteCli) -> CliResult<()> {
    let mut rng = sampling_rng(cli.seed);
    let sample = sample_permutations(&cli.word, cli.count, &mut rng)?;
    println!("{sample:?}");
    Ok(())
}

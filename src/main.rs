use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use pocket_tools::{
    describe_average, init_logging, process_temperature_file, sample_permutations, sampling_rng,
    timed, LucasNumbers, SystemDisks, ToolConfig,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Small everyday utilities", long_about = None)]
struct Cli {
    /// TOML file overriding the default settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random sample of the permutations of a word
    Permute {
        word: String,
        /// Number of permutations to draw (defaults to the configured sample size)
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the average of the given numbers
    Average {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Compute Lucas numbers with a shared cache and report the time taken
    Lucas {
        #[arg(required = true)]
        indices: Vec<u64>,
        /// Also print each computed value
        #[arg(long)]
        show: bool,
    },
    /// Convert a file of Celsius/Fahrenheit readings to Fahrenheit
    ConvertTemps {
        /// Input .txt file; prompted for when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_logging(cli.verbose);
    let config = ToolConfig::load_or_default(cli.config.as_ref())?;

    match cli.command {
        Commands::Permute { word, count, seed } => {
            run_permute(&word, count.unwrap_or(config.permutations.sample_size), seed)?
        }
        Commands::Average { values } => println!("{}", describe_average(&values)),
        Commands::Lucas { indices, show } => run_lucas(&indices, show),
        Commands::ConvertTemps { file } => run_convert_temps(file, &config)?,
    }
    Ok(())
}

fn run_permute(word: &str, count: usize, seed: Option<u64>) -> CliResult<()> {
    let mut rng = sampling_rng(seed);
    let sample = sample_permutations(word, count, &mut rng)?;
    println!("{sample:?}");
    Ok(())
}

fn run_lucas(indices: &[u64], show: bool) {
    let mut lucas = LucasNumbers::new();
    for &n in indices {
        let (value, elapsed) = timed(|| lucas.get(n));
        println!(
            "Total time taken to compute requested Lucas number {n} is {:.8} seconds",
            elapsed.as_secs_f64()
        );
        if show {
            println!("L({n}) = {value}");
        }
    }
}

fn run_convert_temps(file: Option<PathBuf>, config: &ToolConfig) -> CliResult<()> {
    let path = match file {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let output = process_temperature_file(&path, &SystemDisks, &config.temperature)?;
    println!("Processed data has been saved to '{}'.", output.display());
    Ok(())
}

fn prompt_for_path() -> CliResult<PathBuf> {
    print!("Please enter the path to the .txt file: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use groupsort::input::{ArgsSource, InputSource, RandomSource};
use groupsort::{GROUP_SIZE, GroupReorderer};

/// Rearrange a list group by group into its odd and even strands
#[derive(Parser)]
#[command(name = "groupsort", version)]
struct Cli {
    /// Seed for the random sequence generated when no values are given
    #[arg(long, conflicts_with = "values")]
    seed: Option<u64>,

    /// Values to rearrange; the count must be a multiple of the group size
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut list = if cli.values.is_empty() {
        println!("No input received. Generating random sequence...");
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomSource::<_, GROUP_SIZE>::new(rng).build()?
    } else {
        ArgsSource::<GROUP_SIZE>::new(cli.values).build()?
    };
    println!("{list}");

    println!("Sorting.");
    GroupReorderer::<GROUP_SIZE>::new().reorder(&mut list)?;
    println!("{list}");

    list.release();
    Ok(())
}

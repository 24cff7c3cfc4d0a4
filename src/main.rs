use anyhow::Result;
use clap::{Parser, Subcommand};
use simsearch::cmd::{align, hamming, identical, search};

#[derive(Parser)]
#[command(name = "simsearch")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise and database-scale sequence similarity search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Best database match for each query (bounded affine-gap alignment)
    Search(search::SearchArgs),

    /// Global alignment of each query against each subject
    Align(align::AlignArgs),

    /// Database sequences within a Hamming distance of each query
    Hamming(hamming::HammingArgs),

    /// Database sequences identical to each query
    Identical(identical::IdenticalArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            search::run(args)?;
        }
        Commands::Align(args) => {
            align::run(args)?;
        }
        Commands::Hamming(args) => {
            hamming::run(args)?;
        }
        Commands::Identical(args) => {
            identical::run(args)?;
        }
    }
    Ok(())
}

use {
    chaingraph::{Chain, OUTPUT_PATH, models::Result},
    clap::Parser,
    tracing_subscriber::EnvFilter,
};

/// Generate graph block with given number of nodes
#[derive(Parser)]
struct Args {
    #[arg(help = "Number of nodes in the graph")]
    n: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    chaingraph::save(&Chain::new(args.n), OUTPUT_PATH)?;
    println!("Graph data saved to {OUTPUT_PATH}");
    Ok(())
}

//! geolink - convert a `geo:` URI into a map web service link
//!
//! Thin shell around the library: it plays the role the browser redirect page
//! plays in the original handler. It parses the shared URI, resolves the
//! stored provider preference and prints the destination URL on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use geolink::MapProvider;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "geolink",
    version,
    about = "Convert a geo: URI into a map web service link"
)]
struct Args {
    /// The geo: URI to convert, e.g. "geo:17.65,-30.43?z=4.3"
    uri: String,

    /// Provider preference token (osm, gmaps, bing, apple, qwant). Unknown or
    /// absent values resolve to the default provider.
    #[arg(short, long)]
    provider: Option<String>,

    /// Enable debug output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let provider = MapProvider::from_preference(args.provider.as_deref());
    debug!(
        "Resolved provider preference {:?} to {provider}",
        args.provider
    );

    let location = geolink::parse(&args.uri)
        .with_context(|| format!("Cannot convert {:?} into a maps link", args.uri))?;
    println!("{}", geolink::to_maps_url(&location, provider));
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "geolink=debug" } else { "geolink=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!("Failed to initialize tracing: {error}"))
}

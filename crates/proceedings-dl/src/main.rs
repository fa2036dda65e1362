use std::path::PathBuf;

use clap::{builder::ArgAction, Parser};
use console::{style, Emoji};
use errors::DownloaderError;
use proceedings::{clients::index::IndexClient, validate_years, Harvester, Site, MIN_YEAR};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod errors;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

#[derive(Parser)]
#[command(version, about = "Download conference proceedings papers into a local archive")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// First proceedings year to harvest
  #[arg(long = "start_year", default_value_t = MIN_YEAR)]
  start_year: u16,

  /// Last proceedings year to harvest; resolved from the site index when omitted
  #[arg(long = "end_year")]
  end_year: Option<u16>,

  /// Existing directory the year/paper tree is written into
  #[arg(long = "output_dir", default_value = "data")]
  output_dir: PathBuf,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

#[tokio::main]
async fn main() -> Result<(), DownloaderError> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let site = Site::papers_nips_cc();

  // Everything checkable without the network is checked before the
  // optional latest-year resolution.
  validate_years(cli.start_year, cli.end_year)?;
  let harvester = Harvester::new(site.clone(), &cli.output_dir)?;

  let end_year = match cli.end_year {
    Some(year) => year,
    None => {
      println!("{} Resolving latest proceedings year", style(LOOKING_GLASS).cyan());
      let year = IndexClient::new(site).latest_year().await;
      println!("{} Latest proceedings year: {}", style(BOOKS).cyan(), style(year).yellow());
      year
    },
  };
  validate_years(cli.start_year, Some(end_year))?;
  debug!("Harvesting {} through {end_year}", cli.start_year);

  let mut total = 0;
  for year in cli.start_year..=end_year {
    println!("{} Harvesting {}", style(PAPER).cyan(), style(year).yellow());

    let archived = harvester.harvest_year(year).await?;
    println!(
      "   {} {} papers archived",
      style("Done:").green().bold(),
      style(archived.len()).yellow()
    );
    total += archived.len();
  }

  println!(
    "{} Archived {} papers into {}",
    style(SUCCESS).green(),
    style(total).yellow(),
    style(cli.output_dir.display()).yellow()
  );
  Ok(())
}

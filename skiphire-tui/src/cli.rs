use std::path::PathBuf;

use clap::Parser;
use skiphire_core::model::Location;

/// Pick a skip hire offer from a catalogue in the terminal.
#[derive(Debug, Parser)]
#[command(name = "skiphire", version, about)]
pub(crate) struct Cli {
    /// JSON catalogue file holding the offers.
    #[arg(long, default_value = "data/skips-nr32.json")]
    pub catalogue: PathBuf,

    /// Postcode the skip is delivered to. Empty shows every offer.
    #[arg(long, default_value = "NR32")]
    pub postcode: String,

    /// Optional area narrowing the postcode.
    #[arg(long)]
    pub area: Option<String>,

    /// Write logs to this file (RUST_LOG controls the level). Logs are dropped otherwise.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn location(&self) -> Location {
        Location::new(self.postcode.clone(), self.area.clone())
    }
}

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "A long-chain-rule Dots and Boxes engine")]
pub struct ConsoleOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Fixes the computer's fallback moves, for reproducible games.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Logs the chain census and tactic behind every computer move.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl ConsoleOptions {
    /// The logger specification to start with.
    pub fn log_spec(&self) -> String {
        match (&self.log_level, self.debug) {
            (_, true)           => "debug".into(),
            (Some(level), _)    => level.clone(),
            (None, false)       => "info".into(),
        }
    }
}

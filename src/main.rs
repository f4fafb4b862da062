use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_dab::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment; a missing .env is fine.
    dotenvy::dotenv().ok();
    let options = ConsoleOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_spec())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Serve the engine over stdin and stdout.
    let stdin = std::io::stdin().lock();
    let result = ConsoleServer::new(options, std::io::stdout()).run(stdin);
    if let Err(e) = &result {
        log::error!("fatal error: {}", e);
    }
    result
}

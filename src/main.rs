use std::time::Duration;

use tape::TapeError;
use tape::config::fetch_config;
use tape::stream::TickStream;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), TapeError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let config = fetch_config()?;
    let stream = TickStream::spawn(config)?;

    loop {
        tokio::time::sleep(Duration::from_secs(5)).await;
        info!(
            state = ?stream.state(),
            instruments = stream.instrument_count(),
            last_update = ?stream.last_update(),
            "Tick stream status"
        );
        for (symbol, tick) in stream.ticks().into_iter().take(5) {
            info!(symbol, ltp = %tick.ltp, change = %tick.change, "Tick");
        }
    }
}

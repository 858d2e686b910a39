//! Manual smoke test: connects to a running TWS/IB Gateway instance, issues a
//! handful of requests, and prints whatever the parser stage publishes until
//! the connection is closed or the consumer times out waiting for an event.
use std::time::Duration;

use log::{error, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};

use twsapi::core::client::EClient;
use twsapi::core::errors::IbkrError;

fn init_logging() {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(log::LevelFilter::Info))
        .unwrap();
    let _ = log4rs::init_config(config);
}

/// Requires a running instance of TWS or IB Gateway listening on the given
/// port. Connects, asks for the current server time and the next valid order
/// ID, then drains the event queue until 5 seconds pass with nothing new.
pub fn main() -> Result<(), IbkrError> {
    init_logging();

    let mut client = EClient::new();
    info!("connecting...");
    client.connect("127.0.0.1", 4002, 0)?;

    client.req_current_time()?;
    client.req_ids(1)?;
    client.req_managed_accts()?;

    while let Some(event) = client.next_event(Duration::from_secs(5)) {
        info!("event: {:?}", event);
        if event.kind() == "stop" {
            break;
        }
    }

    if let Err(err) = client.disconnect() {
        error!("error on disconnect: {}", err);
    }

    Ok(())
}

/*! A client library for Interactive Broker's TWS/IB Gateway wire protocol.

The protocol is a long-lived, bidirectional, framed-text TCP stream: the
caller issues requests and receives asynchronous, correlated responses
without blocking. This crate translates between structured domain records
(`core::contract`, `core::order`, `core::execution`) and the gateway's
length-typed, null-delimited wire format, and glues the socket to the
caller through three cooperating stages (writer, byte-reader, parser).

The main entry point is **`EClient`** (`core::client`): connect, then drain
the event queue it exposes via `events()`.

# Example

```no_run
use std::time::Duration;
use twsapi::core::client::EClient;

let mut client = EClient::new();
client.connect("127.0.0.1", 4002, 0).unwrap();
client.req_current_time().unwrap();

while let Some(event) = client.next_event(Duration::from_secs(5)) {
    if event.kind() == "stop" {
        break;
    }
}

client.disconnect().unwrap();
```
*/
pub mod core;
pub mod examples;

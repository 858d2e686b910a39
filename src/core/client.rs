//! Client facade: one method per request operation, plus the
//! connection-state surface. `EClient` owns a `Connection` and hands the
//! caller the event-queue receiver the parser stage publishes to. The only
//! method that blocks is `connect`; every request method enqueues its
//! encoded frame and returns immediately.
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::core::connection::{ConnState, Connection, ConnectOptions};
use crate::core::contract::Contract;
use crate::core::encoder;
use crate::core::errors::IbkrError;
use crate::core::events::Event;
use crate::core::execution::ExecutionFilter;
use crate::core::order::Order;

/// Thin façade over the network handler. Non-generic: responses are
/// delivered through `events()` rather than callbacks on a caller-supplied
/// trait object.
pub struct EClient {
    conn: Connection,
}

impl Default for EClient {
    fn default() -> Self {
        EClient::new()
    }
}

impl EClient {
    pub fn new() -> Self {
        EClient { conn: Connection::new() }
    }

    /// Connects with the default options (`127.0.0.1:4001`, `client_id` 0,
    /// 60s timeout, 4096-byte buffer). Blocks until the handshake completes.
    pub fn connect(&mut self, host: &str, port: u16, client_id: i32) -> Result<(), IbkrError> {
        self.connect_with(ConnectOptions {
            host: host.to_string(),
            port,
            client_id,
            ..ConnectOptions::default()
        })
    }

    /// Connects with explicit options, including the networking knobs
    /// (`timeout`, `buffer_size`) a fixed three-argument connect call can't
    /// express.
    pub fn connect_with(&mut self, opts: ConnectOptions) -> Result<(), IbkrError> {
        self.conn.connect(&opts)
    }

    pub fn disconnect(&mut self) -> Result<(), IbkrError> {
        self.conn.disconnect()
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_connected()
    }

    pub fn server_version(&self) -> i32 {
        self.conn.server_version()
    }

    pub fn connection_time(&self) -> &str {
        self.conn.connection_time()
    }

    /// The consumer's event queue. `None` before the first successful
    /// `connect`.
    pub fn events(&self) -> Option<&Receiver<Event>> {
        self.conn.events()
    }

    fn require_connected(&self) -> Result<(), IbkrError> {
        if self.conn.state() != ConnState::Connected {
            return Err(IbkrError::ProtocolError("not connected".to_string()));
        }
        Ok(())
    }

    fn send(&self, bytes: Vec<u8>) -> Result<(), IbkrError> {
        self.require_connected()?;
        self.conn.send(bytes)
    }

    // ---- Operation catalogue, supported end-to-end ----

    pub fn cancel_historical_data(&self, req_id: i32) -> Result<(), IbkrError> {
        self.send(encoder::cancel_historical_data(req_id))
    }

    pub fn cancel_mkt_data(&self, req_id: i32) -> Result<(), IbkrError> {
        self.send(encoder::cancel_mkt_data(req_id))
    }

    pub fn cancel_order(&self, order_id: i32) -> Result<(), IbkrError> {
        self.send(encoder::cancel_order(order_id))
    }

    pub fn place_order(&self, req_id: i32, contract: &Contract, order: &Order) -> Result<(), IbkrError> {
        self.send(encoder::place_order(req_id, contract, order)?)
    }

    pub fn req_account_updates(&self, subscribe: bool, acct_code: &str) -> Result<(), IbkrError> {
        self.send(encoder::req_account_updates(subscribe, acct_code))
    }

    pub fn req_all_open_orders(&self) -> Result<(), IbkrError> {
        self.send(encoder::req_all_open_orders())
    }

    pub fn req_auto_open_orders(&self, auto_bind: bool) -> Result<(), IbkrError> {
        self.send(encoder::req_auto_open_orders(auto_bind))
    }

    pub fn req_contract_details(&self, req_id: i32, contract: &Contract) -> Result<(), IbkrError> {
        self.send(encoder::req_contract_details(req_id, contract))
    }

    pub fn req_current_time(&self) -> Result<(), IbkrError> {
        self.send(encoder::req_current_time())
    }

    pub fn req_executions(&self, req_id: i32, filter: &ExecutionFilter) -> Result<(), IbkrError> {
        self.send(encoder::req_executions(req_id, filter))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn req_historical_data(
        &self,
        req_id: i32,
        contract: &Contract,
        end_date_time: &str,
        bar_size_setting: &str,
        duration_str: &str,
        use_rth: bool,
        what_to_show: &str,
        format_date: i32,
    ) -> Result<(), IbkrError> {
        self.send(encoder::req_historical_data(
            req_id,
            contract,
            end_date_time,
            bar_size_setting,
            duration_str,
            use_rth,
            what_to_show,
            format_date,
        )?)
    }

    pub fn req_ids(&self, num_ids: i32) -> Result<(), IbkrError> {
        self.send(encoder::req_ids(num_ids))
    }

    pub fn req_managed_accts(&self) -> Result<(), IbkrError> {
        self.send(encoder::req_managed_accts())
    }

    pub fn req_mkt_data(
        &self,
        req_id: i32,
        contract: &Contract,
        generic_ticklist: &str,
        snapshot: bool,
    ) -> Result<(), IbkrError> {
        self.send(encoder::req_mkt_data(req_id, contract, generic_ticklist, snapshot)?)
    }

    pub fn req_open_orders(&self) -> Result<(), IbkrError> {
        self.send(encoder::req_open_orders())
    }

    pub fn set_server_log_level(&self, log_level: i32) -> Result<(), IbkrError> {
        self.send(encoder::set_server_log_level(log_level))
    }

    // ---- Not-yet-implemented operations (spec "Not-yet-implemented
    // operations"): kept as explicit failures so callers get a predictable
    // error rather than a silent no-op. ----

    pub fn calculate_implied_volatility(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("calculate_implied_volatility"))
    }

    pub fn calculate_option_price(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("calculate_option_price"))
    }

    pub fn req_market_depth(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_market_depth"))
    }

    pub fn req_news_bulletins(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_news_bulletins"))
    }

    pub fn req_real_time_bars(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_real_time_bars"))
    }

    pub fn req_scanner_subscription(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_scanner_subscription"))
    }

    pub fn req_fundamental_data(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_fundamental_data"))
    }

    pub fn replace_fa(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("replace_fa"))
    }

    pub fn exercise_options(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("exercise_options"))
    }

    pub fn request_fa(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("request_fa"))
    }

    pub fn req_market_data_type(&self) -> Result<(), IbkrError> {
        Err(IbkrError::NotSupported("req_market_data_type"))
    }

    /// Blocks (up to `timeout`) for the next event on the consumer queue.
    /// A thin convenience over `events()` for single-threaded callers; the
    /// receiver itself remains directly accessible for callers who want to
    /// drain it on their own thread.
    pub fn next_event(&self, timeout: Duration) -> Option<Event> {
        self.events()?.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_connected_requests_fail_fast() {
        let client = EClient::new();
        assert!(matches!(client.req_current_time(), Err(IbkrError::ProtocolError(_))));
    }

    #[test]
    fn not_supported_ops_fail_predictably() {
        let client = EClient::new();
        assert!(matches!(
            client.req_scanner_subscription(),
            Err(IbkrError::NotSupported("req_scanner_subscription"))
        ));
        assert!(matches!(
            client.req_market_depth(),
            Err(IbkrError::NotSupported("req_market_depth"))
        ));
    }

    #[test]
    fn fresh_client_is_not_connected() {
        let client = EClient::new();
        assert!(!client.is_connected());
        assert_eq!(client.server_version(), 0);
        assert_eq!(client.connection_time(), "");
    }

    #[test]
    fn disconnect_on_a_fresh_client_is_a_no_op() {
        let mut client = EClient::new();
        assert!(!client.is_connected());
        let _ = client.disconnect();
        assert!(!client.is_connected());
    }
}

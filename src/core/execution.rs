//! Passive execution, fill-filter, commission and portfolio schemas.
use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single trade execution. `milliseconds` is derived from `time` using the
/// fixed format `"%Y%m%d  %H:%M:%S"` (note the two spaces) interpreted as
/// UTC — the library's only other non-trivial default besides
/// `Contract::local_symbol`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Execution {
    pub order_id: i32,
    pub client_id: i32,
    pub exec_id: String,
    pub time: String,
    pub milliseconds: i64,
    pub acct_number: String,
    pub exchange: String,
    pub side: String,
    pub shares: f64,
    pub price: f64,
    pub perm_id: i32,
    pub liquidation: i32,
    pub cum_qty: f64,
    pub avg_price: f64,
    pub order_ref: String,
    pub ev_rule: String,
    pub ev_multiplier: f64,
}

impl Execution {
    /// Parses `time` (`"%Y%m%d  %H:%M:%S"`, UTC) into UNIX epoch
    /// milliseconds. Returns 0 if `time` does not match the expected format,
    /// mirroring the decoder's general "never resynchronize, fail the
    /// connection instead" stance only for genuine protocol desync; a
    /// malformed timestamp from a well-formed frame is not itself a protocol
    /// error, so it degrades gracefully here.
    pub fn parse_milliseconds(time: &str) -> i64 {
        match NaiveDateTime::parse_from_str(time, "%Y%m%d  %H:%M:%S") {
            Ok(naive) => Utc.from_utc_datetime(&naive).timestamp_millis(),
            Err(_) => 0,
        }
    }
}

/// Filter used by `req_executions`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExecutionFilter {
    pub client_id: i32,
    pub acct_code: String,
    pub time: String,
    pub symbol: String,
    pub sec_type: String,
    pub exchange: String,
    pub side: String,
}

/// Commission detail delivered after an execution.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CommissionReport {
    pub exec_id: String,
    pub commission: f64,
    pub currency: String,
    pub realized_pnl: f64,
    pub yield_value: f64,
    pub yield_redemption_date: i32,
}

/// A single portfolio holding, as delivered by `update_portfolio`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Holding {
    pub account: String,
    pub local_symbol: String,
    pub position: i32,
    pub market_price: f64,
    pub market_value: f64,
    pub average_cost: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exec_time_to_utc_millis() {
        // 2024-01-02 03:04:05 UTC
        let ms = Execution::parse_milliseconds("20240102  03:04:05");
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .timestamp_millis();
        assert_eq!(ms, expected);
    }

    #[test]
    fn malformed_time_parses_to_zero() {
        assert_eq!(Execution::parse_milliseconds("not a time"), 0);
    }
}

//! Sentinel constants and small passive value types shared by the encoder,
//! decoder, and domain schemas.
use serde::{Deserialize, Serialize};

/// Stands in for "absent" on the outbound path and is the default an inbound
/// empty integer field decodes to when the caller opts into sentinel
/// semantics (`get_int(true)`).
pub const UNSET_INTEGER: i32 = i32::MAX; // 2^31 - 1

/// Stands in for "absent" on the outbound path and is the default an inbound
/// empty float field decodes to when the caller opts into sentinel semantics
/// (`get_float(true)`). `(2 - 2^-52) * 2^1023` is exactly `f64::MAX`.
pub const UNSET_DOUBLE: f64 = f64::MAX;

pub const CLIENT_VERSION: i32 = 60;
pub const MIN_SERVER_VERSION: i32 = 66;
pub const BAG_SEC_TYPE: &str = "BAG";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_CLIENT_ID: i32 = 0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// A `(tag, value)` pair used for SMART combo routing and algo params.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TagValue {
    pub tag: String,
    pub value: String,
}

impl TagValue {
    pub fn new(tag: String, value: String) -> Self {
        TagValue { tag, value }
    }
}

/// One OHLCV bar of historical data, keyed to a request by `req_id` at the
/// event layer (see `core::decoder::process_historical_data`). The wire
/// field is named `wap`; the in-memory field is `average`, matching the
/// teacher's `BarData`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Bar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub bar_count: i32,
    pub average: f64,
    pub has_gaps: bool,
}

/// Inbound tick-price attribute bitmask, decoded per
/// `MIN_SERVER_VER_PAST_LIMIT` / `MIN_SERVER_VER_PRE_OPEN_BID_ASK` gating is
/// deliberately not modeled here (spec.md keeps server-version gating to the
/// handful of handlers that need a minimum version, not per-field feature
/// gates) — `can_auto_execute` always reflects bit 0 of the attribute mask.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickAttrib {
    pub can_auto_execute: bool,
}

/// Holding-style live snapshot of a single accumulated account value. Passive
/// record only — no caching or reconciliation (Non-goal: position
/// reconciliation).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccountValue {
    pub key: String,
    pub value: String,
    pub currency: String,
    pub account_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_integer_is_i32_max() {
        assert_eq!(UNSET_INTEGER, 2_i32.pow(31) - 1);
    }

    #[test]
    fn unset_double_matches_java_double_max() {
        let expected = (2.0_f64 - 2f64.powi(-52)) * 2f64.powi(1023);
        assert!(float_cmp::approx_eq!(f64, UNSET_DOUBLE, expected, ulps = 2));
    }

    #[test]
    fn unset_double_is_f64_max() {
        assert_eq!(UNSET_DOUBLE, f64::MAX);
    }
}

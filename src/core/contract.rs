//! Passive contract schemas. Field order and naming follow the wire
//! contract each operation in `core::encoder`/`core::decoder` expects; these
//! structs carry no wire-encoding logic of their own.
use serde::{Deserialize, Serialize};

use crate::core::common::UNSET_DOUBLE;

/// Open/close side of a combo leg.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Same = 0,
    Open = 1,
    Close = 2,
    Unknown = 3,
}

impl Default for PositionType {
    fn default() -> Self {
        PositionType::Same
    }
}

impl From<i32> for PositionType {
    fn from(value: i32) -> Self {
        match value {
            1 => PositionType::Open,
            2 => PositionType::Close,
            3 => PositionType::Unknown,
            _ => PositionType::Same,
        }
    }
}

/// One leg of a combo (BAG) security. The outbound encoder never emits these
/// (Non-goal: no bag/combo legs on the outbound path); the inbound decoder
/// fills them in from `open_order`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ComboLeg {
    pub con_id: i32,
    pub ratio: f64,
    pub action: String,
    pub exchange: String,
    pub open_close: PositionType,
    pub short_sale_slot: i32,
    pub designated_location: String,
    pub exempt_code: i32,
}

/// A single per-leg combo price override, keyed by position to its
/// `Contract::combo_legs` entry. Defaults to the sentinel "absent" price.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderComboLeg {
    pub price: f64,
}

impl Default for OrderComboLeg {
    fn default() -> Self {
        OrderComboLeg { price: UNSET_DOUBLE }
    }
}

/// The delta-neutral under-component of a combo order. Parsed inbound;
/// rejected on the outbound path with `NotSupported` (Non-goal).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DeltaNeutralContract {
    pub con_id: i32,
    pub delta: f64,
    pub price: f64,
}

/// A financial instrument. Merges what the Java API splits into `Contract`
/// and `ContractDetails`; this library only ever needs the union.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contract {
    pub con_id: i32,
    pub symbol: String,
    pub sec_type: String,
    pub last_trade_date_or_contract_month: String,
    pub strike: f64,
    pub right: String,
    pub multiplier: String,
    pub exchange: String,
    pub primary_exchange: String,
    pub currency: String,
    pub local_symbol: String,
    pub trading_class: String,
    pub include_expired: bool,
    pub sec_id_type: String,
    pub sec_id: String,

    // Combos. The outbound encoder never emits these (see module docs);
    // the decoder fills them in from `open_order`.
    pub combo_legs_descrip: String,
    pub combo_legs: Vec<ComboLeg>,

    // Delta neutral. Parsed inbound only.
    pub delta_neutral_contract: Option<DeltaNeutralContract>,

    // Contract-details-only fields, populated by `contract_details`.
    pub market_name: String,
    pub min_tick: f64,
    pub price_magnifier: i32,
    pub order_types: String,
    pub valid_exchanges: String,
    pub under_con_id: i32,
    pub long_name: String,
    pub contract_month: String,
    pub industry: String,
    pub category: String,
    pub subcategory: String,
    pub time_zone_id: String,
    pub trading_hours: String,
    pub liquid_hours: String,
    pub ev_rule: String,
    pub ev_multiplier: f64,
    pub sec_id_list: Vec<super::common::TagValue>,
}

impl Contract {
    pub fn new(sec_type: &str, symbol: &str, currency: &str, exchange: &str) -> Self {
        let local_symbol = Self::derive_local_symbol(sec_type, symbol, currency);
        Contract {
            sec_type: sec_type.to_string(),
            symbol: symbol.to_string(),
            currency: currency.to_string(),
            exchange: exchange.to_string(),
            local_symbol,
            ..Default::default()
        }
    }

    /// A Contract's `local_symbol` is derived from `symbol` and `currency`
    /// only for the `cash` security type (`"{symbol}.{currency}"`),
    /// otherwise it equals `symbol`. The library's sole non-trivial default.
    pub fn derive_local_symbol(sec_type: &str, symbol: &str, currency: &str) -> String {
        if sec_type.eq_ignore_ascii_case("cash") {
            format!("{}.{}", symbol, currency)
        } else {
            symbol.to_string()
        }
    }

    pub fn is_bag(&self) -> bool {
        self.sec_type.eq_ignore_ascii_case(crate::core::common::BAG_SEC_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_symbol_defaults_to_symbol_for_non_cash() {
        let c = Contract::new("STK", "AAPL", "USD", "SMART");
        assert_eq!(c.local_symbol, "AAPL");
    }

    #[test]
    fn local_symbol_is_symbol_dot_currency_for_cash() {
        let c = Contract::new("CASH", "EUR", "USD", "IDEALPRO");
        assert_eq!(c.local_symbol, "EUR.USD");
    }

    #[test]
    fn local_symbol_derivation_is_case_insensitive_on_sec_type() {
        let c = Contract::new("cash", "GBP", "USD", "IDEALPRO");
        assert_eq!(c.local_symbol, "GBP.USD");
    }
}

//! Passive order schemas. Numeric-but-optional fields default to the
//! matching sentinel so a round trip preserves "absent".
use serde::{Deserialize, Serialize};

use crate::core::common::{TagValue, UNSET_DOUBLE, UNSET_INTEGER};
use crate::core::contract::OrderComboLeg;

/// An order plus the order-state fields the Java API keeps in a separate
/// `OrderState` class — this library merges them, as the original Python
/// source this was distilled from already does.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Order {
    // Main order fields
    pub order_id: i32,
    pub client_id: i32,
    pub perm_id: i32,
    pub action: String,
    pub total_quantity: i32,
    pub order_type: String,
    pub lmt_price: f64,
    pub aux_price: f64,

    // Order state, reported back by `open_order`
    pub status: String,
    pub init_margin: String,
    pub maint_margin: String,
    pub equity_with_loan: String,
    pub commission: f64,
    pub min_commission: f64,
    pub max_commission: f64,
    pub commission_currency: String,
    pub warning_text: String,

    // Extended order fields
    pub tif: String,
    pub oca_group: String,
    pub oca_type: i32,
    pub order_ref: String,
    pub transmit: bool,
    pub parent_id: i32,
    pub block_order: bool,
    pub sweep_to_fill: bool,
    pub display_size: i32,
    pub trigger_method: i32,
    pub outside_rth: bool,
    pub hidden: bool,
    pub good_after_time: String,
    pub good_till_date: String,
    pub override_percentage_constraints: bool,
    pub rule_80a: String,
    pub all_or_none: bool,
    pub min_qty: i32,
    pub percent_offset: f64,
    pub trail_stop_price: f64,
    pub trailing_percent: f64,

    // Financial advisors only
    pub fa_group: String,
    pub fa_profile: String,
    pub fa_method: String,
    pub fa_percentage: String,

    // Institutional orders only
    pub open_close: String,
    pub origin: i32,
    pub short_sale_slot: i32,
    pub designated_location: String,
    pub exempt_code: i32,

    // SMART routing only
    pub account: String,
    pub discretionary_amt: f64,
    pub etrade_only: bool,
    pub firm_quote_only: bool,
    pub nbbo_price_cap: f64,
    pub opt_out_smart_routing: bool,

    // BOX or VOL orders only
    pub auction_strategy: i32,

    // BOX orders only
    pub starting_price: f64,
    pub stock_ref_price: f64,
    pub delta: f64,

    // Pegged-to-stock and VOL orders only
    pub stock_range_lower: f64,
    pub stock_range_upper: f64,

    // Volatility orders only
    pub volatility: f64,
    pub volatility_type: i32,
    pub continuous_update: i32,
    pub reference_price_type: i32,
    pub delta_neutral_order_type: String,
    pub delta_neutral_aux_price: f64,
    pub delta_neutral_con_id: i32,
    pub delta_neutral_settling_firm: String,
    pub delta_neutral_clearing_account: String,
    pub delta_neutral_clearing_intent: String,

    // Combo orders only
    pub basis_points: f64,
    pub basis_points_type: i32,
    pub order_combo_legs: Vec<OrderComboLeg>,
    pub smart_combo_routing_params: Vec<TagValue>,

    // Scale orders only
    pub scale_init_level_size: i32,
    pub scale_subs_level_size: i32,
    pub scale_price_increment: f64,
    pub scale_price_adjust_value: f64,
    pub scale_price_adjust_interval: i32,
    pub scale_profit_offset: f64,
    pub scale_auto_reset: bool,
    pub scale_init_position: i32,
    pub scale_init_fill_qty: i32,
    pub scale_random_percent: bool,

    // Hedge orders only
    pub hedge_type: String,
    pub hedge_param: String,

    // Clearing information
    pub settling_firm: String,
    pub clearing_account: String,
    pub clearing_intent: String,

    // Algo orders only
    pub algo_strategy: String,
    pub algo_params: Vec<TagValue>,

    pub what_if: bool,
    pub not_held: bool,

    // Status fields, reported back by `order_status`
    pub filled: i32,
    pub remaining: i32,
    pub avg_fill_price: f64,
    pub last_fill_price: f64,
    pub why_held: String,
}

impl Default for Order {
    fn default() -> Self {
        Order {
            order_id: 0,
            client_id: 0,
            perm_id: 0,
            action: String::new(),
            total_quantity: 0,
            order_type: "MKT".to_string(),
            lmt_price: 0.0,
            aux_price: 0.0,

            status: String::new(),
            init_margin: String::new(),
            maint_margin: String::new(),
            equity_with_loan: String::new(),
            commission: UNSET_DOUBLE,
            min_commission: UNSET_DOUBLE,
            max_commission: UNSET_DOUBLE,
            commission_currency: String::new(),
            warning_text: String::new(),

            tif: String::new(),
            oca_group: String::new(),
            oca_type: 1,
            order_ref: String::new(),
            transmit: true,
            parent_id: 0,
            block_order: false,
            sweep_to_fill: false,
            display_size: 0,
            trigger_method: 0,
            outside_rth: false,
            hidden: false,
            good_after_time: String::new(),
            good_till_date: String::new(),
            override_percentage_constraints: false,
            rule_80a: String::new(),
            all_or_none: false,
            min_qty: UNSET_INTEGER,
            percent_offset: UNSET_DOUBLE,
            trail_stop_price: UNSET_DOUBLE,
            trailing_percent: UNSET_DOUBLE,

            fa_group: String::new(),
            fa_profile: String::new(),
            fa_method: String::new(),
            fa_percentage: String::new(),

            open_close: "O".to_string(),
            origin: 0,
            short_sale_slot: 0,
            designated_location: String::new(),
            exempt_code: -1,

            account: String::new(),
            discretionary_amt: 0.0,
            etrade_only: false,
            firm_quote_only: false,
            nbbo_price_cap: UNSET_DOUBLE,
            opt_out_smart_routing: false,

            auction_strategy: 0,

            starting_price: UNSET_DOUBLE,
            stock_ref_price: UNSET_DOUBLE,
            delta: UNSET_DOUBLE,

            stock_range_lower: UNSET_DOUBLE,
            stock_range_upper: UNSET_DOUBLE,

            volatility: UNSET_DOUBLE,
            volatility_type: UNSET_INTEGER,
            continuous_update: 0,
            reference_price_type: UNSET_INTEGER,
            delta_neutral_order_type: String::new(),
            delta_neutral_aux_price: UNSET_DOUBLE,
            delta_neutral_con_id: 0,
            delta_neutral_settling_firm: String::new(),
            delta_neutral_clearing_account: String::new(),
            delta_neutral_clearing_intent: String::new(),

            basis_points: UNSET_DOUBLE,
            basis_points_type: UNSET_INTEGER,
            order_combo_legs: Vec::new(),
            smart_combo_routing_params: Vec::new(),

            scale_init_level_size: UNSET_INTEGER,
            scale_subs_level_size: UNSET_INTEGER,
            scale_price_increment: UNSET_DOUBLE,
            scale_price_adjust_value: UNSET_DOUBLE,
            scale_price_adjust_interval: UNSET_INTEGER,
            scale_profit_offset: UNSET_DOUBLE,
            scale_auto_reset: false,
            scale_init_position: UNSET_INTEGER,
            scale_init_fill_qty: UNSET_INTEGER,
            scale_random_percent: false,

            hedge_type: String::new(),
            hedge_param: String::new(),

            settling_firm: String::new(),
            clearing_account: String::new(),
            clearing_intent: String::new(),

            algo_strategy: String::new(),
            algo_params: Vec::new(),

            what_if: false,
            not_held: false,

            filled: 0,
            remaining: 0,
            avg_fill_price: 0.0,
            last_fill_price: 0.0,
            why_held: String::new(),
        }
    }
}

impl Order {
    pub fn new(action: &str, total_quantity: i32, order_type: &str, lmt_price: f64, aux_price: f64) -> Self {
        Order {
            action: action.to_string(),
            total_quantity,
            order_type: order_type.to_string(),
            lmt_price,
            aux_price,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_numeric_fields_default_to_sentinel() {
        let order = Order::default();
        assert_eq!(order.min_qty, UNSET_INTEGER);
        assert_eq!(order.percent_offset, UNSET_DOUBLE);
        assert_eq!(order.delta, UNSET_DOUBLE);
        assert_eq!(order.scale_price_increment, UNSET_DOUBLE);
    }

    #[test]
    fn order_combo_leg_defaults_to_sentinel_price() {
        assert_eq!(OrderComboLeg::default().price, UNSET_DOUBLE);
    }
}

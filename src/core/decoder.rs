//! Inbound message parser and dispatcher (C5). Reads one message id off the
//! live field queue, consumes the exact number of fields its handler
//! expects, and publishes one or more typed events. A field misread at any
//! point desynchronizes the stream irrecoverably, so every handler here
//! fails fast with `IbkrError::ProtocolError` rather than trying to
//! resynchronize (spec section 4.3).
use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::core::common::{Bar, UNSET_DOUBLE};
use crate::core::contract::Contract;
use crate::core::errors::IbkrError;
use crate::core::events::Event;
use crate::core::execution::{CommissionReport, Execution};
use crate::core::messages::{FieldDecoder, IncomingMessageId};
use crate::core::order::Order;

/// Pulls fields for the message currently being decoded out of a
/// `FieldDecoder`, transparently refilling it from the live channel one
/// field at a time whenever it runs dry. The lowercase/sentinel accessor
/// semantics live in `FieldDecoder` itself; this wrapper only adds the
/// "block on the channel instead of reading from a fixed buffer" part.
struct LiveFields<'a> {
    decoder: &'a mut FieldDecoder,
    rx: &'a Receiver<String>,
}

impl<'a> LiveFields<'a> {
    fn ensure_field(&mut self) -> Result<(), IbkrError> {
        if self.decoder.is_empty() {
            let field = self
                .rx
                .recv()
                .map_err(|_| IbkrError::ProtocolError("field queue closed mid-message".to_string()))?;
            self.decoder.push_back(field);
        }
        Ok(())
    }

    fn get_str(&mut self) -> Result<String, IbkrError> {
        self.ensure_field()?;
        Ok(self.decoder.get_str())
    }

    fn get_int(&mut self, default_max: bool) -> Result<i32, IbkrError> {
        self.ensure_field()?;
        Ok(self.decoder.get_int(default_max))
    }

    fn get_float(&mut self, default_max: bool) -> Result<f64, IbkrError> {
        self.ensure_field()?;
        Ok(self.decoder.get_float(default_max))
    }

    fn get_bool(&mut self) -> Result<bool, IbkrError> {
        self.ensure_field()?;
        Ok(self.decoder.get_bool())
    }
}

fn require_version(min: i32, got: i32) -> Result<(), IbkrError> {
    if got < min {
        Err(IbkrError::ProtocolError(format!(
            "version is {} (min {} needed)",
            got, min
        )))
    } else {
        Ok(())
    }
}

/// Buffers fields popped ahead of a message boundary and dispatches complete
/// messages to their handler as they arrive.
pub struct Decoder {
    fields: FieldDecoder,
}

impl Decoder {
    pub fn new() -> Self {
        Decoder { fields: FieldDecoder::new(VecDeque::new()) }
    }

    /// Waits up to `poll_timeout` for the next message id. Returns `Ok(None)`
    /// on a timeout (the caller should simply loop again — this is a
    /// liveness probe, not a failure). Returns `Ok(Some(events))` with one or
    /// more events for a dispatched message, or `Ok(Some(vec![Event::Stop]))`
    /// when a negative message id (the shutdown sentinel) is read.
    pub fn poll_one(
        &mut self,
        rx: &Receiver<String>,
        poll_timeout: Duration,
    ) -> Result<Option<Vec<Event>>, IbkrError> {
        if self.fields.is_empty() {
            match rx.recv_timeout(poll_timeout) {
                Ok(field) => self.fields.push_back(field),
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Ok(Some(vec![Event::Stop])),
            }
        }
        let msg_id: i32 = self.fields.get_str().trim().parse().unwrap_or(-1);
        if msg_id < 0 {
            return Ok(Some(vec![Event::Stop]));
        }
        let mut fields = LiveFields { decoder: &mut self.fields, rx };
        let events = dispatch(msg_id, &mut fields)?;
        Ok(Some(events))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch(msg_id: i32, f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    use IncomingMessageId::*;
    match IncomingMessageId::from_i32(msg_id) {
        Some(TickPrice) => process_tick_price(f),
        Some(TickSize) => process_tick_size(f),
        Some(OrderStatus) => process_order_status(f),
        Some(ErrMsg) => process_error(f),
        Some(OpenOrder) => process_open_order(f),
        Some(AcctValue) => process_account_value(f),
        Some(PortfolioValue) => process_portfolio_value(f),
        Some(AcctUpdateTime) => process_account_update_time(f),
        Some(NextValidId) => process_next_valid_id(f),
        Some(ContractData) => process_contract_details(f),
        Some(ExecutionData) => process_exec_details(f),
        Some(ManagedAccts) => process_managed_accounts(f),
        Some(HistoricalData) => process_historical_data(f),
        Some(TickGeneric) => process_tick_generic(f),
        Some(TickString) => process_tick_string(f),
        Some(CurrentTime) => process_current_time(f),
        Some(ContractDataEnd) => process_contract_details_end(f),
        Some(OpenOrderEnd) => process_open_order_end(f),
        Some(AcctDownloadEnd) => process_account_download_end(f),
        Some(ExecutionDataEnd) => process_exec_details_end(f),
        Some(CommissionReport) => process_commission_report(f),
        None => Err(IbkrError::UnsupportedMessageId(msg_id)),
    }
}

fn process_tick_price(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(3, version)?;
    let req_id = f.get_int(false)?;
    let tick_type = f.get_int(false)?;
    let price = f.get_float(false)?;
    let size = f.get_int(false)?;
    let can_auto_execute = f.get_bool()?;

    let mut events = vec![Event::TickPrice { req_id, tick_type, price, can_auto_execute }];

    let size_tick_type = match tick_type {
        1 => Some(0),
        2 => Some(3),
        4 => Some(5),
        _ => None,
    };
    if let Some(size_tick_type) = size_tick_type {
        events.push(Event::TickSize { req_id, tick_type: size_tick_type, size });
    }
    Ok(events)
}

fn process_tick_size(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    let tick_type = f.get_int(false)?;
    let size = f.get_int(false)?;
    Ok(vec![Event::TickSize { req_id, tick_type, size }])
}

fn process_order_status(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(6, version)?;
    let req_id = f.get_int(false)?;
    let status = f.get_str()?;
    let filled = f.get_int(false)?;
    let remaining = f.get_int(false)?;
    let avg_fill_price = f.get_float(false)?;
    let perm_id = f.get_int(false)?;
    let parent_id = f.get_int(false)?;
    let last_fill_price = f.get_float(false)?;
    let client_id = f.get_int(false)?;
    let why_held = f.get_str()?;
    Ok(vec![Event::OrderStatus {
        req_id,
        status,
        filled,
        remaining,
        avg_fill_price,
        perm_id,
        parent_id,
        last_fill_price,
        client_id,
        why_held,
    }])
}

fn process_error(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    if version < 2 {
        let message = f.get_str()?;
        Ok(vec![Event::Error { req_id: 0, code: 0, message }])
    } else {
        let req_id = f.get_int(false)?;
        let code = f.get_int(false)?;
        let message = f.get_str()?;
        Ok(vec![Event::Error { req_id, code, message }])
    }
}

fn process_account_value(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let key = f.get_str()?;
    let value = f.get_str()?;
    let currency = f.get_str()?;
    let account_name = f.get_str()?;
    Ok(vec![Event::UpdateAccountValue { key, value, currency, account_name }])
}

fn process_portfolio_value(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(7, version)?;
    let mut contract = Contract::default();
    contract.con_id = f.get_int(false)?;
    contract.symbol = f.get_str()?;
    contract.sec_type = f.get_str()?;
    contract.last_trade_date_or_contract_month = f.get_str()?;
    contract.strike = f.get_float(false)?;
    contract.right = f.get_str()?;
    contract.multiplier = f.get_str()?;
    contract.primary_exchange = f.get_str()?;
    contract.currency = f.get_str()?;
    contract.local_symbol = f.get_str()?;
    let position = f.get_int(false)?;
    let market_price = f.get_float(false)?;
    let market_value = f.get_float(false)?;
    let average_cost = f.get_float(false)?;
    let unrealized_pnl = f.get_float(false)?;
    let realized_pnl = f.get_float(false)?;
    let account_name = f.get_str()?;
    Ok(vec![Event::UpdatePortfolio {
        contract: Box::new(contract),
        position,
        market_price,
        market_value,
        average_cost,
        unrealized_pnl,
        realized_pnl,
        account_name,
    }])
}

fn process_account_update_time(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let timestamp = f.get_str()?;
    Ok(vec![Event::UpdateAccountTime { timestamp }])
}

fn process_next_valid_id(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    Ok(vec![Event::NextValidId { req_id }])
}

fn process_contract_details(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(8, version)?;
    let req_id = f.get_int(false)?;
    let mut contract = Contract::default();
    contract.symbol = f.get_str()?;
    contract.sec_type = f.get_str()?;
    contract.last_trade_date_or_contract_month = f.get_str()?;
    contract.strike = f.get_float(false)?;
    contract.right = f.get_str()?;
    contract.exchange = f.get_str()?;
    contract.currency = f.get_str()?;
    contract.local_symbol = f.get_str()?;
    contract.market_name = f.get_str()?;
    contract.trading_class = f.get_str()?;
    contract.con_id = f.get_int(false)?;
    contract.min_tick = f.get_float(false)?;
    contract.multiplier = f.get_str()?;
    contract.order_types = f.get_str()?;
    contract.valid_exchanges = f.get_str()?;
    contract.price_magnifier = f.get_int(false)?;
    contract.under_con_id = f.get_int(false)?;
    contract.long_name = f.get_str()?;
    contract.primary_exchange = f.get_str()?;
    contract.contract_month = f.get_str()?;
    contract.industry = f.get_str()?;
    contract.category = f.get_str()?;
    contract.subcategory = f.get_str()?;
    contract.time_zone_id = f.get_str()?;
    contract.trading_hours = f.get_str()?;
    contract.liquid_hours = f.get_str()?;
    contract.ev_rule = f.get_str()?;
    contract.ev_multiplier = f.get_float(false)?;
    let sec_id_list_count = f.get_int(false)?;
    if sec_id_list_count > 0 {
        let tag = f.get_str()?;
        let value = f.get_str()?;
        contract
            .sec_id_list
            .push(crate::core::common::TagValue::new(tag, value));
    }
    Ok(vec![Event::ContractDetails { req_id, contract: Box::new(contract) }])
}

fn process_exec_details(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(9, version)?;
    let req_id = f.get_int(false)?;
    let order_id = f.get_int(false)?;
    let mut contract = Contract::default();
    contract.con_id = f.get_int(false)?;
    contract.symbol = f.get_str()?;
    contract.sec_type = f.get_str()?;
    contract.last_trade_date_or_contract_month = f.get_str()?;
    contract.strike = f.get_float(false)?;
    contract.right = f.get_str()?;
    contract.multiplier = f.get_str()?;
    contract.exchange = f.get_str()?;
    contract.currency = f.get_str()?;
    contract.local_symbol = f.get_str()?;

    let mut execution = Execution::default();
    execution.order_id = order_id;
    execution.exec_id = f.get_str()?;
    execution.time = f.get_str()?;
    execution.milliseconds = Execution::parse_milliseconds(&execution.time);
    execution.acct_number = f.get_str()?;
    execution.exchange = f.get_str()?;
    execution.side = f.get_str()?;
    execution.shares = f.get_float(false)?;
    execution.price = f.get_float(false)?;
    execution.perm_id = f.get_int(false)?;
    execution.client_id = f.get_int(false)?;
    execution.liquidation = f.get_int(false)?;
    execution.cum_qty = f.get_float(false)?;
    execution.avg_price = f.get_float(false)?;
    execution.order_ref = f.get_str()?;
    execution.ev_rule = f.get_str()?;
    execution.ev_multiplier = f.get_float(false)?;

    Ok(vec![Event::ExecDetails {
        req_id,
        contract: Box::new(contract),
        execution: Box::new(execution),
    }])
}

fn process_managed_accounts(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let accounts = f.get_str()?;
    Ok(vec![Event::ManagedAccounts { accounts }])
}

/// One event per bar, then a terminator bar with `date ==
/// "finished-{start}-{end}"` and all numeric fields `== -1`.
fn process_historical_data(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(3, version)?;
    let req_id = f.get_int(false)?;
    let start_date = f.get_str()?;
    let end_date = f.get_str()?;
    let item_count = f.get_int(false)?;

    let mut events = Vec::with_capacity(item_count as usize + 1);
    for _ in 0..item_count {
        let date = f.get_str()?;
        let open = f.get_float(false)?;
        let high = f.get_float(false)?;
        let low = f.get_float(false)?;
        let close = f.get_float(false)?;
        let volume = f.get_int(false)? as i64;
        let average = f.get_float(false)?;
        let has_gaps = f.get_str()? == "true";
        let bar_count = f.get_int(false)?;
        events.push(Event::HistoricalData {
            req_id,
            bar: Bar { date, open, high, low, close, volume, bar_count, average, has_gaps },
        });
    }
    events.push(Event::HistoricalData {
        req_id,
        bar: Bar {
            date: format!("finished-{}-{}", start_date, end_date),
            open: -1.0,
            high: -1.0,
            low: -1.0,
            close: -1.0,
            volume: -1,
            bar_count: -1,
            average: -1.0,
            has_gaps: false,
        },
    });
    Ok(events)
}

fn process_tick_generic(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    let tick_type = f.get_int(false)?;
    let value = f.get_float(false)?;
    Ok(vec![Event::TickGeneric { req_id, tick_type, value }])
}

fn process_tick_string(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    let tick_type = f.get_int(false)?;
    let value = f.get_str()?;
    Ok(vec![Event::TickString { req_id, tick_type, value }])
}

fn process_current_time(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let seconds = f.get_int(false)?;
    Ok(vec![Event::CurrentTime { seconds }])
}

fn process_contract_details_end(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    Ok(vec![Event::ContractDetailsEnd { req_id }])
}

fn process_open_order_end(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    Ok(vec![Event::OpenOrderEnd])
}

fn process_account_download_end(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let account_name = f.get_str()?;
    Ok(vec![Event::AccountDownloadEnd { account_name }])
}

fn process_exec_details_end(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let req_id = f.get_int(false)?;
    Ok(vec![Event::ExecDetailsEnd { req_id }])
}

fn process_commission_report(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    f.get_int(false)?; // version
    let mut report = CommissionReport::default();
    report.exec_id = f.get_str()?;
    report.commission = f.get_float(false)?;
    report.currency = f.get_str()?;
    report.realized_pnl = f.get_float(false)?;
    report.yield_value = f.get_float(false)?;
    report.yield_redemption_date = f.get_int(false)?;
    Ok(vec![Event::CommissionReport { report }])
}

/// Reads a full `open_order` message: order id, contract, the long main +
/// extended order field block, the conditional delta-neutral / scale /
/// hedge / under-comp / algo sub-blocks, and the trailing order-state block.
fn process_open_order(f: &mut LiveFields) -> Result<Vec<Event>, IbkrError> {
    let version = f.get_int(false)?;
    require_version(31, version)?;

    let mut order = Order::default();
    order.order_id = f.get_int(false)?;

    let mut contract = Contract::default();
    contract.con_id = f.get_int(false)?;
    contract.symbol = f.get_str()?;
    contract.sec_type = f.get_str()?;
    contract.last_trade_date_or_contract_month = f.get_str()?;
    contract.strike = f.get_float(false)?;
    contract.right = f.get_str()?;
    contract.exchange = f.get_str()?;
    contract.currency = f.get_str()?;
    contract.local_symbol = f.get_str()?;

    order.action = f.get_str()?;
    order.total_quantity = f.get_int(false)?;
    order.order_type = f.get_str()?;
    order.lmt_price = f.get_float(false)?;
    order.aux_price = f.get_float(false)?;
    order.tif = f.get_str()?;
    order.oca_group = f.get_str()?;
    order.account = f.get_str()?;
    order.open_close = f.get_str()?;
    order.origin = f.get_int(false)?;
    order.order_ref = f.get_str()?;
    order.client_id = f.get_int(false)?;
    order.perm_id = f.get_int(false)?;
    order.outside_rth = f.get_bool()?;
    order.hidden = f.get_bool()?;
    order.discretionary_amt = f.get_float(false)?;
    order.good_after_time = f.get_str()?;
    f.get_str()?; // deprecated shares_allocation field

    order.fa_group = f.get_str()?;
    order.fa_method = f.get_str()?;
    order.fa_percentage = f.get_str()?;
    order.fa_profile = f.get_str()?;
    order.good_till_date = f.get_str()?;
    order.rule_80a = f.get_str()?;
    order.percent_offset = f.get_float(false)?;
    order.settling_firm = f.get_str()?;
    order.short_sale_slot = f.get_int(false)?;
    order.designated_location = f.get_str()?;
    order.exempt_code = f.get_int(false)?;
    order.auction_strategy = f.get_int(false)?;
    order.starting_price = f.get_float(false)?;
    order.stock_ref_price = f.get_float(false)?;
    order.delta = f.get_float(false)?;
    order.stock_range_lower = f.get_float(false)?;
    order.stock_range_upper = f.get_float(false)?;
    order.display_size = f.get_int(false)?;
    order.block_order = f.get_bool()?;
    order.sweep_to_fill = f.get_bool()?;
    order.all_or_none = f.get_bool()?;
    order.min_qty = f.get_int(false)?;
    order.oca_type = f.get_int(false)?;
    order.etrade_only = f.get_bool()?;
    order.firm_quote_only = f.get_bool()?;
    order.nbbo_price_cap = f.get_float(false)?;
    order.parent_id = f.get_int(false)?;
    order.trigger_method = f.get_int(false)?;
    order.volatility = f.get_float(false)?;
    order.volatility_type = f.get_int(false)?;
    order.delta_neutral_order_type = f.get_str()?;
    order.delta_neutral_aux_price = f.get_float(false)?;

    if !order.delta_neutral_order_type.is_empty() {
        order.delta_neutral_con_id = f.get_int(false)?;
        order.delta_neutral_settling_firm = f.get_str()?;
        order.delta_neutral_clearing_account = f.get_str()?;
        order.delta_neutral_clearing_intent = f.get_str()?;
        f.get_str()?; // delta neutral open/close
        f.get_bool()?; // delta neutral short sale
        f.get_int(false)?; // delta neutral short sale slot
        f.get_str()?; // delta neutral designated location
    }

    order.continuous_update = f.get_int(false)?;
    order.reference_price_type = f.get_int(false)?;
    order.trail_stop_price = f.get_float(true)?;
    order.trailing_percent = f.get_float(true)?;
    f.get_float(false)?; // basis points
    f.get_int(false)?; // basis points type
    contract.combo_legs_descrip = f.get_str()?;

    let combo_legs_count = f.get_int(false)?;
    for _ in 0..combo_legs_count {
        let con_id = f.get_int(false)?;
        let ratio = f.get_float(false)?;
        let action = f.get_str()?;
        let exchange = f.get_str()?;
        let open_close = f.get_int(false)?.into();
        let short_sale_slot = f.get_int(false)?;
        let designated_location = f.get_str()?;
        let exempt_code = f.get_int(false)?;
        contract.combo_legs.push(crate::core::contract::ComboLeg {
            con_id,
            ratio,
            action,
            exchange,
            open_close,
            short_sale_slot,
            designated_location,
            exempt_code,
        });
    }

    let order_combo_legs_count = f.get_int(false)?;
    for _ in 0..order_combo_legs_count {
        let price = f.get_float(true)?;
        order
            .order_combo_legs
            .push(crate::core::contract::OrderComboLeg { price });
    }

    let smart_params_count = f.get_int(false)?;
    for _ in 0..smart_params_count {
        let tag = f.get_str()?;
        let value = f.get_str()?;
        order
            .smart_combo_routing_params
            .push(crate::core::common::TagValue::new(tag, value));
    }

    order.scale_init_level_size = f.get_int(true)?;
    order.scale_subs_level_size = f.get_int(true)?;
    order.scale_price_increment = f.get_float(true)?;
    if order.scale_price_increment > 0.0 && order.scale_price_increment < UNSET_DOUBLE {
        order.scale_price_adjust_value = f.get_float(true)?;
        order.scale_price_adjust_interval = f.get_int(true)?;
        order.scale_profit_offset = f.get_float(true)?;
        order.scale_auto_reset = f.get_bool()?;
        order.scale_init_position = f.get_int(true)?;
        order.scale_init_fill_qty = f.get_int(true)?;
        order.scale_random_percent = f.get_bool()?;
    }

    order.hedge_type = f.get_str()?;
    if !order.hedge_type.is_empty() {
        order.hedge_param = f.get_str()?;
    }

    order.opt_out_smart_routing = f.get_bool()?;
    order.clearing_account = f.get_str()?;
    order.clearing_intent = f.get_str()?;
    order.not_held = f.get_bool()?;

    if f.get_bool()? {
        let con_id = f.get_int(false)?;
        let delta = f.get_float(false)?;
        let price = f.get_float(false)?;
        contract.delta_neutral_contract =
            Some(crate::core::contract::DeltaNeutralContract { con_id, delta, price });
    }

    order.algo_strategy = f.get_str()?;
    if !order.algo_strategy.is_empty() {
        let algo_params_count = f.get_int(false)?;
        for _ in 0..algo_params_count {
            let tag = f.get_str()?;
            let value = f.get_str()?;
            order.algo_params.push(crate::core::common::TagValue::new(tag, value));
        }
    }

    order.what_if = f.get_bool()?;

    order.status = f.get_str()?;
    order.init_margin = f.get_str()?;
    order.maint_margin = f.get_str()?;
    order.equity_with_loan = f.get_str()?;
    order.commission = f.get_float(true)?;
    order.min_commission = f.get_float(true)?;
    order.max_commission = f.get_float(true)?;
    order.commission_currency = f.get_str()?;
    order.warning_text = f.get_str()?;

    Ok(vec![Event::OpenOrder {
        order_id: order.order_id,
        contract: Box::new(contract),
        order: Box::new(order),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn decode_one(fields: &[&str]) -> Vec<Event> {
        let (tx, rx) = mpsc::channel();
        for field in fields {
            tx.send(field.to_string()).unwrap();
        }
        drop(tx);
        let mut decoder = Decoder::new();
        decoder
            .poll_one(&rx, Duration::from_millis(50))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn s1_next_valid_id() {
        let events = decode_one(&["9", "1", "123"]);
        assert_eq!(events, vec![Event::NextValidId { req_id: 123 }]);
    }

    #[test]
    fn s2_pre_version_2_error_flattens_to_zero_zero() {
        let events = decode_one(&["4", "1", "no such contract"]);
        assert_eq!(
            events,
            vec![Event::Error { req_id: 0, code: 0, message: "no such contract".to_string() }]
        );
    }

    #[test]
    fn post_version_2_error_carries_req_id_and_code() {
        let events = decode_one(&["4", "2", "7", "200", "no such contract"]);
        assert_eq!(
            events,
            vec![Event::Error { req_id: 7, code: 200, message: "no such contract".to_string() }]
        );
    }

    #[test]
    fn tick_price_fans_out_a_derived_tick_size() {
        // tick_type 1 (bid) maps to size tick type 0.
        let events = decode_one(&["1", "3", "10", "1", "1.5", "100", "1"]);
        assert_eq!(
            events,
            vec![
                Event::TickPrice { req_id: 10, tick_type: 1, price: 1.5, can_auto_execute: true },
                Event::TickSize { req_id: 10, tick_type: 0, size: 100 },
            ]
        );
    }

    #[test]
    fn tick_price_without_fanout_tick_type_emits_one_event() {
        let events = decode_one(&["1", "3", "10", "99", "1.5", "100", "1"]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn s7_historical_data_emits_bars_then_terminator() {
        let events = decode_one(&[
            "17", "3", "9", "a", "b", "2", "d1", "1.0", "2.0", "0.5", "1.5", "10", "1.1", "true",
            "3", "d2", "1.1", "2.1", "0.6", "1.6", "20", "1.2", "false", "4",
        ]);
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[2], Event::HistoricalData { bar, .. } if bar.date == "finished-a-b"
            && bar.open == -1.0 && bar.volume == -1));
    }

    #[test]
    fn unsupported_message_id_is_an_error() {
        let (tx, rx) = mpsc::channel();
        tx.send("9999".to_string()).unwrap();
        let mut decoder = Decoder::new();
        let result = decoder.poll_one(&rx, Duration::from_millis(50));
        assert!(matches!(result, Err(IbkrError::UnsupportedMessageId(9999))));
    }

    #[test]
    fn low_version_order_status_is_a_protocol_error() {
        let (tx, rx) = mpsc::channel();
        tx.send("3".to_string()).unwrap();
        tx.send("5".to_string()).unwrap(); // below min version 6
        let mut decoder = Decoder::new();
        let result = decoder.poll_one(&rx, Duration::from_millis(50));
        assert!(matches!(result, Err(IbkrError::ProtocolError(_))));
    }

    #[test]
    fn negative_message_id_yields_stop() {
        let (tx, rx) = mpsc::channel();
        tx.send("-1".to_string()).unwrap();
        let mut decoder = Decoder::new();
        let events = decoder.poll_one(&rx, Duration::from_millis(50)).unwrap().unwrap();
        assert_eq!(events, vec![Event::Stop]);
    }

    #[test]
    fn poll_times_out_cleanly_when_no_data_arrives() {
        let (_tx, rx) = mpsc::channel();
        let mut decoder = Decoder::new();
        let result = decoder.poll_one(&rx, Duration::from_millis(10)).unwrap();
        assert!(result.is_none());
    }
}

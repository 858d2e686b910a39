//! The typed events the decoder (C5) publishes to the consumer queue (C7).
//! Each variant's `kind()` string is the closed vocabulary from spec section
//! 6 ("Consumer interface"): `event_kind` drawn from this set plus `stop`.
use crate::core::common::Bar;
use crate::core::contract::Contract;
use crate::core::execution::{CommissionReport, Execution};
use crate::core::order::Order;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    TickPrice {
        req_id: i32,
        tick_type: i32,
        price: f64,
        can_auto_execute: bool,
    },
    TickSize {
        req_id: i32,
        tick_type: i32,
        size: i32,
    },
    OrderStatus {
        req_id: i32,
        status: String,
        filled: i32,
        remaining: i32,
        avg_fill_price: f64,
        perm_id: i32,
        parent_id: i32,
        last_fill_price: f64,
        client_id: i32,
        why_held: String,
    },
    Error {
        req_id: i32,
        code: i32,
        message: String,
    },
    OpenOrder {
        order_id: i32,
        contract: Box<Contract>,
        order: Box<Order>,
    },
    UpdateAccountValue {
        key: String,
        value: String,
        currency: String,
        account_name: String,
    },
    UpdatePortfolio {
        contract: Box<Contract>,
        position: i32,
        market_price: f64,
        market_value: f64,
        average_cost: f64,
        unrealized_pnl: f64,
        realized_pnl: f64,
        account_name: String,
    },
    UpdateAccountTime {
        timestamp: String,
    },
    NextValidId {
        req_id: i32,
    },
    ContractDetails {
        req_id: i32,
        contract: Box<Contract>,
    },
    ExecDetails {
        req_id: i32,
        contract: Box<Contract>,
        execution: Box<Execution>,
    },
    ManagedAccounts {
        accounts: String,
    },
    HistoricalData {
        req_id: i32,
        bar: Bar,
    },
    TickGeneric {
        req_id: i32,
        tick_type: i32,
        value: f64,
    },
    TickString {
        req_id: i32,
        tick_type: i32,
        value: String,
    },
    CurrentTime {
        seconds: i32,
    },
    ContractDetailsEnd {
        req_id: i32,
    },
    OpenOrderEnd,
    AccountDownloadEnd {
        account_name: String,
    },
    ExecDetailsEnd {
        req_id: i32,
    },
    CommissionReport {
        report: CommissionReport,
    },
    /// Posted by `disconnect` to unblock any consumer blocked on the event
    /// queue; also the terminal event a fatal protocol/IO error produces.
    Stop,
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TickPrice { .. } => "tick_price",
            Event::TickSize { .. } => "tick_size",
            Event::OrderStatus { .. } => "order_status",
            Event::Error { .. } => "error",
            Event::OpenOrder { .. } => "open_order",
            Event::UpdateAccountValue { .. } => "update_account_value",
            Event::UpdatePortfolio { .. } => "update_portfolio",
            Event::UpdateAccountTime { .. } => "update_account_time",
            Event::NextValidId { .. } => "next_valid_id",
            Event::ContractDetails { .. } => "contract_details",
            Event::ExecDetails { .. } => "exec_details",
            Event::ManagedAccounts { .. } => "managed_accounts",
            Event::HistoricalData { .. } => "historical_data",
            Event::TickGeneric { .. } => "tick_generic",
            Event::TickString { .. } => "tick_string",
            Event::CurrentTime { .. } => "current_time",
            Event::ContractDetailsEnd { .. } => "contract_details_end",
            Event::OpenOrderEnd => "open_order_end",
            Event::AccountDownloadEnd { .. } => "account_download_end",
            Event::ExecDetailsEnd { .. } => "exec_details_end",
            Event::CommissionReport { .. } => "commission_report",
            Event::Stop => "stop",
        }
    }
}

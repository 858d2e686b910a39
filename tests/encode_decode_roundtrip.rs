//! Exercises the field codec (C1) against the request encoder's (C4) actual
//! output: every outbound frame must split back into the exact field
//! sequence the encoder wrote, whether the bytes arrive whole or fragmented
//! across multiple reads, mirroring how the byte-reader stage (C6) feeds the
//! rolling reassembly buffer.
use twsapi::core::common::{UNSET_DOUBLE, UNSET_INTEGER};
use twsapi::core::contract::Contract;
use twsapi::core::encoder;
use twsapi::core::execution::ExecutionFilter;
use twsapi::core::messages::decode;
use twsapi::core::order::Order;

#[test]
fn cancel_order_frame_round_trips_through_the_field_codec() {
    let bytes = encoder::cancel_order(99);
    let (fields, tail) = decode(&bytes);
    assert_eq!(fields, vec!["4", "1", "99"]);
    assert!(tail.is_empty());
}

#[test]
fn req_executions_frame_round_trips_with_sentinel_absent_fields() {
    let filter = ExecutionFilter::default();
    let bytes = encoder::req_executions(5, &filter);
    let (fields, tail) = decode(&bytes);
    assert_eq!(fields[0], "7"); // ReqExecutions
    assert_eq!(fields[1], "3"); // version
    assert_eq!(fields[2], "5"); // req_id
    assert!(tail.is_empty());
}

#[test]
fn place_order_for_a_bag_contract_is_rejected_before_any_bytes_are_produced() {
    let mut contract = Contract::new("BAG", "DBK", "EUR", "DTB");
    contract.sec_type = "BAG".to_string();
    let order = Order::new("BUY", 1, "LMT", 10.0, UNSET_DOUBLE);
    assert!(encoder::place_order(1, &contract, &order).is_err());
}

#[test]
fn buffer_reassembly_handles_frames_split_at_arbitrary_byte_boundaries() {
    let bytes = encoder::req_historical_data(
        3,
        &Contract::new("STK", "AAPL", "USD", "SMART"),
        "",
        "1 day",
        "1 M",
        true,
        "TRADES",
        1,
    )
    .unwrap();

    // Feed the frame back through `decode` one byte at a time, accumulating
    // the tail exactly as the byte-reader stage does.
    let mut pending: Vec<u8> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    for &b in &bytes {
        pending.push(b);
        let (mut complete, tail) = decode(&pending);
        fields.append(&mut complete);
        pending = tail;
    }
    assert!(pending.is_empty());
    assert_eq!(fields[0], "20"); // ReqHistoricalData
    assert_eq!(fields.last().unwrap(), "1"); // format_date

    // And re-decoding the whole frame in one shot gives the identical fields.
    let (whole, tail) = decode(&bytes);
    assert_eq!(whole, fields);
    assert!(tail.is_empty());
}

#[test]
fn place_order_min_qty_sentinel_encodes_as_an_empty_field() {
    let contract = Contract::new("STK", "AAPL", "USD", "SMART");
    let default_order = Order::new("BUY", 100, "MKT", 0.0, 0.0);
    assert_eq!(default_order.min_qty, UNSET_INTEGER);

    let mut explicit_order = default_order.clone();
    explicit_order.min_qty = 5;

    let (default_fields, _) = decode(&encoder::place_order(1, &contract, &default_order).unwrap());
    let (explicit_fields, _) = decode(&encoder::place_order(1, &contract, &explicit_order).unwrap());

    assert_eq!(default_fields.len(), explicit_fields.len());
    let diffs: Vec<usize> = (0..default_fields.len())
        .filter(|&i| default_fields[i] != explicit_fields[i])
        .collect();
    assert_eq!(diffs.len(), 1, "setting min_qty should change exactly one field");
    assert_eq!(default_fields[diffs[0]], "");
    assert_eq!(explicit_fields[diffs[0]], "5");
}

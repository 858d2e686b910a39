//! Field-level wire codec and the closed message-id vocabularies. Every
//! field on the wire is a NUL-terminated UTF-8 byte sequence; this module
//! is the only place that knows that.
use std::collections::VecDeque;

use crate::core::common::{UNSET_DOUBLE, UNSET_INTEGER};

pub const EOL: u8 = 0x00;

/// A typed wire value. A closed enum the encoder walks exhaustively, rather
/// than building fields through `dyn Any` downcasting.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<'a> {
    Int(i32),
    /// An integer field that should encode as absent when it equals
    /// `UNSET_INTEGER`.
    IntMax(i32),
    Float(f64),
    /// A float field that should encode as absent when it equals
    /// `UNSET_DOUBLE`.
    FloatMax(f64),
    Bool(bool),
    Str(&'a str),
    /// Always encodes as an empty field, regardless of type.
    Absent,
}

/// Encodes a single field to its NUL-terminated wire form.
pub fn encode_field(field: &Field) -> Vec<u8> {
    let mut out = match field {
        Field::Absent => Vec::new(),
        Field::Bool(b) => (*b as i32).to_string().into_bytes(),
        Field::Str(s) => s.as_bytes().to_vec(),
        Field::Int(v) => v.to_string().into_bytes(),
        Field::IntMax(v) => {
            if *v == UNSET_INTEGER {
                Vec::new()
            } else {
                v.to_string().into_bytes()
            }
        }
        Field::Float(v) => v.to_string().into_bytes(),
        Field::FloatMax(v) => {
            if *v == UNSET_DOUBLE {
                Vec::new()
            } else {
                v.to_string().into_bytes()
            }
        }
    };
    out.push(EOL);
    out
}

/// Convenience for encoding a sequence of fields into one contiguous buffer,
/// as the writer stage sends them.
pub fn encode_fields(fields: &[Field]) -> Vec<u8> {
    let mut buf = Vec::new();
    for field in fields {
        buf.extend(encode_field(field));
    }
    buf
}

/// Splits `buf` on NUL into complete fields plus a trailing remainder that
/// must be prepended to the next read before decoding again. Never loses
/// data, even across an arbitrary number of short reads.
pub fn decode(buf: &[u8]) -> (Vec<String>, Vec<u8>) {
    let text = String::from_utf8_lossy(buf);
    let mut parts: Vec<&str> = text.split('\u{0}').collect();
    let tail = parts.pop().unwrap_or("").as_bytes().to_vec();
    let fields = parts.into_iter().map(|s| s.to_string()).collect();
    (fields, tail)
}

/// Pops already-split fields off a queue and interprets them, applying the
/// inbound sentinel and lowercase-normalization rules.
pub struct FieldDecoder {
    fields: VecDeque<String>,
}

impl FieldDecoder {
    pub fn new(fields: VecDeque<String>) -> Self {
        FieldDecoder { fields }
    }

    pub fn from_vec(fields: Vec<String>) -> Self {
        FieldDecoder { fields: fields.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field as UTF-8 text, lowercased. This normalization
    /// applies to every string field read inbound.
    pub fn get_str(&mut self) -> String {
        self.fields.pop_front().unwrap_or_default().to_lowercase()
    }

    pub fn get_int(&mut self, default_max: bool) -> i32 {
        let raw = self.fields.pop_front().unwrap_or_default();
        if raw.is_empty() {
            if default_max { UNSET_INTEGER } else { 0 }
        } else {
            raw.parse().unwrap_or(0)
        }
    }

    pub fn get_float(&mut self, default_max: bool) -> f64 {
        let raw = self.fields.pop_front().unwrap_or_default();
        if raw.is_empty() {
            if default_max { UNSET_DOUBLE } else { 0.0 }
        } else {
            raw.parse().unwrap_or(0.0)
        }
    }

    pub fn get_bool(&mut self) -> bool {
        self.get_int(false) != 0
    }

    pub fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.fields.pop_front();
        }
    }

    /// Appends a field arriving after construction, so a caller can refill
    /// an empty decoder from a live source (the decoder stage's field
    /// queue) instead of only ever pulling from a fixed `Vec`.
    pub fn push_back(&mut self, field: String) {
        self.fields.push_back(field);
    }
}

/// Outbound message ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum OutgoingMessageId {
    ReqMktData = 1,
    CancelMktData = 2,
    PlaceOrder = 3,
    CancelOrder = 4,
    ReqOpenOrders = 5,
    ReqAccountData = 6,
    ReqExecutions = 7,
    ReqIds = 8,
    ReqContractData = 9,
    SetServerLogLevel = 14,
    ReqAutoOpenOrders = 15,
    ReqAllOpenOrders = 16,
    ReqManagedAccts = 17,
    ReqHistoricalData = 20,
    CancelHistoricalData = 25,
    ReqCurrentTime = 49,
}

/// Inbound message ids this client recognizes; anything else dispatches to
/// `UnsupportedMessageId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum IncomingMessageId {
    TickPrice = 1,
    TickSize = 2,
    OrderStatus = 3,
    ErrMsg = 4,
    OpenOrder = 5,
    AcctValue = 6,
    PortfolioValue = 7,
    AcctUpdateTime = 8,
    NextValidId = 9,
    ContractData = 10,
    ExecutionData = 11,
    ManagedAccts = 15,
    HistoricalData = 17,
    TickGeneric = 45,
    TickString = 46,
    CurrentTime = 49,
    ContractDataEnd = 52,
    OpenOrderEnd = 53,
    AcctDownloadEnd = 54,
    ExecutionDataEnd = 55,
    CommissionReport = 59,
}

impl IncomingMessageId {
    pub fn from_i32(value: i32) -> Option<Self> {
        use IncomingMessageId::*;
        Some(match value {
            1 => TickPrice,
            2 => TickSize,
            3 => OrderStatus,
            4 => ErrMsg,
            5 => OpenOrder,
            6 => AcctValue,
            7 => PortfolioValue,
            8 => AcctUpdateTime,
            9 => NextValidId,
            10 => ContractData,
            11 => ExecutionData,
            15 => ManagedAccts,
            17 => HistoricalData,
            45 => TickGeneric,
            46 => TickString,
            49 => CurrentTime,
            52 => ContractDataEnd,
            53 => OpenOrderEnd,
            54 => AcctDownloadEnd,
            55 => ExecutionDataEnd,
            59 => CommissionReport,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_round_trips_a_scalar() {
        let bytes = encode_field(&Field::Int(42));
        let (fields, tail) = decode(&bytes);
        assert_eq!(fields, vec!["42".to_string()]);
        assert!(tail.is_empty());
    }

    #[test]
    fn codec_round_trips_two_values() {
        let mut bytes = encode_field(&Field::Int(1));
        bytes.extend(encode_field(&Field::Str("hello")));
        let (fields, tail) = decode(&bytes);
        assert_eq!(fields, vec!["1".to_string(), "hello".to_string()]);
        assert!(tail.is_empty());
    }

    #[test]
    fn reassembly_across_arbitrary_chunk_splits() {
        let full = encode_fields(&[Field::Int(8), Field::Int(1), Field::Int(5)]);
        for split in 0..=full.len() {
            let (first_fields, remainder) = decode(&full[..split]);
            let (second_fields, tail) = decode(&[remainder, full[split..].to_vec()].concat());
            let mut all = first_fields;
            all.extend(second_fields);
            assert_eq!(all, vec!["8".to_string(), "1".to_string(), "5".to_string()]);
            assert!(tail.is_empty());
        }
    }

    #[test]
    fn int_max_and_absent_encode_identically() {
        assert_eq!(encode_field(&Field::IntMax(UNSET_INTEGER)), vec![EOL]);
        assert_eq!(encode_field(&Field::Absent), vec![EOL]);
    }

    #[test]
    fn float_max_and_absent_encode_identically() {
        assert_eq!(encode_field(&Field::FloatMax(UNSET_DOUBLE)), vec![EOL]);
        assert_eq!(encode_field(&Field::Absent), vec![EOL]);
    }

    #[test]
    fn get_int_default_max_reads_sentinel_from_empty_field() {
        let mut decoder = FieldDecoder::from_vec(vec!["".to_string()]);
        assert_eq!(decoder.get_int(true), UNSET_INTEGER);
    }

    #[test]
    fn get_float_default_max_reads_sentinel_from_empty_field() {
        let mut decoder = FieldDecoder::from_vec(vec!["".to_string()]);
        assert_eq!(decoder.get_float(true), UNSET_DOUBLE);
    }

    #[test]
    fn get_str_lowercases() {
        let mut decoder = FieldDecoder::from_vec(vec!["AAPL".to_string()]);
        assert_eq!(decoder.get_str(), "aapl");
    }

    #[test]
    fn s1_next_valid_id_frame() {
        let (fields, tail) = decode(b"9\x001\x00123\x00");
        assert_eq!(fields, vec!["9", "1", "123"]);
        assert!(tail.is_empty());
    }
}

//! Core wire-protocol implementation: the field codec, domain schemas,
//! request encoder, inbound parser/dispatcher, network handler, and the
//! client facade built on top of them (see crate root docs for the
//! component map).
pub mod client;
pub mod common;
pub mod connection;
pub mod contract;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod events;
pub mod execution;
pub mod messages;
pub mod order;
pub mod reader;
pub mod streamer;
pub mod writer;

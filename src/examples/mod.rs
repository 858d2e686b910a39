//! Examples of populating structs for contracts and orders.
pub mod contract_samples;
pub mod order_samples;

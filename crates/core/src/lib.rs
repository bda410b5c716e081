//! `xerlens-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no IO, no logging setup) used by
//! the parser, the metrics engine and the serving layer.

pub mod date;
pub mod error;
pub mod id;
pub mod numeric;

pub use date::{MonthKey, parse_timestamp};
pub use error::{DomainError, DomainResult};
pub use id::{ProjectKey, SessionId};
pub use numeric::{finite_or_zero, round_index, round_money, round_to};

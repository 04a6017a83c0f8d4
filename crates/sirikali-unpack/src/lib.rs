//! Positional unpacking of string sequences into typed tuples.
//!
//! Fills up to eight slots, in order, from the leading elements of a
//! sequence. A sequence shorter than the slot list is not an error:
//!
//! - [`unpack`] and [`parse`] report the missing slots as `None`.
//! - [`fill`] writes into caller-owned slots and leaves the missing ones
//!   untouched.

pub use error::{Error, Result};
pub use unpack::{Fill, Parse, Unpack, fill, parse, unpack};

mod error;
mod unpack;

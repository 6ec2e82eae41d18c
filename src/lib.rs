//! # couponcode
//!
//! Short, human-friendly, case-insensitive codes for non-negative integers,
//! e.g. for discount coupons that customers type in by hand.
//!
//! ## Features
//!
//! - **5 bits per symbol**: 32 symbols from `0-9` and `A-Z`
//! - **Unambiguous output**: `I`, `L`, `O` and `U` are never printed
//! - **Forgiving input**: any case, with `O` read as `0` and `I`/`L` as `1`
//! - **Fixed width**: codes are left-padded to a chosen number of symbols
//! - **Arbitrary size**: values are [`BigUint`], so codes of any length decode
//! - **Check digit**: optional Luhn mod 32 symbol catches typos
//! - **Custom alphabets**: reorder or replace the symbols
//!
//! ```
//! use couponcode::{check, decode, decode_checked, encode, BigUint};
//!
//! let value = BigUint::from(1_000_000u32);
//! let code = encode(&value, 5, true).unwrap();
//! assert_eq!(code.len(), 6);
//! assert!(check(&code).unwrap());
//! assert_eq!(decode_checked(&code).unwrap(), value);
//! assert_eq!(decode("AAAA1").unwrap(), BigUint::from(1u32));
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;

pub use codec::{check, decode, decode_checked, digit, encode, normalize, Alphabet};
pub use config::{set_home_override, Config};
pub use error::{CodecError, Result};
pub use num_bigint::BigUint;

//! # Command Tests
//!
//! Exercises the command renderers against configs written to a temporary home.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{ConfigBuilder, TestEnv};
use couponcode::{
    commands::{check::validate, decode, encode, CheckArgs, DecodeArgs, EncodeArgs},
    BigUint, Config,
};

fn values(values: &[u128]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

#[test]
fn test_encode_render_without_config_file() {
    let _env = TestEnv::new();
    let config = Config::load().expect("defaults should load");

    let args = EncodeArgs {
        values: values(&[0, 1, 33_554_431]),
        digits: None,
        check_digit: None,
    };
    let lines = encode::render(&config, &args).expect("encode should succeed");
    assert_eq!(lines, ["AAAAA", "AAAA1", "ZZZZZ"]);
}

#[test]
fn test_encode_render_stops_at_first_overflow() {
    let _env = TestEnv::new();
    let config = Config::load().unwrap();

    let args = EncodeArgs {
        values: values(&[1, 33_554_432]),
        digits: None,
        check_digit: None,
    };
    let err = encode::render(&config, &args).unwrap_err();
    assert!(format!("{err:#}").contains("Cannot encode 33554432"));
}

#[test]
fn test_decode_render_uses_configured_check_digit() {
    let env = TestEnv::new();
    env.write_config(&ConfigBuilder::new().check_digit(true).build());
    let config = Config::load().unwrap();

    let args = DecodeArgs {
        codes: vec!["AAAA1Y".to_string(), "aaaaly".to_string()],
        check_digit: None,
    };
    assert_eq!(decode::render(&config, &args).unwrap(), ["1", "1"]);
}

#[test]
fn test_check_digit_config_can_be_switched_off() {
    let env = TestEnv::new();
    env.write_config(&ConfigBuilder::new().check_digit(true).build());
    let config = Config::load().unwrap();

    let encode_args = EncodeArgs {
        values: values(&[1]),
        digits: None,
        check_digit: Some(false),
    };
    assert_eq!(encode::render(&config, &encode_args).unwrap(), ["AAAA1"]);

    let decode_args = DecodeArgs {
        codes: vec!["AAAA1Y".to_string()],
        check_digit: Some(false),
    };
    assert_eq!(decode::render(&config, &decode_args).unwrap(), ["62"]);
}

#[test]
fn test_decode_render_wide_code() {
    let _env = TestEnv::new();
    let config = Config::load().unwrap();

    let args = DecodeArgs {
        codes: vec!["Z".repeat(26)],
        check_digit: None,
    };
    assert_eq!(
        decode::render(&config, &args).unwrap(),
        ["1361129467683753853853498429727072845823"]
    );
}

#[test]
fn test_config_digits_out_of_range_fails() {
    let env = TestEnv::new();
    env.write_config(&ConfigBuilder::new().digits(0).build());

    let err = Config::load().unwrap_err();
    assert!(format!("{err:#}").contains("out of range"));
}

#[test]
fn test_check_validate_pairs_codes_with_verdicts() {
    let _env = TestEnv::new();
    let config = Config::load().unwrap();

    let args = CheckArgs {
        codes: vec!["AAAA1Y".to_string(), "AAAA1Z".to_string()],
    };
    let results = validate(&config, &args).unwrap();
    assert_eq!(results, [("AAAA1Y", true), ("AAAA1Z", false)]);
}

#[test]
fn test_check_validate_invalid_symbol() {
    let _env = TestEnv::new();
    let config = Config::load().unwrap();

    let args = CheckArgs {
        codes: vec!["AA-A".to_string()],
    };
    let err = validate(&config, &args).unwrap_err();
    assert!(format!("{err:#}").contains("Cannot check 'AA-A'"));
}

#[test]
fn test_config_warnings_collected() {
    let env = TestEnv::new();
    env.write_config("digits = 4\n[alphabet]\nsymbol = \"x\"\n");
    let config = Config::load().unwrap();

    assert_eq!(config.global.digits, 4);
    assert_eq!(config.warnings.len(), 1);
    assert!(config.warnings[0].contains("alphabet.symbol"));
}

use anyhow::{Context, Result};
use hex_literal::hex;
use msc_decoder_rs::models::{
    data::{AdditionalSense, sense_data::SenseData},
    error::DecodeError,
};

use super::common::load_fixture;

#[test]
fn test_fixed_format_not_ready() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/sense/sense_not_ready.hex")?;
    let sense = SenseData::parse(&raw).context("failed to parse fixed-format sense")?;

    assert_eq!(sense.response_code, 0x70);
    assert_eq!(sense.sense_key, 2);
    assert_eq!(sense.sense_key_name(), "NOT READY");
    assert_eq!(sense.asc, 0x04);
    assert_eq!(sense.ascq, 0x00);
    assert_eq!(
        sense.describe(),
        "NOT READY Logical Unit Not Ready, Cause Not Reportable"
    );

    Ok(())
}

#[test]
fn test_descriptor_format_offsets() -> Result<()> {
    // response code 0x72 → sense key / ASC / ASCQ live in bytes 1..4
    let raw = hex!("72 05 24 00");
    let sense = SenseData::parse(&raw).context("failed to parse descriptor sense")?;

    assert_eq!(sense.sense_key, 5);
    assert_eq!(sense.sense_key_name(), "ILLEGAL REQUEST");
    assert_eq!(sense.describe(), "ILLEGAL REQUEST Invalid Field in CDB");

    Ok(())
}

#[test]
fn test_unlisted_pair_falls_back_to_hex() -> Result<()> {
    let raw = hex!("72 01 99 07");
    let sense = SenseData::parse(&raw)?;

    assert_eq!(AdditionalSense::lookup(0x99, 0x07), None);
    assert_eq!(sense.describe(), "RECOVERED ERROR (99, 07)");

    Ok(())
}

#[test]
fn test_additional_sense_lookup() {
    assert_eq!(
        AdditionalSense::lookup(0x04, 0x00),
        Some("Logical Unit Not Ready, Cause Not Reportable")
    );
    assert_eq!(AdditionalSense::lookup(0x3A, 0x00), Some("Media Not Present"));
}

#[test]
fn test_short_fixed_buffer_is_malformed() {
    // fixed format announced, but the ASC/ASCQ offsets are unreadable
    let raw = hex!("70 00 02 00 00 00");
    let err = SenseData::parse(&raw).expect_err("short fixed sense must not parse");
    assert!(matches!(err, DecodeError::MalformedCommand { .. }));
}

#[test]
fn test_empty_buffer_is_malformed() {
    let err = SenseData::parse(&[]).expect_err("empty sense buffer must not parse");
    assert!(matches!(err, DecodeError::MalformedCommand { .. }));
}

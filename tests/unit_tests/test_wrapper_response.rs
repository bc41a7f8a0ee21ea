use anyhow::{Context, Result};
use msc_decoder_rs::models::{
    error::DecodeError,
    wrapper::{common::CswStatus, response::CommandStatusWrapper},
};

use super::common::{bulk_in, csw_payload, load_fixture};

#[test]
fn test_csw_parse_passed() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/csw_passed.hex")?;
    let csw = CommandStatusWrapper::parse(bulk_in(raw))
        .context("failed to parse passing CSW")?;

    assert_eq!(csw.tag, 0xDEAD_BEEF);
    assert_eq!(csw.data_residue, 0);
    assert_eq!(csw.status, CswStatus::Passed);
    assert_eq!(csw.summarize(), "tag 3735928559 reply passed");

    Ok(())
}

#[test]
fn test_csw_parse_failed_with_residue() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/csw_failed.hex")?;
    let csw = CommandStatusWrapper::parse(bulk_in(raw))
        .context("failed to parse failing CSW")?;

    assert_eq!(csw.tag, 0x0102_0304);
    assert_eq!(csw.data_residue, 18, "residue must decode little-endian");
    assert_eq!(csw.status, CswStatus::Failed);

    Ok(())
}

#[test]
fn test_csw_undefined_status_is_preserved() -> Result<()> {
    let csw = CommandStatusWrapper::parse(bulk_in(csw_payload(1, 9)))
        .context("undefined status byte must not reject the CSW")?;

    assert_eq!(csw.status, CswStatus::Unknown(9));
    assert_eq!(csw.status.as_u8(), 9);
    assert_eq!(csw.summarize(), "tag 1 reply unknown status 9");

    Ok(())
}

#[test]
fn test_csw_roundtrip() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/csw_failed.hex")?;
    let csw = CommandStatusWrapper::parse(bulk_in(raw.clone()))?;

    assert_eq!(csw.to_bytes().to_vec(), raw);
    Ok(())
}

#[test]
fn test_csw_truncated() {
    let mut payload = csw_payload(1, 0);
    payload.truncate(CommandStatusWrapper::LEN - 1);

    let err = CommandStatusWrapper::parse(bulk_in(payload))
        .expect_err("12-byte CSW must not parse");
    assert!(matches!(err, DecodeError::TruncatedPayload { .. }));
}

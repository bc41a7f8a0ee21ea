use anyhow::{Context, Result};
use hex_literal::hex;
use msc_decoder_rs::models::{
    error::DecodeError, transaction::Direction, wrapper::request::CommandBlockWrapper,
};

use super::common::{bulk_out, load_fixture};

#[test]
fn test_cbw_parse_read10() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/cbw_read10.hex")?;
    let cbw = CommandBlockWrapper::parse(bulk_out(raw))
        .context("failed to parse READ(10) CBW")?;

    assert_eq!(cbw.tag, 0xDEAD_BEEF);
    assert_eq!(cbw.data_transfer_length, 512);
    assert!(cbw.flags.is_in(), "READ(10) data phase must be IN");
    assert_eq!(cbw.data_direction(), Direction::In);
    assert_eq!(cbw.lun, 0);
    assert_eq!(cbw.command_block.len(), 10);
    assert_eq!(cbw.opcode(), Some(0x28));
    assert_eq!(cbw.summarize(), "tag 3735928559 to lun #0 with length 512");

    Ok(())
}

#[test]
fn test_cbw_parse_request_sense() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/cbw_request_sense.hex")?;
    let cbw = CommandBlockWrapper::parse(bulk_out(raw))
        .context("failed to parse REQUEST SENSE CBW")?;

    assert_eq!(cbw.tag, 0x0102_0304);
    assert_eq!(cbw.data_transfer_length, 18);
    assert!(cbw.flags.is_in());
    assert_eq!(cbw.opcode(), Some(0x03));
    assert_eq!(cbw.command_block.len(), 6);

    Ok(())
}

#[test]
fn test_cbw_header_roundtrip() -> Result<()> {
    let raw = load_fixture("tests/unit_tests/fixtures/wrappers/cbw_read10.hex")?;
    let cbw = CommandBlockWrapper::parse(bulk_out(raw.clone()))
        .context("failed to parse CBW fixture")?;

    assert_eq!(cbw.to_bytes(), raw, "decode→reencode must be byte-exact");
    Ok(())
}

#[test]
fn test_cbw_truncated_never_panics() {
    // every length from bare signature up to one short of the header
    for len in 4..CommandBlockWrapper::HEADER_LEN {
        let mut payload = vec![0u8; len];
        payload[..4].copy_from_slice(&[0x55, 0x53, 0x42, 0x43]);

        let err = CommandBlockWrapper::parse(bulk_out(payload))
            .expect_err("short CBW must not parse");
        assert!(
            matches!(err, DecodeError::TruncatedPayload { .. }),
            "unexpected error for len {len}: {err}"
        );
    }
}

#[test]
fn test_cbw_cdb_clamped_to_captured_bytes() -> Result<()> {
    // header claims a 16-byte CDB, only 3 bytes were captured
    let mut payload = hex!("55534243 01000000 00000000 00 00 10").to_vec();
    payload.extend_from_slice(&[0x2A, 0x00, 0x00]);

    let cbw = CommandBlockWrapper::parse(bulk_out(payload))
        .context("clamped CBW must still parse")?;
    assert_eq!(cbw.command_block.len(), 3);
    assert_eq!(cbw.opcode(), Some(0x2A));

    Ok(())
}

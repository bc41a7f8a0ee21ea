use anyhow::Result;
use hex_literal::hex;
use msc_decoder_rs::{
    handlers::recognize::recognize,
    models::error::DecodeError,
    state_machine::bulk_states::BulkFrame,
};

use super::common::{bulk_in, bulk_out, cbw_payload, csw_payload};

#[test]
fn test_recognize_cbw() -> Result<()> {
    let frame = recognize(bulk_out(cbw_payload(3, 0, 0x00, &hex!("00 00 00 00 00 00"))))?;
    match frame {
        BulkFrame::Command(cbw) => assert_eq!(cbw.tag, 3),
        other => panic!("expected a CBW, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_recognize_csw() -> Result<()> {
    let frame = recognize(bulk_in(csw_payload(3, 0)))?;
    assert!(matches!(frame, BulkFrame::Status(_)));
    Ok(())
}

#[test]
fn test_empty_and_unsigned_payloads_pass_through() -> Result<()> {
    assert!(matches!(
        recognize(bulk_in(Vec::new()))?,
        BulkFrame::Other(_)
    ));
    assert!(matches!(
        recognize(bulk_in(vec![0xAA; 64]))?,
        BulkFrame::Other(_)
    ));
    // a near-miss signature is still pass-through
    assert!(matches!(
        recognize(bulk_out(b"USBX____________".to_vec()))?,
        BulkFrame::Other(_)
    ));
    Ok(())
}

#[test]
fn test_signed_but_truncated_payload_is_an_error() {
    let err = recognize(bulk_in(hex!("55534253 0100").to_vec()))
        .expect_err("signed short payload must be reported, not passed through");
    assert!(matches!(err, DecodeError::TruncatedPayload { .. }));
}

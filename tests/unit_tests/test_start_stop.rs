use anyhow::{Context, Result};
use hex_literal::hex;
use msc_decoder_rs::models::{common::BulkCommand, parse::ScsiCommand};

use super::common::exchange;

fn start_stop(cdb: &[u8]) -> Result<msc_decoder_rs::control_block::start_stop_unit::StartStopUnit> {
    let cmd = ScsiCommand::from_frames(exchange(cdb, None)?)
        .context("START STOP UNIT dispatch failed")?;
    match cmd {
        ScsiCommand::StartStopUnit(ssu) => Ok(ssu),
        other => panic!("expected StartStopUnit, got {other:?}"),
    }
}

#[test]
fn test_load_eject_and_start_bits() -> Result<()> {
    // byte 4 = 0b011 → LOEJ + START
    let ssu = start_stop(&hex!("1b 01 00 00 03 00"))?;

    assert!(ssu.immediate);
    assert_eq!(ssu.power_condition, 0);
    assert_eq!(ssu.power_condition_modifier, 0);
    assert!(!ssu.no_flush);
    assert!(ssu.load_eject);
    assert!(ssu.start);
    assert_eq!(ssu.summarize().as_deref(), Some("load_eject start"));

    Ok(())
}

#[test]
fn test_stop_has_empty_flag_list() -> Result<()> {
    let ssu = start_stop(&hex!("1b 00 00 00 00 00"))?;

    assert!(!ssu.load_eject);
    assert!(!ssu.start);
    assert_eq!(ssu.summarize().as_deref(), Some(""));

    Ok(())
}

#[test]
fn test_power_condition_suppresses_summary() -> Result<()> {
    // POWER CONDITION = 2 (idle), START set
    let ssu = start_stop(&hex!("1b 00 00 00 21 00"))?;

    assert_eq!(ssu.power_condition, 2);
    assert!(ssu.start);
    assert_eq!(ssu.summarize(), None);

    // POWER CONDITION MODIFIER alone also suppresses it
    let ssu = start_stop(&hex!("1b 00 00 05 01 00"))?;
    assert_eq!(ssu.power_condition_modifier, 5);
    assert_eq!(ssu.summarize(), None);

    Ok(())
}

#[test]
fn test_no_flush_bit() -> Result<()> {
    let ssu = start_stop(&hex!("1b 00 00 00 05 00"))?;

    assert!(ssu.no_flush);
    assert!(ssu.start);
    assert!(!ssu.load_eject);
    assert_eq!(ssu.summarize().as_deref(), Some("start"));

    Ok(())
}

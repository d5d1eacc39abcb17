//! Emission Sink Tests.
//!
//! Drives the generator into a mocked sink to check the emit protocol and
//! that a failing sink stops the pass.

use std::io;

use mockall::Sequence;
use nyuzi_mc_core::Error;
use nyuzi_mc_core::emit::{EmissionSink, MemorySink};

use crate::common::fixtures::seeded_generator;
use crate::common::mocks::sink::MockSink;

#[test]
fn test_memory_sink_collects_pairs() {
    let mut sink = MemorySink::new();
    assert!(sink.is_empty());
    sink.emit("or s1, s2, s3", "0x22 0x80 0x01 0xc0").unwrap();
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.assembly, ["or s1, s2, s3"]);
    assert_eq!(sink.disassembly, ["0x22 0x80 0x01 0xc0"]);
}

#[test]
fn test_generator_emits_every_record_once() {
    let mut sink = MockSink::new();
    sink.expect_emit().times(248).returning(|_, _| Ok(()));
    let stats = seeded_generator(1).run(&mut sink).unwrap();
    assert_eq!(stats.total(), 248);
}

#[test]
fn test_generator_emits_in_order() {
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();
    sink.expect_emit()
        .withf(|assembly, disassembly| {
            assembly.starts_with("or s1, s2, s3 ")
                && disassembly == "0x22 0x80 0x01 0xc0 # CHECK: or s1, s2, s3"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    sink.expect_emit()
        .times(246)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    sink.expect_emit()
        .withf(|assembly, disassembly| {
            assembly.starts_with("syscall ") && disassembly == "0x00 0x00 0xf0 0xc3 # CHECK: syscall"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let _ = seeded_generator(1).run(&mut sink).unwrap();
}

#[test]
fn test_sink_failure_aborts_pass() {
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();
    sink.expect_emit()
        .times(3)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    sink.expect_emit()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(Error::Write(io::Error::other("disk full"))));

    let err = seeded_generator(1).run(&mut sink).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
}

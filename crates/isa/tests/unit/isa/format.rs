//! Format Layout Tests.
//!
//! Every format must partition the 32-bit word: fields never overlap and
//! together cover each bit exactly once. Packed words are also checked to
//! only touch the bits their layout assigns.

use nyuzi_mc_core::isa::encode::{pack_c, pack_c_prime, pack_i, pack_im, pack_m, pack_mm, pack_r};
use nyuzi_mc_core::isa::format::{Field, Format};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_every_format_partitions_the_word() {
    for format in Format::ALL {
        assert!(format.is_partition(), "{format} layout overlaps or leaves gaps");
        assert_eq!(format.coverage(), u32::MAX, "{format} coverage");
    }
}

#[test]
fn test_fields_are_ordered_low_to_high() {
    for format in Format::ALL {
        let mut next = 0;
        for field in format.fields() {
            assert_eq!(field.lsb, next, "{format}.{} starts at {}", field.name, field.lsb);
            next = field.msb() + 1;
        }
        assert_eq!(next, 32, "{format} ends at bit {next}");
    }
}

#[rstest]
#[case(Format::R, "opcode", 20, 6)]
#[case(Format::R, "fmt", 26, 3)]
#[case(Format::I, "imm", 15, 9)]
#[case(Format::I, "opcode", 24, 5)]
#[case(Format::Im, "imm", 10, 14)]
#[case(Format::M, "offset", 15, 10)]
#[case(Format::M, "op", 25, 4)]
#[case(Format::Mm, "offset", 10, 15)]
#[case(Format::Mm, "load", 29, 1)]
#[case(Format::CPrime, "phys_reg", 5, 5)]
fn test_field_positions(
    #[case] format: Format,
    #[case] name: &str,
    #[case] lsb: u32,
    #[case] width: u32,
) {
    let field = format.field(name).unwrap();
    assert_eq!((field.lsb, field.width), (lsb, width), "{format}.{name}");
}

#[test]
fn test_unknown_field_is_none() {
    assert!(Format::Im.field("mask").is_none());
    assert!(Format::C.field("phys_reg").is_none());
}

#[test]
fn test_format_names() {
    let names: Vec<String> = Format::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["R", "I", "IM", "M", "MM", "C", "C'"]);
}

#[test]
fn test_field_place_and_extract() {
    let field = Format::I.field("imm").unwrap();
    assert_eq!(field.value_mask(), 0x1FF);
    assert_eq!(field.word_mask(), 0x00FF_8000);
    assert_eq!(field.place(0x3FF), 0x00FF_8000);
    assert_eq!(field.extract(0x00FF_8000), 0x1FF);
}

/// Field values decoded by the format's own layout.
fn values(format: Format, word: u32) -> Vec<(&'static str, u32)> {
    format
        .fields()
        .iter()
        .map(|field: &Field| (field.name, field.extract(word)))
        .collect()
}

#[test]
fn test_packers_follow_layout_tables() {
    assert_eq!(
        values(Format::R, pack_r(5, 0x20, 4, 5, 6, 7)),
        [
            ("src1", 5),
            ("dest", 4),
            ("mask", 7),
            ("src2", 6),
            ("opcode", 0x20),
            ("fmt", 5),
            ("tag", 0b110)
        ]
    );
    assert_eq!(
        values(Format::M, pack_m(true, 8, 1, 2, 12, 3)),
        [
            ("ptr", 2),
            ("src_dest", 1),
            ("mask", 3),
            ("offset", 12),
            ("op", 8),
            ("load", 1),
            ("tag", 0b10)
        ]
    );
    assert_eq!(
        values(Format::CPrime, pack_c_prime(7, 3, 4)),
        [
            ("reg", 3),
            ("phys_reg", 4),
            ("reserved", 0),
            ("op", 7),
            ("tag", 0b111)
        ]
    );
}

proptest! {
    #[test]
    fn prop_r_fields_round_trip(
        fmt in 0u32..8, opcode in 0u32..64,
        dest in 0u32..32, src1 in 0u32..32, src2 in 0u32..32, mask in 0u32..32,
    ) {
        let word = pack_r(fmt, opcode, dest, src1, src2, mask);
        prop_assert_eq!(
            values(Format::R, word),
            vec![
                ("src1", src1), ("dest", dest), ("mask", mask), ("src2", src2),
                ("opcode", opcode), ("fmt", fmt), ("tag", 0b110),
            ]
        );
    }

    #[test]
    fn prop_immediate_fields_round_trip(
        fmt in 0u32..8, opcode in 0u32..32, dest in 0u32..32, src1 in 0u32..32,
        imm9 in 0u32..512, imm14 in 0u32..16384, mask in 0u32..32,
    ) {
        let word = pack_i(fmt, opcode, dest, src1, imm9 as i32, mask);
        prop_assert_eq!(
            values(Format::I, word),
            vec![
                ("src1", src1), ("dest", dest), ("mask", mask),
                ("imm", imm9), ("opcode", opcode), ("fmt", fmt),
            ]
        );

        let word = pack_im(fmt, opcode, dest, src1, imm14 as i32);
        prop_assert_eq!(
            values(Format::Im, word),
            vec![("src1", src1), ("dest", dest), ("imm", imm14), ("opcode", opcode), ("fmt", fmt)]
        );
    }

    #[test]
    fn prop_unmasked_memory_fields_round_trip(
        is_load in any::<bool>(), op in 0u32..16, value in 0u32..32, ptr in 0u32..32,
        offset in 0u32..0x8000,
    ) {
        let word = pack_mm(is_load, op, value, ptr, offset);
        prop_assert_eq!(
            values(Format::Mm, word),
            vec![
                ("ptr", ptr), ("src_dest", value), ("offset", offset),
                ("op", op), ("load", u32::from(is_load)), ("tag", 0b10),
            ]
        );
    }

    #[test]
    fn prop_cache_control_reserved_bits_stay_clear(op in 0u32..16, reg in 0u32..32) {
        let word = pack_c(op, reg);
        prop_assert_eq!(Format::C.field("reserved").unwrap().extract(word), 0);
        prop_assert_eq!(word >> 29, 0b111);
    }
}

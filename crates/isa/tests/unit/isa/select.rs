//! Format Selector Tests.
//!
//! Covers the fmt code tables, the shape classification and the contract
//! violations the selector refuses.

use nyuzi_mc_core::isa::catalog::{
    BINARY_IMMEDIATE_SHAPES, BINARY_REGISTER_SHAPES, COMPARE_IMMEDIATE_SHAPES,
    COMPARE_REGISTER_SHAPES, UNARY_SHAPES, lookup,
};
use nyuzi_mc_core::isa::encode::{pack_m, pack_mm};
use nyuzi_mc_core::isa::format::Format;
use nyuzi_mc_core::isa::select::RegKind::{Scalar as S, Vector as V};
use nyuzi_mc_core::isa::select::{
    FmtCode, FormatChoice, OperandShape, Operand2, memory_format, pack_memory, select,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(FmtCode::ScalarUnmasked, 0, Some(0))]
#[case(FmtCode::VectorUnmaskedFromScalar, 1, Some(1))]
#[case(FmtCode::VectorMaskedFromScalar, 2, Some(3))]
#[case(FmtCode::VectorUnmaskedFromVector, 4, None)]
#[case(FmtCode::VectorMaskedFromVector, 5, None)]
fn test_fmt_code_tables(
    #[case] code: FmtCode,
    #[case] register: u32,
    #[case] immediate: Option<u32>,
) {
    assert_eq!(code.register_code(), register);
    assert_eq!(code.immediate_code(), immediate);
}

#[test]
fn test_register_codes_are_distinct() {
    let mut codes: Vec<u32> = FmtCode::ALL.iter().map(|c| c.register_code()).collect();
    codes.dedup();
    assert_eq!(codes.len(), FmtCode::ALL.len());
}

#[test]
fn test_binary_register_shapes_select_r_format() {
    let op = lookup("add_i").unwrap();
    let codes: Vec<(Format, u32)> = BINARY_REGISTER_SHAPES
        .iter()
        .map(|shape| {
            let choice = select(op, shape);
            (choice.format(), choice.code())
        })
        .collect();
    assert_eq!(
        codes,
        [
            (Format::R, 0),
            (Format::R, 1),
            (Format::R, 2),
            (Format::R, 4),
            (Format::R, 5)
        ]
    );
}

#[test]
fn test_binary_immediate_shapes() {
    let op = lookup("xor").unwrap();
    let choices: Vec<FormatChoice> = BINARY_IMMEDIATE_SHAPES
        .iter()
        .map(|shape| select(op, shape))
        .collect();
    assert_eq!(
        choices,
        [
            FormatChoice::Immediate(FmtCode::ScalarUnmasked),
            FormatChoice::Immediate(FmtCode::VectorUnmaskedFromScalar),
            FormatChoice::MaskedImmediate(FmtCode::VectorMaskedFromScalar),
        ]
    );
    assert_eq!(choices[2].format(), Format::I);
    assert_eq!(choices[2].code(), 3);
}

#[test]
fn test_unary_shapes_classify_by_source() {
    let op = lookup("clz").unwrap();
    let codes: Vec<u32> = UNARY_SHAPES
        .iter()
        .map(|shape| select(op, shape).code())
        .collect();
    assert_eq!(codes, [0, 1, 2, 4, 5]);
}

#[test]
fn test_compare_shapes() {
    let op = lookup("cmpgt_u").unwrap();
    let register: Vec<u32> = COMPARE_REGISTER_SHAPES
        .iter()
        .map(|shape| select(op, shape).code())
        .collect();
    assert_eq!(register, [0, 1, 4]);

    let immediate: Vec<FormatChoice> = COMPARE_IMMEDIATE_SHAPES
        .iter()
        .map(|shape| select(op, shape))
        .collect();
    assert_eq!(
        immediate,
        [
            FormatChoice::Immediate(FmtCode::ScalarUnmasked),
            FormatChoice::Immediate(FmtCode::VectorUnmaskedFromScalar),
        ]
    );
}

#[test]
fn test_float_register_forms_are_allowed() {
    let op = lookup("mul_f").unwrap();
    let choice = select(op, &OperandShape::register(V, V, V, true));
    assert_eq!(choice, FormatChoice::Register(FmtCode::VectorMaskedFromVector));
}

#[test]
fn test_choice_pack_matches_packers() {
    let op = lookup("or").unwrap();
    let word = select(op, &OperandShape::register(S, S, S, false)).pack(
        op.opcode,
        1,
        2,
        Operand2::Reg(3),
        0,
    );
    assert_eq!(word, 0xC001_8022);

    let op = lookup("move").unwrap();
    let word = FormatChoice::Immediate(FmtCode::ScalarUnmasked).pack(
        op.opcode,
        1,
        1,
        Operand2::Imm(72),
        0,
    );
    assert_eq!(word, 0x0F01_2021);
}

#[test]
fn test_memory_format_choice() {
    assert_eq!(memory_format(true), Format::M);
    assert_eq!(memory_format(false), Format::Mm);
    // The unmasked form ignores the mask argument.
    assert_eq!(pack_memory(false, true, 4, 3, 4, 8, 31), 0xA800_2064);
    assert_eq!(pack_memory(true, true, 8, 1, 2, 12, 3), 0xB006_0C22);
}

proptest! {
    #[test]
    fn prop_pack_memory_uses_chosen_format(
        masked in any::<bool>(),
        is_load in any::<bool>(),
        op in 0u32..16,
        src_dest in 0u32..32,
        ptr in 0u32..32,
        offset in any::<u32>(),
        mask in 0u32..32,
    ) {
        let expected = match memory_format(masked) {
            Format::M => pack_m(is_load, op, src_dest, ptr, offset, mask),
            _ => pack_mm(is_load, op, src_dest, ptr, offset),
        };
        prop_assert_eq!(pack_memory(masked, is_load, op, src_dest, ptr, offset, mask), expected);
    }
}

#[test]
#[should_panic(expected = "has no immediate form")]
fn test_float_immediate_is_rejected() {
    let op = lookup("add_f").unwrap();
    let _ = select(op, &OperandShape::immediate(S, S, false));
}

#[test]
#[should_panic(expected = "has no immediate form")]
fn test_float_compare_immediate_is_rejected() {
    let op = lookup("cmplt_f").unwrap();
    let _ = select(op, &COMPARE_IMMEDIATE_SHAPES[0]);
}

#[test]
#[should_panic(expected = "masked scalar")]
fn test_masked_scalar_is_rejected() {
    let op = lookup("and").unwrap();
    let _ = select(op, &OperandShape::register(S, S, S, true));
}

#[test]
#[should_panic(expected = "does not fit")]
fn test_register_choice_rejects_immediate_operand() {
    let _ = FormatChoice::Register(FmtCode::ScalarUnmasked).pack(0, 1, 2, Operand2::Imm(3), 0);
}

#[test]
#[should_panic(expected = "no immediate encoding")]
fn test_immediate_choice_rejects_vector_code() {
    let _ = FormatChoice::Immediate(FmtCode::VectorUnmaskedFromVector).code();
}

#[test]
fn test_shape_classification() {
    assert_eq!(
        OperandShape::immediate(V, V, true).fmt_code(),
        Some(FmtCode::VectorMaskedFromScalar)
    );
    assert_eq!(
        OperandShape::unary(V, S, false).fmt_code(),
        Some(FmtCode::VectorUnmaskedFromScalar)
    );
    assert_eq!(OperandShape::register(S, S, S, true).fmt_code(), None);
    assert!(OperandShape::immediate(S, V, false).is_vector());
    assert!(!OperandShape::unary(S, S, false).is_vector());
}

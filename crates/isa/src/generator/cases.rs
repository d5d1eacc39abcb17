//! Case Generator.
//!
//! Enumerates every (operation x operand shape) combination the catalog
//! allows, draws register numbers from a [`RegisterCursor`] and immediates
//! from an [`ImmediateSource`], and produces one [`TestRecord`] per
//! combination. Sweeps run class by class in [`OpClass::ALL`] order, each
//! starting from a reset cursor, so output depends only on the immediate
//! source.

use std::fmt::Write as _;

use tracing::{debug, info, trace};

use crate::common::Result;
use crate::common::constants::{
    ARITH_IMM_RANGE, CHECK_COLUMN, COMPARE_IMM_RANGE, VECTOR_OFFSET_STRIDE, VECTOR_OFFSET_WORDS,
};
use crate::common::reg::RegisterCursor;
use crate::emit::EmissionSink;
use crate::generator::imm::ImmediateSource;
use crate::generator::record::TestRecord;
use crate::isa::catalog::{
    BINARY_IMMEDIATE_SHAPES, BINARY_OPS, BINARY_REGISTER_SHAPES, CACHE_CONTROL_OPS,
    COMPARE_IMMEDIATE_SHAPES, COMPARE_OPS, COMPARE_REGISTER_SHAPES, CONTROL_REGISTER_CASES,
    FixedCase, MISC_CASES, OpClass, OperationEntry, SCALAR_MEMORY_OPS, SPECIAL_CASES, UNARY_OPS,
    UNARY_SHAPES, VECTOR_MEMORY_OPS,
};
use crate::isa::select::{OperandShape, Operand2, RegKind, Src2, pack_memory, select};
use crate::stats::GenerationStats;

/// Produces paired assembly/encoding test records.
#[derive(Debug)]
pub struct CaseGenerator<I> {
    cursor: RegisterCursor,
    immediates: I,
    check_column: usize,
}

impl<I: ImmediateSource> CaseGenerator<I> {
    /// Creates a generator drawing immediates from `immediates`.
    pub const fn new(immediates: I) -> Self {
        Self {
            cursor: RegisterCursor::new(),
            immediates,
            check_column: CHECK_COLUMN,
        }
    }

    /// Sets the column assembly text is padded to before its check annotation.
    #[must_use]
    pub const fn with_check_column(mut self, column: usize) -> Self {
        self.check_column = column;
        self
    }

    /// Generates every record of every class, in emission order.
    pub fn generate(&mut self) -> Vec<TestRecord> {
        OpClass::ALL
            .into_iter()
            .flat_map(|class| self.sweep(class))
            .collect()
    }

    /// Generates the records of one class, starting from a reset cursor.
    pub fn sweep(&mut self, class: OpClass) -> Vec<TestRecord> {
        self.cursor.reset();
        let records = match class {
            OpClass::Arithmetic => self.arithmetic(),
            OpClass::Unary => self.unary(),
            OpClass::Miscellaneous => fixed(&MISC_CASES),
            OpClass::Compare => self.compare(),
            OpClass::ScalarMemory => self.scalar_memory(),
            OpClass::VectorMemory => self.vector_memory(),
            OpClass::ControlRegister => fixed(&CONTROL_REGISTER_CASES),
            OpClass::CacheControl => CACHE_CONTROL_OPS
                .iter()
                .map(|entry| TestRecord::new(entry.text(), entry.word()))
                .collect(),
            OpClass::Special => fixed(&SPECIAL_CASES),
        };
        debug!(class = %class, records = records.len(), "sweep complete");
        records
    }

    /// Runs a full pass, handing each record's two corpus lines to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first error the sink reports; the pass stops there.
    pub fn run<S: EmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<GenerationStats> {
        let mut stats = GenerationStats::default();
        for class in OpClass::ALL {
            let records = self.sweep(class);
            for record in &records {
                trace!(text = record.text(), word = record.word(), "record");
                sink.emit(
                    &record.assembly_line(self.check_column),
                    &record.disassembly_line(),
                )?;
            }
            stats.record(class, records.len());
        }
        info!(records = stats.total(), "generation pass complete");
        Ok(stats)
    }

    fn arithmetic(&mut self) -> Vec<TestRecord> {
        let mut records = Vec::new();
        for op in &BINARY_OPS {
            for shape in &BINARY_REGISTER_SHAPES {
                let [dest, src1, src2, mask] = self.cursor.allocate_n();
                records.push(arith_record(op, shape, dest, src1, Operand2::Reg(src2), mask));
            }

            if !op.supports_immediate() {
                continue;
            }

            for shape in &BINARY_IMMEDIATE_SHAPES {
                let [dest, src1, mask] = self.cursor.allocate_n();
                let imm = self.immediates.next_in(ARITH_IMM_RANGE.0, ARITH_IMM_RANGE.1);
                records.push(arith_record(op, shape, dest, src1, Operand2::Imm(imm), mask));
            }
        }
        records
    }

    fn unary(&mut self) -> Vec<TestRecord> {
        let mut records = Vec::new();
        for op in &UNARY_OPS {
            let [dest, src, mask] = self.cursor.allocate_n();
            for shape in &UNARY_SHAPES {
                records.push(arith_record(op, shape, dest, 0, Operand2::Reg(src), mask));
            }
        }
        records
    }

    fn compare(&mut self) -> Vec<TestRecord> {
        let mut records = Vec::new();
        for op in &COMPARE_OPS {
            let [dest, src1, src2] = self.cursor.allocate_n();
            for shape in &COMPARE_REGISTER_SHAPES {
                records.push(arith_record(op, shape, dest, src1, Operand2::Reg(src2), 0));
            }

            if !op.supports_immediate() {
                continue;
            }

            let imm = self
                .immediates
                .next_in(COMPARE_IMM_RANGE.0, COMPARE_IMM_RANGE.1);
            for shape in &COMPARE_IMMEDIATE_SHAPES {
                records.push(arith_record(op, shape, dest, src1, Operand2::Imm(imm), 0));
            }
        }
        records
    }

    fn scalar_memory(&mut self) -> Vec<TestRecord> {
        let mut records = Vec::new();
        for entry in &SCALAR_MEMORY_OPS {
            let [value, ptr, offset] = self.cursor.allocate_n();
            for offset in [None, Some(offset)] {
                let text = format!(
                    "{} s{value}, {}",
                    entry.mnemonic,
                    address(offset, RegKind::Scalar, ptr)
                );
                let word = pack_memory(
                    false,
                    entry.is_load,
                    entry.op,
                    value,
                    ptr,
                    offset.unwrap_or(0),
                    0,
                );
                records.push(TestRecord::new(text, word));
            }
        }
        records
    }

    fn vector_memory(&mut self) -> Vec<TestRecord> {
        let mut records = Vec::new();
        for entry in &VECTOR_MEMORY_OPS {
            let [value, ptr, mask] = self.cursor.allocate_n();
            let words = self
                .immediates
                .next_in(VECTOR_OFFSET_WORDS.0, VECTOR_OFFSET_WORDS.1);
            let offset = (words * VECTOR_OFFSET_STRIDE) as u32;

            for (mnemonic, is_load) in [(entry.load, true), (entry.store, false)] {
                for offset in [Some(offset), None] {
                    for masked in [false, true] {
                        let mut text = String::from(mnemonic);
                        if masked {
                            text.push_str("_mask");
                        }
                        let _ = write!(text, " v{value}, ");
                        if masked {
                            let _ = write!(text, "s{mask}, ");
                        }
                        text.push_str(&address(offset, entry.pointer, ptr));

                        let word = pack_memory(
                            masked,
                            is_load,
                            entry.op_for(masked),
                            value,
                            ptr,
                            offset.unwrap_or(0),
                            if masked { mask } else { 0 },
                        );
                        records.push(TestRecord::new(text, word));
                    }
                }
            }
        }
        records
    }
}

/// Builds an arithmetic-format record: selects the format, packs the word and
/// writes operands in destination, mask, sources order.
fn arith_record(
    op: &OperationEntry,
    shape: &OperandShape,
    dest: u32,
    src1: u32,
    operand2: Operand2,
    mask: u32,
) -> TestRecord {
    let choice = select(op, shape);
    let mask = if shape.masked { mask } else { 0 };
    let src1_field = if shape.src1.is_some() { src1 } else { 0 };
    let word = choice.pack(op.opcode, dest, src1_field, operand2, mask);

    let mut text = format!("{} {}{dest}, ", op.mnemonic_for(shape.masked), shape.dest);
    if shape.masked {
        let _ = write!(text, "s{mask}, ");
    }
    if let Some(kind) = shape.src1 {
        let _ = write!(text, "{kind}{src1}, ");
    }
    match operand2 {
        Operand2::Reg(reg) => {
            if let Src2::Register(kind) = shape.src2 {
                let _ = write!(text, "{kind}{reg}");
            }
        }
        Operand2::Imm(imm) => {
            let _ = write!(text, "{imm}");
        }
    }

    TestRecord::new(text, word)
}

/// Memory operand text: `(s2)` without an offset, `12(s2)` with one.
fn address(offset: Option<u32>, pointer: RegKind, reg: u32) -> String {
    match offset {
        Some(offset) => format!("{offset}({pointer}{reg})"),
        None => format!("({pointer}{reg})"),
    }
}

fn fixed(cases: &[FixedCase]) -> Vec<TestRecord> {
    cases
        .iter()
        .map(|case| TestRecord::new(case.text, case.word))
        .collect()
}

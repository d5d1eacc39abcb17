use nyuzi_mc_core::emit::MemorySink;
use nyuzi_mc_core::generator::{CaseGenerator, FixedImmediates, SeededImmediates, TestRecord};
use nyuzi_mc_core::isa::catalog::OpClass;
use tracing_subscriber::EnvFilter;

/// Routes generator logs to the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Generator drawing from the seeded source.
pub fn seeded_generator(seed: u64) -> CaseGenerator<SeededImmediates> {
    CaseGenerator::new(SeededImmediates::new(seed))
}

/// Records of one class generated with every immediate draw fixed to `value`
/// (clamped into each draw's range).
pub fn sweep_with_constant(class: OpClass, value: i32) -> Vec<TestRecord> {
    CaseGenerator::new(FixedImmediates::new(vec![value])).sweep(class)
}

/// Runs a full pass with a seeded source into memory.
pub fn seeded_corpus(seed: u64) -> MemorySink {
    init_tracing();
    let mut sink = MemorySink::new();
    let _ = seeded_generator(seed).run(&mut sink).unwrap();
    sink
}

/// Splits an assembler corpus line into its text and its four bytes.
pub fn parse_assembly_line(line: &str) -> (String, [u8; 4]) {
    let (text, bytes) = line.split_once(" # CHECK: ").unwrap();
    (text.trim_end().to_owned(), parse_bytes(bytes.split(',')))
}

/// Splits a disassembler corpus line into its four bytes and its text.
pub fn parse_disassembly_line(line: &str) -> ([u8; 4], String) {
    let (bytes, text) = line.split_once(" # CHECK: ").unwrap();
    (parse_bytes(bytes.split(' ')), text.to_owned())
}

fn parse_bytes<'a>(parts: impl Iterator<Item = &'a str>) -> [u8; 4] {
    let bytes: Vec<u8> = parts
        .map(|part| u8::from_str_radix(part.trim().trim_start_matches("0x"), 16).unwrap())
        .collect();
    bytes.try_into().unwrap()
}

/// Finds the first record with exactly `text`.
pub fn find<'a>(records: &'a [TestRecord], text: &str) -> &'a TestRecord {
    records
        .iter()
        .find(|record| record.text() == text)
        .unwrap_or_else(|| panic!("no record `{text}`"))
}

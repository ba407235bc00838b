//! Program assembly: header followed by term blocks.

use crate::version::QasmVersion;

/// Assemble a full program from already-emitted term blocks.
///
/// `blocks` must be supplied in ascending term position; they are copied
/// verbatim after the header.
pub fn assemble<'a>(
    version: QasmVersion,
    num_qubits: usize,
    blocks: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut program = version.header(num_qubits);
    for block in blocks {
        program.push_str(block);
    }
    program
}

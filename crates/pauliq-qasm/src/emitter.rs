//! Emitter for synthesized term circuits.

use pauliq_ir::{Angle, Instruction, QubitId, TermCircuit};

/// Emit one term as an OpenQASM block.
///
/// The block opens with a blank line and a provenance comment naming the
/// source line, followed by one statement per instruction:
///
/// ```text
///
/// // New operator from line 1
/// ry(pi/2) q[0];
/// cx q[0], q[2];
/// rz(0.5*2.0*$[1]) q[2];
/// cx q[0], q[2];
/// ry(-pi/2) q[0];
/// ```
pub fn emit_block(circuit: &TermCircuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_term(circuit);
    emitter.output
}

/// Format a real number as an OpenQASM literal.
///
/// Always plain decimal with a fractional part (`2.0`, `-0.25`), which both
/// dialects accept.
pub fn format_real(value: f64) -> String {
    debug_assert!(value.is_finite(), "non-finite literal {value}");
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_term(&mut self, circuit: &TermCircuit) {
        self.writeln("");
        self.writeln(&format!("// New operator from line {}", circuit.position));
        for instruction in &circuit.instructions {
            self.emit_instruction(instruction);
        }
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        let name = instruction.name();
        let qubits = emit_qubits(&instruction.qubits);

        match instruction.gate.angle() {
            Some(angle) => self.writeln(&format!("{name}({}) {qubits};", emit_angle(angle))),
            None => self.writeln(&format!("{name} {qubits};")),
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn emit_angle(angle: &Angle) -> String {
    match angle {
        Angle::HalfPi => "pi/2".into(),
        Angle::NegHalfPi => "-pi/2".into(),
        Angle::Term {
            multiplier,
            coefficient,
            parameter,
        } => format!(
            "{}*{}*$[{parameter}]",
            format_real(*multiplier),
            format_real(*coefficient)
        ),
    }
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! OpenQASM dialect selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The OpenQASM dialect of the emitted program.
///
/// Gate syntax is shared by both dialects; only the header differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QasmVersion {
    /// `OPENQASM 2.0` with `qelib1.inc`, `qreg`/`creg` declarations.
    #[default]
    V2,
    /// `OPENQASM 3.0` with `stdgates.inc`, `qubit[]`/`bit[]` declarations.
    V3,
}

impl QasmVersion {
    /// Select a dialect by major version number.
    pub fn from_number(major: u8) -> Option<Self> {
        match major {
            2 => Some(QasmVersion::V2),
            3 => Some(QasmVersion::V3),
            _ => None,
        }
    }

    /// The major version number.
    pub fn number(self) -> u8 {
        match self {
            QasmVersion::V2 => 2,
            QasmVersion::V3 => 3,
        }
    }

    /// The program header declaring `q` and `c` registers of `num_qubits`.
    pub fn header(self, num_qubits: usize) -> String {
        match self {
            QasmVersion::V2 => format!(
                "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[{num_qubits}];\ncreg c[{num_qubits}];\n"
            ),
            QasmVersion::V3 => format!(
                "OPENQASM 3.0;\ninclude \"stdgates.inc\";\nqubit[{num_qubits}] q;\nbit[{num_qubits}] c;\n"
            ),
        }
    }
}

impl fmt::Display for QasmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.0", self.number())
    }
}

impl TryFrom<u8> for QasmVersion {
    type Error = String;

    fn try_from(major: u8) -> Result<Self, Self::Error> {
        Self::from_number(major).ok_or_else(|| format!("unsupported OpenQASM version {major}"))
    }
}

impl From<QasmVersion> for u8 {
    fn from(version: QasmVersion) -> Self {
        version.number()
    }
}

impl FromStr for QasmVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" | "2.0" => Ok(QasmVersion::V2),
            "3" | "3.0" => Ok(QasmVersion::V3),
            other => Err(format!(
                "unsupported OpenQASM version '{other}' (expected 2 or 3)"
            )),
        }
    }
}

//! Translate command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::io::Write;
use std::path::Path;

use pauliq_compile::{ExecutionMode, TranslationConfig, Translator};
use pauliq_ir::read_operators;
use pauliq_qasm::QasmVersion;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default)]
pub struct Overrides {
    pub qasm_version: Option<u8>,
    pub multiplier: Option<f64>,
    pub sequential: bool,
    pub threads: Option<usize>,
}

/// Execute the translate command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    config_file: Option<&str>,
    overrides: &Overrides,
) -> Result<()> {
    let config = build_config(config_file, overrides)?;

    eprintln!(
        "{} Translating {} to OpenQASM {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(config.qasm_version).yellow()
    );

    let set = read_operators(input)
        .with_context(|| format!("Failed to read operators from {input}"))?;
    eprintln!(
        "  Loaded: {} terms on {} qubits",
        set.len(),
        set.num_qubits()
    );

    let translator = Translator::new(config)?;
    let program = translator.translate(&set)?;

    eprintln!("{} Translation complete", style("✓").green().bold());

    match output {
        Some(path) => {
            save_program(&program, path)?;
            eprintln!("  Output: {}", style(path).green());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(program.as_bytes())
                .context("Failed to write program to stdout")?;
        }
    }

    Ok(())
}

/// Resolve the configuration: file, then environment, then flags.
fn build_config(config_file: Option<&str>, overrides: &Overrides) -> Result<TranslationConfig> {
    let mut config = TranslationConfig::load(config_file.map(Path::new))?;

    if let Some(number) = overrides.qasm_version {
        let version = QasmVersion::from_number(number)
            .ok_or_else(|| anyhow::anyhow!("Unsupported QASM version: {number} (use 2 or 3)"))?;
        config = config.with_qasm_version(version);
    }
    if let Some(multiplier) = overrides.multiplier {
        config = config.with_angle_multiplier(multiplier);
    }
    if overrides.sequential {
        config = config.with_execution(ExecutionMode::Sequential);
    }
    if let Some(threads) = overrides.threads {
        config = config.with_threads(threads);
    }

    config.validate()?;
    Ok(config)
}

/// Write the program, creating or truncating the file.
fn save_program(program: &str, path: &str) -> Result<()> {
    fs::write(path, program).with_context(|| format!("Failed to write file: {path}"))?;
    Ok(())
}

//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Pauli term to OpenQASM translator",
        style("pauliq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  pauliq-ir       Pauli terms, reader and gate model");
    println!("  pauliq-compile  Term synthesis and parallel translation");
    println!("  pauliq-qasm     OpenQASM 2.0 / 3.0 emitter");
    println!("  pauliq-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/pauliq").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}

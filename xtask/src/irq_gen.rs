// Licensed under the Apache-2.0 license

//! Interrupt table generation from libopencm3 `irq.json` descriptors.

use anyhow::{Context, Result};
use mcu_irq_generator::{
    generate, generate_artifacts, generate_checked, GeneratorConfig, IrqDescriptor,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Write all three outputs.
    Write,
    /// Compare the outputs on disk against what would be generated.
    Check,
    /// Print the outputs to stdout.
    Print,
}

pub(crate) fn run(config: &GeneratorConfig, mode: Mode) -> Result<()> {
    let context = || format!("IRQ table generation from {} failed", config.descriptor.display());
    match mode {
        Mode::Write => {
            generate(config).with_context(context)?;
        }
        Mode::Check => {
            generate_checked(config).with_context(context)?;
        }
        Mode::Print => print(config).with_context(context)?,
    }
    Ok(())
}

fn print(config: &GeneratorConfig) -> Result<()> {
    let descriptor = IrqDescriptor::load(&config.descriptor, Some(config.source_name().as_str()))?;
    for artifact in generate_artifacts(&descriptor, config) {
        println!("--- {} ({}) ---", artifact.kind, artifact.path.display());
        print!("{}", artifact.contents());
    }
    Ok(())
}

// Licensed under the Apache-2.0 license

//! The three generation passes.
//!
//! Each pass maps an [`IrqDescriptor`] to the lines of one output file, in
//! the layout libopencm3's startup code expects.

use crate::descriptor::IrqDescriptor;
use crate::naming::{cmsis_handler, isr_symbol, nvic_irq_macro};

/// Common header identifying the project and the descriptor a file came from.
fn banner(descriptor: &IrqDescriptor) -> Vec<String> {
    let origin = match descriptor.source() {
        Some(source) => format!("// It was generated by irqgen from {source}"),
        None => "// It was generated by irqgen.".to_string(),
    };
    vec![
        "// This file is part of the libopencm3 project.".to_string(),
        origin,
        String::new(),
    ]
}

/// `nvic.h`: interrupt numbers, their count and the handler prototypes.
pub fn nvic_header(descriptor: &IrqDescriptor) -> Vec<String> {
    let irqs = descriptor.irqs();
    let guard = descriptor.include_guard();
    let mut lines = banner(descriptor);

    lines.push(format!("#ifndef {guard}"));
    lines.push(format!("#define {guard}"));
    lines.push(String::new());
    lines.push("#include <libopencm3/cm3/nvic.h>".to_string());
    lines.push(String::new());

    lines.extend(
        irqs.iter()
            .enumerate()
            .map(|(i, irq)| format!("#define {} {i}", nvic_irq_macro(irq))),
    );

    lines.push(String::new());
    lines.push(format!("#define NVIC_IRQ_COUNT {}", irqs.len()));
    lines.push(String::new());
    lines.push("BEGIN_DECLS".to_string());
    lines.push(String::new());

    lines.extend(irqs.iter().map(|irq| format!("void {}(void);", isr_symbol(irq))));

    lines.push(String::new());
    lines.push("END_DECLS".to_string());
    lines.push(String::new());
    lines.push(format!("#endif // {guard}"));
    lines
}

/// `irqhandlers.h`: maps CMSIS `*_IRQHandler` names onto the `*_isr` symbols.
pub fn cmsis_header(descriptor: &IrqDescriptor) -> Vec<String> {
    let mut lines = banner(descriptor);
    lines.push(
        "// These definitions bend every interrupt handler that is defined CMSIS style".to_string(),
    );
    lines.push("// to the weak symbol exported by libopencm3.".to_string());
    lines.push(String::new());

    lines.extend(
        descriptor
            .irqs()
            .iter()
            .map(|irq| format!("#define {} {}", cmsis_handler(irq), isr_symbol(irq))),
    );
    lines
}

/// `vector_nvic.c`: weak handler aliases and the `IRQ_HANDLERS` initializer.
pub fn vector_fragment(descriptor: &IrqDescriptor) -> Vec<String> {
    let irqs = descriptor.irqs();
    let mut lines = banner(descriptor);
    lines.push("// This part needs to get included in the compilation unit where".to_string());
    lines.push("// blocking_handler gets defined due to the way #pragma works.".to_string());
    lines.push(String::new());

    lines.extend(irqs.iter().map(|irq| {
        format!(
            "void {}(void) __attribute__((weak, alias(\"blocking_handler\")));",
            isr_symbol(irq)
        )
    }));

    lines.push(String::new());
    lines.push(
        "// Initialization template for the interrupt vector table. This definition is"
            .to_string(),
    );
    lines.push(
        "// used by the startup code generator (vector.c) to set the initial values for"
            .to_string(),
    );
    lines.push(
        "// the interrupt handling routines to the chip family specific _isr weak".to_string(),
    );
    lines.push("// symbols.".to_string());
    lines.push(String::new());

    // Every entry but the last continues onto the next line. With no IRQs the
    // macro body is a single empty indented line.
    lines.push("#define IRQ_HANDLERS \\".to_string());
    let entries: Vec<String> = irqs
        .iter()
        .map(|irq| format!("[{}] = {}", nvic_irq_macro(irq), isr_symbol(irq)))
        .collect();
    if entries.is_empty() {
        lines.push("    ".to_string());
    } else {
        let last = entries.len() - 1;
        lines.extend(entries.iter().enumerate().map(|(i, entry)| {
            if i == last {
                format!("    {entry}")
            } else {
                format!("    {entry}, \\")
            }
        }));
    }
    lines
}

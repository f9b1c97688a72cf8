// Licensed under the Apache-2.0 license

//! Name derivation for generated macros and symbols.
//!
//! An IRQ name is used in two forms: upper-cased inside preprocessor macro
//! names and lower-cased inside handler symbol names. No other transformation
//! is applied, so names must already be valid identifier fragments (see
//! [`is_identifier_fragment`]).

/// Macro form of an IRQ name.
///
/// # Examples
/// ```
/// use mcu_irq_generator::naming::macro_name;
/// assert_eq!(macro_name("usart1"), "USART1");
/// assert_eq!(macro_name("Exti15_10"), "EXTI15_10");
/// ```
pub fn macro_name(irq: &str) -> String {
    irq.to_ascii_uppercase()
}

/// Symbol form of an IRQ name.
///
/// # Examples
/// ```
/// use mcu_irq_generator::naming::symbol_name;
/// assert_eq!(symbol_name("USB_HP_CAN_TX"), "usb_hp_can_tx");
/// ```
pub fn symbol_name(irq: &str) -> String {
    irq.to_ascii_lowercase()
}

/// `NVIC_<NAME>_IRQ`, the define holding the interrupt number.
pub fn nvic_irq_macro(irq: &str) -> String {
    format!("NVIC_{}_IRQ", macro_name(irq))
}

/// `<name>_isr`, the vendor-neutral handler symbol.
pub fn isr_symbol(irq: &str) -> String {
    format!("{}_isr", symbol_name(irq))
}

/// `<NAME>_IRQHandler`, the CMSIS handler name.
pub fn cmsis_handler(irq: &str) -> String {
    format!("{}_IRQHandler", macro_name(irq))
}

/// Returns true if `irq` can be spliced into a C identifier.
///
/// ASCII letters, digits and underscores only, not empty and not starting
/// with a digit (the symbol form has no prefix).
pub fn is_identifier_fragment(irq: &str) -> bool {
    let mut chars = irq.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

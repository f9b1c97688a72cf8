// Licensed under the Apache-2.0 license

//! Interrupt table generator for libopencm3-style chip families.
//!
//! This crate reads an `irq.json` descriptor listing the interrupt requests of
//! a microcontroller and produces the three C artifacts the startup code is
//! built from: the NVIC header, the CMSIS handler compatibility header and the
//! vector table fragment.
//!
//! ## Usage
//!
//! ```no_run
//! use mcu_irq_generator::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(
//!     "include/libopencm3/stm32/f1/irq.json",
//!     "gen/libopencm3/stm32/f1/nvic.h",
//!     "gen/libopencmsis/stm32/f1/irqhandlers.h",
//!     "gen/libopencm3/stm32/f1/vector_nvic.c",
//! );
//! generate(&config).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`descriptor`]: Loading and validating the `irq.json` descriptor
//! - [`naming`]: Macro and symbol name derivation
//! - [`config`]: Input and output paths ([`GeneratorConfig`])
//! - [`output`]: Generated artifacts and writing them to disk
//! - [`error`]: Error types
//! - `codegen`: The three generation passes and the public entry points

pub mod config;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod output;

mod codegen;

// Re-export main public API
pub use codegen::{
    cmsis_header, generate, generate_artifacts, generate_checked, nvic_header, vector_fragment,
};
pub use config::GeneratorConfig;
pub use descriptor::IrqDescriptor;
pub use error::{DescriptorError, IrqGenError, IrqGenResult};
pub use output::{ArtifactKind, GeneratedArtifact};

// Licensed under the Apache-2.0 license

//! Loading of `irq.json` interrupt descriptors.
//!
//! A descriptor is a JSON object of the form
//!
//! ```text
//! {
//!     "includeguard": "LIBOPENCM3_STM32_F1_NVIC_H",
//!     "irqs": ["wwdg", "pvd", "tamper", ...]
//! }
//! ```
//!
//! The position of a name in `irqs` is its interrupt number. Keys other than
//! `includeguard` and `irqs` are ignored.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{DescriptorError, IrqGenError, IrqGenResult};
use crate::naming::{is_identifier_fragment, macro_name};

/// Wire form of the descriptor, before validation.
#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "includeguard")]
    include_guard: Option<String>,
    irqs: Option<Vec<String>>,
}

/// A validated interrupt table description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IrqDescriptor {
    include_guard: String,
    irqs: Vec<String>,
    source: Option<String>,
}

impl IrqDescriptor {
    /// Builds a descriptor in memory, applying the same validation as
    /// [`IrqDescriptor::parse`].
    pub fn new(include_guard: &str, irqs: &[&str]) -> Result<Self, DescriptorError> {
        let descriptor = Self {
            include_guard: include_guard.to_string(),
            irqs: irqs.iter().map(|irq| irq.to_string()).collect(),
            source: None,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Reads and parses the descriptor at `path`.
    ///
    /// `source` is the name shown in the banner of generated files; when
    /// `None` the path itself is used.
    pub fn load(path: &Path, source: Option<&str>) -> IrqGenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| IrqGenError::io(path, e))?;
        let source = source
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(&text, &source)
    }

    /// Parses descriptor text; `source` names where it came from.
    pub fn parse(text: &str, source: &str) -> IrqGenResult<Self> {
        Self::parse_inner(text, source).map_err(|reason| IrqGenError::malformed(source, reason))
    }

    fn parse_inner(text: &str, source: &str) -> Result<Self, DescriptorError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(DescriptorError::NotAnObject);
        }
        let raw: RawDescriptor = serde_json::from_value(value)?;

        let irqs = raw.irqs.unwrap_or_else(|| {
            warn!("{source}: no \"irqs\" key, generating an empty interrupt table");
            Vec::new()
        });
        let include_guard = raw.include_guard.unwrap_or_else(|| {
            warn!("{source}: no \"includeguard\" key, include guard will be empty");
            String::new()
        });

        let descriptor = Self {
            include_guard,
            irqs,
            source: Some(source.to_string()),
        };
        descriptor.validate()?;
        debug!(
            "{source}: {} IRQs, include guard `{}`",
            descriptor.irqs.len(),
            descriptor.include_guard
        );
        Ok(descriptor)
    }

    /// Rejects names that would produce invalid or colliding C identifiers.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, name) in self.irqs.iter().enumerate() {
            if !is_identifier_fragment(name) {
                return Err(DescriptorError::InvalidIrqName {
                    name: name.clone(),
                    index,
                });
            }
            if let Some(&first) = seen.get(&macro_name(name)) {
                return Err(DescriptorError::DuplicateIrq {
                    name: name.clone(),
                    index,
                    first,
                });
            }
            seen.insert(macro_name(name), index);
        }
        Ok(())
    }

    /// Interrupt names in interrupt number order.
    pub fn irqs(&self) -> &[String] {
        &self.irqs
    }

    pub fn include_guard(&self) -> &str {
        &self.include_guard
    }

    /// Where the descriptor was loaded from, if it was loaded at all.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Sets the name shown in the banner of generated files.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

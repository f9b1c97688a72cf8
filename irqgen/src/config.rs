// Licensed under the Apache-2.0 license

//! Input and output locations for a generation run.
//!
//! [`GeneratorConfig`] replaces any notion of a current project or output
//! directory: every path the generator touches is named here.
//!
//! # Example
//!
//! ```
//! use mcu_irq_generator::config::GeneratorConfig;
//! use std::path::Path;
//!
//! let config = GeneratorConfig::new(
//!     "libopencm3/include/libopencm3/stm32/f1/irq.json",
//!     "gen/nvic.h",
//!     "gen/irqhandlers.h",
//!     "gen/vector_nvic.c",
//! )
//! .sources_root("libopencm3");
//! assert_eq!(config.source_name(), "include/libopencm3/stm32/f1/irq.json");
//! assert_eq!(config.nvic_header, Path::new("gen/nvic.h"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::{IrqGenError, IrqGenResult};
use crate::output::ArtifactKind;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// The `irq.json` descriptor to read.
    pub descriptor: PathBuf,

    /// Root the descriptor path is shown relative to in generated banners.
    /// When unset, or when the descriptor is not under it, the descriptor
    /// path is shown as given.
    pub sources_root: Option<PathBuf>,

    /// Destination of the NVIC header (`nvic.h`).
    pub nvic_header: PathBuf,

    /// Destination of the CMSIS compatibility header (`irqhandlers.h`).
    pub cmsis_header: PathBuf,

    /// Destination of the vector table fragment (`vector_nvic.c`).
    pub vector_fragment: PathBuf,
}

impl GeneratorConfig {
    /// Creates a config reading `descriptor` and writing the three outputs
    /// to the given paths.
    pub fn new(
        descriptor: impl Into<PathBuf>,
        nvic_header: impl Into<PathBuf>,
        cmsis_header: impl Into<PathBuf>,
        vector_fragment: impl Into<PathBuf>,
    ) -> Self {
        Self {
            descriptor: descriptor.into(),
            sources_root: None,
            nvic_header: nvic_header.into(),
            cmsis_header: cmsis_header.into(),
            vector_fragment: vector_fragment.into(),
        }
    }

    pub fn sources_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sources_root = Some(root.into());
        self
    }

    /// Rejects a config with an empty output path.
    pub fn validate(&self) -> IrqGenResult<()> {
        let outputs = [
            (ArtifactKind::NvicHeader, &self.nvic_header),
            (ArtifactKind::CmsisHeader, &self.cmsis_header),
            (ArtifactKind::VectorFragment, &self.vector_fragment),
        ];
        for (kind, path) in outputs {
            if path.as_os_str().is_empty() {
                return Err(IrqGenError::MissingPath(kind));
            }
        }
        Ok(())
    }

    /// The descriptor name printed in generated banners.
    pub fn source_name(&self) -> String {
        let relative = self
            .sources_root
            .as_deref()
            .and_then(|root| self.descriptor.strip_prefix(root).ok());
        relative
            .unwrap_or(self.descriptor.as_path())
            .display()
            .to_string()
    }

    /// The three output paths, in generation order.
    pub fn outputs(&self) -> [&Path; 3] {
        [
            self.nvic_header.as_path(),
            self.cmsis_header.as_path(),
            self.vector_fragment.as_path(),
        ]
    }
}

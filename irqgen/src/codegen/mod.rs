// Licensed under the Apache-2.0 license

//! Entry points for interrupt table generation.
//!
//! The implementation is split across submodules:
//! - `generate`: The three pure generation passes over an [`IrqDescriptor`]

mod generate;

pub use generate::{cmsis_header, nvic_header, vector_fragment};

use log::info;

use crate::config::GeneratorConfig;
use crate::descriptor::IrqDescriptor;
use crate::error::{IrqGenError, IrqGenResult};
use crate::output::{ArtifactKind, GeneratedArtifact};

/// Runs all three passes over `descriptor`, pairing each result with its
/// destination from `config`. Nothing is written.
pub fn generate_artifacts(
    descriptor: &IrqDescriptor,
    config: &GeneratorConfig,
) -> [GeneratedArtifact; 3] {
    [
        GeneratedArtifact::new(
            ArtifactKind::NvicHeader,
            &config.nvic_header,
            nvic_header(descriptor),
        ),
        GeneratedArtifact::new(
            ArtifactKind::CmsisHeader,
            &config.cmsis_header,
            cmsis_header(descriptor),
        ),
        GeneratedArtifact::new(
            ArtifactKind::VectorFragment,
            &config.vector_fragment,
            vector_fragment(descriptor),
        ),
    ]
}

fn load(config: &GeneratorConfig) -> IrqGenResult<IrqDescriptor> {
    config.validate()?;
    IrqDescriptor::load(&config.descriptor, Some(config.source_name().as_str()))
}

/// Loads the descriptor named by `config` and writes all three outputs.
///
/// The descriptor is fully loaded, validated and rendered before the first
/// file is opened, so a malformed descriptor leaves existing outputs untouched.
pub fn generate(config: &GeneratorConfig) -> IrqGenResult<[GeneratedArtifact; 3]> {
    let descriptor = load(config)?;
    info!(
        "Generating interrupt table for {} ({} IRQs)",
        config.source_name(),
        descriptor.irqs().len()
    );
    let artifacts = generate_artifacts(&descriptor, config);
    for artifact in &artifacts {
        artifact.write()?;
    }
    Ok(artifacts)
}

/// Verifies that the outputs named by `config` match what [`generate`] would
/// write, without modifying anything.
pub fn generate_checked(config: &GeneratorConfig) -> IrqGenResult<[GeneratedArtifact; 3]> {
    let descriptor = load(config)?;
    let artifacts = generate_artifacts(&descriptor, config);
    for artifact in &artifacts {
        if !artifact.is_current()? {
            return Err(IrqGenError::Stale {
                path: artifact.path.clone(),
            });
        }
        info!("{} {} is up to date", artifact.kind, artifact.path.display());
    }
    Ok(artifacts)
}

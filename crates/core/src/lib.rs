pub mod actions;
pub mod bindings;
pub mod error;
pub mod processors;
pub mod types;

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::processors::{
    bundle_builder::build_bundle,
    file_writer::{bundle_file_name, write_bundle},
};
use crate::types::manifest::ContractEntry;

pub use crate::error::{Error, Result};
pub use crate::types::config::GeneratorConfig;
pub use crate::types::manifest::DeploymentManifest;

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub data_files: Vec<PathBuf>,
    pub logic_files: Vec<PathBuf>,
}

impl GenerationReport {
    /// Every written file, data contracts first.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.data_files.iter().chain(self.logic_files.iter())
    }

    pub fn len(&self) -> usize {
        self.data_files.len() + self.logic_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads the manifest and writes one Safe batch file per contract.
///
/// Stops at the first failing entry. Files written before the failure are left in place.
pub fn generate_safe_txns(config: &GeneratorConfig) -> Result<GenerationReport> {
    let manifest = DeploymentManifest::from_file(&config.manifest)?;
    debug!(
        "Loaded {}: {} contract(s), {} data and {} logic",
        config.manifest.display(),
        manifest.len(),
        manifest.data_contracts.len(),
        manifest.logic_contracts.len()
    );

    generate_from_manifest(&manifest, &config.output_dir)
}

pub fn generate_from_manifest(
    manifest: &DeploymentManifest,
    output_dir: &Path,
) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = GenerationReport::default();
    for (idx, entry) in manifest.data_entries().enumerate() {
        report.data_files.push(emit(entry, idx, output_dir)?);
    }
    for (idx, entry) in manifest.logic_entries().enumerate() {
        report.logic_files.push(emit(entry, idx, output_dir)?);
    }

    info!(
        "Wrote {} Safe batch file(s) to {}",
        report.len(),
        output_dir.display()
    );
    Ok(report)
}

fn emit(entry: ContractEntry<'_>, idx: usize, output_dir: &Path) -> Result<PathBuf> {
    let bundle = build_bundle(entry, idx)?;
    let path = output_dir.join(bundle_file_name(&entry, idx)?);
    write_bundle(&bundle, &path)?;
    debug!("{} -> {}", bundle.meta.name, path.display());
    Ok(path)
}

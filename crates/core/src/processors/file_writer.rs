use crate::{
    error::{Error, Result},
    types::{manifest::ContractEntry, safe_batch::TransactionBundle},
};
use std::fs;
use std::path::Path;

/// `dataDeploy_{index}.json` for data contracts, `deploy_{index}_{name}.json` for logic contracts.
pub fn bundle_file_name(entry: &ContractEntry<'_>, index: usize) -> Result<String> {
    match entry.contract_name() {
        None => Ok(format!("dataDeploy_{}.json", index)),
        Some(name) => {
            if name.contains(['/', '\\']) {
                return Err(Error::Format {
                    kind: entry.kind(),
                    index,
                    field: "contractName",
                    reason: format!("{:?} cannot be used in a file name", name),
                });
            }
            Ok(format!("deploy_{}_{}.json", index, name))
        }
    }
}

// Overwrites any existing file at `path`.
pub fn write_bundle(bundle: &TransactionBundle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(bundle).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

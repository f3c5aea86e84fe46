use std::path::PathBuf;

use crate::types::manifest::ContractKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error: cannot read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: manifest {} is not valid JSON: {source}", .path.display())]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema error: manifest {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("format error: {kind}[{index}].{field}: {reason}")]
    Format {
        kind: ContractKind,
        index: usize,
        field: &'static str,
        reason: String,
    },
    #[error("serialize error: {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::ManifestRead { .. } | Error::ManifestJson { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}

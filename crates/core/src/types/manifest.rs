use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Deployment manifest as emitted by the deployment planner.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentManifest {
    pub data_contracts: Vec<DataContract>,
    pub logic_contracts: Vec<LogicContract>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataContract {
    pub address: String,
    pub salt: String,
    pub nonce: Number,
    pub initcode: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogicContract {
    pub address: String,
    pub salt: String,
    pub nonce: Number,
    pub initcode: String,
    pub contract_name: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContractKind {
    Data,
    Logic,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractKind::Data => write!(f, "dataContracts"),
            ContractKind::Logic => write!(f, "logicContracts"),
        }
    }
}

/// Borrowed view over either kind of manifest entry.
#[derive(Copy, Clone, Debug)]
pub enum ContractEntry<'a> {
    Data(&'a DataContract),
    Logic(&'a LogicContract),
}

impl<'a> ContractEntry<'a> {
    pub fn kind(&self) -> ContractKind {
        match self {
            ContractEntry::Data(_) => ContractKind::Data,
            ContractEntry::Logic(_) => ContractKind::Logic,
        }
    }

    pub fn address(&self) -> &'a str {
        match self {
            ContractEntry::Data(c) => &c.address,
            ContractEntry::Logic(c) => &c.address,
        }
    }

    pub fn salt(&self) -> &'a str {
        match self {
            ContractEntry::Data(c) => &c.salt,
            ContractEntry::Logic(c) => &c.salt,
        }
    }

    pub fn nonce(&self) -> &'a Number {
        match self {
            ContractEntry::Data(c) => &c.nonce,
            ContractEntry::Logic(c) => &c.nonce,
        }
    }

    pub fn initcode(&self) -> &'a str {
        match self {
            ContractEntry::Data(c) => &c.initcode,
            ContractEntry::Logic(c) => &c.initcode,
        }
    }

    /// Only logic contracts carry a name.
    pub fn contract_name(&self) -> Option<&'a str> {
        match self {
            ContractEntry::Data(_) => None,
            ContractEntry::Logic(c) => Some(&c.contract_name),
        }
    }
}

impl DeploymentManifest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file_content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let json_value: Value =
            serde_json::from_str(&file_content).map_err(|source| Error::ManifestJson {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_value(json_value, path)
    }

    /// `origin` is only used to label schema errors.
    pub fn from_value(value: Value, origin: &Path) -> Result<Self> {
        serde_json::from_value(value).map_err(|source| Error::Schema {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.data_contracts.len() + self.logic_contracts.len()
    }

    pub fn data_entries(&self) -> impl Iterator<Item = ContractEntry<'_>> {
        self.data_contracts.iter().map(ContractEntry::Data)
    }

    pub fn logic_entries(&self) -> impl Iterator<Item = ContractEntry<'_>> {
        self.logic_contracts.iter().map(ContractEntry::Logic)
    }
}

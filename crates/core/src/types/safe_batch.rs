use serde::{Deserialize, Serialize};

// Shape of a Safe Transaction Builder batch file.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBundle {
    pub chain_id: String,
    pub meta: BundleMeta,
    pub transactions: Vec<SafeTransaction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BundleMeta {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransaction {
    pub to: String,
    pub value: String,
    // Always null, the builder encodes calldata from the method and values.
    pub data: Option<String>,
    pub contract_method: ContractMethod,
    pub contract_inputs_values: ContractInputsValues,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractMethod {
    pub inputs: Vec<AbiParam>,
    pub name: String,
    pub payable: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AbiParam {
    #[serde(rename = "internalType")]
    pub internal_type: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl AbiParam {
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            internal_type: ty.to_string(),
            name: name.to_string(),
            ty: ty.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractInputsValues {
    pub to: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initcode: Option<String>,
}

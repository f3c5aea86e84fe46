use crate::types::safe_batch::{AbiParam, ContractInputsValues, ContractMethod, SafeTransaction};
use alloy::primitives::{Address, U256};
use serde_json::Value;

/// A single call rendered into a Safe batch entry.
pub trait Action {
    fn target(&self) -> Address;
    fn value(&self) -> U256 {
        U256::ZERO
    }
    fn method(&self) -> ContractMethod;
    fn inputs_values(&self) -> ContractInputsValues;
    fn describe(&self) -> Value;

    fn to_safe_transaction(&self) -> SafeTransaction {
        SafeTransaction {
            to: self.target().to_checksum(None),
            value: self.value().to_string(),
            data: None,
            contract_method: self.method(),
            contract_inputs_values: self.inputs_values(),
        }
    }
}

pub(crate) fn abi_inputs(table: &[(&str, &str)]) -> Vec<AbiParam> {
    table
        .iter()
        .map(|(ty, name)| AbiParam::new(ty, name))
        .collect()
}

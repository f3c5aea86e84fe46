use alloy::primitives::{Address, U256};
use serde_json::{Value, json};

use super::action::{Action, abi_inputs};
use crate::bindings::factory::DEPLOY_INPUTS;
use crate::types::safe_batch::{ContractInputsValues, ContractMethod};

pub struct DeployAction {
    factory: Address,
    // Carried into the input values even though deploy takes no `to`.
    recipient: Address,
    id: U256,
    // Kept as given, never re-encoded.
    initcode: String,
}

impl DeployAction {
    pub fn new(factory: Address, recipient: Address, id: U256, initcode: String) -> Self {
        Self {
            factory,
            recipient,
            id,
            initcode,
        }
    }
}

impl Action for DeployAction {
    fn target(&self) -> Address {
        self.factory
    }

    fn method(&self) -> ContractMethod {
        ContractMethod {
            inputs: abi_inputs(DEPLOY_INPUTS),
            name: "deploy".to_string(),
            payable: true,
        }
    }

    fn inputs_values(&self) -> ContractInputsValues {
        ContractInputsValues {
            to: self.recipient.to_checksum(None),
            id: self.id.to_string(),
            nonce: None,
            initcode: Some(self.initcode.clone()),
        }
    }

    fn describe(&self) -> Value {
        json!({
            "action": "Deploy",
            "factory": self.factory.to_string(),
            "id": self.id.to_string(),
            "initcode_len": self.initcode.len(),
        })
    }
}

use alloy::primitives::{Address, U256};
use serde_json::{Value, json};

use super::action::{Action, abi_inputs};
use crate::bindings::factory::{DeterministicFactory, MINT_INPUTS};
use crate::types::safe_batch::{ContractInputsValues, ContractMethod};

pub struct MintAction {
    factory: Address,
    call: DeterministicFactory::mintCall,
}

impl MintAction {
    pub fn new(factory: Address, to: Address, id: U256, nonce: u8) -> Self {
        Self {
            factory,
            call: DeterministicFactory::mintCall { to, id, nonce },
        }
    }
}

impl Action for MintAction {
    fn target(&self) -> Address {
        self.factory
    }

    fn method(&self) -> ContractMethod {
        ContractMethod {
            inputs: abi_inputs(MINT_INPUTS),
            name: "mint".to_string(),
            payable: false,
        }
    }

    fn inputs_values(&self) -> ContractInputsValues {
        ContractInputsValues {
            to: self.call.to.to_checksum(None),
            id: self.call.id.to_string(),
            nonce: Some(self.call.nonce.to_string()),
            initcode: None,
        }
    }

    fn describe(&self) -> Value {
        json!({
            "action": "Mint",
            "factory": self.factory.to_string(),
            "to": self.call.to.to_string(),
            "id": self.call.id.to_string(),
            "nonce": self.call.nonce,
        })
    }
}

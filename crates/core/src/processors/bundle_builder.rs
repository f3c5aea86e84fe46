use crate::{
    actions::{action::Action, deploy_action::DeployAction, mint_action::MintAction},
    bindings::factory::{CHAIN_ID, FACTORY, MINT_RECIPIENT},
    error::{Error, Result},
    types::{
        manifest::ContractEntry,
        safe_batch::{BundleMeta, TransactionBundle},
    },
};
use alloy::primitives::U256;
use log::debug;
use serde_json::Number;

// Build the mint + deploy batch for one manifest entry.
pub fn build_bundle(entry: ContractEntry<'_>, index: usize) -> Result<TransactionBundle> {
    let id =
        parse_salt(entry.salt()).map_err(|reason| format_error(&entry, index, "salt", reason))?;
    let nonce = parse_nonce(entry.nonce())
        .map_err(|reason| format_error(&entry, index, "nonce", reason))?;

    let name = match entry.contract_name() {
        None => format!("Deploy data contract {} at {}", index, entry.address()),
        Some(contract_name) => format!("Deploy contract {} at {}", contract_name, entry.address()),
    };

    let actions: Vec<Box<dyn Action>> = vec![
        Box::new(MintAction::new(FACTORY, MINT_RECIPIENT, id, nonce)),
        Box::new(DeployAction::new(
            FACTORY,
            MINT_RECIPIENT,
            id,
            entry.initcode().to_string(),
        )),
    ];

    for action in actions.iter() {
        debug!("{}[{}]: {}", entry.kind(), index, action.describe());
    }

    Ok(TransactionBundle {
        chain_id: CHAIN_ID.to_string(),
        meta: BundleMeta { name },
        transactions: actions
            .iter()
            .map(|action| action.to_safe_transaction())
            .collect(),
    })
}

/// Parses a hex salt (optionally `0x` prefixed) into the uint256 id.
///
/// Narrower than a generic hex integer parse: signs and `_` separators are rejected,
/// as is anything above `U256::MAX`.
pub fn parse_salt(raw: &str) -> std::result::Result<U256, String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(format!("{:?} has no hex digits", raw));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{:?} is not a hexadecimal integer", raw));
    }

    U256::from_str_radix(digits, 16).map_err(|_| format!("{:?} does not fit in uint256", raw))
}

pub fn parse_nonce(raw: &Number) -> std::result::Result<u8, String> {
    raw.as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| format!("{} is not an integer in 0..=255", raw))
}

fn format_error(
    entry: &ContractEntry<'_>,
    index: usize,
    field: &'static str,
    reason: String,
) -> Error {
    Error::Format {
        kind: entry.kind(),
        index,
        field,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::manifest::{DataContract, LogicContract};
    use alloy::primitives::Address;
    use serde_json::json;

    fn data_contract(salt: &str, nonce: i64) -> DataContract {
        DataContract {
            address: "0xAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaa".to_string(),
            salt: salt.to_string(),
            nonce: Number::from(nonce),
            initcode: "0xfe".to_string(),
        }
    }

    fn router() -> LogicContract {
        LogicContract {
            address: "0xBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbb".to_string(),
            salt: "0x10".to_string(),
            nonce: Number::from(7),
            initcode: "0x60806040".to_string(),
            contract_name: "Router".to_string(),
        }
    }

    #[test]
    fn test_data_contract_bundle() {
        let contract = data_contract("0x1", 0);
        let bundle = build_bundle(ContractEntry::Data(&contract), 0).unwrap();

        assert_eq!(bundle.chain_id, "1");
        assert_eq!(
            bundle.meta.name,
            "Deploy data contract 0 at 0xAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaa"
        );
        assert_eq!(bundle.transactions.len(), 2);

        let mint = &bundle.transactions[0];
        let deploy = &bundle.transactions[1];
        assert_eq!(mint.contract_method.name, "mint");
        assert_eq!(deploy.contract_method.name, "deploy");
        assert_eq!(mint.contract_inputs_values.id, "1");
        assert_eq!(mint.contract_inputs_values.nonce.as_deref(), Some("0"));
        assert_eq!(deploy.contract_inputs_values.id, mint.contract_inputs_values.id);
        assert_eq!(deploy.contract_inputs_values.initcode.as_deref(), Some("0xfe"));

        for tx in &bundle.transactions {
            assert_eq!(tx.to.parse::<Address>().unwrap(), FACTORY);
            assert_eq!(tx.value, "0");
            assert!(tx.data.is_none());
        }
    }

    #[test]
    fn test_data_contract_bundle_json() {
        let contract = data_contract("0x1", 0);
        let bundle = build_bundle(ContractEntry::Data(&contract), 0).unwrap();

        assert_eq!(
            serde_json::to_value(&bundle).unwrap(),
            json!({
                "chainId": "1",
                "meta": {
                    "name": "Deploy data contract 0 at 0xAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaaAAaa"
                },
                "transactions": [
                    {
                        "to": "0x000000000000b361194cfe6312EE3210d53C15AA",
                        "value": "0",
                        "data": null,
                        "contractMethod": {
                            "inputs": [
                                { "internalType": "address", "name": "to", "type": "address" },
                                { "internalType": "uint256", "name": "id", "type": "uint256" },
                                { "internalType": "uint8", "name": "nonce", "type": "uint8" }
                            ],
                            "name": "mint",
                            "payable": false
                        },
                        "contractInputsValues": {
                            "to": "0x82BF455e9ebd6a541EF10b683dE1edCaf05cE7A1",
                            "id": "1",
                            "nonce": "0"
                        }
                    },
                    {
                        "to": "0x000000000000b361194cfe6312EE3210d53C15AA",
                        "value": "0",
                        "data": null,
                        "contractMethod": {
                            "inputs": [
                                { "internalType": "uint256", "name": "id", "type": "uint256" },
                                { "internalType": "bytes", "name": "initcode", "type": "bytes" }
                            ],
                            "name": "deploy",
                            "payable": true
                        },
                        "contractInputsValues": {
                            "to": "0x82BF455e9ebd6a541EF10b683dE1edCaf05cE7A1",
                            "id": "1",
                            "initcode": "0xfe"
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_mint_recipient_is_not_entry_address() {
        let contract = data_contract("0x1", 0);
        let bundle = build_bundle(ContractEntry::Data(&contract), 0).unwrap();
        let to: Address = bundle.transactions[0]
            .contract_inputs_values
            .to
            .parse()
            .unwrap();

        assert_eq!(to, MINT_RECIPIENT);
        assert_ne!(to, contract.address.parse::<Address>().unwrap());
    }

    #[test]
    fn test_logic_contract_bundle() {
        let contract = router();
        let bundle = build_bundle(ContractEntry::Logic(&contract), 3).unwrap();

        assert_eq!(
            bundle.meta.name,
            "Deploy contract Router at 0xBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbbBBbb"
        );
        assert_eq!(bundle.transactions[0].contract_inputs_values.id, "16");
        assert_eq!(
            bundle.transactions[0].contract_inputs_values.nonce.as_deref(),
            Some("7")
        );
        assert_eq!(
            bundle.transactions[1].contract_inputs_values.initcode.as_deref(),
            Some("0x60806040")
        );
    }

    #[test]
    fn test_parse_salt() {
        assert_eq!(parse_salt("0x1").unwrap(), U256::from(1));
        assert_eq!(parse_salt("0XfF").unwrap(), U256::from(255));
        assert_eq!(parse_salt("10").unwrap(), U256::from(16));
        assert_eq!(parse_salt(" 0x0a ").unwrap(), U256::from(10));
        assert_eq!(
            parse_salt(&format!("0x{}", "ff".repeat(32))).unwrap(),
            U256::MAX
        );

        assert!(parse_salt("").is_err());
        assert!(parse_salt("0x").is_err());
        assert!(parse_salt("0xzz").is_err());
        assert!(parse_salt("-0x1").is_err());
        assert!(parse_salt(&format!("0x1{}", "00".repeat(32))).is_err());
    }

    #[test]
    fn test_large_salt_renders_decimal() {
        let contract = data_contract(
            "0x000000000000000000000000000000000000000000000000ffffffffffffffff",
            1,
        );
        let bundle = build_bundle(ContractEntry::Data(&contract), 0).unwrap();
        assert_eq!(
            bundle.transactions[0].contract_inputs_values.id,
            "18446744073709551615"
        );
    }

    #[test]
    fn test_parse_nonce() {
        assert_eq!(parse_nonce(&Number::from(0)).unwrap(), 0);
        assert_eq!(parse_nonce(&Number::from(255)).unwrap(), 255);
        assert!(parse_nonce(&Number::from(256)).is_err());
        assert!(parse_nonce(&Number::from(-1)).is_err());
        assert!(parse_nonce(&Number::from_f64(1.5).unwrap()).is_err());
    }

    #[test]
    fn test_bad_salt_is_format_error() {
        let contract = data_contract("not-hex", 0);
        let err = build_bundle(ContractEntry::Data(&contract), 4).unwrap_err();

        assert!(err.is_format());
        assert!(err.to_string().contains("dataContracts[4].salt"));
    }

    #[test]
    fn test_out_of_range_nonce_is_format_error() {
        let contract = data_contract("0x1", 300);
        let err = build_bundle(ContractEntry::Data(&contract), 0).unwrap_err();

        assert!(err.is_format());
        assert!(err.to_string().contains("nonce"));
    }
}

use alloy::primitives::{Address, address};
use alloy::sol;

sol! {
    contract DeterministicFactory {
        function mint(address to, uint256 id, uint8 nonce) external;
        function deploy(uint256 id, bytes memory initcode) external payable;
    }
}

pub const CHAIN_ID: &str = "1";

pub const FACTORY: Address = address!("0x000000000000b361194cfe6312EE3210d53C15AA");

// Receives the minted id. Not the contract's own address, which is only a label.
pub const MINT_RECIPIENT: Address = address!("0x82BF455e9ebd6a541EF10b683dE1edCaf05cE7A1");

// (type, name) pairs, in call order.
pub const MINT_INPUTS: &[(&str, &str)] =
    &[("address", "to"), ("uint256", "id"), ("uint8", "nonce")];
pub const DEPLOY_INPUTS: &[(&str, &str)] = &[("uint256", "id"), ("bytes", "initcode")];

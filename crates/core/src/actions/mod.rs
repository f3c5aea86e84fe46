pub mod action;
pub mod deploy_action;
pub mod mint_action;

#![no_std]

mod errors;
mod events;
mod gate;
mod oracle;
mod policy;
mod storage;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::oracle::{PriceOracle, PriceOracleClient, PriceReading};
pub use crate::types::{DataKey, DirectorSet, Proposal, ProposalStatus, WalletState};
pub use crate::wallet::{DualControlWallet, DualControlWalletClient};

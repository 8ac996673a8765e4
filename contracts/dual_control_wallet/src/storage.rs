use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{DataKey, DirectorSet, Proposal, WalletState};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_BUMP_AMOUNT: u32 = 86_400; // ~5 days
const PROPOSAL_LIFETIME_THRESHOLD: u32 = 120_960; // ~7 days
const PROPOSAL_BUMP_AMOUNT: u32 = 1_051_200; // ~60 days

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !is_initialized(env) {
        return Err(WalletError::NotInitialized);
    }
    bump_instance(env);
    Ok(())
}

pub fn write_config(
    env: &Env,
    directors: &DirectorSet,
    state: &WalletState,
    asset: &Address,
    oracle: &Address,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Directors, directors);
    instance.set(&DataKey::WalletState, state);
    instance.set(&DataKey::Asset, asset);
    instance.set(&DataKey::Oracle, oracle);
    instance.set(&DataKey::NextProposalId, &0u64);
    instance.set(&DataKey::PendingIds, &Vec::<u64>::new(env));
    bump_instance(env);
}

pub fn directors(env: &Env) -> Result<DirectorSet, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Directors)
        .ok_or(WalletError::NotInitialized)
}

pub fn wallet_state(env: &Env) -> Result<WalletState, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::WalletState)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_wallet_state(env: &Env, state: &WalletState) {
    env.storage().instance().set(&DataKey::WalletState, state);
}

pub fn asset(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Asset)
        .ok_or(WalletError::NotInitialized)
}

pub fn oracle(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(WalletError::NotInitialized)
}

pub fn next_proposal_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextProposalId)
        .unwrap_or(0u64)
}

/// Hands out the next id and advances the counter. Ids start at 0.
pub fn allocate_proposal_id(env: &Env) -> Result<u64, WalletError> {
    let id = next_proposal_id(env);
    let next = id.checked_add(1).ok_or(WalletError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::NextProposalId, &next);
    Ok(id)
}

/// Plain read; the record's TTL is only extended when it is written.
pub fn load_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(WalletError::NotFound)
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage().persistent().extend_ttl(
        &key,
        PROPOSAL_LIFETIME_THRESHOLD,
        PROPOSAL_BUMP_AMOUNT,
    );
}

/// Ids of undecided proposals, oldest first.
pub fn pending_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DataKey::PendingIds)
        .unwrap_or(Vec::new(env))
}

pub fn add_pending(env: &Env, proposal_id: u64) {
    let mut pending = pending_ids(env);
    pending.push_back(proposal_id);
    env.storage().instance().set(&DataKey::PendingIds, &pending);
}

pub fn remove_pending(env: &Env, proposal_id: u64) {
    let mut pending = pending_ids(env);
    if let Some(index) = pending.first_index_of(proposal_id) {
        pending.remove(index);
        env.storage().instance().set(&DataKey::PendingIds, &pending);
    }
}

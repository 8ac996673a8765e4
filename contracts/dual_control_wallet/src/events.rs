use soroban_sdk::{symbol_short, Address, Env};

use crate::types::ProposalStatus;

pub fn wallet_initialized(env: &Env, director1: &Address, director2: &Address) {
    env.events().publish(
        (symbol_short!("wallet"), symbol_short!("init")),
        (director1.clone(), director2.clone()),
    );
}

pub fn proposal_created(env: &Env, proposal_id: u64, creator: &Address) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("created")),
        (proposal_id, creator.clone()),
    );
}

pub fn proposal_executed(env: &Env, proposal_id: u64, decider: &Address) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("executed")),
        (proposal_id, decider.clone()),
    );
}

pub fn proposal_status_changed(
    env: &Env,
    proposal_id: u64,
    decider: &Address,
    status: ProposalStatus,
) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("status")),
        (proposal_id, decider.clone(), status),
    );
}

pub fn funds_received(env: &Env, sender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funds"), symbol_short!("received")),
        (sender.clone(), amount),
    );
}

pub fn funds_released(env: &Env, target: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funds"), symbol_short!("released")),
        (target.clone(), amount),
    );
}

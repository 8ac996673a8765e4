//! Who may propose and who may decide.

use soroban_sdk::Address;

use crate::errors::WalletError;
use crate::types::{DirectorSet, Proposal};

pub fn can_propose(directors: &DirectorSet, principal: &Address) -> bool {
    directors.contains(principal)
}

pub fn can_decide(directors: &DirectorSet, principal: &Address, proposal: &Proposal) -> bool {
    ensure_can_decide(directors, principal, proposal).is_ok()
}

pub fn ensure_can_propose(directors: &DirectorSet, principal: &Address) -> Result<(), WalletError> {
    if !can_propose(directors, principal) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

/// Reports the first failing clause, in the order callers observe them:
/// membership, then self-approval, then status.
pub fn ensure_can_decide(
    directors: &DirectorSet,
    principal: &Address,
    proposal: &Proposal,
) -> Result<(), WalletError> {
    if !directors.contains(principal) {
        return Err(WalletError::Unauthorized);
    }

    if proposal.creator == *principal {
        return Err(WalletError::SelfApprovalForbidden);
    }

    if !proposal.is_pending() {
        return Err(WalletError::AlreadyDecided);
    }

    Ok(())
}

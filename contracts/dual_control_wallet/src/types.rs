use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Directors,
    WalletState,
    Asset,
    Oracle,
    NextProposalId,
    PendingIds,
    Proposal(u64),
}

/// The two principals allowed to propose and decide.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectorSet {
    pub director1: Address,
    pub director2: Address,
}

impl DirectorSet {
    pub fn contains(&self, principal: &Address) -> bool {
        self.director1 == *principal || self.director2 == *principal
    }
}

/// Configuration currently in force. Only an accepted proposal changes it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletState {
    pub display_name: String,
    pub payout_targets: Vec<Address>,
    pub threshold_value: u128,
}

impl WalletState {
    /// Partial update: every field set on the proposal overwrites its
    /// counterpart, unset fields are left alone.
    pub fn apply(&mut self, proposal: &Proposal) {
        if let Some(name) = &proposal.proposed_name {
            self.display_name = name.clone();
        }

        if let Some(primary) = &proposal.proposed_primary_target {
            self.payout_targets.set(0, primary.clone());
        }

        if let Some(secondary) = &proposal.proposed_secondary_target {
            if self.payout_targets.len() > 1 {
                self.payout_targets.set(1, secondary.clone());
            } else {
                self.payout_targets.push_back(secondary.clone());
            }
        }

        if let Some(threshold) = proposal.proposed_threshold {
            self.threshold_value = threshold;
        }
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub creator: Address,
    pub decider: Option<Address>,
    pub status: ProposalStatus,
    pub proposed_name: Option<String>,
    pub proposed_primary_target: Option<Address>,
    pub proposed_secondary_target: Option<Address>,
    pub proposed_threshold: Option<u128>,
    pub created_at: u64,
    pub decided_at: Option<u64>,
}

impl Proposal {
    /// Builds a pending record. An empty name and a zero threshold mean
    /// "no change" and are stored as `None`.
    pub fn pending(
        id: u64,
        creator: Address,
        proposed_name: Option<String>,
        proposed_primary_target: Option<Address>,
        proposed_secondary_target: Option<Address>,
        proposed_threshold: Option<u128>,
        created_at: u64,
    ) -> Self {
        Proposal {
            id,
            creator,
            decider: None,
            status: ProposalStatus::Pending,
            proposed_name: proposed_name.filter(|name| name.len() > 0),
            proposed_primary_target,
            proposed_secondary_target,
            proposed_threshold: proposed_threshold.filter(|threshold| *threshold > 0),
            created_at,
            decided_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.proposed_name.is_none()
            && self.proposed_primary_target.is_none()
            && self.proposed_secondary_target.is_none()
            && self.proposed_threshold.is_none()
    }

    pub fn is_pending(&self) -> bool {
        self.status == ProposalStatus::Pending
    }
}

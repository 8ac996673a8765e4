use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

use crate::errors::WalletError;
use crate::events;
use crate::gate;
use crate::policy;
use crate::storage;
use crate::types::{DirectorSet, Proposal, ProposalStatus, WalletState};

#[contract]
pub struct DualControlWallet;

#[contractimpl]
impl DualControlWallet {
    pub fn initialize(
        env: Env,
        director1: Address,
        director2: Address,
        display_name: String,
        payout_targets: Vec<Address>,
        threshold_value: u128,
        asset: Address,
        oracle: Address,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        if director1 == director2 {
            return Err(WalletError::InvalidDirectors);
        }

        if payout_targets.is_empty() || payout_targets.len() > 2 {
            return Err(WalletError::InvalidPayoutTargets);
        }

        let directors = DirectorSet {
            director1,
            director2,
        };
        let state = WalletState {
            display_name,
            payout_targets,
            threshold_value,
        };
        storage::write_config(&env, &directors, &state, &asset, &oracle);

        events::wallet_initialized(&env, &directors.director1, &directors.director2);
        Ok(())
    }

    /// Opens a change request. Unset fields (`None`, an empty name, a zero
    /// threshold) leave the matching wallet field as it is when accepted.
    pub fn propose(
        env: Env,
        caller: Address,
        name: Option<String>,
        primary_target: Option<Address>,
        secondary_target: Option<Address>,
        threshold: Option<u128>,
    ) -> Result<u64, WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        let directors = storage::directors(&env)?;
        policy::ensure_can_propose(&directors, &caller)?;

        let proposal = Proposal::pending(
            storage::next_proposal_id(&env),
            caller.clone(),
            name,
            primary_target,
            secondary_target,
            threshold,
            env.ledger().timestamp(),
        );
        if proposal.is_empty() {
            return Err(WalletError::InvalidProposal);
        }

        let proposal_id = storage::allocate_proposal_id(&env)?;
        storage::save_proposal(&env, &proposal);
        storage::add_pending(&env, proposal_id);

        log!(&env, "proposal created", proposal_id, caller);
        events::proposal_created(&env, proposal_id, &caller);
        Ok(proposal_id)
    }

    pub fn decide(
        env: Env,
        caller: Address,
        proposal_id: u64,
        accept: bool,
    ) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        let mut proposal = storage::load_proposal(&env, proposal_id)?;
        let directors = storage::directors(&env)?;
        policy::ensure_can_decide(&directors, &caller, &proposal)?;

        proposal.decider = Some(caller.clone());
        proposal.decided_at = Some(env.ledger().timestamp());
        storage::remove_pending(&env, proposal_id);

        if accept {
            let mut state = storage::wallet_state(&env)?;
            state.apply(&proposal);
            proposal.status = ProposalStatus::Accepted;

            storage::set_wallet_state(&env, &state);
            storage::save_proposal(&env, &proposal);

            log!(&env, "proposal accepted", proposal_id, caller);
            events::proposal_executed(&env, proposal_id, &caller);
        } else {
            proposal.status = ProposalStatus::Rejected;
            storage::save_proposal(&env, &proposal);

            log!(&env, "proposal rejected", proposal_id, caller);
        }

        events::proposal_status_changed(&env, proposal_id, &caller, proposal.status);
        Ok(())
    }

    /// Pays the whole balance out to the configured targets. Open to any
    /// caller and independent of `balance_meets_threshold`.
    pub fn release_funds(env: Env, caller: Address) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        let token = token::TokenClient::new(&env, &storage::asset(&env)?);
        let wallet = env.current_contract_address();
        let balance = token.balance(&wallet);
        if balance <= 0 {
            return Err(WalletError::NothingToTransfer);
        }

        let targets = storage::wallet_state(&env)?.payout_targets;
        let share = gate::payout_share(balance, targets.len());
        log!(&env, "releasing funds", caller, balance, share);
        if share == 0 {
            return Ok(());
        }

        for target in targets.iter() {
            match token.try_transfer(&wallet, &target, &share) {
                Ok(Ok(())) => events::funds_released(&env, &target, share),
                _ => return Err(WalletError::TransferFailed),
            }
        }

        Ok(())
    }

    pub fn balance_meets_threshold(env: Env) -> Result<bool, WalletError> {
        storage::require_initialized(&env)?;

        // Checked before the oracle is consulted
        let threshold_value =
            gate::configured_threshold(storage::wallet_state(&env)?.threshold_value)?;

        let held_value = Self::held_value(env)?;
        Ok(gate::meets_threshold(held_value, threshold_value))
    }

    /// Accepts `amount` of the governed asset from `from`.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let token = token::TokenClient::new(&env, &storage::asset(&env)?);
        token.transfer(&from, &env.current_contract_address(), &amount);

        events::funds_received(&env, &from, amount);
        Ok(())
    }

    /// Current holdings expressed in the reference currency.
    pub fn held_value(env: Env) -> Result<u128, WalletError> {
        storage::require_initialized(&env)?;

        let reading = gate::read_oracle(&env, &storage::oracle(&env)?)?;
        let balance = Self::balance(env)?;
        gate::reference_value(balance, &reading)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        storage::require_initialized(&env)?;
        let token = token::TokenClient::new(&env, &storage::asset(&env)?);
        Ok(token.balance(&env.current_contract_address()))
    }

    pub fn wallet_state(env: Env) -> Result<WalletState, WalletError> {
        storage::require_initialized(&env)?;
        storage::wallet_state(&env)
    }

    pub fn display_name(env: Env) -> Result<String, WalletError> {
        Ok(Self::wallet_state(env)?.display_name)
    }

    pub fn payout_targets(env: Env) -> Result<Vec<Address>, WalletError> {
        Ok(Self::wallet_state(env)?.payout_targets)
    }

    pub fn threshold_value(env: Env) -> Result<u128, WalletError> {
        Ok(Self::wallet_state(env)?.threshold_value)
    }

    pub fn directors(env: Env) -> Result<DirectorSet, WalletError> {
        storage::require_initialized(&env)?;
        storage::directors(&env)
    }

    pub fn is_director(env: Env, principal: Address) -> Result<bool, WalletError> {
        Ok(Self::directors(env)?.contains(&principal))
    }

    pub fn asset(env: Env) -> Result<Address, WalletError> {
        storage::require_initialized(&env)?;
        storage::asset(&env)
    }

    pub fn oracle(env: Env) -> Result<Address, WalletError> {
        storage::require_initialized(&env)?;
        storage::oracle(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, WalletError> {
        storage::require_initialized(&env)?;
        storage::load_proposal(&env, proposal_id)
    }

    /// Id the next proposal will receive; equals the number created so far.
    pub fn next_proposal_id(env: Env) -> Result<u64, WalletError> {
        storage::require_initialized(&env)?;
        Ok(storage::next_proposal_id(&env))
    }

    pub fn pending_proposals(env: Env) -> Result<Vec<u64>, WalletError> {
        storage::require_initialized(&env)?;
        Ok(storage::pending_ids(&env))
    }
}

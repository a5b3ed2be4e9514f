#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod governance_proxy;
pub mod proposals;
pub mod reputation;
pub mod types;
pub mod vote_ledger;
pub mod voting_power;

use errors::{
    ERR_ALREADY_EXECUTED, ERR_ALREADY_FINALIZED, ERR_ALREADY_VOTED, ERR_DESCRIPTION_TOO_LONG,
    ERR_INVALID_UTF8, ERR_NOT_PASSED, ERR_TITLE_TOO_LONG, ERR_VOTING_ENDED, ERR_VOTING_NOT_ENDED,
};
use types::{utf8_char_count, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Maximum proposal title length in characters
const MAX_TITLE_CHARS: usize = 100;

/// Maximum proposal description length in characters
const MAX_DESCRIPTION_CHARS: usize = 500;

/// Longest UTF-8 encoding of a single character
const MAX_UTF8_CHAR_BYTES: usize = 4;

/// Scratch space large enough for the longest acceptable description
const TEXT_SCRATCH_LEN: usize = MAX_DESCRIPTION_CHARS * MAX_UTF8_CHAR_BYTES;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ReputationGovernance:
    config::ConfigModule
    + events::EventsModule
    + proposals::ProposalStoreModule
    + reputation::ReputationModule
    + vote_ledger::VoteLedgerModule
    + voting_power::VotingPowerModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the admin for the lifetime of the contract.
    #[init]
    fn init(&self, voting_period: OptionalValue<u64>) {
        let caller = self.blockchain().get_caller();
        let voting_period = voting_period
            .into_option()
            .unwrap_or(config::DEFAULT_VOTING_PERIOD);

        self.contract_owner().set(&caller);
        self.voting_period().set(voting_period);
        self.proposal_counter().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // Anyone can propose. Voting opens immediately.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, title: ManagedBuffer, description: ManagedBuffer) -> u64 {
        self.require_max_chars(&title, MAX_TITLE_CHARS, ERR_TITLE_TOO_LONG);
        self.require_max_chars(&description, MAX_DESCRIPTION_CHARS, ERR_DESCRIPTION_TOO_LONG);

        let caller = self.blockchain().get_caller();
        let start_height = self.blockchain().get_block_nonce();
        let end_height = start_height.saturating_add(self.voting_period().get());

        let proposal_id =
            self.create_proposal(&caller, title, description, start_height, end_height);
        self.increment_total_proposals(&caller);

        self.proposal_submitted_event(proposal_id, &caller, start_height, end_height);

        proposal_id
    }

    /// Fails with `too_long` past `max_chars` UTF-8 characters, and on
    /// malformed UTF-8.
    fn require_max_chars(&self, text: &ManagedBuffer, max_chars: usize, too_long: &str) {
        let len = text.len();
        // Past four bytes per character the text cannot fit.
        require!(len <= max_chars * MAX_UTF8_CHAR_BYTES, too_long);

        let mut scratch = [0u8; TEXT_SCRATCH_LEN];
        let bytes = &mut scratch[..len];
        require!(text.load_slice(0, bytes).is_ok(), ERR_INVALID_UTF8);

        match utf8_char_count(bytes) {
            Some(chars) => require!(chars <= max_chars, too_long),
            None => sc_panic!(ERR_INVALID_UTF8),
        }
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per identity, weighted by reputation at cast time.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_nonce();
        require!(!proposal.is_voting_ended(now), ERR_VOTING_ENDED);
        require!(!self.has_voted(proposal_id, &caller), ERR_ALREADY_VOTED);

        let power = self.get_voting_power(&caller);

        // The record goes in before the tally moves.
        self.record_vote(proposal_id, &caller, support, power);
        self.apply_vote(&mut proposal, support, power);
        self.increment_votes_cast(&caller);

        self.vote_event(proposal_id, &caller, support, power);
    }

    // ========================================================
    // ENDPOINT: finalize
    // Callable by anyone once the window closes. Active → Passed | Failed.
    // ========================================================

    #[endpoint(finalize)]
    fn finalize(&self, proposal_id: u64) -> bool {
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_nonce();
        require!(proposal.is_voting_ended(now), ERR_VOTING_NOT_ENDED);
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_ALREADY_FINALIZED
        );

        let passed = proposal.has_majority();
        if passed {
            self.set_status(&mut proposal, ProposalStatus::Passed);
            self.increment_successful_proposals(&proposal.proposer);
        } else {
            self.set_status(&mut proposal, ProposalStatus::Failed);
        }

        self.proposal_finalized_event(proposal_id, passed);

        passed
    }

    // ========================================================
    // ENDPOINT: execute
    // Flags a passed proposal as executed. Carries no payload.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);

        // Executed proposals no longer read as Passed, so this goes first.
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(proposal.status == ProposalStatus::Passed, ERR_NOT_PASSED);

        self.mark_executed(&mut proposal);

        let caller = self.blockchain().get_caller();
        self.proposal_executed_event(proposal_id, &caller);
    }

    // ========================================================
    // ADMIN
    // ========================================================

    /// Only proposals submitted afterwards pick up the new period.
    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, new_period: u64) {
        let caller = self.blockchain().get_caller();
        self.require_contract_owner(&caller);

        let old_period = self.voting_period().get();
        self.voting_period().set(new_period);

        self.voting_period_changed_event(old_period, new_period);
    }

    /// Bootstrap power: a floor under the reputation-derived weight.
    #[endpoint(setInitialVotingPower)]
    fn set_initial_voting_power(&self, user: ManagedAddress, power: u64) {
        let caller = self.blockchain().get_caller();
        self.require_contract_owner(&caller);

        self.voting_power_override(&user).set(power);

        self.initial_voting_power_set_event(&user, power);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isVotingEnded)]
    fn is_voting_ended(&self, proposal_id: u64) -> bool {
        let proposal = self.require_proposal(proposal_id);
        proposal.is_voting_ended(self.blockchain().get_block_nonce())
    }
}

multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::types::{Proposal, ProposalStatus};

/// Proposal records keyed by id, plus the id counter.
#[multiversx_sc::module]
pub trait ProposalStoreModule {
    /// Allocates `counter + 1`. Length limits are checked by the caller.
    fn create_proposal(
        &self,
        proposer: &ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        start_height: u64,
        end_height: u64,
    ) -> u64 {
        let proposal_id = self.proposal_counter().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            title,
            description,
            votes_for: 0,
            votes_against: 0,
            start_height,
            end_height,
            status: ProposalStatus::Active,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_counter().set(proposal_id);

        proposal_id
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    // The helpers below take a proposal already loaded with
    // `require_proposal` and persist it; callers check legality.

    fn apply_vote(&self, proposal: &mut Proposal<Self::Api>, support: bool, power: u64) {
        if support {
            proposal.votes_for = proposal.votes_for.saturating_add(power);
        } else {
            proposal.votes_against = proposal.votes_against.saturating_add(power);
        }
        self.proposals(proposal.id).set(&*proposal);
    }

    fn set_status(&self, proposal: &mut Proposal<Self::Api>, status: ProposalStatus) {
        proposal.status = status;
        self.proposals(proposal.id).set(&*proposal);
    }

    fn mark_executed(&self, proposal: &mut Proposal<Self::Api>) {
        proposal.executed = true;
        proposal.status = ProposalStatus::Executed;
        self.proposals(proposal.id).set(&*proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getProposalCounter)]
    fn get_proposal_counter(&self) -> u64 {
        self.proposal_counter().get()
    }

    /// Proposals `from..from + count`, clamped to the ids issued so far.
    /// `from == 0` starts at the first proposal.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_counter().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if let Some(proposal) = self.get_proposal(id) {
                result.push(proposal);
            }
        }
        result
    }

    /// Active proposals that still accept votes at the current block.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_counter().get();
        let now = self.blockchain().get_block_nonce();

        for id in 1..=total {
            if let Some(proposal) = self.get_proposal(id) {
                if proposal.status == ProposalStatus::Active && !proposal.is_voting_ended(now) {
                    result.push(proposal);
                }
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCounter")]
    fn proposal_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}

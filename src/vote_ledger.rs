multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_VOTED;
use crate::types::VoteRecord;

/// Immutable vote records. The presence of a record is the double-vote guard.
#[multiversx_sc::module]
pub trait VoteLedgerModule {
    fn record_vote(&self, proposal_id: u64, voter: &ManagedAddress, support: bool, power: u64) {
        let mapper = self.vote_records(proposal_id, voter);
        require!(mapper.is_empty(), ERR_ALREADY_VOTED);
        mapper.set(VoteRecord {
            support,
            voting_power: power,
        });
    }

    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        !self.vote_records(proposal_id, voter).is_empty()
    }

    #[view(hasUserVoted)]
    fn has_user_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, voter)
    }

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> Option<VoteRecord> {
        let mapper = self.vote_records(proposal_id, voter);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord>;
}

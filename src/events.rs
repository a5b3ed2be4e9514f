multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_height: u64,
        end_height: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        voting_power: u64,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(&self, #[indexed] proposal_id: u64, passed: bool);

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("votingPeriodChanged")]
    fn voting_period_changed_event(&self, #[indexed] old_period: u64, new_period: u64);

    #[event("initialVotingPowerSet")]
    fn initial_voting_power_set_event(&self, #[indexed] user: &ManagedAddress, power: u64);
}

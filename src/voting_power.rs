multiversx_sc::imports!();

use crate::reputation;
use crate::types::voting_power_from_reputation;

/// Vote weight derived from reputation, floored by an optional admin-assigned
/// bootstrap power.
#[multiversx_sc::module]
pub trait VotingPowerModule: reputation::ReputationModule {
    #[view(getVotingPower)]
    fn get_voting_power(&self, user: &ManagedAddress) -> u64 {
        let earned = voting_power_from_reputation(self.calculate_reputation(user));
        let bootstrap = self.voting_power_override(user).get();
        core::cmp::max(earned, bootstrap)
    }

    /// 0 when no override was assigned.
    #[view(getVotingPowerOverride)]
    fn get_voting_power_override(&self, user: &ManagedAddress) -> u64 {
        self.voting_power_override(user).get()
    }

    #[storage_mapper("votingPowerOverride")]
    fn voting_power_override(&self, user: &ManagedAddress) -> SingleValueMapper<u64>;
}

multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

/// Voting period used when `init` is called without one: 1440 blocks.
pub const DEFAULT_VOTING_PERIOD: u64 = 1_440;

#[multiversx_sc::module]
pub trait ConfigModule {
    /// Fails unless `caller` is the identity that deployed the contract.
    fn require_contract_owner(&self, caller: &ManagedAddress) {
        require!(*caller == self.contract_owner().get(), ERR_UNAUTHORIZED);
    }

    #[view(getVotingPeriod)]
    fn get_voting_period(&self) -> u64 {
        self.voting_period().get()
    }

    #[view(getContractOwner)]
    fn get_contract_owner(&self) -> ManagedAddress {
        self.contract_owner().get()
    }

    /// Set once in `init`; the framework's transferable owner is not consulted.
    #[storage_mapper("contractOwner")]
    fn contract_owner(&self) -> SingleValueMapper<ManagedAddress>;

    /// In blocks.
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;
}

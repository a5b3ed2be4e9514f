multiversx_sc::imports!();

use crate::types::UserReputation;

/// Lifetime proposal and voting counters per identity.
#[multiversx_sc::module]
pub trait ReputationModule {
    fn increment_total_proposals(&self, user: &ManagedAddress) {
        let mut reputation = self.get_user_reputation(user);
        reputation.total_proposals = reputation.total_proposals.saturating_add(1);
        self.user_reputation(user).set(reputation);
    }

    fn increment_successful_proposals(&self, user: &ManagedAddress) {
        let mut reputation = self.get_user_reputation(user);
        reputation.successful_proposals = reputation.successful_proposals.saturating_add(1);
        self.user_reputation(user).set(reputation);
    }

    fn increment_votes_cast(&self, user: &ManagedAddress) {
        let mut reputation = self.get_user_reputation(user);
        reputation.total_votes_cast = reputation.total_votes_cast.saturating_add(1);
        self.user_reputation(user).set(reputation);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Zero counters for identities that never proposed or voted.
    #[view(getUserReputation)]
    fn get_user_reputation(&self, user: &ManagedAddress) -> UserReputation {
        let mapper = self.user_reputation(user);
        if mapper.is_empty() {
            UserReputation::default()
        } else {
            mapper.get()
        }
    }

    /// Recomputed from the counters on every call; never stored.
    #[view(calculateReputation)]
    fn calculate_reputation(&self, user: &ManagedAddress) -> u64 {
        self.get_user_reputation(user).reputation_score()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("userReputation")]
    fn user_reputation(&self, user: &ManagedAddress) -> SingleValueMapper<UserReputation>;
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Reputation formula
// ============================================================

/// Scale of the success-rate term: a perfect record contributes 100 points.
pub const SUCCESS_RATE_SCALE: u64 = 100;

/// Votes cast per reputation point of activity.
pub const VOTES_PER_REPUTATION_POINT: u64 = 10;

/// Reputation points per unit of voting power above the base.
pub const REPUTATION_PER_VOTING_POWER: u64 = 10;

/// Every identity votes with at least this weight.
pub const BASE_VOTING_POWER: u64 = 1;

/// `1 + floor(reputation / 10)`
pub fn voting_power_from_reputation(reputation: u64) -> u64 {
    BASE_VOTING_POWER.saturating_add(reputation / REPUTATION_PER_VOTING_POWER)
}

/// Number of characters in `bytes`, or `None` if it is not valid UTF-8.
pub fn utf8_char_count(bytes: &[u8]) -> Option<usize> {
    core::str::from_utf8(bytes).ok().map(|text| text.chars().count())
}

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Staged but not open. No endpoint creates proposals in this state.
    Pending,
    /// Voting window open.
    Active,
    /// votes_for > votes_against at finalization.
    Passed,
    /// Tie or majority against at finalization.
    Failed,
    /// Passed and flagged executed. Terminal state.
    Executed,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub votes_for: u64,
    pub votes_against: u64,
    /// Block nonce at submission
    pub start_height: u64,
    /// First block nonce at which voting is closed
    pub end_height: u64,
    pub status: ProposalStatus,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_voting_ended(&self, current_height: u64) -> bool {
        current_height >= self.end_height
    }

    /// Strict majority; a tie fails.
    pub fn has_majority(&self) -> bool {
        self.votes_for > self.votes_against
    }
}

// ============================================================
// User Reputation: lifetime counters per identity
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, Default, PartialEq, Eq, Debug,
)]
pub struct UserReputation {
    pub total_proposals: u64,
    pub successful_proposals: u64,
    pub total_votes_cast: u64,
}

impl UserReputation {
    /// `floor(successful * 100 / total) + floor(votes_cast / 10)`, with the
    /// success term 0 for identities that never proposed.
    pub fn reputation_score(&self) -> u64 {
        let success_rate = if self.total_proposals == 0 {
            0
        } else {
            let scaled = u128::from(self.successful_proposals) * u128::from(SUCCESS_RATE_SCALE);
            u64::try_from(scaled / u128::from(self.total_proposals)).unwrap_or(u64::MAX)
        };
        success_rate.saturating_add(self.total_votes_cast / VOTES_PER_REPUTATION_POINT)
    }

    pub fn voting_power(&self) -> u64 {
        voting_power_from_reputation(self.reputation_score())
    }
}

// ============================================================
// Vote Record: one per (proposal, voter), never rewritten
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct VoteRecord {
    pub support: bool,
    /// Weight at cast time; later reputation changes do not touch it.
    pub voting_power: u64,
}

// Formula-level tests for the reputation and voting-power rules. These run
// without a VM; endpoint behavior is covered by the blackbox scenario tests.

use multiversx_sc_scenario::api::DebugApi;
use reputation_governance::types::{utf8_char_count, voting_power_from_reputation, UserReputation};

type GovernanceContract = reputation_governance::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> GovernanceContract = reputation_governance::contract_obj;
}

#[test]
fn test_reputation_of_unknown_user_is_zero() {
    let reputation = UserReputation::default();
    assert_eq!(reputation.reputation_score(), 0);
    assert_eq!(reputation.voting_power(), 1);
}

#[test]
fn test_reputation_without_proposals_counts_only_votes() {
    let reputation = UserReputation {
        total_proposals: 0,
        successful_proposals: 0,
        total_votes_cast: 37,
    };
    assert_eq!(reputation.reputation_score(), 3);
}

#[test]
fn test_reputation_mixed_record() {
    let reputation = UserReputation {
        total_proposals: 10,
        successful_proposals: 8,
        total_votes_cast: 50,
    };
    assert_eq!(reputation.reputation_score(), 85);
    assert_eq!(reputation.voting_power(), 9);
}

#[test]
fn test_success_rate_is_floored() {
    // 2/3 → 66, 19 votes → 1
    let reputation = UserReputation {
        total_proposals: 3,
        successful_proposals: 2,
        total_votes_cast: 19,
    };
    assert_eq!(reputation.reputation_score(), 67);
    assert_eq!(reputation.voting_power(), 7);
}

#[test]
fn test_voting_power_steps_every_ten_points() {
    assert_eq!(voting_power_from_reputation(0), 1);
    assert_eq!(voting_power_from_reputation(9), 1);
    assert_eq!(voting_power_from_reputation(10), 2);
    assert_eq!(voting_power_from_reputation(19), 2);
    assert_eq!(voting_power_from_reputation(100), 11);
    assert_eq!(voting_power_from_reputation(u64::MAX), u64::MAX / 10 + 1);
}

#[test]
fn test_voting_power_is_monotonic() {
    let mut previous = voting_power_from_reputation(0);
    for reputation in 1..500u64 {
        let power = voting_power_from_reputation(reputation);
        assert!(power >= previous);
        assert!(power >= 1);
        previous = power;
    }
}

#[test]
fn test_success_rate_exact_for_large_counters() {
    // successful * 100 does not fit in u64 here.
    let reputation = UserReputation {
        total_proposals: u64::MAX / 50,
        successful_proposals: u64::MAX / 50,
        total_votes_cast: 0,
    };
    assert_eq!(reputation.reputation_score(), 100);

    let half = UserReputation {
        total_proposals: u64::MAX / 50,
        successful_proposals: u64::MAX / 100,
        total_votes_cast: 0,
    };
    assert_eq!(half.reputation_score(), 50);
}

#[test]
fn test_reputation_with_maxed_counters() {
    let reputation = UserReputation {
        total_proposals: u64::MAX,
        successful_proposals: u64::MAX,
        total_votes_cast: u64::MAX,
    };
    let expected = 100 + u64::MAX / 10;
    assert_eq!(reputation.reputation_score(), expected);
    assert_eq!(reputation.voting_power(), 1 + expected / 10);
}

#[test]
fn test_utf8_char_count() {
    assert_eq!(utf8_char_count(b""), Some(0));
    assert_eq!(utf8_char_count("plain".as_bytes()), Some(5));
    assert_eq!(utf8_char_count("é".repeat(60).as_bytes()), Some(60));
    assert_eq!(utf8_char_count("日本語🙂".as_bytes()), Some(4));
    assert_eq!(utf8_char_count(&[0xff, 0x41]), None);
    // truncated two-byte sequence
    assert_eq!(utf8_char_count(&[0xc3]), None);
}

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_NOT_PASSED: &str = "Unauthorized: proposal has not passed";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_VOTING_ENDED: &str = "Voting has ended";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting has not ended";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_TITLE_TOO_LONG: &str = "Title too long";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "Description too long";
pub const ERR_INVALID_UTF8: &str = "Text is not valid UTF-8";

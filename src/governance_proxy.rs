use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, UserReputation, VoteRecord};

pub struct ReputationGovernanceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ReputationGovernanceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ReputationGovernanceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ReputationGovernanceProxyMethods { wrapped_tx: tx }
    }
}

pub struct ReputationGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ReputationGovernanceProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<OptionalValue<u64>>>(
        self,
        voting_period: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&voting_period)
            .original_result()
    }
}

impl<Env, From, To, Gas> ReputationGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> ReputationGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Endpoints ──

    pub fn submit_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        title: Arg0,
        description: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitProposal")
            .argument(&title)
            .argument(&description)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        proposal_id: Arg0,
        support: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .argument(&support)
            .original_result()
    }

    pub fn finalize<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("finalize")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn set_voting_period<Arg0: ProxyArg<u64>>(
        self,
        new_period: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVotingPeriod")
            .argument(&new_period)
            .original_result()
    }

    pub fn set_initial_voting_power<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        user: Arg0,
        power: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setInitialVotingPower")
            .argument(&user)
            .argument(&power)
            .original_result()
    }

    // ── Views ──

    pub fn is_voting_ended<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVotingEnded")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_voting_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPeriod")
            .original_result()
    }

    pub fn get_contract_owner(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractOwner")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_counter(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCounter")
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_active_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposals")
            .original_result()
    }

    pub fn get_user_reputation<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, UserReputation> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUserReputation")
            .argument(&user)
            .original_result()
    }

    pub fn calculate_reputation<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateReputation")
            .argument(&user)
            .original_result()
    }

    pub fn get_voting_power<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPower")
            .argument(&user)
            .original_result()
    }

    pub fn get_voting_power_override<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPowerOverride")
            .argument(&user)
            .original_result()
    }

    pub fn has_user_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasUserVoted")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<VoteRecord>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }
}

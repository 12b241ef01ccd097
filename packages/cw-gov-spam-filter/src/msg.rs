use std::str::FromStr;

use cosmos_sdk_proto::cosmos::{
    authz::v1beta1::MsgExec, base::v1beta1::Coin as ProtoCoin, gov::v1beta1::MsgSubmitProposal,
};
use cosmos_sdk_proto::Any;
use cosmwasm_std::{Coin, Uint128};

use crate::codec::Codec;
use crate::error::CodecError;

pub const MSG_SUBMIT_PROPOSAL_TYPE_URL: &str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
pub const MSG_DEPOSIT_TYPE_URL: &str = "/cosmos.gov.v1beta1.MsgDeposit";
pub const MSG_VOTE_TYPE_URL: &str = "/cosmos.gov.v1beta1.MsgVote";
pub const MSG_EXEC_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgExec";
pub const MSG_GRANT_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgGrant";
pub const MSG_REVOKE_TYPE_URL: &str = "/cosmos.authz.v1beta1.MsgRevoke";
pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_DELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDelegate";

pub const TEXT_PROPOSAL_TYPE_URL: &str = "/cosmos.gov.v1beta1.TextProposal";
pub const PARAMETER_CHANGE_PROPOSAL_TYPE_URL: &str =
    "/cosmos.params.v1beta1.ParameterChangeProposal";
pub const SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL: &str =
    "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal";
pub const CANCEL_SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL: &str =
    "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal";
pub const COMMUNITY_POOL_SPEND_PROPOSAL_TYPE_URL: &str =
    "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal";

/// The message shapes the spam filter knows how to look at. Anything
/// the codec can unpack but the filter has no rule for is carried as
/// `Other` and ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SubmitProposal(SubmitProposal),
    Exec(Exec),
    Other { type_url: String },
}

/// A governance proposal submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitProposal {
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
}

/// An authz envelope executing `msgs` on behalf of their signers. The
/// inner messages stay packed until someone unpacks them with a
/// [`Codec`].
#[derive(Clone, Debug, PartialEq)]
pub struct Exec {
    pub grantee: String,
    pub msgs: Vec<Any>,
}

/// The view of a transaction the ante chain works with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tx {
    pub msgs: Vec<Msg>,
}

impl Tx {
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self { msgs }
    }

    /// Unpacks the body messages of a transaction. Fails on the first
    /// message the codec can not handle.
    pub fn decode(codec: &impl Codec, msgs: &[Any]) -> Result<Self, CodecError> {
        let msgs = msgs
            .iter()
            .map(|any| codec.unpack_any(any))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { msgs })
    }

    pub fn msgs(&self) -> &[Msg] {
        &self.msgs
    }
}

impl TryFrom<MsgSubmitProposal> for SubmitProposal {
    type Error = CodecError;

    fn try_from(msg: MsgSubmitProposal) -> Result<Self, Self::Error> {
        Ok(Self {
            proposer: msg.proposer,
            initial_deposit: msg
                .initial_deposit
                .into_iter()
                .map(coin_from_proto)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<MsgExec> for Exec {
    fn from(msg: MsgExec) -> Self {
        Self {
            grantee: msg.grantee,
            msgs: msg.msgs,
        }
    }
}

/// Protobuf coins carry their amount as a decimal string.
pub fn coin_from_proto(coin: ProtoCoin) -> Result<Coin, CodecError> {
    let amount = Uint128::from_str(&coin.amount).map_err(|_| CodecError::InvalidCoin {
        denom: coin.denom.clone(),
        amount: coin.amount.clone(),
    })?;
    Ok(Coin {
        denom: coin.denom,
        amount,
    })
}

pub fn coin_to_proto(coin: &Coin) -> ProtoCoin {
    ProtoCoin {
        denom: coin.denom.clone(),
        amount: coin.amount.to_string(),
    }
}

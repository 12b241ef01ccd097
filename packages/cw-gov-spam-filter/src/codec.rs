use std::collections::HashMap;

use cosmos_sdk_proto::cosmos::{
    authz::v1beta1::{MsgExec, MsgGrant, MsgRevoke},
    bank::v1beta1::MsgSend,
    distribution::v1beta1::CommunityPoolSpendProposal,
    gov::v1beta1::{MsgDeposit, MsgSubmitProposal, MsgVote, TextProposal},
    params::v1beta1::ParameterChangeProposal,
    staking::v1beta1::MsgDelegate,
    upgrade::v1beta1::{CancelSoftwareUpgradeProposal, SoftwareUpgradeProposal},
};
use cosmos_sdk_proto::{prost::Message, Any};

use crate::error::CodecError;
use crate::msg::{
    Msg, CANCEL_SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL, COMMUNITY_POOL_SPEND_PROPOSAL_TYPE_URL,
    MSG_DELEGATE_TYPE_URL, MSG_DEPOSIT_TYPE_URL, MSG_EXEC_TYPE_URL, MSG_GRANT_TYPE_URL,
    MSG_REVOKE_TYPE_URL, MSG_SEND_TYPE_URL, MSG_SUBMIT_PROPOSAL_TYPE_URL, MSG_VOTE_TYPE_URL,
    PARAMETER_CHANGE_PROPOSAL_TYPE_URL, SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL,
    TEXT_PROPOSAL_TYPE_URL,
};

/// How many `Any`s deep a message may pack other messages before
/// unpacking gives up.
pub const MAX_UNPACK_DEPTH: u32 = 10;

/// Turns a packed `Any` into a concrete message.
pub trait Codec {
    fn unpack_any(&self, any: &Any) -> Result<Msg, CodecError>;
}

/// Unpacks a message at the given nesting depth. Messages that pack
/// other `Any`s unpack those through the codec at `depth + 1`.
pub type UnpackFn = fn(&ProtoCodec, &Any, u32) -> Result<Msg, CodecError>;

/// Checks that a packed proposal content decodes.
pub type ContentFn = fn(&Any) -> Result<(), CodecError>;

/// An interface registry keyed by type URL. Unpacking a type URL that
/// was never registered fails, same as it would in the SDK. Packed
/// interfaces inside a message (authz exec msgs, proposal content)
/// are unpacked too, so a message only unpacks if everything it
/// carries does.
#[derive(Clone)]
pub struct ProtoCodec {
    registry: HashMap<String, UnpackFn>,
    contents: HashMap<String, ContentFn>,
}

impl Default for ProtoCodec {
    fn default() -> Self {
        let mut codec = Self::empty();
        codec
            .register(MSG_SUBMIT_PROPOSAL_TYPE_URL, unpack_submit_proposal)
            .register(MSG_EXEC_TYPE_URL, unpack_exec)
            .register_other::<MsgDeposit>(MSG_DEPOSIT_TYPE_URL)
            .register_other::<MsgVote>(MSG_VOTE_TYPE_URL)
            .register_other::<MsgGrant>(MSG_GRANT_TYPE_URL)
            .register_other::<MsgRevoke>(MSG_REVOKE_TYPE_URL)
            .register_other::<MsgSend>(MSG_SEND_TYPE_URL)
            .register_other::<MsgDelegate>(MSG_DELEGATE_TYPE_URL)
            .register_content::<TextProposal>(TEXT_PROPOSAL_TYPE_URL)
            .register_content::<ParameterChangeProposal>(PARAMETER_CHANGE_PROPOSAL_TYPE_URL)
            .register_content::<SoftwareUpgradeProposal>(SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL)
            .register_content::<CancelSoftwareUpgradeProposal>(
                CANCEL_SOFTWARE_UPGRADE_PROPOSAL_TYPE_URL,
            )
            .register_content::<CommunityPoolSpendProposal>(
                COMMUNITY_POOL_SPEND_PROPOSAL_TYPE_URL,
            );
        codec
    }
}

impl ProtoCodec {
    /// A codec with nothing registered.
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
            contents: HashMap::new(),
        }
    }

    pub fn register(&mut self, type_url: impl Into<String>, unpack: UnpackFn) -> &mut Self {
        self.registry.insert(type_url.into(), unpack);
        self
    }

    /// Registers a message type that must decode as `M` but that the
    /// filter has no rule for.
    pub fn register_other<M: Message + Default>(
        &mut self,
        type_url: impl Into<String>,
    ) -> &mut Self {
        self.register(type_url, unpack_other::<M>)
    }

    /// Registers a proposal content type that must decode as `M`.
    pub fn register_content<M: Message + Default>(
        &mut self,
        type_url: impl Into<String>,
    ) -> &mut Self {
        self.contents.insert(type_url.into(), validate_content::<M>);
        self
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.registry.contains_key(type_url)
    }

    fn unpack_at(&self, any: &Any, depth: u32) -> Result<Msg, CodecError> {
        if depth > MAX_UNPACK_DEPTH {
            return Err(CodecError::MaxDepthExceeded {
                max: MAX_UNPACK_DEPTH,
            });
        }
        let unpack = self
            .registry
            .get(&any.type_url)
            .ok_or_else(|| CodecError::UnregisteredTypeUrl {
                type_url: any.type_url.clone(),
            })?;
        unpack(self, any, depth)
    }

    fn unpack_content(&self, content: &Any) -> Result<(), CodecError> {
        let validate =
            self.contents
                .get(&content.type_url)
                .ok_or_else(|| CodecError::UnregisteredTypeUrl {
                    type_url: content.type_url.clone(),
                })?;
        validate(content)
    }
}

impl Codec for ProtoCodec {
    fn unpack_any(&self, any: &Any) -> Result<Msg, CodecError> {
        self.unpack_at(any, 0)
    }
}

fn decode<M: Message + Default>(any: &Any) -> Result<M, CodecError> {
    M::decode(any.value.as_slice()).map_err(|err| CodecError::Decode {
        type_url: any.type_url.clone(),
        err,
    })
}

fn unpack_submit_proposal(
    codec: &ProtoCodec,
    any: &Any,
    _depth: u32,
) -> Result<Msg, CodecError> {
    let msg: MsgSubmitProposal = decode(any)?;
    if let Some(content) = &msg.content {
        codec.unpack_content(content)?;
    }
    Ok(Msg::SubmitProposal(msg.try_into()?))
}

fn unpack_exec(codec: &ProtoCodec, any: &Any, depth: u32) -> Result<Msg, CodecError> {
    let msg: MsgExec = decode(any)?;
    // Inner messages are only unpacked to prove they decode. They stay
    // packed in the returned envelope.
    for inner in &msg.msgs {
        codec.unpack_at(inner, depth + 1)?;
    }
    Ok(Msg::Exec(msg.into()))
}

fn unpack_other<M: Message + Default>(
    _codec: &ProtoCodec,
    any: &Any,
    _depth: u32,
) -> Result<Msg, CodecError> {
    decode::<M>(any)?;
    Ok(Msg::Other {
        type_url: any.type_url.clone(),
    })
}

fn validate_content<M: Message + Default>(any: &Any) -> Result<(), CodecError> {
    decode::<M>(any).map(|_| ())
}

/// Packs a message into an `Any` under TYPE_URL.
pub fn pack<M: Message>(type_url: &str, msg: &M) -> Any {
    Any {
        type_url: type_url.to_string(),
        value: msg.encode_to_vec(),
    }
}

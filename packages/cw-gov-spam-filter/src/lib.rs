#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod ante;
pub mod codec;
pub mod coins;
pub mod config;
pub mod decorator;
mod error;
pub mod gov;
pub mod msg;


pub use crate::ante::{chain, AnteChain, AnteDecorator, AnteHandler, Context, ExecMode, Terminator};
pub use crate::codec::{Codec, ProtoCodec};
pub use crate::config::SpamFilterConfig;
pub use crate::decorator::GovPreventSpamDecorator;
pub use crate::error::{
    AnteError, CodecError, CODE_INSUFFICIENT_FUNDS, CODE_INTERNAL, CODE_UNAUTHORIZED,
    SDK_CODESPACE,
};
pub use crate::gov::{DepositParams, GovKeeper, StoreGovKeeper};
pub use crate::msg::{Exec, Msg, SubmitProposal, Tx};

use cosmos_sdk_proto::prost::DecodeError;
use cosmwasm_std::{Coin, Decimal, StdError};
use thiserror::Error;

use crate::coins::display_coins;

/// Codespace of the errors the SDK itself registers. Rejections from
/// this decorator reuse those codes so clients see the same CheckTx
/// response a native ante handler would produce.
pub const SDK_CODESPACE: &str = "sdk";

/// `ErrUnauthorized` in the SDK error registry.
pub const CODE_UNAUTHORIZED: u32 = 4;
/// `ErrInsufficientFunds` in the SDK error registry.
pub const CODE_INSUFFICIENT_FUNDS: u32 = 5;
/// Catch-all code for internal failures.
pub const CODE_INTERNAL: u32 = 1;

#[derive(Error, Debug, PartialEq)]
pub enum AnteError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(
        "not enough initial deposit. required: {}: insufficient funds",
        display_coins(.required)
    )]
    InsufficientDeposit { required: Vec<Coin> },

    #[error("{reason}: unauthorized")]
    Unauthorized { reason: String },

    #[error("minimum initial deposit ratio must not be greater than 1, got ({ratio})")]
    InvalidConfig { ratio: Decimal },
}

impl AnteError {
    pub fn codespace(&self) -> &'static str {
        SDK_CODESPACE
    }

    /// The ABCI response code a CheckTx rejection should carry.
    pub fn code(&self) -> u32 {
        match self {
            AnteError::InsufficientDeposit { .. } => CODE_INSUFFICIENT_FUNDS,
            AnteError::Unauthorized { .. } => CODE_UNAUTHORIZED,
            AnteError::Std(_) | AnteError::InvalidConfig { .. } => CODE_INTERNAL,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("no concrete type registered for type URL {type_url}")]
    UnregisteredTypeUrl { type_url: String },

    #[error("failed to decode {type_url}: {err}")]
    Decode {
        type_url: String,
        err: DecodeError,
    },

    #[error("max depth of {max} nested messages exceeded")]
    MaxDepthExceeded { max: u32 },

    #[error("invalid coin amount ({amount}) for denom {denom}")]
    InvalidCoin { denom: String, amount: String },
}

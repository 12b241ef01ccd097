use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use crate::error::AnteError;

/// Share of the governance minimum deposit a proposal must attach
/// when it is submitted.
pub const DEFAULT_MIN_INITIAL_DEPOSIT_PERCENT: u64 = 20;

#[cw_serde]
pub struct SpamFilterConfig {
    /// Multiplied with each coin of the governance `min_deposit` to
    /// get the initial deposit a proposal must carry to be let into
    /// the mempool. Zero disables the check.
    pub min_initial_deposit_ratio: Decimal,
}

impl Default for SpamFilterConfig {
    fn default() -> Self {
        Self {
            min_initial_deposit_ratio: Decimal::percent(DEFAULT_MIN_INITIAL_DEPOSIT_PERCENT),
        }
    }
}

impl SpamFilterConfig {
    pub fn validate(&self) -> Result<(), AnteError> {
        if self.min_initial_deposit_ratio > Decimal::one() {
            return Err(AnteError::InvalidConfig {
                ratio: self.min_initial_deposit_ratio,
            });
        }
        Ok(())
    }
}

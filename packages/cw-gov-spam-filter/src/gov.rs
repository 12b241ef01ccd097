use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, StdResult, Storage};
use cw_storage_plus::Item;

/// Governance deposit parameters. Only `min_deposit` is read by the
/// spam filter.
#[cw_serde]
pub struct DepositParams {
    /// The deposit a proposal needs to enter its voting period.
    pub min_deposit: Vec<Coin>,
    /// Seconds a proposal may wait for deposits before it is dropped.
    pub max_deposit_period: u64,
}

/// Read access to the governance module's state.
pub trait GovKeeper {
    /// The current deposit params, or `None` if governance has never
    /// stored any.
    fn deposit_params(&self, storage: &dyn Storage) -> StdResult<Option<DepositParams>>;
}

/// A keeper that keeps deposit params in a key-value store.
pub struct StoreGovKeeper<'a> {
    deposit_params: Item<'a, DepositParams>,
}

impl Default for StoreGovKeeper<'static> {
    fn default() -> Self {
        Self::new("gov_deposit_params")
    }
}

impl<'a> StoreGovKeeper<'a> {
    pub const fn new(deposit_params_key: &'a str) -> Self {
        Self {
            deposit_params: Item::new(deposit_params_key),
        }
    }

    /// Stores new deposit params. Called at genesis and when a
    /// parameter change proposal passes.
    pub fn set_deposit_params(
        &self,
        storage: &mut dyn Storage,
        params: &DepositParams,
    ) -> StdResult<()> {
        self.deposit_params.save(storage, params)
    }
}

impl<'a> GovKeeper for StoreGovKeeper<'a> {
    fn deposit_params(&self, storage: &dyn Storage) -> StdResult<Option<DepositParams>> {
        self.deposit_params.may_load(storage)
    }
}

use cosmwasm_std::{Coin, Storage};

use crate::ante::{AnteDecorator, AnteHandler, Context};
use crate::codec::Codec;
use crate::coins::{display_coins, is_all_lt, mul_dec_round_half_even, normalize};
use crate::config::SpamFilterConfig;
use crate::error::AnteError;
use crate::gov::GovKeeper;
use crate::msg::{Exec, Msg, SubmitProposal, Tx};

/// Rejects transactions that submit governance proposals with an
/// initial deposit below a fraction of the minimum deposit. Only runs
/// when a transaction is checked for mempool admission.
pub struct GovPreventSpamDecorator<C, K> {
    codec: C,
    gov_keeper: K,
    config: SpamFilterConfig,
}

impl<C: Codec, K: GovKeeper> GovPreventSpamDecorator<C, K> {
    pub fn new(codec: C, gov_keeper: K, config: SpamFilterConfig) -> Result<Self, AnteError> {
        config.validate()?;
        Ok(Self {
            codec,
            gov_keeper,
            config,
        })
    }

    /// Checks every message of MSGS, stopping at the first failure.
    /// Authz envelopes are opened one level deep and their contents
    /// checked as if they were submitted directly.
    pub fn check_spam_submit_proposal_msgs(
        &self,
        storage: &dyn Storage,
        msgs: &[Msg],
    ) -> Result<(), AnteError> {
        for msg in msgs {
            match msg {
                Msg::Exec(exec) => self.check_exec(storage, exec)?,
                msg => self.check_msg(storage, msg)?,
            }
        }
        Ok(())
    }

    fn check_exec(&self, storage: &dyn Storage, exec: &Exec) -> Result<(), AnteError> {
        for any in &exec.msgs {
            let inner = self.codec.unpack_any(any).map_err(|err| {
                log::debug!(
                    "rejecting authz exec from {}: {} ({err})",
                    exec.grantee,
                    any.type_url
                );
                AnteError::Unauthorized {
                    reason: "cannot unmarshal authz exec msgs".to_string(),
                }
            })?;
            // Nested envelopes are not opened again.
            self.check_msg(storage, &inner)?;
        }
        Ok(())
    }

    fn check_msg(&self, storage: &dyn Storage, msg: &Msg) -> Result<(), AnteError> {
        match msg {
            Msg::SubmitProposal(proposal) => self.check_submit_proposal(storage, proposal),
            Msg::Exec(_) | Msg::Other { .. } => Ok(()),
        }
    }

    fn check_submit_proposal(
        &self,
        storage: &dyn Storage,
        proposal: &SubmitProposal,
    ) -> Result<(), AnteError> {
        let min_deposit = match self.gov_keeper.deposit_params(storage)? {
            Some(params) => params.min_deposit,
            None => return Ok(()),
        };
        let min_initial_deposit = self.min_initial_deposit(&min_deposit)?;

        if is_all_lt(&proposal.initial_deposit, &min_initial_deposit) {
            log::debug!(
                "rejecting proposal from {}: deposit {} below required {}",
                proposal.proposer,
                display_coins(&proposal.initial_deposit),
                display_coins(&min_initial_deposit)
            );
            return Err(AnteError::InsufficientDeposit {
                required: min_initial_deposit,
            });
        }
        Ok(())
    }

    /// Scales each coin of MIN_DEPOSIT by the configured ratio. Coins
    /// that round down to zero are dropped.
    pub fn min_initial_deposit(&self, min_deposit: &[Coin]) -> Result<Vec<Coin>, AnteError> {
        let scaled = min_deposit
            .iter()
            .map(|coin| -> Result<Coin, AnteError> {
                Ok(Coin {
                    denom: coin.denom.clone(),
                    amount: mul_dec_round_half_even(
                        coin.amount,
                        self.config.min_initial_deposit_ratio,
                    )?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(normalize(&scaled)?)
    }
}

impl<C: Codec, K: GovKeeper> AnteDecorator for GovPreventSpamDecorator<C, K> {
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<(), AnteError> {
        // Only guard the mempool. Blocks and simulations pass through.
        if !ctx.is_check_tx() || simulate {
            return next.handle(ctx, tx, simulate);
        }

        self.check_spam_submit_proposal_msgs(ctx.storage, tx.msgs())?;

        next.handle(ctx, tx, simulate)
    }
}

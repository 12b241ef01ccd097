use cosmwasm_std::Storage;

use crate::error::AnteError;
use crate::msg::Tx;

/// The stage of transaction processing an ante chain runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    /// First admission of a transaction into the mempool.
    CheckTx,
    /// Re-validation of a mempool transaction after a block commits.
    ReCheckTx,
    /// Gas estimation.
    Simulate,
    /// Execution of a transaction included in a block.
    Finalize,
}

impl ExecMode {
    /// True when the transaction is being considered for the mempool.
    pub fn is_check_tx(&self) -> bool {
        matches!(self, ExecMode::CheckTx | ExecMode::ReCheckTx)
    }
}

pub struct Context<'a> {
    pub storage: &'a dyn Storage,
    pub mode: ExecMode,
}

impl<'a> Context<'a> {
    pub fn new(storage: &'a dyn Storage, mode: ExecMode) -> Self {
        Self { storage, mode }
    }

    pub fn is_check_tx(&self) -> bool {
        self.mode.is_check_tx()
    }
}

/// A stage of the ante chain.
pub trait AnteHandler {
    fn handle(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<(), AnteError>;
}

/// A check that runs before the rest of the chain and decides if the
/// chain continues to NEXT.
pub trait AnteDecorator {
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<(), AnteError>;
}

/// The end of every chain. Accepts everything.
pub struct Terminator;

impl AnteHandler for Terminator {
    fn handle(&self, _ctx: &Context, _tx: &Tx, _simulate: bool) -> Result<(), AnteError> {
        Ok(())
    }
}

/// Runs decorators in order, each handing off to the next.
pub struct AnteChain {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

pub fn chain(decorators: Vec<Box<dyn AnteDecorator>>) -> AnteChain {
    AnteChain { decorators }
}

impl AnteChain {
    fn run(&self, index: usize, ctx: &Context, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        match self.decorators.get(index) {
            Some(decorator) => {
                let rest = Rest {
                    chain: self,
                    index: index + 1,
                };
                decorator.ante_handle(ctx, tx, simulate, &rest)
            }
            None => Terminator.handle(ctx, tx, simulate),
        }
    }
}

struct Rest<'a> {
    chain: &'a AnteChain,
    index: usize,
}

impl<'a> AnteHandler for Rest<'a> {
    fn handle(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        self.chain.run(self.index, ctx, tx, simulate)
    }
}

impl AnteHandler for AnteChain {
    fn handle(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        self.run(0, ctx, tx, simulate)
    }
}

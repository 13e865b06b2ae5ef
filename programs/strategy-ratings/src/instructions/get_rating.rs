use anchor_lang::prelude::*;

use crate::{
    constants::RATING_SEED,
    state::{RatingSummary, StrategyId},
};

/// Shared by every read-only accessor. Meant to be simulated, so no signer
/// and nothing writable.
#[derive(Accounts)]
#[instruction(strategy_id: StrategyId)]
pub struct GetRating<'info> {
    /// CHECK: Address is pinned by the seeds. The account does not exist
    /// until the strategy is first rated, and the data is decoded as a
    /// RatingAggregate otherwise.
    #[account(
        seeds = [RATING_SEED, &strategy_id.hash()],
        bump
    )]
    pub aggregate: UncheckedAccount<'info>,
}

impl GetRating<'_> {
    fn summary(&self) -> Result<RatingSummary> {
        RatingSummary::from_account_info(&self.aggregate)
    }
}

pub fn handler(ctx: Context<GetRating>, _strategy_id: StrategyId) -> Result<RatingSummary> {
    ctx.accounts.summary()
}

pub fn average_handler(ctx: Context<GetRating>, _strategy_id: StrategyId) -> Result<u64> {
    Ok(ctx.accounts.summary()?.average)
}

pub fn count_handler(ctx: Context<GetRating>, _strategy_id: StrategyId) -> Result<u64> {
    Ok(ctx.accounts.summary()?.count)
}

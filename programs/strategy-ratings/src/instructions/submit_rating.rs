use anchor_lang::prelude::*;

use crate::{
    constants::RATING_SEED,
    state::{RatingAggregate, StrategyId},
};

#[derive(Accounts)]
#[instruction(strategy_id: StrategyId)]
pub struct SubmitRating<'info> {
    #[account(
        init_if_needed,
        payer = rater,
        space = 8 + RatingAggregate::LEN,
        seeds = [RATING_SEED, &strategy_id.hash()],
        bump
    )]
    pub aggregate: Account<'info, RatingAggregate>,

    /// Anyone may rate. Pays rent the first time a strategy is rated.
    #[account(mut)]
    pub rater: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SubmitRating>, strategy_id: StrategyId, score: u8) -> Result<()> {
    let aggregate = &mut ctx.accounts.aggregate;
    let rater = &ctx.accounts.rater;

    let event = aggregate.submit(&strategy_id, ctx.bumps.aggregate, rater.key(), score)?;

    msg!(
        "Rated {} with {} by {} ({} ratings, average {})",
        strategy_id,
        score,
        rater.key(),
        aggregate.count,
        aggregate.average()
    );

    emit!(event);

    Ok(())
}

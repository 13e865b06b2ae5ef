use anchor_lang::prelude::*;

mod constants;
mod errors;
mod events;
mod instructions;
mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("5T9qgYxJ8vG4mZr6mQnTq3oUuB7dW2sKc1hNfXpLaRvE");

#[program]
pub mod strategy_ratings {
    use super::*;

    pub fn submit_rating(
        ctx: Context<SubmitRating>,
        strategy_id: StrategyId,
        score: u8,
    ) -> Result<()> {
        instructions::submit_rating::handler(ctx, strategy_id, score)
    }

    pub fn get_rating(ctx: Context<GetRating>, strategy_id: StrategyId) -> Result<RatingSummary> {
        instructions::get_rating::handler(ctx, strategy_id)
    }

    pub fn get_average_rating(ctx: Context<GetRating>, strategy_id: StrategyId) -> Result<u64> {
        instructions::get_rating::average_handler(ctx, strategy_id)
    }

    pub fn num_ratings(ctx: Context<GetRating>, strategy_id: StrategyId) -> Result<u64> {
        instructions::get_rating::count_handler(ctx, strategy_id)
    }
}

use std::fmt;

use anchor_lang::prelude::*;
use solana_sha256_hasher::hash;

use crate::{
    constants::{MAX_SCORE, MIN_SCORE, RATING_SEED},
    errors::RatingError,
    events::Rated,
};

/// Identifier of a rated strategy.
///
/// Strategies are keyed by their string id only. Encodes on the wire exactly
/// like a plain `String`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StrategyId(pub String);

impl StrategyId {
    /// sha256 of the id. Used as the PDA seed, so ids of any length map to a
    /// fixed 32-byte seed.
    pub fn hash(&self) -> [u8; 32] {
        hash(self.0.as_bytes()).to_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StrategyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_score(score: u8) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

#[account]
pub struct RatingAggregate {
    pub strategy_hash: [u8; 32],
    pub sum: u128,
    pub count: u64,
    pub bump: u8,
}

impl RatingAggregate {
    pub const LEN: usize = 32  // strategy_hash
        + 16  // sum
        + 8   // count
        + 1;  // bump

    pub fn address(strategy_id: &StrategyId) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[RATING_SEED, &strategy_id.hash()], &crate::ID)
    }

    /// Accepts one rating from `rater` and returns the event describing it.
    /// Only an accepted rating creates the account, so a zero count means it
    /// was just allocated and gets stamped with the strategy hash and bump.
    pub fn submit(
        &mut self,
        strategy_id: &StrategyId,
        bump: u8,
        rater: Pubkey,
        score: u8,
    ) -> Result<Rated> {
        require!(is_valid_score(score), RatingError::InvalidScore);

        if self.count == 0 {
            self.strategy_hash = strategy_id.hash();
            self.bump = bump;
        }
        self.record(score)?;

        Ok(Rated {
            strategy_hash: self.strategy_hash,
            strategy_id: strategy_id.as_str().to_string(),
            rater,
            score,
        })
    }

    /// Adds one vote. Leaves the aggregate untouched on error.
    pub fn record(&mut self, score: u8) -> Result<()> {
        require!(is_valid_score(score), RatingError::InvalidScore);

        let sum = self
            .sum
            .checked_add(u128::from(score))
            .ok_or(RatingError::Overflow)?;
        let count = self.count.checked_add(1).ok_or(RatingError::Overflow)?;

        self.sum = sum;
        self.count = count;

        Ok(())
    }

    /// Floor of `sum / count`, zero while unrated.
    pub fn average(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        // every score is at most MAX_SCORE, so the quotient fits
        (self.sum / u128::from(self.count)) as u64
    }

    pub fn summary(&self) -> RatingSummary {
        RatingSummary {
            average: self.average(),
            count: self.count,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RatingSummary {
    pub average: u64,
    pub count: u64,
}

impl RatingSummary {
    /// Decodes raw `RatingAggregate` account data. An account that was never
    /// created has no data and reads as the zero summary.
    pub fn from_account_info(info: &AccountInfo) -> Result<Self> {
        let data = info.try_borrow_data()?;
        Self::from_account_data(&data[..])
    }

    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::default());
        }
        let aggregate = RatingAggregate::try_deserialize(&mut &data[..])?;
        Ok(aggregate.summary())
    }
}

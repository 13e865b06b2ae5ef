use anchor_lang::prelude::*;

/// One accepted rating. Storage only keeps the aggregate, so this is the
/// audit trail for individual submissions.
#[event]
#[derive(Debug)]
pub struct Rated {
    /// sha256 of `strategy_id`, the value indexers filter on.
    pub strategy_hash: [u8; 32],
    pub strategy_id: String,
    pub rater: Pubkey,
    pub score: u8,
}

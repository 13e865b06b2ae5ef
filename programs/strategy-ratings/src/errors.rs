use anchor_lang::prelude::*;

#[error_code]
pub enum RatingError {
    #[msg("Score must be between 1 and 5")]
    InvalidScore,
    #[msg("Arithmetic overflow")]
    Overflow,
}

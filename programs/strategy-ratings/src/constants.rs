use anchor_lang::prelude::*;

#[constant]
pub const RATING_SEED: &[u8] = b"rating";

#[constant]
pub const MIN_SCORE: u8 = 1;

#[constant]
pub const MAX_SCORE: u8 = 5;

//! Quiz question selection.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::db::Question;

/// Pick the next quiz question.
///
/// Builds the eligible subset of `pool` — every question whose id is not
/// in `previous_ids`, restricted to `category_id` when it is positive
/// (`0` means "all categories") — and returns one element chosen
/// uniformly at random. `None` means the quiz is finished: nothing
/// eligible remains.
///
/// The random source is injected so tests can pass a seeded or stub
/// generator; production callers hand in `rand::rng()`.
pub fn select_next<'a, R: Rng + ?Sized>(
    category_id: i64,
    previous_ids: &HashSet<i64>,
    pool: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    let eligible: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous_ids.contains(&q.id))
        .filter(|q| category_id <= 0 || q.category == category_id)
        .collect();

    eligible.choose(rng).copied()
}

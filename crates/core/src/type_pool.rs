//! Type pool - the active prefix of the card roster
//!
//! A game starts with 5 card types and gains one more every 5 matches, up to
//! the full roster of 10. The same pool feeds the initial deal and every refill.

use crate::types::{CardType, BASE_TYPE_COUNT, CARD_TYPES, MATCHES_PER_NEW_TYPE};

/// Number of card types in play after `matches` matched pairs.
pub fn type_count(matches: u32) -> usize {
    let extra = (matches / MATCHES_PER_NEW_TYPE) as usize;
    BASE_TYPE_COUNT.saturating_add(extra).min(CARD_TYPES.len())
}

/// Card types available after `matches` matched pairs, in roster order.
pub fn available_types(matches: u32) -> &'static [CardType] {
    &CARD_TYPES[..type_count(matches)]
}

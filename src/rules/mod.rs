//! Game rules as a pure reducer.
//!
//! The reducer maps `(state, action)` to the next state plus an `Outcome`.
//! It keeps nothing between calls: the catalog, the balance constants and
//! the RNG arrive through `RulesContext`.

pub mod reducer;

pub use reducer::{
    apply, auto_click_tick, auto_click_ticks, buy_card_pack, perform_click, toggle_card_in_deck, upgrade_card,
    RulesContext, Transition,
};

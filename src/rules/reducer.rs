//! Game state reducer.
//!
//! Every handler reads one snapshot and returns the next. The input state is
//! never mutated: handlers work on an O(1) clone and hand it back inside a
//! [`Transition`]. A rejected action returns a clone of the input unchanged.
//!
//! ## Handlers
//!
//! - [`perform_click`]: credit the click value, roll for a discovery, award
//!   milestone bonuses
//! - [`auto_click_tick`]: credit one interval of auto-clicks
//! - [`auto_click_ticks`]: credit many intervals in one step
//! - [`upgrade_card`]: pay the upgrade cost and level the card up
//! - [`toggle_card_in_deck`]: flip deck membership of an owned card
//! - [`buy_card_pack`]: pay for a pack and acquire what it yields

use crate::cards::{CardDefinition, CardRegistry};
use crate::core::{
    Action, Currency, EconomyConfig, Effects, GameRng, GameState, Outcome, Rejection,
};
use crate::discovery::{discover_random_card, open_pack, PackType};
use crate::economy::next_upgrade_cost;

/// Everything a handler needs besides the state.
pub struct RulesContext<'a> {
    /// Card catalog.
    pub registry: &'a CardRegistry,
    /// Balance constants.
    pub config: &'a EconomyConfig,
    /// Randomness for discoveries and packs.
    pub rng: &'a mut GameRng,
}

impl<'a> RulesContext<'a> {
    /// Bundle the handler inputs.
    pub fn new(
        registry: &'a CardRegistry,
        config: &'a EconomyConfig,
        rng: &'a mut GameRng,
    ) -> Self {
        Self {
            registry,
            config,
            rng,
        }
    }
}

/// The state after an action, and what happened.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The next snapshot.
    pub state: GameState,
    /// Applied effects or the rejection reason.
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: GameState, effects: Effects) -> Self {
        Self {
            state,
            outcome: Outcome::Applied(effects),
        }
    }

    fn rejected(state: &GameState, reason: Rejection) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Rejected(reason),
        }
    }
}

/// Apply any action.
pub fn apply(state: &GameState, action: &Action, ctx: &mut RulesContext<'_>) -> Transition {
    match action {
        Action::Click => perform_click(state, ctx),
        Action::AutoClickTick => auto_click_tick(state),
        Action::Upgrade(id) => upgrade_card(state, id.as_str(), ctx),
        Action::ToggleDeck(id) => toggle_card_in_deck(state, id.as_str(), ctx.registry),
        Action::BuyPack(pack) => buy_card_pack(state, *pack, ctx),
    }
}

/// One manual click.
///
/// Credits `floor(click_power * multiplier)` clicks and increments
/// `total_clicks`. The discovery chance is computed from the incremented
/// count. Every `gem_bonus_interval`-th click pays one gem and every
/// `stardust_bonus_interval`-th click one stardust.
pub fn perform_click(state: &GameState, ctx: &mut RulesContext<'_>) -> Transition {
    let mut next = state.clone();
    let mut effects = Effects::default();
    let config = ctx.config;

    let earned = next.stats.click_value();
    next.currencies.credit(Currency::Clicks, earned);
    effects.clicks_earned = earned;

    next.total_clicks = next.total_clicks.saturating_add(1);

    let chance = config.discovery_chance(next.total_clicks);
    if ctx.rng.gen_bool(chance) {
        if let Some(card) =
            discover_random_card(ctx.registry, &next.unlocked, ctx.rng, config.discovery_mode)
        {
            let reward = card.rarity.gem_reward();
            acquire(&mut next, card);
            next.currencies.credit(Currency::Gems, reward);
            effects.gems_earned += reward;
            effects.discovered.push(card.id.clone());
        }
    }

    if is_milestone(next.total_clicks, config.gem_bonus_interval) {
        next.currencies.credit(Currency::Gems, 1);
        effects.gems_earned += 1;
    }
    if is_milestone(next.total_clicks, config.stardust_bonus_interval) {
        next.currencies.credit(Currency::Stardust, 1);
        effects.stardust_earned += 1;
    }

    Transition::applied(next, effects)
}

/// One auto-click interval.
///
/// Rejected when the deck produces no auto-clicks. Does not count as a
/// click: no discovery roll, no `total_clicks` increment.
pub fn auto_click_tick(state: &GameState) -> Transition {
    auto_click_ticks(state, 1)
}

/// `ticks` auto-click intervals applied at once.
///
/// Ticks draw no randomness, so this equals `ticks` single ticks in a row.
/// The credit saturates at `u64::MAX`.
pub fn auto_click_ticks(state: &GameState, ticks: u64) -> Transition {
    let stats = state.stats;
    if !stats.has_auto_clicks() {
        return Transition::rejected(state, Rejection::NoAutoClickers);
    }

    let mut next = state.clone();
    let earned = stats.tick_value().saturating_mul(ticks);
    next.currencies.credit(Currency::Clicks, earned);
    next.statistics.clicks_per_second = stats.auto_click_rate;

    Transition::applied(
        next,
        Effects {
            clicks_earned: earned,
            ..Effects::default()
        },
    )
}

/// Level up a card.
///
/// Rejected if the card is unknown, already at max level, or the cost is
/// not affordable. The card need not have been discovered; upgrading adds a
/// copy but does not unlock it.
pub fn upgrade_card(state: &GameState, id: &str, ctx: &mut RulesContext<'_>) -> Transition {
    let registry = ctx.registry;
    let (Some(definition), Some(instance)) = (registry.get(id), state.card(id)) else {
        return Transition::rejected(state, Rejection::UnknownCard(id.into()));
    };

    let Some(cost) = next_upgrade_cost(definition, instance, ctx.config.upgrade_growth) else {
        return Transition::rejected(state, Rejection::MaxLevel(definition.id.clone()));
    };

    let Some(remaining) = state.currencies.checked_debit(&cost) else {
        return Transition::rejected(state, Rejection::InsufficientFunds);
    };

    let mut next = state.clone();
    next.currencies = remaining;
    if let Some(card) = next.card_mut(id) {
        card.level_up();
    }
    next.recompute_stats(registry);

    Transition::applied(next, Effects::default())
}

/// Flip deck membership of an owned card.
pub fn toggle_card_in_deck(state: &GameState, id: &str, registry: &CardRegistry) -> Transition {
    let Some(instance) = state.card(id) else {
        return Transition::rejected(state, Rejection::UnknownCard(id.into()));
    };
    if !instance.is_owned() {
        return Transition::rejected(state, Rejection::NotOwned(instance.card_id.clone()));
    }

    let mut next = state.clone();
    if let Some(card) = next.card_mut(id) {
        card.in_deck = !card.in_deck;
    }
    next.recompute_stats(registry);

    Transition::applied(next, Effects::default())
}

/// Buy and open a pack.
///
/// Rejected if the pack is not affordable. Otherwise the cost is paid even
/// when every card is already unlocked and the pack comes back empty.
pub fn buy_card_pack(state: &GameState, pack: PackType, ctx: &mut RulesContext<'_>) -> Transition {
    let Some(remaining) = state.currencies.checked_debit(&pack.cost()) else {
        return Transition::rejected(state, Rejection::InsufficientFunds);
    };

    let registry = ctx.registry;
    let drawn = open_pack(pack, registry, &state.unlocked, ctx.rng, ctx.config.discovery_mode);

    let mut next = state.clone();
    next.currencies = remaining;
    for id in &drawn {
        if let Some(card) = registry.get(id.as_str()) {
            acquire(&mut next, card);
        }
    }

    Transition::applied(
        next,
        Effects {
            discovered: drawn,
            ..Effects::default()
        },
    )
}

// Unlock a newly discovered card and count it in the statistics.
fn acquire(state: &mut GameState, card: &CardDefinition) {
    if let Some(instance) = state.card_mut(card.id.as_str()) {
        instance.acquire();
    }
    state.unlocked.insert(card.id.clone());
    state.statistics.total_cards_collected += 1;
    if card.rarity.is_rare() {
        state.statistics.rare_cards_found += 1;
    }
}

fn is_milestone(count: u64, interval: u64) -> bool {
    interval > 0 && count % interval == 0
}

//! Player and timer actions, and what applying them produced.
//!
//! Every state change goes through an [`Action`]. Applying one yields an
//! [`Outcome`]: either `Applied` with the side effects worth reporting
//! (discoveries, milestone bonuses), or `Rejected` with the reason the
//! action was ignored. Rejections are not errors; the state is simply left
//! as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::discovery::PackType;

/// An inbound action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "camelCase")]
pub enum Action {
    /// Manual click.
    Click,
    /// One auto-click interval elapsed.
    AutoClickTick,
    /// Level up a card.
    Upgrade(CardId),
    /// Flip a card's deck membership.
    ToggleDeck(CardId),
    /// Buy and open a card pack.
    BuyPack(PackType),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Click => f.write_str("click"),
            Action::AutoClickTick => f.write_str("auto-click tick"),
            Action::Upgrade(id) => write!(f, "upgrade {}", id),
            Action::ToggleDeck(id) => write!(f, "toggle deck {}", id),
            Action::BuyPack(pack) => write!(f, "buy {} pack", pack),
        }
    }
}

/// Why an action left the state unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No card with this id in the catalog.
    UnknownCard(CardId),
    /// The card is already at its max level.
    MaxLevel(CardId),
    /// The player cannot pay the cost.
    InsufficientFunds,
    /// The card has never been acquired.
    NotOwned(CardId),
    /// Auto-click tick while no auto-clickers are active.
    NoAutoClickers,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::UnknownCard(id) => write!(f, "unknown card {}", id),
            Rejection::MaxLevel(id) => write!(f, "{} is at max level", id),
            Rejection::InsufficientFunds => f.write_str("insufficient funds"),
            Rejection::NotOwned(id) => write!(f, "{} is not owned", id),
            Rejection::NoAutoClickers => f.write_str("no auto-clickers active"),
        }
    }
}

/// Side effects of an applied action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    /// Clicks credited.
    pub clicks_earned: u64,

    /// Cards newly discovered (one from a lucky click, up to seven from a pack).
    pub discovered: SmallVec<[CardId; 7]>,

    /// Gems credited from discovery rewards and milestone bonuses.
    pub gems_earned: u64,

    /// Stardust credited from milestone bonuses.
    pub stardust_earned: u64,
}

impl Effects {
    /// Check if nothing beyond the base state change happened.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.discovered.is_empty() && self.gems_earned == 0 && self.stardust_earned == 0
    }
}

/// Result of applying an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The action changed the state.
    Applied(Effects),
    /// The action was ignored.
    Rejected(Rejection),
}

impl Outcome {
    /// Check if the action was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(r) => Some(r),
            Outcome::Applied(_) => None,
        }
    }

    /// The applied effects, if any.
    #[must_use]
    pub fn effects(&self) -> Option<&Effects> {
        match self {
            Outcome::Applied(e) => Some(e),
            Outcome::Rejected(_) => None,
        }
    }
}

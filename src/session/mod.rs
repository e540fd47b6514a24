//! Game session: the single owner of the live state.
//!
//! A `Session` holds the catalog, the configuration, the RNG, the current
//! [`GameState`] and a [`SnapshotStore`]. Every action goes through
//! [`Session::dispatch`], which runs the reducer, commits the new state and
//! writes a snapshot. Persistence failures are logged and never reach the
//! caller; the committed state stands.
//!
//! Access is `&mut self`. Callers that share a session across threads wrap
//! it in a mutex.
//!
//! ## Example
//!
//! ```
//! use kawa_clicker::cards::CardRegistry;
//! use kawa_clicker::core::EconomyConfig;
//! use kawa_clicker::persistence::MemoryStore;
//! use kawa_clicker::session::Session;
//!
//! let config = EconomyConfig::default().with_seed(7);
//! let mut session = Session::new(CardRegistry::builtin(), config, MemoryStore::new());
//!
//! session.click();
//! assert_eq!(session.state().total_clicks, 1);
//! assert_eq!(session.state().currencies.clicks, 101);
//! ```

pub mod clock;

use std::time::Duration;

use tracing::{debug, info, warn};

pub use clock::TickClock;

use crate::cards::{CardId, CardRegistry};
use crate::core::{Action, EconomyConfig, GameRng, GameState, Outcome};
use crate::discovery::PackType;
use crate::persistence::{MemoryStore, PersistError, SaveData, SnapshotStore};
use crate::rules::{self, RulesContext};

/// Live game session.
pub struct Session<S: SnapshotStore = MemoryStore> {
    registry: CardRegistry,
    config: EconomyConfig,
    store: S,
    rng: GameRng,
    state: GameState,
    clock: TickClock,
    last_outcome: Option<Outcome>,
}

impl<S: SnapshotStore> Session<S> {
    /// Open a session, resuming from the snapshot under
    /// `config.storage_key` when one loads cleanly.
    ///
    /// A missing snapshot starts a fresh game. An unreadable, malformed or
    /// incompatible one is logged and also starts a fresh game.
    pub fn new(registry: CardRegistry, config: EconomyConfig, store: S) -> Self {
        let loaded = match load_snapshot(&store, &config) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "discarding unusable snapshot");
                None
            }
        };

        let (state, rng) = match loaded {
            Some(save) => {
                info!(key = %config.storage_key, version = save.version, "resumed from snapshot");
                let rng = match &save.rng {
                    Some(rng_state) => GameRng::from_state(rng_state),
                    None => fresh_rng(&config),
                };
                (save.restore(&registry, &config), rng)
            }
            None => (GameState::new(&registry, &config), fresh_rng(&config)),
        };

        Self {
            clock: TickClock::new(config.tick_interval),
            registry,
            config,
            store,
            rng,
            state,
            last_outcome: None,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Outcome of the most recent action, if any.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Capture the current state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> SaveData {
        SaveData::capture(&self.state, Some(&self.rng))
    }

    /// Apply `action`, commit the result and persist it.
    pub fn dispatch(&mut self, action: Action) -> &Outcome {
        let outcome = self.commit(&action);
        if outcome.is_applied() {
            self.persist();
        }
        self.last_outcome.insert(outcome)
    }

    /// Manual click.
    pub fn click(&mut self) -> &Outcome {
        self.dispatch(Action::Click)
    }

    /// Level up a card.
    pub fn upgrade(&mut self, id: impl Into<CardId>) -> &Outcome {
        self.dispatch(Action::Upgrade(id.into()))
    }

    /// Flip a card's deck membership.
    pub fn toggle_deck(&mut self, id: impl Into<CardId>) -> &Outcome {
        self.dispatch(Action::ToggleDeck(id.into()))
    }

    /// Buy and open a pack.
    pub fn buy_pack(&mut self, pack: PackType) -> &Outcome {
        self.dispatch(Action::BuyPack(pack))
    }

    /// Let `elapsed` wall time pass, crediting one auto-click tick per full
    /// tick interval. Returns the number of ticks credited.
    ///
    /// All completed ticks are applied in a single step. While the deck
    /// produces no auto-clicks, time is not banked.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if !self.state.stats().has_auto_clicks() {
            self.clock.clear();
            return 0;
        }

        let ticks = self.clock.accumulate(elapsed);
        if ticks == 0 {
            return 0;
        }

        let transition = rules::auto_click_ticks(&self.state, ticks);
        self.state = transition.state;
        self.last_outcome = Some(transition.outcome);
        self.persist();

        debug!(ticks, clicks = self.state.currencies.clicks, "auto-click ticks applied");
        ticks
    }

    /// Start over: fresh state, no banked time, stored snapshot deleted.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.registry, &self.config);
        self.clock.clear();
        self.last_outcome = None;

        if let Err(e) = self.store.remove(&self.config.storage_key) {
            warn!(key = %self.config.storage_key, error = %e, "failed to delete snapshot");
        }
        info!("session reset");
    }

    fn commit(&mut self, action: &Action) -> Outcome {
        let mut ctx = RulesContext::new(&self.registry, &self.config, &mut self.rng);
        let transition = rules::apply(&self.state, action, &mut ctx);
        self.state = transition.state;

        match &transition.outcome {
            Outcome::Applied(effects) => {
                debug!(%action, clicks = self.state.currencies.clicks, "action applied");
                if let Action::BuyPack(pack) = action {
                    info!(%pack, cards = effects.discovered.len(), "pack opened");
                }
                for id in &effects.discovered {
                    info!(card = %id, "card discovered");
                }
            }
            Outcome::Rejected(reason) => {
                debug!(%action, %reason, "action rejected");
            }
        }

        transition.outcome
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!(key = %self.config.storage_key, error = %e, "failed to save snapshot");
        }
    }

    fn try_persist(&mut self) -> Result<(), PersistError> {
        let bytes = self.snapshot().encode(self.config.snapshot_format)?;
        self.store.save(&self.config.storage_key, &bytes)
    }
}

fn load_snapshot<S: SnapshotStore>(
    store: &S,
    config: &EconomyConfig,
) -> Result<Option<SaveData>, PersistError> {
    let Some(bytes) = store.load(&config.storage_key)? else {
        return Ok(None);
    };
    SaveData::decode(&bytes, config.snapshot_format).map(Some)
}

fn fresh_rng(config: &EconomyConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rejection, Wallet};
    use crate::persistence::SnapshotFormat;

    fn session() -> Session {
        Session::new(
            CardRegistry::builtin(),
            EconomyConfig::default().with_seed(1),
            MemoryStore::new(),
        )
    }

    #[test]
    fn test_fresh_session() {
        let s = session();
        assert_eq!(s.state().currencies, Wallet::new(100, 10, 2, 0));
        assert!(s.last_outcome().is_none());
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_dispatch_persists_applied_actions() {
        let mut s = session();
        assert!(s.click().is_applied());
        assert_eq!(s.store().len(), 1);

        let key = s.config().storage_key.clone();
        let bytes = s.store().get(&key).unwrap().to_vec();
        let save = SaveData::decode(&bytes, SnapshotFormat::Json).unwrap();
        assert_eq!(save.game.total_clicks, 1);
    }

    #[test]
    fn test_rejection_leaves_state() {
        let mut s = session();
        let before = s.state().clone();

        let outcome = s.toggle_deck("iron_finger").clone();
        assert_eq!(
            outcome.rejection(),
            Some(&Rejection::NotOwned(CardId::new("iron_finger")))
        );
        assert_eq!(s.state(), &before);
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_advance_without_auto_clickers() {
        let mut s = session();
        assert_eq!(s.advance(Duration::from_secs(5)), 0);
        assert_eq!(s.state().currencies.clicks, 100);
    }

    #[test]
    fn test_long_absence_in_one_step() {
        let mut s = session();
        s.upgrade("auto_finger");
        s.toggle_deck("auto_finger");
        let before = s.state().currencies.clicks;

        let thirty_days = Duration::from_secs(30 * 24 * 60 * 60);
        assert_eq!(s.advance(thirty_days), 2_592_000);
        assert_eq!(s.state().currencies.clicks, before + 2_592_000);
        assert_eq!(s.state().statistics.clicks_per_second, 1.0);
        assert!(s.last_outcome().unwrap().is_applied());
    }

    #[test]
    fn test_resume_from_store() {
        let mut s = session();
        for _ in 0..5 {
            s.click();
        }
        s.upgrade("rookie_clicker");
        let expected = s.state().clone();

        let store = s.into_store();
        let resumed = Session::new(
            CardRegistry::builtin(),
            EconomyConfig::default().with_seed(1),
            store,
        );
        assert_eq!(resumed.state(), &expected);
    }

    #[test]
    fn test_corrupt_snapshot_starts_fresh() {
        let config = EconomyConfig::default();
        let store = MemoryStore::new().with_entry(config.storage_key.clone(), &b"{ not json"[..]);

        let s = Session::new(CardRegistry::builtin(), config, store);
        assert_eq!(s.state().total_clicks, 0);
        assert_eq!(s.state().currencies, Wallet::new(100, 10, 2, 0));
    }

    #[test]
    fn test_reset_clears_store() {
        let mut s = session();
        s.click();
        assert_eq!(s.store().len(), 1);

        s.reset();
        assert!(s.store().is_empty());
        assert_eq!(s.state().total_clicks, 0);
    }
}

//! The built-in card catalog.
//!
//! Three cards per rarity tier. Commons add click power, uncommons start
//! automation, rares introduce multipliers, and the higher tiers scale all
//! three.

use super::definition::{CardDefinition, CardEffect, CardType};
use super::rarity::Rarity;
use crate::core::Wallet;

/// All built-in card definitions, in declaration order.
#[must_use]
pub fn builtin_cards() -> Vec<CardDefinition> {
    use CardType::{Clicker, Generator, Multiplier};
    use Rarity::{Common, Epic, Legendary, Mythic, Rare, Uncommon};

    vec![
        // Common: click power
        CardDefinition::new("rookie_clicker", "Rookie Clicker", Common, Clicker)
            .with_description("Your first step into the world of clicking. +1 click power.")
            .with_max_level(10)
            .with_cost(Wallet::new(10, 0, 0, 0))
            .with_effect(CardEffect::click_power(1.0)),
        CardDefinition::new("iron_finger", "Iron Finger", Common, Clicker)
            .with_description("Strengthened by countless clicks. +2 click power.")
            .with_max_level(8)
            .with_cost(Wallet::new(25, 0, 0, 0))
            .with_effect(CardEffect::click_power(2.0)),
        CardDefinition::new("swift_tap", "Swift Tap", Common, Clicker)
            .with_description("Quick reflexes for rapid clicking. +3 click power.")
            .with_max_level(6)
            .with_cost(Wallet::new(50, 1, 0, 0))
            .with_effect(CardEffect::click_power(3.0)),
        // Uncommon: automation
        CardDefinition::new("auto_finger", "Auto Finger", Uncommon, Generator)
            .with_description("A mechanical finger that clicks for you. 1 auto-click per second.")
            .with_max_level(15)
            .with_cost(Wallet::new(100, 2, 0, 0))
            .with_effect(CardEffect::auto_clicks(1.0)),
        CardDefinition::new("click_bot", "Click Bot", Uncommon, Generator)
            .with_description("Advanced automation technology. 3 auto-clicks per second.")
            .with_max_level(12)
            .with_cost(Wallet::new(250, 5, 1, 0))
            .with_effect(CardEffect::auto_clicks(3.0)),
        CardDefinition::new("thunder_clicker", "Thunder Clicker", Uncommon, Clicker)
            .with_description("Powered by lightning itself. +5 click power.")
            .with_max_level(10)
            .with_cost(Wallet::new(200, 3, 0, 0))
            .with_effect(CardEffect::click_power(5.0)),
        // Rare: multipliers
        CardDefinition::new("ruby_amplifier", "Ruby Amplifier", Rare, Multiplier)
            .with_description("A precious gem that amplifies your efforts. 1.5x multiplier.")
            .with_max_level(8)
            .with_cost(Wallet::new(500, 10, 2, 0))
            .with_effect(CardEffect::multiplier(1.5)),
        CardDefinition::new("crystal_core", "Crystal Core", Rare, Multiplier)
            .with_description("Mystical crystal that boosts all abilities. 2x multiplier.")
            .with_max_level(6)
            .with_cost(Wallet::new(1000, 20, 5, 1))
            .with_effect(CardEffect::multiplier(2.0)),
        CardDefinition::new("quantum_clicker", "Quantum Clicker", Rare, Generator)
            .with_description("Exists in multiple dimensions. 8 auto-clicks per second.")
            .with_max_level(10)
            .with_cost(Wallet::new(800, 15, 3, 0))
            .with_effect(CardEffect::auto_clicks(8.0)),
        // Epic
        CardDefinition::new("diamond_fist", "Diamond Fist", Epic, Clicker)
            .with_description("Unbreakable determination. +25 click power.")
            .with_max_level(5)
            .with_cost(Wallet::new(2000, 50, 10, 2))
            .with_effect(CardEffect::click_power(25.0)),
        CardDefinition::new("time_dilator", "Time Dilator", Epic, Multiplier)
            .with_description("Bends time to your will. 3x multiplier.")
            .with_max_level(4)
            .with_cost(Wallet::new(3000, 75, 15, 5))
            .with_effect(CardEffect::multiplier(3.0)),
        CardDefinition::new("void_engine", "Void Engine", Epic, Generator)
            .with_description("Harnesses the power of the void. 25 auto-clicks per second.")
            .with_max_level(8)
            .with_cost(Wallet::new(5000, 100, 25, 5))
            .with_effect(CardEffect::auto_clicks(25.0)),
        // Legendary
        CardDefinition::new("celestial_touch", "Celestial Touch", Legendary, Clicker)
            .with_description("Blessed by the gods themselves. +100 click power.")
            .with_max_level(3)
            .with_cost(Wallet::new(10_000, 200, 50, 15))
            .with_effect(CardEffect::click_power(100.0)),
        CardDefinition::new("infinity_loop", "Infinity Loop", Legendary, Multiplier)
            .with_description("An endless cycle of power. 5x multiplier.")
            .with_max_level(3)
            .with_cost(Wallet::new(15_000, 300, 75, 25))
            .with_effect(CardEffect::multiplier(5.0)),
        CardDefinition::new("cosmic_generator", "Cosmic Generator", Legendary, Generator)
            .with_description("Powered by starlight. 100 auto-clicks per second.")
            .with_max_level(5)
            .with_cost(Wallet::new(20_000, 400, 100, 20))
            .with_effect(CardEffect::auto_clicks(100.0)),
        // Mythic
        CardDefinition::new("origin_click", "Origin Click", Mythic, Clicker)
            .with_description("The first click that started everything. +500 click power.")
            .with_max_level(1)
            .with_cost(Wallet::new(100_000, 1000, 500, 100))
            .with_effect(CardEffect::click_power(500.0)),
        CardDefinition::new("reality_breaker", "Reality Breaker", Mythic, Multiplier)
            .with_description("Transcends all limitations. 10x multiplier.")
            .with_max_level(1)
            .with_cost(Wallet::new(150_000, 1500, 750, 150))
            .with_effect(CardEffect::multiplier(10.0)),
        CardDefinition::new("universe_engine", "Universe Engine", Mythic, Generator)
            .with_description("The power of creation itself. 1000 auto-clicks per second.")
            .with_max_level(1)
            .with_cost(Wallet::new(200_000, 2000, 1000, 200))
            .with_effect(CardEffect::auto_clicks(1000.0)),
    ]
}

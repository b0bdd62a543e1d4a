//! `coffee`: brew a virtual coffee and track persisted stats and achievements.
//!
//! ```text
//! coffee                  regular, hot
//! coffee espresso iced    any type + strong|decaf + iced, in any order
//! coffee stats            totals, favorite and achievements
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::storage_keys;
use crate::error::RegistryError;
use crate::output::Line;
use crate::registry::{Command, CommandRegistry};
use crate::result::ExecutionResult;
use crate::storage::{KeyValueStore, load_json_or, save_json};

/// Caffeine level above which a brew prints a warning (mg).
const CAFFEINE_WARNING_MG: u32 = 400;

const CUP: &str = r"    [☕]
   (≈≈≈≈ )
   |≈≈≈≈ |
   '-----'";

// =============================================================================
// Brew order
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoffeeType {
    Regular,
    Espresso,
    Cappuccino,
    Mocha,
    Latte,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 5] = [
        Self::Regular,
        Self::Espresso,
        Self::Cappuccino,
        Self::Mocha,
        Self::Latte,
    ];

    /// Key used in the persisted `favoriteType` map.
    pub fn id(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Espresso => "espresso",
            Self::Cappuccino => "cappuccino",
            Self::Mocha => "mocha",
            Self::Latte => "latte",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular Coffee",
            Self::Espresso => "Espresso",
            Self::Cappuccino => "Cappuccino",
            Self::Mocha => "Mocha",
            Self::Latte => "Latte",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Regular | Self::Espresso => "☕",
            Self::Cappuccino => "🧋",
            Self::Mocha => "🍫",
            Self::Latte => "🥛",
        }
    }

    /// Base caffeine content in mg.
    pub fn caffeine_mg(self) -> u32 {
        match self {
            Self::Regular => 95,
            Self::Espresso => 150,
            Self::Cappuccino => 80,
            Self::Mocha => 90,
            Self::Latte => 75,
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Regular,
    Strong,
    Decaf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temperature {
    Hot,
    Iced,
}

/// What to brew, parsed from free-form arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrewOrder {
    pub kind: CoffeeType,
    pub strength: Strength,
    pub temperature: Temperature,
}

impl BrewOrder {
    /// Picks type, strength and temperature by keyword; defaults to a hot
    /// regular coffee.
    pub fn parse(args: &[String]) -> Self {
        let input = args.join(" ").to_lowercase();
        let kind = CoffeeType::ALL[1..]
            .iter()
            .copied()
            .find(|t| input.contains(t.id()))
            .unwrap_or(CoffeeType::Regular);
        let strength = if input.contains("strong") {
            Strength::Strong
        } else if input.contains("decaf") {
            Strength::Decaf
        } else {
            Strength::Regular
        };
        let temperature = if input.contains("iced") {
            Temperature::Iced
        } else {
            Temperature::Hot
        };
        Self {
            kind,
            strength,
            temperature,
        }
    }

    /// Caffeine in mg after strength and temperature adjustments.
    pub fn caffeine_mg(&self) -> u32 {
        let mut mg = f64::from(self.kind.caffeine_mg());
        match self.strength {
            Strength::Strong => mg *= 1.5,
            Strength::Decaf => mg *= 0.1,
            Strength::Regular => {}
        }
        if self.temperature == Temperature::Iced {
            mg *= 0.9;
        }
        mg.round() as u32
    }

    /// e.g. "🧊 Iced 💪 Extra Strong Espresso"
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.temperature == Temperature::Iced {
            parts.push("🧊 Iced");
        }
        match self.strength {
            Strength::Strong => parts.push("💪 Extra Strong"),
            Strength::Decaf => parts.push("😴 Decaf"),
            Strength::Regular => {}
        }
        parts.push(self.kind.display_name());
        parts.join(" ")
    }
}

// =============================================================================
// Stats and achievements
// =============================================================================

/// Persisted brewing statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoffeeStats {
    pub total_coffees: u32,
    pub current_caffeine: u32,
    pub achievements: Vec<String>,
    /// Unix timestamp of the last brew, in milliseconds.
    pub last_brew: i64,
    /// Brew count per coffee type id.
    pub favorite_type: BTreeMap<String, u32>,
}

pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    condition: fn(&CoffeeStats, u32) -> bool,
}

pub static ACHIEVEMENTS: [Achievement; 5] = [
    Achievement {
        id: "first_coffee",
        name: "☕ First Brew",
        condition: |stats, _| stats.total_coffees >= 1,
    },
    Achievement {
        id: "coffee_lover",
        name: "❤️ Coffee Lover",
        condition: |stats, _| stats.total_coffees >= 10,
    },
    Achievement {
        id: "caffeine_addict",
        name: "⚡ Caffeine Addict",
        condition: |stats, _| stats.total_coffees >= 50,
    },
    Achievement {
        id: "barista",
        name: "👨‍🍳 Home Barista",
        condition: |stats, _| stats.favorite_type.len() >= 4,
    },
    Achievement {
        id: "night_owl",
        name: "🦉 Night Owl",
        condition: |_, hour| !(6..22).contains(&hour),
    },
];

impl CoffeeStats {
    /// Records a brew at `timestamp_ms` (local `hour`) and returns the
    /// achievements it unlocked.
    pub fn record(
        &mut self,
        order: &BrewOrder,
        timestamp_ms: i64,
        hour: u32,
    ) -> Vec<&'static Achievement> {
        self.total_coffees += 1;
        self.current_caffeine += order.caffeine_mg();
        self.last_brew = timestamp_ms;
        *self
            .favorite_type
            .entry(order.kind.id().to_string())
            .or_insert(0) += 1;

        let stats: &CoffeeStats = self;
        let unlocked: Vec<&'static Achievement> = ACHIEVEMENTS
            .iter()
            .filter(|a| {
                (a.condition)(stats, hour) && !stats.achievements.iter().any(|id| id == a.id)
            })
            .collect();
        self.achievements
            .extend(unlocked.iter().map(|a| a.id.to_string()));
        unlocked
    }

    /// Most brewed type; ties go to the alphabetically first id.
    pub fn favorite(&self) -> Option<(CoffeeType, u32)> {
        self.favorite_type
            .iter()
            .filter_map(|(id, count)| Some((CoffeeType::from_id(id)?, *count)))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }
}

// =============================================================================
// Quotes
// =============================================================================

const MORNING_QUOTES: [&str; 4] = [
    "Good morning! Time to brew some productivity.",
    "Rise and grind! ☕",
    "First coffee of the day hits different.",
    "Morning coffee: The most important commit of the day.",
];

const AFTERNOON_QUOTES: [&str; 4] = [
    "Afternoon pick-me-up! ☕",
    "Debugging afternoon slump with caffeine.",
    "Post-lunch coffee = Second wind.",
    "Coffee: Because afternoon meetings exist.",
];

const EVENING_QUOTES: [&str; 4] = [
    "Late night coding session fuel! 🌙",
    "Burning the midnight oil with coffee.",
    "Coffee at night? Living dangerously! 😎",
    "Debug mode: Activated. Sleep mode: Deactivated.",
];

const GENERAL_QUOTES: [&str; 4] = [
    "Debugging is twice as hard as writing code in the first place.",
    "Coffee: Because adulting is hard.",
    "Programmer: An organism that turns coffee into code.",
    "Code. Coffee. Repeat.",
];

/// Picks a quote for `hour` from the time-of-day set plus the general set.
fn quote_for(hour: u32, seed: u64) -> &'static str {
    let timed = match hour {
        5..=11 => &MORNING_QUOTES,
        12..=17 => &AFTERNOON_QUOTES,
        _ => &EVENING_QUOTES,
    };
    let pool: Vec<&'static str> = timed.iter().chain(GENERAL_QUOTES.iter()).copied().collect();
    pool[(seed % pool.len() as u64) as usize]
}

// =============================================================================
// Command
// =============================================================================

struct CoffeeCmd {
    store: Arc<dyn KeyValueStore>,
}

impl CoffeeCmd {
    fn load_stats(&self) -> CoffeeStats {
        load_json_or(self.store.as_ref(), storage_keys::COFFEE_STATS, CoffeeStats::default())
    }

    fn brew(&self, order: BrewOrder, timestamp_ms: i64, hour: u32) -> ExecutionResult {
        let mut stats = self.load_stats();
        let caffeine_before = stats.current_caffeine;
        let unlocked = stats.record(&order, timestamp_ms, hour);
        save_json(self.store.as_ref(), storage_keys::COFFEE_STATS, &stats);

        let label = order.label();
        let caffeine = order.caffeine_mg();
        let mut lines = vec![
            Line::heading(format!("{} Brewing your {label}...", order.kind.emoji())),
            Line::ascii(CUP),
            Line::success(format!("✅ {label} ready!")),
            Line::info(format!(
                "💭 \"{}\"",
                quote_for(hour, timestamp_ms.unsigned_abs())
            )),
            Line::Empty,
            Line::field("Caffeine", format!("+{caffeine}mg ⚡")),
            Line::field("Total Brews", format!("{} ☕", stats.total_coffees)),
        ];

        if !unlocked.is_empty() {
            lines.push(Line::Empty);
            lines.push(Line::heading("🎉 Achievement Unlocked!"));
            lines.extend(unlocked.iter().map(|a| Line::success(a.name)));
        }

        if caffeine_before + caffeine > CAFFEINE_WARNING_MG {
            lines.push(Line::error("⚠️ High caffeine level! Maybe switch to water? 💧"));
        }

        ExecutionResult::output(lines)
    }

    fn stats(&self) -> ExecutionResult {
        let stats = self.load_stats();
        let mut lines = vec![
            Line::heading("☕ Coffee Statistics"),
            Line::field("Total Brews", stats.total_coffees.to_string()),
            Line::field("Current Caffeine", format!("{}mg", stats.current_caffeine)),
        ];
        if let Some((kind, count)) = stats.favorite() {
            lines.push(Line::field(
                "Favorite",
                format!("{} {} ({count}x)", kind.emoji(), kind.display_name()),
            ));
        }

        lines.push(Line::Empty);
        lines.push(Line::heading(format!(
            "Achievements ({}/{})",
            stats.achievements.len(),
            ACHIEVEMENTS.len()
        )));
        for achievement in &ACHIEVEMENTS {
            if stats.achievements.iter().any(|id| id == achievement.id) {
                lines.push(Line::success(achievement.name));
            } else {
                lines.push(Line::text(format!("🔒 {}", achievement.name)));
            }
        }
        ExecutionResult::output(lines)
    }
}

impl Command for CoffeeCmd {
    fn name(&self) -> &str {
        "coffee"
    }
    fn description(&self) -> &str {
        "Brew coffee! Try: coffee, coffee espresso iced, coffee stats"
    }
    fn execute(&self, args: &[String]) -> ExecutionResult {
        if args.first().is_some_and(|a| a.eq_ignore_ascii_case("stats")) {
            return self.stats();
        }
        let now = Local::now();
        self.brew(BrewOrder::parse(args), now.timestamp_millis(), now.hour())
    }
}

pub(super) fn register_coffee_command(
    reg: &mut CommandRegistry,
    store: Arc<dyn KeyValueStore>,
) -> Result<(), RegistryError> {
    reg.register(Box::new(CoffeeCmd { store }), &[])
}

//! Core configuration.
//!
//! Centralizes the constants shared by the dispatch, history and persistence
//! layers, plus the profile data rendered by the portfolio commands.

// =============================================================================
// Dispatch
// =============================================================================

/// Minimum similarity score for "did you mean" suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 0.4;

/// Maximum number of "did you mean" suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// Minimum trimmed input length before autocomplete offers anything.
pub const MIN_SUGGESTION_CHARS: usize = 0;

/// Command executed to seed the output log.
pub const WELCOME_COMMAND: &str = "welcome";

// =============================================================================
// History
// =============================================================================

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Preferences
// =============================================================================

/// Default typing animation speed (characters per second).
pub const DEFAULT_TYPING_SPEED: u32 = 300;

/// Accepted typing speed range for `typing speed <n>`.
pub const TYPING_SPEED_RANGE: std::ops::RangeInclusive<u32> = 1..=500;

/// Storage keys for persisted state.
///
/// Every value is JSON-encoded under its own key.
pub mod storage_keys {
    pub const COMMAND_HISTORY: &str = "terminal-command-history";
    pub const THEME: &str = "terminal-theme";
    pub const TYPING_ANIMATION: &str = "terminal-typing-animation";
    pub const TYPING_SPEED: &str = "terminal-typing-speed";
    pub const MATRIX_ENABLED: &str = "terminal-matrix-enabled";
    pub const AUDIO_ENABLED: &str = "terminal-audio-enabled";
    pub const COFFEE_STATS: &str = "coffee-stats";
}

// =============================================================================
// Profile
// =============================================================================

/// Portfolio owner details used by the profile commands.
pub mod profile {
    pub const NAME: &str = "Le Hoang Tu";
    pub const TITLE: &str = "Software Engineer";
    pub const EMAIL: &str = "mrahn1234@gmail.com";
    pub const HANDLE: &str = "codyzard";
    pub const HOSTNAME: &str = "Codyzard.dev";
    pub const LOCATION: &str = "Tokyo, Japan";

    pub const GITHUB_URL: &str = "https://github.com/codyzard";
    pub const LINKEDIN_URL: &str =
        "https://www.linkedin.com/in/l%C3%AA-ho%C3%A0ng-t%C3%BA-676b89136/";
    pub const BLOG_URL: &str = "https://developers.prtimes.jp/author/lehoangtu498b09a43f";
    pub const RESUME_URL: &str = "/resume.pdf";
    pub const AWARD_URL: &str = "https://prtimes.co.jp/culture/prtimes_lehoangtu/";

    /// Tech stack rows as (category, technologies).
    pub const SKILLS: &[(&str, &str)] = &[
        ("Frontend", "React, Next.js, TypeScript, Tailwind CSS"),
        ("Backend", "PHP, Go, Hono, Node.js, Express"),
        ("Database", "PostgreSQL, MySQL, DynamoDB"),
        ("DevOps/Tools", "Git, Docker, AWS (S3, Lambda), CI/CD"),
        ("Languages", "English, Japanese, Vietnamese"),
    ];
}

// =============================================================================
// Weather
// =============================================================================

/// Open-Meteo endpoints used by the `weather` command.
pub mod weather {
    pub const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
    pub const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";
    pub const CURRENT_FIELDS: &str =
        "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";
}

// =============================================================================
// Snake
// =============================================================================

/// Snake board size, pacing and cell glyphs.
pub mod snake {
    pub const BOARD_WIDTH: i32 = 20;
    pub const BOARD_HEIGHT: i32 = 15;
    /// Milliseconds between moves.
    pub const TICK_MS: u32 = 150;
    pub const SCORE_PER_FOOD: u32 = 10;

    pub const INITIAL_HEAD: (i32, i32) = (10, 7);
    pub const INITIAL_FOOD: (i32, i32) = (15, 7);

    pub const CELL_EMPTY: &str = "·";
    pub const CELL_FOOD: &str = "🍌";
    pub const CELL_HEAD: &str = "🐵";
    pub const CELL_BODY: &str = "🐒";
}

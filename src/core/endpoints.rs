use std::fmt;

pub const HEALTH_PATH: &str = "/health";
pub const SERVICE_INFO_PATH: &str = "/";
pub const COMBAT_PATH: &str = "/api/combat";
pub const END_SCREEN_PATH: &str = "/api/combat/endscreen";
pub const LUDO_PATH: &str = "/api/ludo";
pub const TIC_TAC_TOE_PATH: &str = "/api/ttt";
pub const LEADERBOARD_PATH: &str = "/api/ttt/leaderboard";
pub const PINTEREST_PATH: &str = "/api/scrape/pinterest";
pub const VS_BATTLES_SEARCH_PATH: &str = "/api/scrape/vsbattles/search";
pub const VS_BATTLES_DETAIL_PATH: &str = "/api/scrape/vsbattles/detail";

pub const DEFAULT_PINTEREST_RESULTS: u32 = 10;

/// Identifies which remote call an error or log line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    HealthCheck,
    ServiceInfo,
    CombatImage,
    EndScreen,
    LudoBoard,
    TicTacToeBoard,
    Leaderboard,
    PinterestSearch,
    VsBattlesSearch,
    VsBattlesDetail,
}

impl Operation {
    pub fn path(self) -> &'static str {
        match self {
            Operation::HealthCheck => HEALTH_PATH,
            Operation::ServiceInfo => SERVICE_INFO_PATH,
            Operation::CombatImage => COMBAT_PATH,
            Operation::EndScreen => END_SCREEN_PATH,
            Operation::LudoBoard => LUDO_PATH,
            Operation::TicTacToeBoard => TIC_TAC_TOE_PATH,
            Operation::Leaderboard => LEADERBOARD_PATH,
            Operation::PinterestSearch => PINTEREST_PATH,
            Operation::VsBattlesSearch => VS_BATTLES_SEARCH_PATH,
            Operation::VsBattlesDetail => VS_BATTLES_DETAIL_PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::HealthCheck => "health check",
            Operation::ServiceInfo => "service info",
            Operation::CombatImage => "combat image",
            Operation::EndScreen => "end screen",
            Operation::LudoBoard => "ludo board",
            Operation::TicTacToeBoard => "tic-tac-toe board",
            Operation::Leaderboard => "leaderboard",
            Operation::PinterestSearch => "pinterest search",
            Operation::VsBattlesSearch => "vs battles search",
            Operation::VsBattlesDetail => "vs battles detail",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Statistic identifiers and their display metadata
//!
//! Every statistic the dashboard can rank or chart is listed here once, with
//! its wire key, label, source table, display scale and direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatError;
use crate::percentile::percentile;

/// Per-game table a statistic is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTable {
    Base,
    Advanced,
}

/// Display and ranking metadata for a statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatMeta {
    /// Wire key, e.g. `FG3_PCT`
    pub key: &'static str,

    /// Short display label
    pub label: &'static str,

    pub table: StatTable,

    /// Stored as a 0–1 fraction, shown as a percentage
    pub is_percentage: bool,

    /// Lower values rank higher (turnovers, fouls, defensive rating)
    pub is_inverted: bool,
}

/// Statistics tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatCategory {
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    FgPct,
    Fg3Pct,
    FtPct,
    Tov,
    Fgm,
    Fga,
    Fg3m,
    Fg3a,
    Ftm,
    Fta,
    Oreb,
    Dreb,
    Pf,
    PlusMinus,
    Min,
    TsPct,
    EfgPct,
    UsgPct,
    AstPct,
    RebPct,
    StlPct,
    BlkPct,
    TmTovPct,
    OffRating,
    DefRating,
    NetRating,
    Pie,
    AstTo,
    AstRatio,
    OrebPct,
    DrebPct,
    Pace,
}

const fn base(key: &'static str, label: &'static str) -> StatMeta {
    StatMeta { key, label, table: StatTable::Base, is_percentage: false, is_inverted: false }
}

const fn advanced(key: &'static str, label: &'static str) -> StatMeta {
    StatMeta { key, label, table: StatTable::Advanced, is_percentage: false, is_inverted: false }
}

const fn pct(meta: StatMeta) -> StatMeta {
    StatMeta { is_percentage: true, ..meta }
}

const fn inverted(meta: StatMeta) -> StatMeta {
    StatMeta { is_inverted: true, ..meta }
}

impl StatCategory {
    /// Every category, base table first
    pub const ALL: [StatCategory; 37] = [
        StatCategory::Pts,
        StatCategory::Reb,
        StatCategory::Ast,
        StatCategory::Stl,
        StatCategory::Blk,
        StatCategory::FgPct,
        StatCategory::Fg3Pct,
        StatCategory::FtPct,
        StatCategory::Tov,
        StatCategory::Fgm,
        StatCategory::Fga,
        StatCategory::Fg3m,
        StatCategory::Fg3a,
        StatCategory::Ftm,
        StatCategory::Fta,
        StatCategory::Oreb,
        StatCategory::Dreb,
        StatCategory::Pf,
        StatCategory::PlusMinus,
        StatCategory::Min,
        StatCategory::TsPct,
        StatCategory::EfgPct,
        StatCategory::UsgPct,
        StatCategory::AstPct,
        StatCategory::RebPct,
        StatCategory::StlPct,
        StatCategory::BlkPct,
        StatCategory::TmTovPct,
        StatCategory::OffRating,
        StatCategory::DefRating,
        StatCategory::NetRating,
        StatCategory::Pie,
        StatCategory::AstTo,
        StatCategory::AstRatio,
        StatCategory::OrebPct,
        StatCategory::DrebPct,
        StatCategory::Pace,
    ];

    /// Categories shown on the percentile spider chart
    pub const PROFILE: [StatCategory; 8] = [
        StatCategory::Pts,
        StatCategory::Reb,
        StatCategory::Ast,
        StatCategory::Stl,
        StatCategory::Blk,
        StatCategory::FgPct,
        StatCategory::Fg3Pct,
        StatCategory::Tov,
    ];

    pub const fn meta(self) -> StatMeta {
        match self {
            StatCategory::Pts => base("PTS", "Points"),
            StatCategory::Reb => base("REB", "Rebounds"),
            StatCategory::Ast => base("AST", "Assists"),
            StatCategory::Stl => base("STL", "Steals"),
            StatCategory::Blk => base("BLK", "Blocks"),
            StatCategory::FgPct => pct(base("FG_PCT", "FG %")),
            StatCategory::Fg3Pct => pct(base("FG3_PCT", "3PT %")),
            StatCategory::FtPct => pct(base("FT_PCT", "FT %")),
            StatCategory::Tov => inverted(base("TOV", "Turnovers")),
            StatCategory::Fgm => base("FGM", "FGM"),
            StatCategory::Fga => base("FGA", "FGA"),
            StatCategory::Fg3m => base("FG3M", "3PM"),
            StatCategory::Fg3a => base("FG3A", "3PA"),
            StatCategory::Ftm => base("FTM", "FTM"),
            StatCategory::Fta => base("FTA", "FTA"),
            StatCategory::Oreb => base("OREB", "OREB"),
            StatCategory::Dreb => base("DREB", "DREB"),
            StatCategory::Pf => inverted(base("PF", "Fouls")),
            StatCategory::PlusMinus => base("PLUS_MINUS", "+/-"),
            StatCategory::Min => base("MIN", "Minutes"),
            StatCategory::TsPct => pct(advanced("TS_PCT", "TS %")),
            StatCategory::EfgPct => pct(advanced("EFG_PCT", "eFG %")),
            StatCategory::UsgPct => pct(advanced("USG_PCT", "Usage %")),
            StatCategory::AstPct => pct(advanced("AST_PCT", "AST %")),
            StatCategory::RebPct => pct(advanced("REB_PCT", "REB %")),
            StatCategory::StlPct => pct(advanced("STL_PCT", "STL %")),
            StatCategory::BlkPct => pct(advanced("BLK_PCT", "BLK %")),
            StatCategory::TmTovPct => inverted(pct(advanced("TM_TOV_PCT", "TOV %"))),
            StatCategory::OffRating => advanced("OFF_RATING", "ORTG"),
            StatCategory::DefRating => inverted(advanced("DEF_RATING", "DRTG")),
            StatCategory::NetRating => advanced("NET_RATING", "NetRTG"),
            StatCategory::Pie => advanced("PIE", "PIE"),
            StatCategory::AstTo => advanced("AST_TO", "AST/TO"),
            StatCategory::AstRatio => advanced("AST_RATIO", "AST Ratio"),
            StatCategory::OrebPct => pct(advanced("OREB_PCT", "OREB %")),
            StatCategory::DrebPct => pct(advanced("DREB_PCT", "DREB %")),
            StatCategory::Pace => advanced("PACE", "Pace"),
        }
    }

    pub const fn key(self) -> &'static str {
        self.meta().key
    }

    pub const fn label(self) -> &'static str {
        self.meta().label
    }

    pub const fn is_percentage(self) -> bool {
        self.meta().is_percentage
    }

    pub const fn is_inverted(self) -> bool {
        self.meta().is_inverted
    }

    /// Display string: percentages as `35.7%`, everything else as `25.4`
    pub fn format_value(self, value: f64) -> String {
        if self.is_percentage() {
            format!("{:.1}%", value * 100.0)
        } else {
            format!("{value:.1}")
        }
    }

    /// Percentile of `value` in `population`, inverted for lower-is-better stats
    pub fn percentile(self, population: &[f64], value: f64) -> f64 {
        percentile(population, value, self.is_inverted())
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatCategory {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatCategory::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatError::UnknownCategory(s.to_string()))
    }
}

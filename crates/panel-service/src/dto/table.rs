//! Table view of sanction records
//!
//! Each record becomes a row of typed cells so any front end can render the
//! records table without re-deriving labels, colours or progress.

use chrono::{DateTime, Utc};
use panel_core::entities::{Sanction, SanctionKind, SanctionStatus};
use panel_core::value_objects::{total_pages, Page, PageRequest};
use serde::Serialize;

/// Number of characters shown before a reason is cut short
pub const REASON_PREVIEW_CHARS: usize = 25;

/// Palette of chip/progress colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipColor {
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// Short coloured label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: String,
    pub color: ChipColor,
}

impl Chip {
    fn new(label: impl Into<String>, color: ChipColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCell {
    pub name: String,
    pub steam_id: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCell {
    pub short: String,
    pub full: String,
}

/// Remaining time of a sanction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimeLeftCell {
    Permanent {
        label: &'static str,
        color: ChipColor,
    },
    Progress {
        /// Elapsed share in percent, may exceed 100 or be negative
        percentage: i64,
        /// `percentage` clamped to `0..=100` for drawing the bar
        value: u8,
        color: ChipColor,
    },
}

/// One rendered record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanctionRow {
    pub id: i64,
    pub player: PlayerCell,
    pub status: Chip,
    #[serde(rename = "type")]
    pub sanction_type: Chip,
    pub reason: ReasonCell,
    pub duration: Chip,
    pub time_left: TimeLeftCell,
    pub created: DateTime<Utc>,
    pub ends: DateTime<Utc>,
}

/// A page of rendered records plus paging metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableResponse {
    pub title: &'static str,
    pub count: u64,
    pub page: u32,
    pub rows: u32,
    pub pages: u32,
    pub items: Vec<SanctionRow>,
}

impl TableResponse {
    /// Render a page of records at `now`
    pub fn render(
        kind: SanctionKind,
        request: PageRequest,
        page: Page<Sanction>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: kind.title(),
            count: page.count,
            page: request.page(),
            rows: request.rows(),
            pages: total_pages(page.count, request.rows()),
            items: page
                .results
                .iter()
                .map(|sanction| render_row(sanction, now))
                .collect(),
        }
    }
}

/// Render one record at `now`
pub fn render_row(sanction: &Sanction, now: DateTime<Utc>) -> SanctionRow {
    SanctionRow {
        id: sanction.id,
        player: PlayerCell {
            name: sanction.player_name.clone(),
            steam_id: sanction.player_steam_id.clone(),
            avatar: None,
        },
        status: status_chip(sanction.effective_status(now)),
        sanction_type: Chip::new(sanction.sanction_type.clone(), ChipColor::Secondary),
        reason: reason_cell(&sanction.reason),
        duration: Chip::new(sanction.duration_label(), ChipColor::Primary),
        time_left: time_left_cell(sanction, now),
        created: sanction.created,
        ends: sanction.ends,
    }
}

fn status_chip(status: SanctionStatus) -> Chip {
    let color = match status {
        SanctionStatus::Active => ChipColor::Danger,
        SanctionStatus::Expired => ChipColor::Success,
        SanctionStatus::Revoked => ChipColor::Default,
    };
    Chip::new(status.as_str(), color)
}

fn reason_cell(reason: &str) -> ReasonCell {
    ReasonCell {
        short: reason.chars().take(REASON_PREVIEW_CHARS).collect(),
        full: reason.to_string(),
    }
}

fn time_left_cell(sanction: &Sanction, now: DateTime<Utc>) -> TimeLeftCell {
    let Some(percentage) = sanction.time_left_percentage(now) else {
        return TimeLeftCell::Permanent {
            label: "Permanent",
            color: ChipColor::Danger,
        };
    };

    let color = if percentage < 50 {
        ChipColor::Warning
    } else if percentage >= 100 {
        ChipColor::Success
    } else {
        ChipColor::Primary
    };

    TimeLeftCell::Progress {
        percentage,
        value: percentage.clamp(0, 100) as u8,
        color,
    }
}

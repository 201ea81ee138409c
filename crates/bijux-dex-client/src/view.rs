// SPDX-License-Identifier: Apache-2.0

//! View models. Everything derived for display is computed here, never by the
//! renderer.

use crate::controller::Action;
use crate::state::BrowseState;
use bijux_dex_model::RecordDetail;
use serde::Serialize;

pub const STAT_CEILING: u32 = 150;
pub const DETAIL_MOVE_LIMIT: usize = 8;

/// Fixed one-decimal rendering of a value stored in tenths.
#[must_use]
pub fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCard {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: String,
    pub weight_kg: String,
    pub image_url: Option<String>,
}

impl RecordCard {
    #[must_use]
    pub fn from_record(record: &RecordDetail) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            types: record.types.clone(),
            height_m: tenths(record.height_decimeters),
            weight_kg: tenths(record.weight_hectograms),
            image_url: record.artwork.image_url().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBar {
    pub name: String,
    pub value: u32,
    /// Share of [`STAT_CEILING`], clamped to 100.
    pub fill_percent: u32,
}

impl StatBar {
    #[must_use]
    pub fn new(name: &str, value: u32) -> Self {
        let fill = u64::from(value) * 100 / u64::from(STAT_CEILING);
        Self {
            name: name.to_string(),
            value,
            fill_percent: u32::try_from(fill.min(100)).unwrap_or(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: String,
    pub weight_kg: String,
    pub image_url: Option<String>,
    pub stats: Vec<StatBar>,
    pub abilities: String,
    pub moves: String,
}

impl DetailView {
    #[must_use]
    pub fn from_record(record: &RecordDetail) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            types: record.types.clone(),
            height_m: tenths(record.height_decimeters),
            weight_kg: tenths(record.weight_hectograms),
            image_url: record.artwork.image_url().map(ToString::to_string),
            stats: record
                .stats
                .iter()
                .map(|s| StatBar::new(&s.name, s.base_value))
                .collect(),
            abilities: record.abilities.join(", "),
            moves: record
                .moves
                .iter()
                .take(DETAIL_MOVE_LIMIT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        if self.moves.is_empty() {
            0
        } else {
            self.moves.split(", ").count()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPanel {
    pub message: String,
    pub retry: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GridMode {
    Paginated {
        page_number: u32,
        page_size: u32,
        previous_enabled: bool,
    },
    Filtered {
        type_name: String,
    },
}

impl GridMode {
    #[must_use]
    pub fn for_state(state: &BrowseState) -> Self {
        match &state.active_type_filter {
            Some(name) => Self::Filtered {
                type_name: name.to_string(),
            },
            None => Self::Paginated {
                page_number: state.page_number(),
                page_size: state.page_size.get(),
                previous_enabled: state.previous_enabled(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GridStatus {
    Loading,
    Ready { cards: Vec<RecordCard> },
    Failed(ErrorPanel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub mode: GridMode,
    pub status: GridStatus,
}

impl GridView {
    #[must_use]
    pub fn cards(&self) -> &[RecordCard] {
        match &self.status {
            GridStatus::Ready { cards } => cards,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error_panel(&self) -> Option<&ErrorPanel> {
        match &self.status {
            GridStatus::Failed(panel) => Some(panel),
            _ => None,
        }
    }
}

/// Exactly one of grid or detail is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Grid(GridView),
    Detail(DetailView),
}

impl View {
    #[must_use]
    pub fn as_grid(&self) -> Option<&GridView> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Detail(_) => None,
        }
    }

    #[must_use]
    pub fn as_detail(&self) -> Option<&DetailView> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Grid(_) => None,
        }
    }
}

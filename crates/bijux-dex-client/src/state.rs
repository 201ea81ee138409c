// SPDX-License-Identifier: Apache-2.0

use crate::errors::InputError;
use bijux_dex_model::{RecordSummary, TypeName};
use serde::Serialize;

pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Type membership is not paginated upstream; only this many members are shown.
pub const FILTER_MEMBER_CAP: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(size: u32) -> Result<Self, InputError> {
        if PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(InputError::InvalidPageSize(size))
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Session state of one browse client. Transitions return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BrowseState {
    pub page_offset: u32,
    pub page_size: PageSize,
    pub active_type_filter: Option<TypeName>,
    pub loaded_summaries: Vec<RecordSummary>,
}

impl BrowseState {
    #[must_use]
    pub fn at(page_offset: u32, page_size: PageSize) -> Self {
        Self {
            page_offset,
            page_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page_offset: self.page_offset.saturating_add(self.page_size.get()),
            ..self.clone()
        }
    }

    /// No-op at offset 0.
    #[must_use]
    pub fn previous_page(&self) -> Self {
        Self {
            page_offset: self.page_offset.saturating_sub(self.page_size.get()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_offset: 0,
            page_size,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn unfiltered(&self) -> Self {
        Self {
            active_type_filter: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn filtered(&self, type_name: TypeName) -> Self {
        Self {
            page_offset: 0,
            active_type_filter: Some(type_name),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_summaries(&self, loaded_summaries: Vec<RecordSummary>) -> Self {
        Self {
            loaded_summaries,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page_offset / self.page_size.get() + 1
    }

    #[must_use]
    pub fn pagination_enabled(&self) -> bool {
        self.active_type_filter.is_none()
    }

    #[must_use]
    pub fn previous_enabled(&self) -> bool {
        self.pagination_enabled() && self.page_offset > 0
    }
}

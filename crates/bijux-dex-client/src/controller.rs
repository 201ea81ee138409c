// SPDX-License-Identifier: Apache-2.0

//! Browse controller.
//!
//! A transition is split in three steps so the network work never touches
//! controller state:
//!
//! 1. [`BrowseController::begin`] validates input, updates [`BrowseState`],
//!    bumps the generation and returns a [`Pending`] fetch (or `None` when the
//!    action renders without one).
//! 2. [`execute`] performs the fetch against any [`Gateway`].
//! 3. [`BrowseController::complete`] applies the result only if its generation
//!    is still current; superseded results come back as [`Applied::Stale`].

use crate::errors::{GatewayError, InputError};
use crate::fanout::collect_cards;
use crate::gateway::Gateway;
use crate::render::capitalize;
use crate::state::{BrowseState, PageSize, FILTER_MEMBER_CAP};
use crate::view::{DetailView, ErrorPanel, GridMode, GridStatus, GridView, RecordCard, View};
use bijux_dex_model::{RecordDetail, RecordKey, RecordSummary, TypeName};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "argument", rename_all = "snake_case")]
pub enum Action {
    LoadList,
    NextPage,
    PreviousPage,
    ChangePageSize(u32),
    /// An empty type name clears the filter.
    ApplyTypeFilter(String),
    Search(String),
    SelectCard(String),
    ReturnToList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    List { limit: u32, offset: u32 },
    TypeMembers(TypeName),
    Search(RecordKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub generation: u64,
    pub fetch: Fetch,
    /// Action re-issued by the error panel if this fetch fails.
    pub retry: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cards {
        summaries: Vec<RecordSummary>,
        records: Vec<RecordDetail>,
        filter: Option<TypeName>,
    },
    Detail(RecordDetail),
    Failed(GatewayError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub generation: u64,
    pub retry: Action,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    pub value: String,
    pub label: String,
}

pub async fn execute<G>(gateway: Arc<G>, pending: Pending) -> Completed
where
    G: Gateway + ?Sized,
{
    let Pending {
        generation,
        fetch,
        retry,
    } = pending;
    let outcome = match fetch {
        Fetch::List { limit, offset } => match gateway.list_records(limit, offset).await {
            Ok(page) => {
                let records = collect_cards(Arc::clone(&gateway), &page.results).await;
                Outcome::Cards {
                    summaries: page.results,
                    records,
                    filter: None,
                }
            }
            Err(err) => Outcome::Failed(err),
        },
        Fetch::TypeMembers(name) => match gateway.type_members(&name).await {
            Ok(membership) => {
                let members = membership.truncated(FILTER_MEMBER_CAP).members;
                let records = collect_cards(Arc::clone(&gateway), &members).await;
                Outcome::Cards {
                    summaries: members,
                    records,
                    filter: Some(name),
                }
            }
            Err(err) => Outcome::Failed(err),
        },
        Fetch::Search(key) => match gateway.search(&key).await {
            Ok(record) => Outcome::Detail(record),
            Err(err) => Outcome::Failed(err),
        },
    };
    Completed {
        generation,
        retry,
        outcome,
    }
}

fn failure_message(retry: &Action, err: &GatewayError) -> String {
    match (retry, err) {
        (Action::Search(term), GatewayError::NotFound) => format!("Record \"{term}\" not found"),
        (Action::Search(_), _) => "Failed to search records".to_string(),
        (Action::ApplyTypeFilter(name), GatewayError::NotFound) => {
            format!("Unknown type \"{name}\"")
        }
        (Action::ApplyTypeFilter(_), _) => "Failed to filter by type".to_string(),
        _ => "Failed to load records".to_string(),
    }
}

pub struct BrowseController<G: ?Sized> {
    gateway: Arc<G>,
    state: BrowseState,
    view: View,
    records: Vec<RecordDetail>,
    generation: u64,
}

impl<G> BrowseController<G>
where
    G: Gateway + ?Sized,
{
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_state(gateway, BrowseState::default())
    }

    #[must_use]
    pub fn with_state(gateway: Arc<G>, state: BrowseState) -> Self {
        let view = View::Grid(GridView {
            mode: GridMode::for_state(&state),
            status: GridStatus::Ready { cards: Vec::new() },
        });
        Self {
            gateway,
            state,
            view,
            records: Vec::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records behind the cards of the current grid.
    #[must_use]
    pub fn records(&self) -> &[RecordDetail] {
        &self.records
    }

    pub fn begin(&mut self, action: Action) -> Result<Option<Pending>, InputError> {
        match action {
            Action::LoadList | Action::ReturnToList => {
                let next = self.state.unfiltered();
                Ok(Some(self.begin_list(next)))
            }
            Action::NextPage => {
                if !self.state.pagination_enabled() {
                    return Ok(None);
                }
                let next = self.state.next_page();
                Ok(Some(self.begin_list(next)))
            }
            Action::PreviousPage => {
                if !self.state.previous_enabled() {
                    return Ok(None);
                }
                let next = self.state.previous_page();
                Ok(Some(self.begin_list(next)))
            }
            Action::ChangePageSize(size) => {
                let size = PageSize::new(size)?;
                let next = self.state.with_page_size(size).unfiltered();
                Ok(Some(self.begin_list(next)))
            }
            Action::ApplyTypeFilter(raw) => {
                let raw = raw.trim().to_string();
                if raw.is_empty() {
                    let next = self.state.unfiltered();
                    return Ok(Some(self.begin_list(next)));
                }
                let name =
                    TypeName::parse(&raw).map_err(|e| InputError::InvalidName(e.to_string()))?;
                Ok(Some(
                    self.start(Fetch::TypeMembers(name), Action::ApplyTypeFilter(raw)),
                ))
            }
            Action::Search(term) => {
                let term = term.trim().to_string();
                if term.is_empty() {
                    return Err(InputError::EmptySearchTerm);
                }
                let key =
                    RecordKey::parse(&term).map_err(|e| InputError::InvalidName(e.to_string()))?;
                Ok(Some(self.start(Fetch::Search(key), Action::Search(term))))
            }
            Action::SelectCard(name) => {
                let detail = self
                    .find_record(&name)
                    .map(DetailView::from_record)
                    .ok_or(InputError::UnknownCard(name))?;
                self.generation += 1;
                self.view = View::Detail(detail);
                Ok(None)
            }
        }
    }

    fn begin_list(&mut self, next: BrowseState) -> Pending {
        self.state = next;
        let fetch = Fetch::List {
            limit: self.state.page_size.get(),
            offset: self.state.page_offset,
        };
        self.start(fetch, Action::LoadList)
    }

    fn start(&mut self, fetch: Fetch, retry: Action) -> Pending {
        self.generation += 1;
        self.view = View::Grid(GridView {
            mode: GridMode::for_state(&self.state),
            status: GridStatus::Loading,
        });
        debug!(generation = self.generation, fetch = ?fetch, "browse fetch started");
        Pending {
            generation: self.generation,
            fetch,
            retry,
        }
    }

    /// Cards are selectable only while a rendered grid is showing them.
    fn find_record(&self, name: &str) -> Option<&RecordDetail> {
        self.view
            .as_grid()
            .filter(|g| matches!(g.status, GridStatus::Ready { .. }))?;
        let key = RecordKey::parse(name).ok()?;
        self.records.iter().find(|r| {
            r.name.eq_ignore_ascii_case(key.as_str())
                || (key.is_numeric() && r.id.to_string() == key.as_str())
        })
    }

    pub fn complete(&mut self, completed: Completed) -> Applied {
        if completed.generation != self.generation {
            debug!(
                generation = completed.generation,
                current = self.generation,
                "discarding stale browse result"
            );
            return Applied::Stale;
        }
        match completed.outcome {
            Outcome::Cards {
                summaries,
                records,
                filter,
            } => {
                let base = match filter {
                    Some(name) => self.state.filtered(name),
                    None => self.state.unfiltered(),
                };
                let omitted = summaries.len().saturating_sub(records.len());
                self.state = base.with_summaries(summaries);
                let cards = records.iter().map(RecordCard::from_record).collect();
                self.records = records;
                info!(
                    cards = self.records.len(),
                    omitted,
                    "grid rendered"
                );
                self.view = View::Grid(GridView {
                    mode: GridMode::for_state(&self.state),
                    status: GridStatus::Ready { cards },
                });
            }
            Outcome::Detail(record) => {
                self.view = View::Detail(DetailView::from_record(&record));
            }
            Outcome::Failed(err) => {
                warn!(error = %err, retry = ?completed.retry, "browse request failed");
                self.records.clear();
                self.state = self.state.with_summaries(Vec::new());
                self.view = View::Grid(GridView {
                    mode: GridMode::for_state(&self.state),
                    status: GridStatus::Failed(ErrorPanel {
                        message: failure_message(&completed.retry, &err),
                        retry: completed.retry,
                    }),
                });
            }
        }
        Applied::Rendered
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<Applied, InputError> {
        match self.begin(action)? {
            None => Ok(Applied::Rendered),
            Some(pending) => {
                let completed = execute(Arc::clone(&self.gateway), pending).await;
                Ok(self.complete(completed))
            }
        }
    }

    /// Re-issues the action behind the current error panel.
    pub async fn retry(&mut self) -> Result<Applied, InputError> {
        let action = self
            .view
            .as_grid()
            .and_then(GridView::error_panel)
            .map(|panel| panel.retry.clone())
            .ok_or(InputError::NothingToRetry)?;
        self.dispatch(action).await
    }

    /// Filter choices with capitalised labels, in upstream order.
    pub async fn load_type_options(&self) -> Result<Vec<TypeOption>, GatewayError> {
        let page = self.gateway.types().await?;
        Ok(page
            .results
            .into_iter()
            .map(|t| TypeOption {
                label: capitalize(&t.name),
                value: t.name,
            })
            .collect())
    }
}

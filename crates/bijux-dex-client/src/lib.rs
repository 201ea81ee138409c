#![forbid(unsafe_code)]

//! Browse client for the dex gateway: an explicit [`BrowseState`], a
//! generation-guarded [`BrowseController`], view models, and a text renderer
//! used by the `bijux-dex` terminal front end.

mod controller;
mod errors;
mod fake;
mod fanout;
mod gateway;
mod render;
pub mod repl;
mod state;
pub mod view;

pub use controller::{
    execute, Action, Applied, BrowseController, Completed, Fetch, Outcome, Pending, TypeOption,
};
pub use errors::{GatewayError, InputError};
pub use fake::{stub_record, summary, FakeGateway};
pub use fanout::collect_cards;
pub use gateway::{Gateway, HttpGateway, DEFAULT_GATEWAY_URL};
pub use render::{capitalize, render_detail, render_grid, render_view};
pub use state::{BrowseState, PageSize, DEFAULT_PAGE_SIZE, FILTER_MEMBER_CAP, PAGE_SIZES};

pub const CRATE_NAME: &str = "bijux-dex-client";

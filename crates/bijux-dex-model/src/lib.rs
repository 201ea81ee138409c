#![forbid(unsafe_code)]
//! Read-only projections of the upstream catalog schema.
//!
//! Nothing here owns or mutates catalog data: the gateway relays upstream
//! payloads verbatim and the browse client projects them into these types.

mod category;
mod key;
mod page;
mod record;
mod wire;

pub use category::{AbilitySummary, TypeCategory, TypeMembership};
pub use key::{RecordKey, TypeName, ValidationError, KEY_MAX_LEN};
pub use page::Page;
pub use record::{Artwork, NamedResource, RecordDetail, RecordSummary, Stat};

pub const CRATE_NAME: &str = "bijux-dex-model";

// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Failure talking to the gateway. Bodies of error responses are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    NotFound,
    Status(u16),
    Unavailable(String),
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Status(code) => write!(f, "gateway returned status {code}"),
            Self::Unavailable(msg) => write!(f, "gateway unavailable: {msg}"),
            Self::Decode(msg) => write!(f, "gateway response decode failed: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptySearchTerm,
    InvalidPageSize(u32),
    InvalidName(String),
    UnknownCard(String),
    NothingToRetry,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySearchTerm => write!(f, "enter a record name to search"),
            Self::InvalidPageSize(size) => write!(
                f,
                "page size {size} is not one of {:?}",
                crate::state::PAGE_SIZES
            ),
            Self::InvalidName(msg) => write!(f, "{msg}"),
            Self::UnknownCard(name) => write!(f, "no card named {name} in the current grid"),
            Self::NothingToRetry => write!(f, "nothing to retry"),
        }
    }
}

impl std::error::Error for InputError {}

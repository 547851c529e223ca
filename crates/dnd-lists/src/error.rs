//! Error types for the list manager.

use thiserror::Error;

use crate::model::{ItemId, ListId};

/// Configuration and lookup failures.
///
/// Every variant points at a caller or markup defect; none of them is a
/// transient condition worth retrying.
#[derive(Debug, Error)]
pub enum DndError {
    #[error("no data-bindpath on list `{0}`")]
    UnboundList(String),
    #[error("no return list to return items to")]
    NoReturnList,
    #[error("more than one return list: `{first}` and `{second}`")]
    MultipleReturnLists { first: String, second: String },
    #[error("unknown list {0}")]
    UnknownList(ListId),
    #[error("unknown item {0}")]
    UnknownItem(ItemId),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DndError>;

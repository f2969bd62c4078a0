use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const ID_PREFIX: &str = "todo-";

/// Stable identifier of an [`Item`], shown as `todo-<n>`.
///
/// Ids are handed out in increasing order by [`crate::TodoList`] and are
/// never reused, so comparing two ids tells which item was added first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub const fn seq(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseItemIdError {
    #[error("item id `{0}` does not start with `todo-`")]
    MissingPrefix(String),
    #[error("item id `{0}` has a non-numeric sequence")]
    InvalidSequence(String),
}

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seq = s
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| ParseItemIdError::MissingPrefix(s.to_string()))?;
        // u64::from_str accepts a leading '+', which Display never produces
        if seq.starts_with('+') {
            return Err(ParseItemIdError::InvalidSequence(s.to_string()));
        }
        seq.parse()
            .map(Self)
            .map_err(|_| ParseItemIdError::InvalidSequence(s.to_string()))
    }
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    content: String,
    checked: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            checked: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

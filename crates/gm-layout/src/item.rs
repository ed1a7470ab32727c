//! Layout items.

use gm_config::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Vertical grid position of an item.
///
/// Persisted layouts are JSON, which has no number for "after everything".
/// [`VerticalPosition::AppendToEnd`] is therefore written as `null` and `null`
/// reads back as `AppendToEnd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum VerticalPosition {
    /// Fixed row.
    At(i64),
    /// Placed below all existing items.
    #[default]
    AppendToEnd,
}

impl From<Option<i64>> for VerticalPosition {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::AppendToEnd, Self::At)
    }
}

impl From<VerticalPosition> for Option<i64> {
    fn from(value: VerticalPosition) -> Self {
        match value {
            VerticalPosition::At(row) => Some(row),
            VerticalPosition::AppendToEnd => None,
        }
    }
}

/// One placeable element on the grid.
///
/// Serialized with the short field names grid UIs use: `i`, `x`, `y`, `w`,
/// `h` and `value`. Unknown fields in persisted data are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Unique key, `<prefix><separator><ordinal>`.
    #[serde(rename = "i")]
    pub key: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: VerticalPosition,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    /// Item markup.
    #[serde(default)]
    pub value: String,
}

impl LayoutItem {
    /// Create a new item for `key` at column 0, appended below existing items,
    /// with the configured default size and empty content.
    ///
    /// Key uniqueness is not checked; generate keys from
    /// [`LoadedLayout::next_key`](crate::LoadedLayout::next_key).
    #[must_use]
    pub fn generate(key: impl Into<String>, config: &LayoutConfig) -> Self {
        Self {
            key: key.into(),
            x: 0,
            y: VerticalPosition::AppendToEnd,
            width: config.default_width,
            height: config.default_height,
            value: String::new(),
        }
    }

    /// Set the item content.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Place the item at a fixed cell.
    #[must_use]
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = VerticalPosition::At(y);
        self
    }

    /// Resize the item.
    #[must_use]
    pub fn sized(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

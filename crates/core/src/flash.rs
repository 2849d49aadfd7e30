//! One-shot user notifications returned alongside a redirect or a re-rendered
//! form.

use serde::Serialize;

pub const COLUMN_CREATED: &str = "Column created successfully.";
pub const BOARD_UPDATED: &str = "Board updated successfully.";
pub const BOARD_UPDATE_FAILED: &str = "Unable to update this board.";
pub const COLUMN_REMOVED: &str = "Column removed successfully.";
pub const COLUMN_REMOVE_FAILED: &str = "Unable to remove this column.";
pub const COLUMN_NOT_FOUND: &str = "Unable to find this column.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Failure,
            message: message.into(),
        }
    }
}

//! Board ordering rules.
//!
//! A board is the ordered list of columns of one project. Positions are
//! 1-based and always dense (`1..=n`); moves swap a column with its direct
//! neighbour.

/// Maximum length of a column title, in characters.
pub const TITLE_MAX_LENGTH: u64 = 50;

/// Titles of the columns created with every new project, in board order.
pub const DEFAULT_BOARD_COLUMNS: &[&str] = &["Backlog", "Ready", "Work in progress", "Done"];

/// Direction of a single-step column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDirection {
    Up,
    Down,
}

impl ColumnDirection {
    /// Parse a request parameter. Anything but `up` or `down` yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Position a column at `position` would swap with when moved in `direction`
/// on a board holding `count` columns.
///
/// Returns `None` at the edges (first column moving up, last column moving
/// down) and for positions outside `1..=count`.
pub fn swap_target(position: i32, direction: ColumnDirection, count: usize) -> Option<i32> {
    let count = i32::try_from(count).ok()?;
    if position < 1 || position > count {
        return None;
    }
    let target = match direction {
        ColumnDirection::Up => position - 1,
        ColumnDirection::Down => position + 1,
    };
    (1..=count).contains(&target).then_some(target)
}

/// Position assigned to a column appended to a board whose highest position
/// is `max_position` (`None` for an empty board).
pub fn next_position(max_position: Option<i32>) -> i32 {
    max_position.unwrap_or(0) + 1
}

/// Parse a comma-separated list of default column titles.
///
/// Blank entries are dropped; an input with no usable titles falls back to
/// [`DEFAULT_BOARD_COLUMNS`].
pub fn parse_column_titles(raw: &str) -> Vec<String> {
    let titles: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if titles.is_empty() {
        DEFAULT_BOARD_COLUMNS.iter().map(|s| s.to_string()).collect()
    } else {
        titles
    }
}

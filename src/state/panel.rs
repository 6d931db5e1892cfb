//! Launcher panel visibility.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Whether the chat panel is shown. Not persisted across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

//! Cell states and liveness classification.

/// State of a single cell.
///
/// `Born` and `Died` are transient markers produced only by a transition;
/// they last exactly one generation and let observers distinguish "was
/// already alive" from "became alive this step" (and likewise for death).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Alive, and was alive in the previous generation.
    Alive,
    /// Empty, and was empty in the previous generation.
    Empty,
    /// Became alive this generation.
    Born,
    /// Became empty this generation.
    Died,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

impl CellState {
    /// Returns `true` if the cell counts as a living neighbor.
    #[inline]
    pub fn is_alive(self) -> bool {
        match self {
            Self::Alive | Self::Born => true,
            Self::Empty | Self::Died => false,
        }
    }

    /// Returns the state resulting from a user-initiated toggle: dead cells
    /// become `Alive`, live cells become `Empty`.
    #[inline]
    #[must_use = "toggle() returns the new state instead of mutating"]
    pub fn toggle(self) -> Self {
        match self {
            Self::Empty | Self::Died => Self::Alive,
            Self::Alive | Self::Born => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness() {
        assert!(CellState::Alive.is_alive());
        assert!(CellState::Born.is_alive());
        assert!(!CellState::Empty.is_alive());
        assert!(!CellState::Died.is_alive());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(CellState::Alive, CellState::Empty.toggle());
        assert_eq!(CellState::Alive, CellState::Died.toggle());
        assert_eq!(CellState::Empty, CellState::Alive.toggle());
        assert_eq!(CellState::Empty, CellState::Born.toggle());
        // Toggling twice always lands on a steady state.
        assert_eq!(CellState::Empty, CellState::Born.toggle().toggle());
        assert_eq!(CellState::Alive, CellState::Died.toggle().toggle());
    }
}

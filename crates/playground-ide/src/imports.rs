//! Tracking where import syntax is in effect.

use tracing::debug;

/// The line below which `import` declarations are in effect.
///
/// The hint subsystem recomputes the boundary whenever the buffer changes and
/// reports it here; the hint resolver only reads it. Starts at 0, meaning no
/// line is inside the import region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportBoundary {
    end_line: u32,
}

impl ImportBoundary {
    /// A boundary with an empty import region.
    #[must_use]
    pub const fn new() -> Self {
        Self { end_line: 0 }
    }

    /// A boundary ending at `end_line`.
    #[must_use]
    pub const fn at(end_line: u32) -> Self {
        Self { end_line }
    }

    /// Applies a newly reported boundary. Last write wins.
    pub fn update(&mut self, end_line: u32) {
        if self.end_line != end_line {
            debug!(from = self.end_line, to = end_line, "import boundary moved");
        }
        self.end_line = end_line;
    }

    /// The first line after the import region.
    #[must_use]
    pub const fn end_line(&self) -> u32 {
        self.end_line
    }

    /// Returns true when `line` lies inside the import region.
    #[must_use]
    pub const fn contains(&self, line: u32) -> bool {
        line < self.end_line
    }
}

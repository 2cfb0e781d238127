//! crates/logging/src/levels.rs
//! Subsystem flags and their verbosity levels.

/// Subsystems that emit diagnostics through their own tracing target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subsystem {
    /// Directory traversal.
    Walk,
    /// Exclusion decisions (pruned directories, skipped files).
    Filter,
    /// Per-file transformation and change detection.
    Rewrite,
    /// Temporary file creation, permission copy and rename.
    Write,
    /// Single-stream mode.
    Stream,
    /// End-of-run statistics.
    Stats,
}

impl Subsystem {
    /// Every subsystem, in display order.
    pub const ALL: [Self; 6] = [
        Self::Walk,
        Self::Filter,
        Self::Rewrite,
        Self::Write,
        Self::Stream,
        Self::Stats,
    ];

    /// Returns the flag name used in `name<level>` tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Filter => "filter",
            Self::Rewrite => "rewrite",
            Self::Write => "write",
            Self::Stream => "stream",
            Self::Stats => "stats",
        }
    }

    /// Returns the tracing target events of this subsystem are emitted on.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Walk => "srcfmt::walk",
            Self::Filter => "srcfmt::filter",
            Self::Rewrite => "srcfmt::rewrite",
            Self::Write => "srcfmt::write",
            Self::Stream => "srcfmt::stream",
            Self::Stats => "srcfmt::stats",
        }
    }

    /// Looks up a subsystem by its flag name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Verbosity level for each subsystem.
///
/// `0` silences the subsystem, `1` enables info events, `2` debug and `3` or
/// more trace.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubsystemLevels {
    /// Traversal level.
    pub walk: u8,
    /// Exclusion level.
    pub filter: u8,
    /// Rewrite level.
    pub rewrite: u8,
    /// Persistence level.
    pub write: u8,
    /// Stream mode level.
    pub stream: u8,
    /// Statistics level.
    pub stats: u8,
}

impl SubsystemLevels {
    /// Get the level for a specific subsystem.
    pub const fn get(&self, flag: Subsystem) -> u8 {
        match flag {
            Subsystem::Walk => self.walk,
            Subsystem::Filter => self.filter,
            Subsystem::Rewrite => self.rewrite,
            Subsystem::Write => self.write,
            Subsystem::Stream => self.stream,
            Subsystem::Stats => self.stats,
        }
    }

    /// Set the level for a specific subsystem.
    pub fn set(&mut self, flag: Subsystem, level: u8) {
        match flag {
            Subsystem::Walk => self.walk = level,
            Subsystem::Filter => self.filter = level,
            Subsystem::Rewrite => self.rewrite = level,
            Subsystem::Write => self.write = level,
            Subsystem::Stream => self.stream = level,
            Subsystem::Stats => self.stats = level,
        }
    }

    /// Set all subsystems to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in Subsystem::ALL {
            self.set(flag, level);
        }
    }
}

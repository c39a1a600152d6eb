//! Repair configuration.

/// How often the junction and hourglass cleanup runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupMode {
    /// Run junction removal then hourglass removal once.
    ///
    /// Removing faces can expose new junctions or hourglasses, which are
    /// left in the output.
    #[default]
    SinglePass,

    /// Repeat the cleanup until a pass removes nothing, or `max_passes`
    /// passes have run.
    UntilStable {
        /// Upper bound on the number of passes. Must be at least 1.
        max_passes: usize,
    },
}

impl CleanupMode {
    /// Maximum number of cleanup passes this mode allows.
    #[must_use]
    pub const fn max_passes(self) -> usize {
        match self {
            Self::SinglePass => 1,
            Self::UntilStable { max_passes } => max_passes,
        }
    }
}

/// Configuration parameters for [`repair_mesh`](crate::repair_mesh).
///
/// # Example
///
/// ```
/// use mesh_repair::{CleanupMode, RepairParams};
///
/// let params = RepairParams::default();
/// assert_eq!(params.cleanup_mode, CleanupMode::SinglePass);
///
/// let params = RepairParams::until_stable().with_parallel(true);
/// assert!(params.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepairParams {
    /// Cleanup repetition strategy.
    ///
    /// Default: [`CleanupMode::SinglePass`]
    pub cleanup_mode: CleanupMode,

    /// Run per-vertex hourglass checks on the rayon thread pool.
    ///
    /// Output is identical either way.
    /// Default: `false`
    pub parallel: bool,
}

impl RepairParams {
    /// Pass limit used by [`RepairParams::until_stable`].
    pub const DEFAULT_MAX_PASSES: usize = 16;

    /// Create parameters that repeat cleanup until nothing changes.
    ///
    /// The output is then free of junction and hourglass vertices unless
    /// [`Self::DEFAULT_MAX_PASSES`] is reached first.
    #[must_use]
    pub const fn until_stable() -> Self {
        Self {
            cleanup_mode: CleanupMode::UntilStable {
                max_passes: Self::DEFAULT_MAX_PASSES,
            },
            parallel: false,
        }
    }

    /// Set the cleanup mode.
    #[must_use]
    pub const fn with_cleanup_mode(mut self, mode: CleanupMode) -> Self {
        self.cleanup_mode = mode;
        self
    }

    /// Enable or disable the parallel hourglass check.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_pass() {
        let params = RepairParams::default();
        assert_eq!(params.cleanup_mode, CleanupMode::SinglePass);
        assert_eq!(params.cleanup_mode.max_passes(), 1);
        assert!(!params.parallel);
    }

    #[test]
    fn until_stable_preset() {
        let params = RepairParams::until_stable();
        assert_eq!(
            params.cleanup_mode.max_passes(),
            RepairParams::DEFAULT_MAX_PASSES
        );
    }

    #[test]
    fn builder_methods() {
        let params = RepairParams::default()
            .with_cleanup_mode(CleanupMode::UntilStable { max_passes: 3 })
            .with_parallel(true);
        assert_eq!(params.cleanup_mode.max_passes(), 3);
        assert!(params.parallel);
    }
}

//! Algorithm enum for selecting how the read phase of a step runs.
//!
//! Both strategies produce the same generation; they only differ in
//! whether neighbor counting is spread across rayon's thread pool.

/// Available step strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell sweep on the calling thread
    #[default]
    Serial,
    /// Neighbor counting fanned out with rayon, commit on the calling thread
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI and config
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Parse a config value, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name.trim()))
    }
}

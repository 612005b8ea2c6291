//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Row counts emitted by each normalizer.
    pub log_normalizers: bool,

    /// Per-chain join coverage after the merge stage.
    pub log_merge: bool,

    /// Anything about changing the selected chain or series toggles
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_normalizers: false,
    log_merge: true,
    log_selection: false,
};

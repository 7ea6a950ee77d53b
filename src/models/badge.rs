use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tone — Colour family a status badge is rendered in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// Display metadata for a closed classificatory enum.
pub trait Badge {
    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Badge colour family.
    fn tone(&self) -> Tone;
}

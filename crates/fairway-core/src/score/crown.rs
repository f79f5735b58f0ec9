use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Badge shown next to the four best-placed players
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum CrownTier {
    #[strum(serialize = "1st")]
    First = 0,
    #[strum(serialize = "2nd")]
    Second = 1,
    #[strum(serialize = "3rd")]
    Third = 2,
    #[strum(serialize = "4th")]
    Fourth = 3,
}

impl CrownTier {
    /// Map a 0-based rank to its crown; ranks past fourth get none
    pub fn from_rank(rank: usize) -> Option<Self> {
        u8::try_from(rank).ok().and_then(Self::from_repr)
    }

    pub fn rank(&self) -> usize {
        *self as usize
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for CrownTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

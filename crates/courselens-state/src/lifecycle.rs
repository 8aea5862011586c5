//! Session lifecycle.

use strum::{Display, IntoStaticStr};

/// Where the session is in its one-shot startup.
///
/// `Uninitialized -> Initializing -> Ready | Failed`; there is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

impl Phase {
    /// Check if startup has been requested.
    pub fn has_started(self) -> bool {
        self != Self::Uninitialized
    }

    /// Check if startup has finished, successfully or not.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

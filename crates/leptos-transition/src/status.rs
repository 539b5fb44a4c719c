//! Transition Status
//!
//! Vocabulary shared by the lifecycle, class resolution and the driver.

/// Where a lifecycle instance sits in the enter/exit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionStatus {
    /// Not present in the tree at all
    Unmounted,
    Exited,
    Entering,
    Entered,
    Exiting,
}

impl TransitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unmounted => "unmounted",
            Self::Exited => "exited",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
        }
    }

    /// Settled statuses wait for the external flag; the others wait for a tick or completion
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Unmounted | Self::Exited | Self::Entered)
    }
}

impl std::fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of transition last ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First enter of an element that was visible on mount
    Appear,
    Enter,
    Exit,
}

/// Progress within a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Pre-transition properties applied
    Base,
    /// Target properties applied, waiting for completion
    Active,
    #[default]
    Done,
}

/// Notification emitted at transition start and completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Enter { appearing: bool },
    Entering { appearing: bool },
    Entered { appearing: bool },
    Exit,
    Exiting,
    Exited,
}

/// Render-facing snapshot of a lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionState {
    pub status: TransitionStatus,
    pub phase: Option<Phase>,
    pub stage: Stage,
}

impl TransitionState {
    pub fn is_mounted(&self) -> bool {
        self.status != TransitionStatus::Unmounted
    }

    /// Status to style by.
    ///
    /// During the base stage the element must still look like the status it
    /// is leaving, so the change to the target properties is animated.
    pub fn visual_status(&self) -> TransitionStatus {
        match (self.status, self.stage) {
            (TransitionStatus::Entering, Stage::Base) => TransitionStatus::Exited,
            (TransitionStatus::Exiting, Stage::Base) => TransitionStatus::Entered,
            (status, _) => status,
        }
    }
}

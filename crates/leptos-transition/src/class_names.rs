//! CSS Class Names
//!
//! Maps a lifecycle's phase and stage to the class list applied to the element.

use crate::status::{Phase, Stage, TransitionState};

/// Explicit class name per phase and stage; empty strings are skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNameMap {
    pub appear: String,
    pub appear_active: String,
    pub appear_done: String,
    pub enter: String,
    pub enter_active: String,
    pub enter_done: String,
    pub exit: String,
    pub exit_active: String,
    pub exit_done: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassNames {
    /// `"fade"` gives `fade-enter`, `fade-enter-active`, `fade-enter-done`, ...
    Prefix(String),
    Custom(ClassNameMap),
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::Prefix(String::new())
    }
}

impl From<&str> for ClassNames {
    fn from(prefix: &str) -> Self {
        Self::Prefix(prefix.to_string())
    }
}

impl From<ClassNameMap> for ClassNames {
    fn from(map: ClassNameMap) -> Self {
        Self::Custom(map)
    }
}

impl ClassNames {
    /// (base, active, done) names for a phase
    fn names(&self, phase: Phase) -> (String, String, String) {
        match self {
            Self::Prefix(prefix) => {
                let kind = match phase {
                    Phase::Appear => "appear",
                    Phase::Enter => "enter",
                    Phase::Exit => "exit",
                };
                let base = if prefix.is_empty() {
                    kind.to_string()
                } else {
                    format!("{}-{}", prefix, kind)
                };
                let active = format!("{}-active", base);
                let done = format!("{}-done", base);
                (base, active, done)
            }
            Self::Custom(map) => {
                let (base, active, done) = match phase {
                    Phase::Appear => (&map.appear, &map.appear_active, &map.appear_done),
                    Phase::Enter => (&map.enter, &map.enter_active, &map.enter_done),
                    Phase::Exit => (&map.exit, &map.exit_active, &map.exit_done),
                };
                (base.clone(), active.clone(), done.clone())
            }
        }
    }

    /// Space-separated class list for a lifecycle snapshot
    pub fn resolve(&self, state: &TransitionState) -> String {
        let Some(phase) = state.phase else {
            return String::new();
        };
        let (base, active, done) = self.names(phase);
        let mut classes = match state.stage {
            Stage::Base => vec![base],
            Stage::Active => vec![base, active],
            Stage::Done => vec![done],
        };
        // A finished appear also counts as entered
        if phase == Phase::Appear && state.stage == Stage::Done {
            classes.push(self.names(Phase::Enter).2);
        }
        classes.retain(|c| !c.is_empty());
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TransitionStatus;

    fn state(status: TransitionStatus, phase: Phase, stage: Stage) -> TransitionState {
        TransitionState { status, phase: Some(phase), stage }
    }

    #[test]
    fn test_prefix_classes() {
        let names = ClassNames::from("msg");
        assert_eq!(
            names.resolve(&state(TransitionStatus::Entering, Phase::Enter, Stage::Base)),
            "msg-enter"
        );
        assert_eq!(
            names.resolve(&state(TransitionStatus::Entering, Phase::Enter, Stage::Active)),
            "msg-enter msg-enter-active"
        );
        assert_eq!(
            names.resolve(&state(TransitionStatus::Entered, Phase::Enter, Stage::Done)),
            "msg-enter-done"
        );
        assert_eq!(
            names.resolve(&state(TransitionStatus::Exited, Phase::Exit, Stage::Done)),
            "msg-exit-done"
        );
    }

    #[test]
    fn test_empty_prefix_and_no_phase() {
        let names = ClassNames::default();
        assert_eq!(
            names.resolve(&state(TransitionStatus::Exiting, Phase::Exit, Stage::Active)),
            "exit exit-active"
        );
        let idle = TransitionState {
            status: TransitionStatus::Entered,
            phase: None,
            stage: Stage::Done,
        };
        assert_eq!(names.resolve(&idle), "");
    }

    #[test]
    fn test_appear_done_adds_enter_done() {
        let names = ClassNames::from("fade");
        assert_eq!(
            names.resolve(&state(TransitionStatus::Entered, Phase::Appear, Stage::Done)),
            "fade-appear-done fade-enter-done"
        );
    }

    #[test]
    fn test_custom_map_skips_empty() {
        let names = ClassNames::from(ClassNameMap {
            enter: "warp-enter".into(),
            enter_active: "warp-active-enter".into(),
            exit_done: String::new(),
            ..Default::default()
        });
        assert_eq!(
            names.resolve(&state(TransitionStatus::Entering, Phase::Enter, Stage::Active)),
            "warp-enter warp-active-enter"
        );
        assert_eq!(
            names.resolve(&state(TransitionStatus::Exited, Phase::Exit, Stage::Done)),
            ""
        );
    }
}

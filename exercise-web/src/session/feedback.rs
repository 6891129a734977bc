//! Coaching feedback derived from the current frame
//!
//! Stateless: recomputed from scratch every frame.

use std::fmt;

use super::reps::{RepMachine, RepPhase};
use crate::classifier::FeatureSet;
use crate::config::EngineConfig;

/// Feedback catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Nobody in frame or key joints hidden
    NoPerson,
    /// Person visible but no exercise committed yet
    StartExercise,
    /// Shown right after an explicit reset
    CountersReset,
    SquatLower,
    SquatGoDeeper,
    SquatRise,
    LungeStep,
    LungeReturn,
    PlankStraightenLegs,
    PlankBodyLine,
    PlankHold { seconds: u32 },
    PushupLower,
    PushupPush,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::NoPerson => f.write_str("Step into the frame so your whole body is visible"),
            Cue::StartExercise => f.write_str("Get into frame and start an exercise"),
            Cue::CountersReset => f.write_str("Counters reset. Ready for a new exercise!"),
            Cue::SquatLower => f.write_str("Lower slowly and keep your back straight"),
            Cue::SquatGoDeeper => f.write_str("Go deeper"),
            Cue::SquatRise => f.write_str("Great! Now rise up slowly"),
            Cue::LungeStep => f.write_str("Step forward and bend your knee"),
            Cue::LungeReturn => f.write_str("Good! Now return to the starting position"),
            Cue::PlankStraightenLegs => f.write_str("Straighten your legs"),
            Cue::PlankBodyLine => f.write_str("Keep your body in a straight line"),
            Cue::PlankHold { seconds } => write!(f, "Hold steady: {seconds} seconds"),
            Cue::PushupLower => f.write_str("Lower down and keep your elbows close"),
            Cue::PushupPush => f.write_str("Now push back up!"),
        }
    }
}

/// Pick the cue for the committed exercise and this frame's features
pub fn coach(
    machine: &RepMachine,
    features: Option<&FeatureSet>,
    hold_seconds: u32,
    config: &EngineConfig,
) -> Cue {
    let Some(f) = features else {
        return Cue::NoPerson;
    };

    match machine {
        RepMachine::Idle => Cue::StartExercise,
        RepMachine::Squat(RepPhase::Down) => Cue::SquatRise,
        RepMachine::Squat(_) => {
            let t = &config.squat;
            if f.avg_knee < t.up_knee && f.avg_knee >= t.down_knee {
                Cue::SquatGoDeeper
            } else {
                Cue::SquatLower
            }
        }
        RepMachine::Lunge(RepPhase::Lunging) => Cue::LungeReturn,
        RepMachine::Lunge(_) => Cue::LungeStep,
        RepMachine::Plank { .. } => {
            let t = &config.plank;
            if f.avg_knee < t.min_avg_knee {
                Cue::PlankStraightenLegs
            } else if f.avg_body_line < t.min_body_angle {
                Cue::PlankBodyLine
            } else {
                Cue::PlankHold {
                    seconds: hold_seconds,
                }
            }
        }
        RepMachine::Pushup(RepPhase::Down) => Cue::PushupPush,
        RepMachine::Pushup(_) => Cue::PushupLower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::extract_features;
    use crate::pose::fixtures;

    fn features_of(snapshot: &crate::pose::PoseSnapshot) -> FeatureSet {
        extract_features(snapshot, 0.3).unwrap()
    }

    #[test]
    fn test_no_features_means_no_person() {
        let config = EngineConfig::default();
        let machine = RepMachine::Squat(RepPhase::Down);
        assert_eq!(coach(&machine, None, 0, &config), Cue::NoPerson);
    }

    #[test]
    fn test_idle_asks_to_start() {
        let config = EngineConfig::default();
        let f = features_of(&fixtures::standing(0.0));
        assert_eq!(coach(&RepMachine::Idle, Some(&f), 0, &config), Cue::StartExercise);
    }

    #[test]
    fn test_squat_cues_follow_depth() {
        let config = EngineConfig::default();
        let up = RepMachine::Squat(RepPhase::Up);
        let standing = features_of(&fixtures::standing(0.0));
        let halfway = features_of(&fixtures::squat(120.0, 0.0));
        assert_eq!(coach(&up, Some(&standing), 0, &config), Cue::SquatLower);
        assert_eq!(coach(&up, Some(&halfway), 0, &config), Cue::SquatGoDeeper);

        let down = RepMachine::Squat(RepPhase::Down);
        assert_eq!(coach(&down, Some(&halfway), 0, &config), Cue::SquatRise);
    }

    #[test]
    fn test_plank_cues() {
        let config = EngineConfig::default();
        let plank = RepMachine::Plank { start_ms: 0.0 };
        let good = features_of(&fixtures::forearm_plank(0.0, 0.0));
        let bent = features_of(&fixtures::forearm_plank(0.1, 0.0));
        assert_eq!(coach(&plank, Some(&good), 12, &config), Cue::PlankHold { seconds: 12 });
        assert_eq!(coach(&plank, Some(&bent), 12, &config), Cue::PlankStraightenLegs);
    }

    #[test]
    fn test_lunge_and_pushup_cues() {
        let config = EngineConfig::default();
        let f = features_of(&fixtures::standing(0.0));
        let cue = |machine: RepMachine| coach(&machine, Some(&f), 0, &config);
        assert_eq!(cue(RepMachine::Lunge(RepPhase::Standing)), Cue::LungeStep);
        assert_eq!(cue(RepMachine::Lunge(RepPhase::Lunging)), Cue::LungeReturn);
        assert_eq!(cue(RepMachine::Pushup(RepPhase::Up)), Cue::PushupLower);
        assert_eq!(cue(RepMachine::Pushup(RepPhase::Down)), Cue::PushupPush);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cue::PlankHold { seconds: 7 }.to_string(), "Hold steady: 7 seconds");
        assert_eq!(Cue::SquatGoDeeper.to_string(), "Go deeper");
        assert!(Cue::NoPerson.to_string().contains("frame"));
    }
}

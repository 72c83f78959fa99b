//! Platform power types
//!
//! `Mode` and `Boost` mirror the platform power interface, version 2. The
//! wire representation is a plain `i32`, so both are integer newtypes with
//! associated constants rather than Rust enums: a newer framework may send
//! values this build does not declare, and those still need an answer.

use std::fmt;

/// Power hint mode toggled by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(pub i32);

impl Mode {
    pub const DOUBLE_TAP_TO_WAKE: Mode = Mode(0);
    pub const LOW_POWER: Mode = Mode(1);
    pub const SUSTAINED_PERFORMANCE: Mode = Mode(2);
    pub const FIXED_PERFORMANCE: Mode = Mode(3);
    pub const VR: Mode = Mode(4);
    pub const LAUNCH: Mode = Mode(5);
    pub const EXPENSIVE_RENDERING: Mode = Mode(6);
    pub const INTERACTIVE: Mode = Mode(7);
    pub const DEVICE_IDLE: Mode = Mode(8);
    pub const DISPLAY_INACTIVE: Mode = Mode(9);
    pub const AUDIO_STREAMING_LOW_LATENCY: Mode = Mode(10);
    pub const CAMERA_STREAMING_SECURE: Mode = Mode(11);
    pub const CAMERA_STREAMING_LOW: Mode = Mode(12);
    pub const CAMERA_STREAMING_MID: Mode = Mode(13);
    pub const CAMERA_STREAMING_HIGH: Mode = Mode(14);

    /// All modes declared by the interface version this service implements
    pub fn all() -> &'static [Mode] {
        &[
            Mode::DOUBLE_TAP_TO_WAKE,
            Mode::LOW_POWER,
            Mode::SUSTAINED_PERFORMANCE,
            Mode::FIXED_PERFORMANCE,
            Mode::VR,
            Mode::LAUNCH,
            Mode::EXPENSIVE_RENDERING,
            Mode::INTERACTIVE,
            Mode::DEVICE_IDLE,
            Mode::DISPLAY_INACTIVE,
            Mode::AUDIO_STREAMING_LOW_LATENCY,
            Mode::CAMERA_STREAMING_SECURE,
            Mode::CAMERA_STREAMING_LOW,
            Mode::CAMERA_STREAMING_MID,
            Mode::CAMERA_STREAMING_HIGH,
        ]
    }

    /// Whether the value falls inside the declared range
    pub fn is_declared(self) -> bool {
        let all = Mode::all();
        // The declared values are contiguous, so bounds imply membership
        (all[0].0..=all[all.len() - 1].0).contains(&self.0)
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Mode::DOUBLE_TAP_TO_WAKE => "DOUBLE_TAP_TO_WAKE",
            Mode::LOW_POWER => "LOW_POWER",
            Mode::SUSTAINED_PERFORMANCE => "SUSTAINED_PERFORMANCE",
            Mode::FIXED_PERFORMANCE => "FIXED_PERFORMANCE",
            Mode::VR => "VR",
            Mode::LAUNCH => "LAUNCH",
            Mode::EXPENSIVE_RENDERING => "EXPENSIVE_RENDERING",
            Mode::INTERACTIVE => "INTERACTIVE",
            Mode::DEVICE_IDLE => "DEVICE_IDLE",
            Mode::DISPLAY_INACTIVE => "DISPLAY_INACTIVE",
            Mode::AUDIO_STREAMING_LOW_LATENCY => "AUDIO_STREAMING_LOW_LATENCY",
            Mode::CAMERA_STREAMING_SECURE => "CAMERA_STREAMING_SECURE",
            Mode::CAMERA_STREAMING_LOW => "CAMERA_STREAMING_LOW",
            Mode::CAMERA_STREAMING_MID => "CAMERA_STREAMING_MID",
            Mode::CAMERA_STREAMING_HIGH => "CAMERA_STREAMING_HIGH",
            _ => return None,
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Transient boost requested by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boost(pub i32);

impl Boost {
    pub const INTERACTION: Boost = Boost(0);
    pub const DISPLAY_UPDATE_IMMINENT: Boost = Boost(1);
    pub const ML_ACC: Boost = Boost(2);
    pub const AUDIO_LAUNCH: Boost = Boost(3);
    pub const CAMERA_LAUNCH: Boost = Boost(4);
    pub const CAMERA_SHOT: Boost = Boost(5);

    /// All boosts declared by the interface version this service implements
    pub fn all() -> &'static [Boost] {
        &[
            Boost::INTERACTION,
            Boost::DISPLAY_UPDATE_IMMINENT,
            Boost::ML_ACC,
            Boost::AUDIO_LAUNCH,
            Boost::CAMERA_LAUNCH,
            Boost::CAMERA_SHOT,
        ]
    }

    /// Whether the value falls inside the declared range
    pub fn is_declared(self) -> bool {
        let all = Boost::all();
        (all[0].0..=all[all.len() - 1].0).contains(&self.0)
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Boost::INTERACTION => "INTERACTION",
            Boost::DISPLAY_UPDATE_IMMINENT => "DISPLAY_UPDATE_IMMINENT",
            Boost::ML_ACC => "ML_ACC",
            Boost::AUDIO_LAUNCH => "AUDIO_LAUNCH",
            Boost::CAMERA_LAUNCH => "CAMERA_LAUNCH",
            Boost::CAMERA_SHOT => "CAMERA_SHOT",
            _ => return None,
        })
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Per-session handle returned by `create_hint_session`
///
/// The vendor hint engine has no per-thread session mechanism, so nothing in
/// this crate constructs one; `create_hint_session` always reports the
/// operation unsupported.
#[derive(Debug)]
pub struct HintSession {
    _priv: (),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_values_match_interface() {
        assert_eq!(Mode::DOUBLE_TAP_TO_WAKE.0, 0);
        assert_eq!(Mode::LOW_POWER.0, 1);
        assert_eq!(Mode::LAUNCH.0, 5);
        assert_eq!(Mode::INTERACTIVE.0, 7);
        assert_eq!(Mode::CAMERA_STREAMING_HIGH.0, 14);
    }

    #[test]
    fn test_boost_values_match_interface() {
        assert_eq!(Boost::INTERACTION.0, 0);
        assert_eq!(Boost::CAMERA_SHOT.0, 5);
    }

    #[test]
    fn test_declared_values_are_contiguous() {
        for (i, mode) in Mode::all().iter().enumerate() {
            assert_eq!(mode.0, i as i32);
        }
        for (i, boost) in Boost::all().iter().enumerate() {
            assert_eq!(boost.0, i as i32);
        }
    }

    #[test]
    fn test_is_declared_bounds() {
        assert!(Mode::DOUBLE_TAP_TO_WAKE.is_declared());
        assert!(Mode::CAMERA_STREAMING_HIGH.is_declared());
        assert!(!Mode(-1).is_declared());
        assert!(!Mode(15).is_declared());

        assert!(Boost::INTERACTION.is_declared());
        assert!(Boost::CAMERA_SHOT.is_declared());
        assert!(!Boost(-1).is_declared());
        assert!(!Boost(6).is_declared());
    }

    #[test]
    fn test_display_uses_names_for_declared_values() {
        assert_eq!(Mode::LAUNCH.to_string(), "LAUNCH");
        assert_eq!(Mode(42).to_string(), "42");
        assert_eq!(Boost::INTERACTION.to_string(), "INTERACTION");
        assert_eq!(Boost(-7).to_string(), "-7");
    }
}

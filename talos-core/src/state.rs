//! Machine mode and interlock state
//!
//! The mode governs which commands the dispatcher accepts and which
//! safety rules apply. It changes only through a validated `mode=`
//! command and persists until the next valid mode command.

/// Operating mode
///
/// Wire values: 0 = Idle, 1 = Router, 2 = Laser, 3 = Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineMode {
    /// All actuator and indicator commands rejected
    #[default]
    Idle,
    /// Spindle work; laser held off
    Router,
    /// Laser work; spindle held off, laser slaved to the door interlock
    Laser,
    /// Direct control of auxiliaries; spindle and laser still held off
    Manual,
}

/// A mode integer outside the four defined variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidMode(pub u32);

impl TryFrom<u32> for MachineMode {
    type Error = InvalidMode;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MachineMode::Idle),
            1 => Ok(MachineMode::Router),
            2 => Ok(MachineMode::Laser),
            3 => Ok(MachineMode::Manual),
            other => Err(InvalidMode(other)),
        }
    }
}

impl MachineMode {
    /// Wire integer for status reporting
    pub fn as_u8(self) -> u8 {
        match self {
            MachineMode::Idle => 0,
            MachineMode::Router => 1,
            MachineMode::Laser => 2,
            MachineMode::Manual => 3,
        }
    }

    /// Check if this mode allows the spindle to run
    pub fn spindle_allowed(self) -> bool {
        matches!(self, MachineMode::Router)
    }

    /// Check if this mode allows the laser to fire
    pub fn laser_allowed(self) -> bool {
        matches!(self, MachineMode::Laser)
    }

    /// Check if actuator/indicator commands are gated off
    pub fn gates_commands(self) -> bool {
        matches!(self, MachineMode::Idle)
    }
}

/// Interlock bookkeeping owned by the control loop
///
/// Timestamps are monotonic milliseconds since boot; `None` is the
/// explicit "never" sentinel. Written only by the `mode=` handler and at
/// the end of each enforcement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterlockState {
    /// Current operating mode
    pub mode: MachineMode,
    /// When the mode was last set by a valid command
    pub mode_set_at: Option<u32>,
    /// When the laser was last observed firing (output latch AND PWM sense)
    pub laser_on_at: Option<u32>,
    /// When the spindle was last observed running
    pub spindle_on_at: Option<u32>,
    /// Clock reading at the previous enforcement pass
    pub prev_tick_at: u32,
}

impl Default for InterlockState {
    fn default() -> Self {
        Self::new()
    }
}

impl InterlockState {
    pub fn new() -> Self {
        Self {
            mode: MachineMode::Idle,
            mode_set_at: None,
            laser_on_at: None,
            spindle_on_at: None,
            prev_tick_at: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_try_from_valid() {
        assert_eq!(MachineMode::try_from(0), Ok(MachineMode::Idle));
        assert_eq!(MachineMode::try_from(1), Ok(MachineMode::Router));
        assert_eq!(MachineMode::try_from(2), Ok(MachineMode::Laser));
        assert_eq!(MachineMode::try_from(3), Ok(MachineMode::Manual));
    }

    #[test]
    fn test_mode_try_from_invalid() {
        assert_eq!(MachineMode::try_from(4), Err(InvalidMode(4)));
        assert_eq!(MachineMode::try_from(99), Err(InvalidMode(99)));
    }

    #[test]
    fn test_mode_roundtrip() {
        for v in 0u32..=3 {
            let mode = MachineMode::try_from(v).unwrap();
            assert_eq!(u32::from(mode.as_u8()), v);
        }
    }

    #[test]
    fn test_spindle_allowed() {
        assert!(MachineMode::Router.spindle_allowed());
        assert!(!MachineMode::Idle.spindle_allowed());
        assert!(!MachineMode::Laser.spindle_allowed());
        assert!(!MachineMode::Manual.spindle_allowed());
    }

    #[test]
    fn test_laser_allowed() {
        assert!(MachineMode::Laser.laser_allowed());
        assert!(!MachineMode::Idle.laser_allowed());
        assert!(!MachineMode::Router.laser_allowed());
        assert!(!MachineMode::Manual.laser_allowed());
    }

    #[test]
    fn test_only_idle_gates_commands() {
        assert!(MachineMode::Idle.gates_commands());
        assert!(!MachineMode::Router.gates_commands());
        assert!(!MachineMode::Laser.gates_commands());
        assert!(!MachineMode::Manual.gates_commands());
    }

    #[test]
    fn test_new_state_has_never_timestamps() {
        let state = InterlockState::new();
        assert_eq!(state.mode, MachineMode::Idle);
        assert!(state.mode_set_at.is_none());
        assert!(state.laser_on_at.is_none());
        assert!(state.spindle_on_at.is_none());
    }
}

//! Pomodoro session state machine.
//!
//! Owns the countdown, the focus/break mode, and the auto-cycling rule:
//! every fourth completed focus phase earns a long break, everything else
//! a short one. Finishing a break returns to focus. The timer never
//! auto-starts the next phase; the user presses start again.

use crate::config::PomodoroConfig;
use crate::core::datetime::format_mmss;
use crate::features::companion::Situation;

/// Pomodoro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Focus work phase (25 minutes by default)
    Focus,
    /// Short break (5 minutes)
    ShortBreak,
    /// Long break (15 minutes)
    LongBreak,
}

impl Mode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Parse a mode from a user-facing name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "focus" | "f" => Some(Self::Focus),
            "short" | "short-break" | "s" => Some(Self::ShortBreak),
            "long" | "long-break" | "l" => Some(Self::LongBreak),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What happened when a phase ran down to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEnd {
    /// Which companion situation the transition triggers.
    pub situation: Situation,
    /// Transient notification text for the view.
    pub notice: &'static str,
    /// The mode the controller moved into.
    pub next_mode: Mode,
}

/// The Pomodoro session controller.
///
/// Single-threaded and tick-driven: the caller feeds it one `tick()` per
/// wall-clock second while running. Timer state is ephemeral; it is never
/// persisted across runs.
#[derive(Debug, Clone)]
pub struct SessionController {
    mode: Mode,
    seconds_remaining: u32,
    running: bool,
    focus_cycles_completed: u32,
    focus_seconds: u32,
    short_break_seconds: u32,
    long_break_seconds: u32,
    cycles_until_long_break: u32,
}

impl SessionController {
    /// Create a controller in Focus mode with the configured durations.
    #[must_use]
    pub fn new(config: &PomodoroConfig) -> Self {
        let focus_seconds = config.focus_minutes * 60;
        Self {
            mode: Mode::Focus,
            seconds_remaining: focus_seconds,
            running: false,
            focus_cycles_completed: 0,
            focus_seconds,
            short_break_seconds: config.short_break_minutes * 60,
            long_break_seconds: config.long_break_minutes * 60,
            cycles_until_long_break: config.cycles_until_long_break.max(1),
        }
    }

    /// The configured duration of a mode, in seconds.
    #[must_use]
    pub const fn duration_of(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_seconds,
            Mode::ShortBreak => self.short_break_seconds,
            Mode::LongBreak => self.long_break_seconds,
        }
    }

    /// Select a mode, re-arming the countdown at that mode's duration.
    ///
    /// Rejected (a silent no-op, returning `false`) while the countdown is
    /// running, to prevent mid-countdown corruption.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if self.running {
            return false;
        }
        self.apply_mode(mode);
        true
    }

    /// Switch mode unconditionally. Internal transitions always clear
    /// `running` first, so they bypass the select guard.
    fn apply_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.seconds_remaining = self.duration_of(mode);
    }

    /// Start (or resume) the countdown. No-op when already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown, leaving the remaining time untouched.
    ///
    /// Returns `true` if the session actually went from running to paused;
    /// callers use that to trigger the companion's Stop line exactly once.
    pub fn pause(&mut self) -> bool {
        if self.running {
            self.running = false;
            true
        } else {
            false
        }
    }

    /// Full-cycle reset: stop the countdown, return to Focus, and clear
    /// cycle progress.
    ///
    /// This mirrors the reference behavior - resetting the clock also
    /// resets progress toward the long break.
    pub fn reset(&mut self) {
        self.running = false;
        self.focus_cycles_completed = 0;
        self.apply_mode(Mode::Focus);
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the phase transition when this tick crossed zero, exactly
    /// once per zero-crossing; the new phase is armed but not started.
    pub fn tick(&mut self) -> Option<PhaseEnd> {
        if !self.running {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            Some(self.finish_phase())
        } else {
            None
        }
    }

    /// The transition algorithm, run when the countdown hits zero.
    fn finish_phase(&mut self) -> PhaseEnd {
        // The countdown already stopped by reaching zero; the mode switch
        // below happens from a stopped state so the select guard never
        // applies to transitions.
        self.running = false;

        let (situation, notice, next_mode) = match self.mode {
            Mode::Focus => {
                self.focus_cycles_completed += 1;
                if self.focus_cycles_completed >= self.cycles_until_long_break {
                    self.focus_cycles_completed = 0;
                    (
                        Situation::Break,
                        "Long break time! You earned it.",
                        Mode::LongBreak,
                    )
                } else {
                    (
                        Situation::Break,
                        "Short break time! Stretch those legs.",
                        Mode::ShortBreak,
                    )
                }
            }
            Mode::ShortBreak => (
                Situation::Idle,
                "Break's over - back to focus!",
                Mode::Focus,
            ),
            Mode::LongBreak => (
                Situation::Idle,
                "Fresh cycle - ready when you are!",
                Mode::Focus,
            ),
        };

        self.apply_mode(next_mode);

        PhaseEnd {
            situation,
            notice,
            next_mode,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Whether the countdown is actively decrementing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Completed focus phases since the last long break.
    #[must_use]
    pub const fn focus_cycles_completed(&self) -> u32 {
        self.focus_cycles_completed
    }

    /// How many focus phases make up one full cycle.
    #[must_use]
    pub const fn cycles_until_long_break(&self) -> u32 {
        self.cycles_until_long_break
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.duration_of(self.mode);
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.seconds_remaining) / f64::from(total))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.seconds_remaining)
    }
}

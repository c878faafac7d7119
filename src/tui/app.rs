//! Application state for the focus view.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::CompanionConfig;
use crate::core::RandomSource;
use crate::features::companion::{speak, Character, Situation, UrgencyMonitor};
use crate::features::pomodoro::{Mode, SessionController};
use crate::features::quests::Quest;

/// A speech bubble with a dismissal deadline.
pub struct Bubble {
    /// What the companion is saying.
    pub text: &'static str,
    /// When the bubble disappears.
    pub until: Instant,
}

/// Application state.
pub struct App {
    /// The Pomodoro session controller.
    pub controller: SessionController,
    /// The user's companion character.
    pub character: Character,
    /// The user's display name.
    pub user_name: String,
    /// Open quests, scanned for urgency.
    quests: Vec<Quest>,
    /// The urgency monitor.
    monitor: UrgencyMonitor,
    /// The current speech bubble, if any.
    pub bubble: Option<Bubble>,
    /// How long a bubble stays up.
    bubble_ttl: Duration,
    /// How often to scan quests for urgency.
    scan_every: Duration,
    /// Randomness for dialog selection and urgency throttling.
    rng: Box<dyn RandomSource>,
    /// Last wall-clock second consumed by the countdown.
    last_tick: Instant,
    /// Last urgency scan.
    last_scan: Instant,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    pub fn new(
        controller: SessionController,
        character: Character,
        user_name: impl Into<String>,
        quests: Vec<Quest>,
        config: &CompanionConfig,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let now = Instant::now();
        let mut app = Self {
            controller,
            character,
            user_name: user_name.into(),
            quests,
            monitor: UrgencyMonitor::new(config),
            bubble: None,
            bubble_ttl: Duration::from_secs(config.bubble_seconds),
            scan_every: Duration::from_secs(config.urgency_scan_seconds),
            rng,
            last_tick: now,
            last_scan: now,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        };
        app.say(Situation::Idle, now);
        app
    }

    /// Advance time-driven state: the countdown, the urgency scan, and
    /// bubble expiry. Called once per draw-loop pass.
    pub fn on_clock(&mut self, now: Instant) {
        if self.controller.is_running() {
            // Consume whole elapsed seconds so a slow draw pass cannot
            // lose time.
            while now.duration_since(self.last_tick) >= Duration::from_secs(1) {
                self.last_tick += Duration::from_secs(1);
                if let Some(end) = self.controller.tick() {
                    self.status = Some(end.notice.to_string());
                    self.say(end.situation, now);
                    break;
                }
            }
        } else {
            // Keep the tick anchor fresh while paused so resuming does
            // not replay the paused stretch as a burst of ticks.
            self.last_tick = now;
        }

        if now.duration_since(self.last_scan) >= self.scan_every {
            self.last_scan = now;
            let local_now = Local::now().naive_local();
            if self
                .monitor
                .should_remind(&self.quests, local_now, self.rng.as_mut())
            {
                self.say(Situation::Urgent, now);
            }
        }

        if let Some(ref bubble) = self.bubble {
            if now >= bubble.until {
                self.bubble = None;
            }
        }
    }

    /// Show a companion line for a situation. Replaces any bubble already
    /// on screen and restarts its dismissal timer.
    pub fn say(&mut self, situation: Situation, now: Instant) {
        let text = speak(self.character, situation, self.rng.as_mut());
        self.bubble = Some(Bubble {
            text,
            until: now + self.bubble_ttl,
        });
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self, now: Instant) {
        if self.controller.pause() {
            self.say(Situation::Stop, now);
        } else {
            self.controller.start();
            self.last_tick = now;
            self.status = None;
        }
    }

    /// Select a phase. Silently ignored while the countdown is running.
    pub fn select(&mut self, mode: Mode) {
        if !self.controller.select_mode(mode) {
            self.status = Some("Pause the timer before switching phases".to_string());
        }
    }

    /// Reset the whole cycle.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Poke the companion for an idle line.
    pub fn poke(&mut self, now: Instant) {
        self.say(Situation::Idle, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PomodoroConfig;
    use crate::core::FixedRandom;

    fn test_app() -> App {
        let pomodoro = PomodoroConfig {
            focus_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 1,
            cycles_until_long_break: 4,
        };
        App::new(
            SessionController::new(&pomodoro),
            Character::Pip,
            "Robin",
            Vec::new(),
            &CompanionConfig::default(),
            Box::new(FixedRandom(0.0)),
        )
    }

    #[test]
    fn test_new_app_greets() {
        let app = test_app();
        assert!(app.bubble.is_some());
        assert!(!app.controller.is_running());
    }

    #[test]
    fn test_clock_ticks_only_while_running() {
        let mut app = test_app();
        let start = Instant::now();

        app.on_clock(start + Duration::from_secs(5));
        assert_eq!(app.controller.seconds_remaining(), 60);

        app.toggle(start + Duration::from_secs(5));
        app.on_clock(start + Duration::from_secs(8));
        assert_eq!(app.controller.seconds_remaining(), 57);
    }

    #[test]
    fn test_pause_shows_stop_line() {
        let mut app = test_app();
        let now = Instant::now();

        app.toggle(now);
        app.bubble = None;
        app.toggle(now);

        assert!(app.bubble.is_some());
        assert!(!app.controller.is_running());
    }

    #[test]
    fn test_phase_end_surfaces_notice_and_bubble() {
        let mut app = test_app();
        let start = Instant::now();

        app.toggle(start);
        app.bubble = None;
        for s in 1..=60 {
            app.on_clock(start + Duration::from_secs(s));
        }

        assert_eq!(app.controller.mode(), Mode::ShortBreak);
        assert!(!app.controller.is_running());
        assert!(app.bubble.is_some());
        assert_eq!(app.status.as_deref(), Some("Short break time! Stretch those legs."));
    }

    #[test]
    fn test_bubble_expires() {
        let mut app = test_app();
        let now = Instant::now();

        app.poke(now);
        app.on_clock(now + Duration::from_secs(6));

        assert!(app.bubble.is_none());
    }

    #[test]
    fn test_select_while_running_sets_status() {
        let mut app = test_app();
        let now = Instant::now();

        app.toggle(now);
        app.select(Mode::LongBreak);

        assert_eq!(app.controller.mode(), Mode::Focus);
        assert!(app.status.is_some());
    }
}

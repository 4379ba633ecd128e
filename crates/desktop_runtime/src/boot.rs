//! Boot screen sequencing: staggered status lines, then a simulated progress bar.
//!
//! [`BootSequencer`] is a pure state machine. It never sleeps; every call to
//! [`BootSequencer::tick`] returns the events to present and the delay after which the host
//! should call `tick` again. The browser host drives it with timers, tests drive it directly.

use std::time::Duration;

use platform_host::RandomSource;
use serde::{Deserialize, Serialize};

use crate::audio::AudioCue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootConfig {
    pub initial_delay_ms: u32,
    pub line_delay_min_ms: u32,
    pub line_delay_jitter_ms: u32,
    pub progress_interval_ms: u32,
    /// Largest progress increment per tick, in percent.
    pub progress_step_max: f64,
    pub launch_delay_ms: u32,
    pub lines: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1000,
            line_delay_min_ms: 200,
            line_delay_jitter_ms: 400,
            progress_interval_ms: 80,
            progress_step_max: 10.0,
            launch_delay_ms: 800,
            lines: [
                "Initializing Gensyn OS Kernel...",
                "Loading RL Swarm Protocols...",
                "Establishing Neural Links [OK]",
                "Verifying Proof-of-Learning...",
                "Syncing Distributed Compute Nodes...",
                "Aggregating Community Intelligence...",
                "System Ready.",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl BootConfig {
    /// Rejects timings under which the progress bar could never reach 100%.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.progress_interval_ms == 0 {
            return Err("progress_interval_ms must be positive");
        }
        if self.progress_step_max.is_nan() || self.progress_step_max <= 0.0 {
            return Err("progress_step_max must be positive");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Idle,
    RevealingLines,
    Progress,
    Launching,
    Complete,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootEvent {
    /// A status line became visible; carries the rendered `> text` form.
    LineRevealed(String),
    ProgressBarShown,
    /// Progress bar width in percent, `0..=100`.
    ProgressAdvanced(f64),
    /// Boot screen is done; the desktop should take over.
    DesktopLaunched,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootTick {
    pub events: Vec<BootEvent>,
    /// Sounds to play alongside the events; each revealed line clicks.
    pub cues: Vec<AudioCue>,
    /// `None` when nothing further is scheduled.
    pub next_delay: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootSequencer {
    config: BootConfig,
    phase: BootPhase,
    revealed: Vec<String>,
    progress_bar_visible: bool,
    progress: f64,
}

impl BootSequencer {
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            phase: BootPhase::Idle,
            revealed: Vec::new(),
            progress_bar_visible: false,
            progress: 0.0,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn revealed_lines(&self) -> &[String] {
        &self.revealed
    }

    pub fn progress_bar_visible(&self) -> bool {
        self.progress_bar_visible
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }

    /// Arms the sequence and returns the delay before the first tick.
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self) -> Option<Duration> {
        if self.phase != BootPhase::Idle {
            return None;
        }
        self.phase = BootPhase::RevealingLines;
        Some(millis(self.config.initial_delay_ms))
    }

    /// Stops the sequence. Any later tick is a no-op.
    pub fn cancel(&mut self) {
        if self.phase != BootPhase::Complete {
            self.phase = BootPhase::Cancelled;
        }
    }

    pub fn tick(&mut self, random: &dyn RandomSource) -> BootTick {
        match self.phase {
            BootPhase::Idle | BootPhase::Complete | BootPhase::Cancelled => BootTick::default(),
            BootPhase::RevealingLines => self.reveal_or_show_bar(random),
            BootPhase::Progress => self.advance_progress(random),
            BootPhase::Launching => {
                self.phase = BootPhase::Complete;
                BootTick {
                    events: vec![BootEvent::DesktopLaunched],
                    cues: Vec::new(),
                    next_delay: None,
                }
            }
        }
    }

    fn reveal_or_show_bar(&mut self, random: &dyn RandomSource) -> BootTick {
        if let Some(text) = self.config.lines.get(self.revealed.len()) {
            let line = format!("> {text}");
            self.revealed.push(line.clone());
            let jitter = random.next_unit() * f64::from(self.config.line_delay_jitter_ms);
            let delay = f64::from(self.config.line_delay_min_ms) + jitter;
            return BootTick {
                events: vec![BootEvent::LineRevealed(line)],
                cues: vec![AudioCue::Click],
                next_delay: Some(Duration::from_millis(delay.round() as u64)),
            };
        }

        self.phase = BootPhase::Progress;
        self.progress_bar_visible = true;
        BootTick {
            events: vec![BootEvent::ProgressBarShown],
            cues: Vec::new(),
            next_delay: Some(millis(self.config.progress_interval_ms)),
        }
    }

    fn advance_progress(&mut self, random: &dyn RandomSource) -> BootTick {
        let step = random.next_unit() * self.config.progress_step_max.max(0.0);
        self.progress = (self.progress + step).min(100.0);
        let events = vec![BootEvent::ProgressAdvanced(self.progress)];

        if self.progress >= 100.0 {
            self.phase = BootPhase::Launching;
            return BootTick {
                events,
                cues: Vec::new(),
                next_delay: Some(millis(self.config.launch_delay_ms)),
            };
        }

        BootTick {
            events,
            cues: Vec::new(),
            next_delay: Some(millis(self.config.progress_interval_ms)),
        }
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

#[cfg(test)]
mod tests {
    use platform_host::SequenceRandomSource;
    use pretty_assertions::assert_eq;

    use super::*;

    fn short_config() -> BootConfig {
        BootConfig {
            lines: vec!["Kernel".to_string(), "Ready.".to_string()],
            ..BootConfig::default()
        }
    }

    #[test]
    fn non_positive_progress_settings_fail_validation() {
        assert_eq!(BootConfig::default().validate(), Ok(()));
        for step in [0.0, -5.0, f64::NAN] {
            let config = BootConfig {
                progress_step_max: step,
                ..BootConfig::default()
            };
            assert!(config.validate().is_err(), "step {step} accepted");
        }
        let config = BootConfig {
            progress_interval_ms: 0,
            ..BootConfig::default()
        };
        assert_eq!(config.validate(), Err("progress_interval_ms must be positive"));
    }

    #[test]
    fn start_schedules_initial_delay_once() {
        let mut boot = BootSequencer::new(short_config());
        assert_eq!(boot.start(), Some(Duration::from_millis(1000)));
        assert_eq!(boot.start(), None);
        assert_eq!(boot.phase(), BootPhase::RevealingLines);
    }

    #[test]
    fn ticking_before_start_does_nothing() {
        let mut boot = BootSequencer::new(short_config());
        let random = SequenceRandomSource::constant(0.5);
        assert_eq!(boot.tick(&random), BootTick::default());
        assert!(boot.revealed_lines().is_empty());
    }

    #[test]
    fn lines_reveal_with_jittered_delays() {
        let mut boot = BootSequencer::new(short_config());
        let random = SequenceRandomSource::new(vec![0.0, 0.5]);
        boot.start();

        let first = boot.tick(&random);
        assert_eq!(first.events, vec![BootEvent::LineRevealed("> Kernel".to_string())]);
        assert_eq!(first.cues, vec![AudioCue::Click]);
        assert_eq!(first.next_delay, Some(Duration::from_millis(200)));

        let second = boot.tick(&random);
        assert_eq!(second.events, vec![BootEvent::LineRevealed("> Ready.".to_string())]);
        assert_eq!(second.next_delay, Some(Duration::from_millis(400)));

        let bar = boot.tick(&random);
        assert_eq!(bar.events, vec![BootEvent::ProgressBarShown]);
        assert_eq!(bar.cues, Vec::new());
        assert_eq!(bar.next_delay, Some(Duration::from_millis(80)));
        assert!(boot.progress_bar_visible());
        assert_eq!(boot.revealed_lines().len(), 2);
    }

    #[test]
    fn progress_caps_at_one_hundred_then_launches() {
        let mut boot = BootSequencer::new(BootConfig {
            lines: Vec::new(),
            ..BootConfig::default()
        });
        // 0.99 * 10 per tick: eleven ticks cross 100.
        let random = SequenceRandomSource::constant(0.99);
        boot.start();
        boot.tick(&random);

        let mut ticks = 0;
        loop {
            let tick = boot.tick(&random);
            ticks += 1;
            let Some(BootEvent::ProgressAdvanced(percent)) = tick.events.first().cloned() else {
                panic!("expected progress event");
            };
            assert!(percent <= 100.0);
            if percent >= 100.0 {
                assert_eq!(tick.next_delay, Some(Duration::from_millis(800)));
                break;
            }
            assert_eq!(tick.next_delay, Some(Duration::from_millis(80)));
        }
        assert_eq!(ticks, 11);
        assert_eq!(boot.progress_percent(), 100.0);

        let launch = boot.tick(&random);
        assert_eq!(launch.events, vec![BootEvent::DesktopLaunched]);
        assert_eq!(launch.cues, Vec::new());
        assert_eq!(launch.next_delay, None);
        assert!(boot.is_complete());
        assert_eq!(boot.tick(&random), BootTick::default());
    }

    #[test]
    fn zero_samples_stall_progress_without_launching() {
        let mut boot = BootSequencer::new(BootConfig {
            lines: Vec::new(),
            ..BootConfig::default()
        });
        let random = SequenceRandomSource::constant(0.0);
        boot.start();
        boot.tick(&random);
        for _ in 0..5 {
            let tick = boot.tick(&random);
            assert_eq!(tick.events, vec![BootEvent::ProgressAdvanced(0.0)]);
        }
        assert_eq!(boot.phase(), BootPhase::Progress);
    }

    #[test]
    fn every_revealed_line_clicks_once() {
        let mut boot = BootSequencer::new(BootConfig::default());
        let random = SequenceRandomSource::constant(0.25);
        boot.start();

        let mut clicks = 0;
        while boot.phase() == BootPhase::RevealingLines {
            let tick = boot.tick(&random);
            let lines = tick
                .events
                .iter()
                .filter(|event| matches!(event, BootEvent::LineRevealed(_)))
                .count();
            assert_eq!(tick.cues.len(), lines);
            clicks += tick.cues.iter().filter(|cue| **cue == AudioCue::Click).count();
        }
        assert_eq!(clicks, 7);
    }

    #[test]
    fn cancel_stops_further_ticks() {
        let mut boot = BootSequencer::new(short_config());
        let random = SequenceRandomSource::constant(0.5);
        boot.start();
        boot.tick(&random);
        boot.cancel();
        assert_eq!(boot.phase(), BootPhase::Cancelled);
        assert_eq!(boot.tick(&random), BootTick::default());
        assert_eq!(boot.revealed_lines().len(), 1);
    }
}

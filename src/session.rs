use std::time::{Duration, Instant};

use crate::layout::{LayoutTable, Point, Region};
use crate::util::clamp_add;

pub const SESSION_MIN_SECS: u64 = 1;
pub const SESSION_MAX_SECS: u64 = 21_600; // 6h
pub const BREAK_MIN_SECS: u64 = 1;
pub const BREAK_MAX_SECS: u64 = 3_600; // 1h

pub const DEFAULT_SESSION_SECS: u64 = 1_500; // 25min
pub const DEFAULT_BREAK_SECS: u64 = 300; // 5min

/// Per-frame exponential smoothing factor for the displayed time.
pub const GLIDE_SPEED: f64 = 0.05;

const TICK: Duration = Duration::from_secs(1);
const MAX_TYPED_DIGITS: usize = 3;

/// Which screen is active. Exactly one at a time; drives both the region
/// table and the permitted actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Mode {
    Setup,
    Timer,
    Break,
    ConfirmReset,
    ConfirmBack,
}

/// Semantic actions the screens expose. Pointer clicks resolve to these via
/// the layout table; keys map to the input-editing subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Back,
    Reset,
    TakeBreak,
    ToggleRunning,
    EndBreak,
    Confirm,
    Cancel,
    AdjustStudy(i64),
    AdjustBreak(i64),
    FocusMinutesInput,
    CommitMinutes,
}

/// Key events the core understands. The shell maps terminal key codes onto
/// these; everything else stays a shell concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Digit(char),
    Backspace,
    Accept,
}

/// The whole process-lifetime state of the app. All mutation goes through
/// `apply`, `handle_click`, `handle_key` and `on_frame` so the clamping and
/// buffer-clearing invariants hold in one place.
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    session_secs: u64,
    break_secs: u64,
    time_left: u64,
    break_left: u64,
    running: bool,
    display_time: f64,
    display_break_time: f64,
    typed_minutes: String,
    minutes_input_active: bool,
    tick_anchor: Instant,
}

impl Session {
    pub fn new(now: Instant) -> Self {
        Self {
            mode: Mode::Setup,
            session_secs: DEFAULT_SESSION_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            time_left: DEFAULT_SESSION_SECS,
            break_left: DEFAULT_BREAK_SECS,
            running: false,
            display_time: DEFAULT_SESSION_SECS as f64,
            display_break_time: DEFAULT_BREAK_SECS as f64,
            typed_minutes: String::new(),
            minutes_input_active: false,
            tick_anchor: now,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session_secs(&self) -> u64 {
        self.session_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn break_left(&self) -> u64 {
        self.break_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn display_time(&self) -> f64 {
        self.display_time
    }

    pub fn display_break_time(&self) -> f64 {
        self.display_break_time
    }

    pub fn typed_minutes(&self) -> &str {
        &self.typed_minutes
    }

    pub fn minutes_input_active(&self) -> bool {
        self.minutes_input_active
    }

    /// Apply one semantic action. Actions that make no sense in the current
    /// mode are ignored.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match (self.mode, action) {
            (Mode::Setup, Action::Start) => {
                self.commit_minutes();
                self.time_left = self.session_secs;
                self.display_time = self.session_secs as f64;
                self.running = true;
                self.tick_anchor = now;
                self.mode = Mode::Timer;
            }
            (Mode::Setup, Action::AdjustStudy(delta)) => self.adjust_study(delta),
            (Mode::Setup, Action::AdjustBreak(delta)) => self.adjust_break(delta),
            (Mode::Setup, Action::FocusMinutesInput) => {
                // activating the field always starts from an empty buffer
                self.typed_minutes.clear();
                self.minutes_input_active = true;
            }
            (Mode::Setup, Action::CommitMinutes) => self.commit_minutes(),

            (Mode::Timer, Action::Back) | (Mode::Break, Action::Back) => {
                self.mode = Mode::ConfirmBack;
            }
            (Mode::Timer, Action::Reset) => self.mode = Mode::ConfirmReset,
            (Mode::Timer, Action::TakeBreak) => {
                self.running = false;
                self.break_left = self.break_secs;
                self.display_break_time = self.break_secs as f64;
                self.tick_anchor = now;
                self.mode = Mode::Break;
            }
            (Mode::Timer, Action::ToggleRunning) => self.running = !self.running,

            (Mode::Break, Action::EndBreak) => self.end_break(now),

            (Mode::ConfirmReset, Action::Confirm) => {
                self.time_left = self.session_secs;
                self.display_time = self.session_secs as f64;
                self.running = false;
                self.mode = Mode::Timer;
            }
            (Mode::ConfirmReset, Action::Cancel) => self.mode = Mode::Timer,

            (Mode::ConfirmBack, Action::Confirm) => {
                self.running = false;
                self.typed_minutes.clear();
                self.minutes_input_active = false;
                self.mode = Mode::Setup;
            }
            // Cancel always resumes the timer screen, even when the
            // confirmation was raised from the break screen.
            (Mode::ConfirmBack, Action::Cancel) => self.mode = Mode::Timer,

            _ => {}
        }
    }

    /// Resolve a pointer click against the layout table and apply the
    /// resulting action. Clicks outside every region are a no-op, except
    /// that any click away from the minutes field commits pending input.
    pub fn handle_click(&mut self, point: Point, table: &LayoutTable, now: Instant) {
        let hit = table.hit_test(self.mode, point);

        if self.mode == Mode::Setup
            && self.minutes_input_active
            && hit != Some(Region::MinutesInput)
        {
            self.commit_minutes();
        }

        let action = match hit {
            Some(region) => Some(Self::action_for(region)),
            None if table.ring_hit_test(point) => match self.mode {
                Mode::Timer => Some(Action::ToggleRunning),
                Mode::Break => Some(Action::EndBreak),
                _ => None,
            },
            None => None,
        };

        if let Some(action) = action {
            self.apply(action, now);
        }
    }

    /// Feed one key event into the typed-minutes field. Keys are only
    /// meaningful in Setup while the field is active.
    pub fn handle_key(&mut self, key: KeyInput, _now: Instant) {
        if self.mode != Mode::Setup || !self.minutes_input_active {
            return;
        }
        match key {
            KeyInput::Digit(c) => {
                if c.is_ascii_digit() && self.typed_minutes.len() < MAX_TYPED_DIGITS {
                    self.typed_minutes.push(c);
                }
            }
            KeyInput::Backspace => {
                self.typed_minutes.pop();
            }
            KeyInput::Accept => self.commit_minutes(),
        }
    }

    /// One cooperative frame step: drain whole elapsed seconds since the
    /// tick anchor, then glide the displayed values toward their targets.
    ///
    /// The anchor advances by exactly one tick interval per consumed second
    /// so delayed frames catch up without drift, and never decrement more
    /// than once per actually elapsed second.
    pub fn on_frame(&mut self, now: Instant) {
        while now.duration_since(self.tick_anchor) >= TICK {
            self.tick_anchor += TICK;
            match self.mode {
                Mode::Timer if self.running => {
                    self.time_left = self.time_left.saturating_sub(1);
                    if self.time_left == 0 {
                        self.running = false;
                    }
                }
                Mode::Break => {
                    self.break_left = self.break_left.saturating_sub(1);
                    if self.break_left == 0 {
                        // same transition as pressing end-break
                        self.end_break(now);
                    }
                }
                _ => {}
            }
        }

        let target = self.display_target();
        self.display_time += (target - self.display_time) * GLIDE_SPEED;

        let break_target = self.break_display_target();
        self.display_break_time += (break_target - self.display_break_time) * GLIDE_SPEED;
    }

    fn end_break(&mut self, now: Instant) {
        self.running = true;
        self.tick_anchor = now;
        self.mode = Mode::Timer;
    }

    /// In Setup the countdowns are not live, so the display settles toward
    /// the configured duration instead of the stale countdown value.
    fn display_target(&self) -> f64 {
        match self.mode {
            Mode::Setup => self.session_secs as f64,
            _ => self.time_left as f64,
        }
    }

    fn break_display_target(&self) -> f64 {
        match self.mode {
            Mode::Setup => self.break_secs as f64,
            _ => self.break_left as f64,
        }
    }

    fn adjust_study(&mut self, delta: i64) {
        if self.minutes_input_active {
            self.commit_minutes();
        }
        self.session_secs = clamp_add(self.session_secs, delta, SESSION_MIN_SECS, SESSION_MAX_SECS);
        self.display_time = self.session_secs as f64;
    }

    fn adjust_break(&mut self, delta: i64) {
        self.break_secs = clamp_add(self.break_secs, delta, BREAK_MIN_SECS, BREAK_MAX_SECS);
        self.display_break_time = self.break_secs as f64;
    }

    /// Commit the typed-minutes buffer. A parse failure (empty buffer)
    /// leaves the duration unchanged; either way the buffer is cleared and
    /// the field deactivated.
    fn commit_minutes(&mut self) {
        if let Ok(minutes) = self.typed_minutes.parse::<u64>() {
            self.session_secs = (minutes * 60).clamp(SESSION_MIN_SECS, SESSION_MAX_SECS);
            self.display_time = self.session_secs as f64;
        }
        self.typed_minutes.clear();
        self.minutes_input_active = false;
    }

    fn action_for(region: Region) -> Action {
        match region {
            Region::StudyHourUp => Action::AdjustStudy(3600),
            Region::StudyHourDown => Action::AdjustStudy(-3600),
            Region::StudyMinuteUp => Action::AdjustStudy(60),
            Region::StudyMinuteDown => Action::AdjustStudy(-60),
            Region::StudySecondUp => Action::AdjustStudy(1),
            Region::StudySecondDown => Action::AdjustStudy(-1),
            Region::BreakMinuteUp => Action::AdjustBreak(60),
            Region::BreakMinuteDown => Action::AdjustBreak(-60),
            Region::BreakSecondUp => Action::AdjustBreak(1),
            Region::BreakSecondDown => Action::AdjustBreak(-1),
            Region::MinutesInput => Action::FocusMinutesInput,
            Region::Start => Action::Start,
            Region::TimerBack | Region::BreakBack => Action::Back,
            Region::TimerReset => Action::Reset,
            Region::TimerBreak => Action::TakeBreak,
            Region::BreakEnd => Action::EndBreak,
            Region::PopupYes => Action::Confirm,
            Region::PopupNo => Action::Cancel,
        }
    }
}

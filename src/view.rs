//! Pure state → draw-list projection. The renderer consumes the result and
//! feeds nothing back; pointer hit-testing is the layout table's job.

use crate::layout::{LayoutTable, Rect, Region, HALO_CX, HALO_CY, HALO_DIAMETER, POPUP_BOX, SCREEN_W};
use crate::session::{Mode, Session};
use crate::util::{format_hms, format_ms};

/// Circular progress indicator: two arcs split at `fraction` of the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct Halo {
    pub cx: f32,
    pub cy: f32,
    pub diameter: f32,
    /// Remaining share of the countdown in `[0, 1]`, animated.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub region: Region,
    pub rect: Rect,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleDir {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub region: Region,
    pub rect: Rect,
    pub dir: TriangleDir,
}

/// A piece of text centered on a logical point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub rect: Rect,
    pub prompt: String,
    pub yes: Button,
    pub no: Button,
}

/// Everything the renderer needs for one frame of the active screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub halo: Option<Halo>,
    pub labels: Vec<Label>,
    pub buttons: Vec<Button>,
    pub triangles: Vec<Triangle>,
    pub popup: Option<Popup>,
}

impl Default for Halo {
    fn default() -> Self {
        Self {
            cx: HALO_CX,
            cy: HALO_CY,
            diameter: HALO_DIAMETER,
            fraction: 1.0,
        }
    }
}

pub fn draw_list(session: &Session, table: &LayoutTable) -> DrawList {
    let mut list = match session.mode() {
        Mode::Setup => setup_screen(session, table),
        Mode::Timer => timer_screen(session, table),
        Mode::Break => break_screen(session, table),
        // Confirmations overlay the timer screen; the origin screen is not
        // tracked (matches the cancel-resumes-Timer behavior).
        Mode::ConfirmReset | Mode::ConfirmBack => timer_screen(session, table),
    };

    list.popup = match session.mode() {
        Mode::ConfirmReset => Some(popup("reset this session?", table)),
        Mode::ConfirmBack => Some(popup("leave this session?", table)),
        _ => None,
    };

    list
}

fn button(region: Region, label: &str, active: bool, table: &LayoutTable) -> Button {
    Button {
        region,
        rect: table.rect(region),
        label: label.to_string(),
        active,
    }
}

fn triangle(region: Region, dir: TriangleDir, table: &LayoutTable) -> Triangle {
    Triangle {
        region,
        rect: table.rect(region),
        dir,
    }
}

fn popup(prompt: &str, table: &LayoutTable) -> Popup {
    Popup {
        rect: POPUP_BOX,
        prompt: prompt.to_string(),
        yes: button(Region::PopupYes, "yes", false, table),
        no: button(Region::PopupNo, "no", false, table),
    }
}

fn setup_screen(session: &Session, table: &LayoutTable) -> DrawList {
    use Region::*;
    use TriangleDir::{Down, Up};

    let cx = SCREEN_W / 2.0;
    let input_label = if session.minutes_input_active() {
        format!("{}_", session.typed_minutes())
    } else {
        "type min".to_string()
    };

    DrawList {
        halo: None,
        labels: vec![
            Label {
                x: cx,
                y: 70.0,
                content: "study".to_string(),
                emphasized: false,
            },
            Label {
                x: cx,
                y: 178.0,
                content: format_hms(session.session_secs()),
                emphasized: true,
            },
            Label {
                x: cx,
                y: 305.0,
                content: "break".to_string(),
                emphasized: false,
            },
            Label {
                x: cx,
                y: 385.0,
                content: format_ms(session.break_secs()),
                emphasized: true,
            },
        ],
        buttons: vec![
            button(MinutesInput, &input_label, session.minutes_input_active(), table),
            button(Start, "start", false, table),
        ],
        triangles: vec![
            triangle(StudyHourUp, Up, table),
            triangle(StudyHourDown, Down, table),
            triangle(StudyMinuteUp, Up, table),
            triangle(StudyMinuteDown, Down, table),
            triangle(StudySecondUp, Up, table),
            triangle(StudySecondDown, Down, table),
            triangle(BreakMinuteUp, Up, table),
            triangle(BreakMinuteDown, Down, table),
            triangle(BreakSecondUp, Up, table),
            triangle(BreakSecondDown, Down, table),
        ],
        popup: None,
    }
}

fn timer_screen(session: &Session, table: &LayoutTable) -> DrawList {
    use Region::*;

    let fraction = if session.session_secs() > 0 {
        (session.display_time() / session.session_secs() as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut labels = vec![Label {
        x: HALO_CX,
        y: HALO_CY,
        content: format_hms(session.time_left()),
        emphasized: true,
    }];
    if !session.is_running() {
        labels.push(Label {
            x: HALO_CX,
            y: HALO_CY + 40.0,
            content: "paused".to_string(),
            emphasized: false,
        });
    }

    DrawList {
        halo: Some(Halo {
            fraction,
            ..Halo::default()
        }),
        labels,
        buttons: vec![
            button(TimerBack, "back", false, table),
            button(TimerReset, "reset", false, table),
            button(TimerBreak, "break", false, table),
        ],
        triangles: vec![],
        popup: None,
    }
}

fn break_screen(session: &Session, table: &LayoutTable) -> DrawList {
    use Region::*;

    let fraction = if session.break_secs() > 0 {
        (session.display_break_time() / session.break_secs() as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    DrawList {
        halo: Some(Halo {
            fraction,
            ..Halo::default()
        }),
        labels: vec![
            Label {
                x: HALO_CX,
                y: HALO_CY,
                content: format_ms(session.break_left()),
                emphasized: true,
            },
            Label {
                x: HALO_CX,
                y: 70.0,
                content: session.mode().to_string().to_lowercase(),
                emphasized: false,
            },
        ],
        buttons: vec![
            button(BreakBack, "back", false, table),
            button(BreakEnd, "end break", false, table),
        ],
        triangles: vec![],
        popup: None,
    }
}

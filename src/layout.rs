use crate::session::Mode;

/// Logical coordinate space the whole UI is laid out in. Pointer events are
/// translated into this space before hit-testing; the renderer scales it
/// onto whatever area the terminal provides.
pub const SCREEN_W: f32 = 400.0;
pub const SCREEN_H: f32 = 600.0;

pub const HALO_CX: f32 = SCREEN_W / 2.0;
pub const HALO_CY: f32 = SCREEN_H / 2.0 - 40.0;
pub const HALO_DIAMETER: f32 = 300.0;

// Setup screen rows/columns. Study adjustment columns sit 100px apart
// around the centered time text; break has no hour column.
const COLUMN_GAP: f32 = 100.0;
const STUDY_COLUMNS: [f32; 3] = [
    SCREEN_W / 2.0 - COLUMN_GAP,
    SCREEN_W / 2.0,
    SCREEN_W / 2.0 + COLUMN_GAP,
];
const BREAK_COLUMNS: [f32; 2] = [SCREEN_W / 2.0 - 50.0, SCREEN_W / 2.0 + 50.0];

const ARROW_W: f32 = 40.0;
const ARROW_H: f32 = 26.0;
const STUDY_UP_Y: f32 = 120.0;
const STUDY_DOWN_Y: f32 = 216.0;
const BREAK_UP_Y: f32 = 330.0;
const BREAK_DOWN_Y: f32 = 416.0;

const INPUT_BOX: Rect = Rect::new(150.0, 260.0, 100.0, 36.0);
const START_BUTTON: Rect = Rect::new(130.0, 500.0, 140.0, 56.0);

// Timer screen: three equally spaced buttons along the bottom.
const TIMER_BUTTON_W: f32 = 110.0;
const TIMER_BUTTON_H: f32 = 48.0;
const TIMER_BUTTON_Y: f32 = 524.0;

// Break screen: two centered buttons.
const BREAK_BUTTON_W: f32 = 130.0;
const BREAK_BUTTON_H: f32 = 48.0;
const BREAK_BUTTON_Y: f32 = 524.0;

// Confirmation popup box and its yes/no buttons.
pub const POPUP_BOX: Rect = Rect::new(60.0, 220.0, 280.0, 150.0);
const POPUP_YES: Rect = Rect::new(90.0, 320.0, 80.0, 42.0);
const POPUP_NO: Rect = Rect::new(230.0, 320.0, 80.0, 42.0);

/// A point in logical screen coordinates.
pub type Point = (f32, f32);

/// Axis-aligned rectangle in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Point-in-rectangle with inclusive edges.
    pub fn contains(&self, (px, py): Point) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    pub fn center(&self) -> Point {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Every interactive element, by semantic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    StudyHourUp,
    StudyHourDown,
    StudyMinuteUp,
    StudyMinuteDown,
    StudySecondUp,
    StudySecondDown,
    BreakMinuteUp,
    BreakMinuteDown,
    BreakSecondUp,
    BreakSecondDown,
    MinutesInput,
    Start,
    TimerBack,
    TimerReset,
    TimerBreak,
    BreakBack,
    BreakEnd,
    PopupYes,
    PopupNo,
}

impl Region {
    /// Which screen a region belongs to. Confirmation popups are modal, so
    /// only their own buttons hit while one is up.
    fn active_in(self, mode: Mode) -> bool {
        use Region::*;
        match self {
            StudyHourUp | StudyHourDown | StudyMinuteUp | StudyMinuteDown | StudySecondUp
            | StudySecondDown | BreakMinuteUp | BreakMinuteDown | BreakSecondUp
            | BreakSecondDown | MinutesInput | Start => mode == Mode::Setup,
            TimerBack | TimerReset | TimerBreak => mode == Mode::Timer,
            BreakBack | BreakEnd => mode == Mode::Break,
            PopupYes | PopupNo => matches!(mode, Mode::ConfirmReset | Mode::ConfirmBack),
        }
    }
}

/// Named rectangles for every interactive element, computed once from the
/// layout constants above and immutable afterwards.
#[derive(Debug)]
pub struct LayoutTable {
    entries: Vec<(Region, Rect)>,
}

impl LayoutTable {
    pub fn new() -> Self {
        let arrow = |cx: f32, y: f32| Rect::new(cx - ARROW_W / 2.0, y, ARROW_W, ARROW_H);
        let spread = |i: f32, w: f32| (SCREEN_W - 3.0 * w) / 4.0 * (i + 1.0) + w * i;

        let entries = vec![
            (Region::StudyHourUp, arrow(STUDY_COLUMNS[0], STUDY_UP_Y)),
            (Region::StudyHourDown, arrow(STUDY_COLUMNS[0], STUDY_DOWN_Y)),
            (Region::StudyMinuteUp, arrow(STUDY_COLUMNS[1], STUDY_UP_Y)),
            (
                Region::StudyMinuteDown,
                arrow(STUDY_COLUMNS[1], STUDY_DOWN_Y),
            ),
            (Region::StudySecondUp, arrow(STUDY_COLUMNS[2], STUDY_UP_Y)),
            (
                Region::StudySecondDown,
                arrow(STUDY_COLUMNS[2], STUDY_DOWN_Y),
            ),
            (Region::BreakMinuteUp, arrow(BREAK_COLUMNS[0], BREAK_UP_Y)),
            (
                Region::BreakMinuteDown,
                arrow(BREAK_COLUMNS[0], BREAK_DOWN_Y),
            ),
            (Region::BreakSecondUp, arrow(BREAK_COLUMNS[1], BREAK_UP_Y)),
            (
                Region::BreakSecondDown,
                arrow(BREAK_COLUMNS[1], BREAK_DOWN_Y),
            ),
            (Region::MinutesInput, INPUT_BOX),
            (Region::Start, START_BUTTON),
            (
                Region::TimerBack,
                Rect::new(spread(0.0, TIMER_BUTTON_W), TIMER_BUTTON_Y, TIMER_BUTTON_W, TIMER_BUTTON_H),
            ),
            (
                Region::TimerReset,
                Rect::new(spread(1.0, TIMER_BUTTON_W), TIMER_BUTTON_Y, TIMER_BUTTON_W, TIMER_BUTTON_H),
            ),
            (
                Region::TimerBreak,
                Rect::new(spread(2.0, TIMER_BUTTON_W), TIMER_BUTTON_Y, TIMER_BUTTON_W, TIMER_BUTTON_H),
            ),
            (
                Region::BreakBack,
                Rect::new(
                    SCREEN_W / 2.0 - BREAK_BUTTON_W - 10.0,
                    BREAK_BUTTON_Y,
                    BREAK_BUTTON_W,
                    BREAK_BUTTON_H,
                ),
            ),
            (
                Region::BreakEnd,
                Rect::new(SCREEN_W / 2.0 + 10.0, BREAK_BUTTON_Y, BREAK_BUTTON_W, BREAK_BUTTON_H),
            ),
            (Region::PopupYes, POPUP_YES),
            (Region::PopupNo, POPUP_NO),
        ];

        Self { entries }
    }

    pub fn rect(&self, region: Region) -> Rect {
        self.entries
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, rect)| *rect)
            .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Resolve a pointer position to the region it lands in, restricted to
    /// the regions active in `mode`. Misses are a no-op for the caller.
    pub fn hit_test(&self, mode: Mode, point: Point) -> Option<Region> {
        self.entries
            .iter()
            .find(|(region, rect)| region.active_in(mode) && rect.contains(point))
            .map(|(region, _)| *region)
    }

    /// Whether a point falls inside the halo circle.
    pub fn ring_hit_test(&self, (px, py): Point) -> bool {
        let (dx, dy) = (px - HALO_CX, py - HALO_CY);
        let radius = HALO_DIAMETER / 2.0;

        dx * dx + dy * dy <= radius * radius
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains((10.0, 20.0)));
        assert!(r.contains((40.0, 60.0)));
        assert!(!r.contains((40.1, 60.0)));
        assert!(!r.contains((9.9, 20.0)));
    }

    #[test]
    fn hit_test_resolves_start_button() {
        let table = LayoutTable::new();
        let center = table.rect(Region::Start).center();
        assert_eq!(table.hit_test(Mode::Setup, center), Some(Region::Start));
    }

    #[test]
    fn hit_test_boundary_pixel_counts() {
        let table = LayoutTable::new();
        let r = table.rect(Region::Start);
        assert_eq!(
            table.hit_test(Mode::Setup, (r.x, r.y)),
            Some(Region::Start)
        );
        assert_eq!(
            table.hit_test(Mode::Setup, (r.x + r.w, r.y + r.h)),
            Some(Region::Start)
        );
    }

    #[test]
    fn hit_test_outside_every_region_misses() {
        let table = LayoutTable::new();
        for mode in [
            Mode::Setup,
            Mode::Timer,
            Mode::Break,
            Mode::ConfirmReset,
            Mode::ConfirmBack,
        ] {
            assert_eq!(table.hit_test(mode, (1.0, 1.0)), None);
            assert_eq!(table.hit_test(mode, (399.0, 1.0)), None);
        }
    }

    #[test]
    fn hit_test_respects_mode() {
        let table = LayoutTable::new();
        // Setup regions are dead while the timer runs. The minutes box sits
        // clear of every timer button, so a miss here is mode-driven, not
        // spatial.
        let input = table.rect(Region::MinutesInput).center();
        assert_eq!(table.hit_test(Mode::Timer, input), None);

        let reset = table.rect(Region::TimerReset).center();
        assert_eq!(table.hit_test(Mode::Timer, reset), Some(Region::TimerReset));
        assert_eq!(table.hit_test(Mode::Setup, reset), None);
    }

    #[test]
    fn popup_buttons_only_hit_in_confirm_modes() {
        let table = LayoutTable::new();
        let yes = table.rect(Region::PopupYes).center();
        assert_eq!(
            table.hit_test(Mode::ConfirmReset, yes),
            Some(Region::PopupYes)
        );
        assert_eq!(
            table.hit_test(Mode::ConfirmBack, yes),
            Some(Region::PopupYes)
        );
        assert_eq!(table.hit_test(Mode::Timer, yes), None);
    }

    #[test]
    fn popup_is_modal_over_timer_buttons() {
        let table = LayoutTable::new();
        let back = table.rect(Region::TimerBack).center();
        // While a confirmation is up, the buttons underneath do not hit.
        assert_eq!(table.hit_test(Mode::ConfirmBack, back), None);
    }

    #[test]
    fn ring_hit_test_radius_is_inclusive() {
        let table = LayoutTable::new();
        assert!(table.ring_hit_test((HALO_CX, HALO_CY)));
        assert!(table.ring_hit_test((HALO_CX + 150.0, HALO_CY)));
        assert!(!table.ring_hit_test((HALO_CX + 150.5, HALO_CY)));
        assert!(!table.ring_hit_test((0.0, 0.0)));
    }

    #[test]
    fn timer_buttons_are_equally_spaced_and_disjoint() {
        let table = LayoutTable::new();
        let back = table.rect(Region::TimerBack);
        let reset = table.rect(Region::TimerReset);
        let brk = table.rect(Region::TimerBreak);

        let gap1 = reset.x - (back.x + back.w);
        let gap2 = brk.x - (reset.x + reset.w);
        assert!((gap1 - gap2).abs() < 0.01);
        assert!(gap1 > 0.0);
    }

    #[test]
    fn setup_regions_are_pairwise_disjoint() {
        let table = LayoutTable::new();
        let setup: Vec<(Region, Rect)> = table
            .entries
            .iter()
            .filter(|(r, _)| r.active_in(Mode::Setup))
            .cloned()
            .collect();
        for (i, (ra, a)) in setup.iter().enumerate() {
            for (rb, b) in setup.iter().skip(i + 1) {
                let overlap = a.x <= b.x + b.w
                    && b.x <= a.x + a.w
                    && a.y <= b.y + b.h
                    && b.y <= a.y + a.h;
                assert!(!overlap, "{ra:?} overlaps {rb:?}");
            }
        }
    }
}

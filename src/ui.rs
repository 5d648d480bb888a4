use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{self, Point, SCREEN_H, SCREEN_W};
use crate::view::{Button, DrawList, Halo, Label, Triangle, TriangleDir};

const HALO_REMAINING: Color = Color::Cyan;
const HALO_ELAPSED: Color = Color::DarkGray;
const ARC_STEPS: usize = 720;

/// Draws a [`DrawList`] scaled onto whatever area the terminal provides.
/// Stateless apart from the glyph choice; all layout decisions were made in
/// logical coordinates upstream.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    ascii: bool,
}

impl Renderer {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    pub fn render(&self, list: &DrawList, frame: &mut Frame) {
        let area = frame.area();
        if area.width < 10 || area.height < 10 {
            return;
        }

        if let Some(halo) = &list.halo {
            self.render_halo(halo, area, frame);
        }
        for tri in &list.triangles {
            self.render_triangle(tri, area, frame);
        }
        for btn in &list.buttons {
            self.render_button(btn, area, frame, false);
        }
        for label in &list.labels {
            self.render_label(label, area, frame);
        }
        if let Some(popup) = &list.popup {
            let rect = scale_rect(area, popup.rect);
            frame.render_widget(Clear, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow));
            frame.render_widget(block, rect);
            self.render_label(
                &Label {
                    x: popup.rect.x + popup.rect.w / 2.0,
                    y: popup.rect.y + 30.0,
                    content: popup.prompt.clone(),
                    emphasized: true,
                },
                area,
                frame,
            );
            self.render_button(&popup.yes, area, frame, true);
            self.render_button(&popup.no, area, frame, true);
        }
    }

    fn render_halo(&self, halo: &Halo, area: Rect, frame: &mut Frame) {
        let marker = if self.ascii { Marker::Dot } else { Marker::Braille };
        let radius = f64::from(halo.diameter) / 2.0;
        let (cx, cy) = (f64::from(halo.cx), f64::from(halo.cy));

        let mut remaining: Vec<(f64, f64)> = Vec::with_capacity(ARC_STEPS);
        let mut elapsed: Vec<(f64, f64)> = Vec::with_capacity(ARC_STEPS);
        for i in 0..ARC_STEPS {
            let t = i as f64 / ARC_STEPS as f64;
            // start at twelve o'clock, sweep clockwise
            let theta = std::f64::consts::FRAC_PI_2 - t * std::f64::consts::TAU;
            let x = cx + radius * theta.cos();
            // canvas y grows upward, logical y downward
            let y = f64::from(SCREEN_H) - (cy - radius * theta.sin());
            if t < halo.fraction {
                remaining.push((x, y));
            } else {
                elapsed.push((x, y));
            }
        }

        let canvas = Canvas::default()
            .marker(marker)
            .x_bounds([0.0, f64::from(SCREEN_W)])
            .y_bounds([0.0, f64::from(SCREEN_H)])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &elapsed,
                    color: HALO_ELAPSED,
                });
                ctx.draw(&Points {
                    coords: &remaining,
                    color: HALO_REMAINING,
                });
            });
        frame.render_widget(canvas, area);
    }

    fn render_button(&self, btn: &Button, area: Rect, frame: &mut Frame, clear: bool) {
        let rect = scale_rect(area, btn.rect);
        if clear {
            frame.render_widget(Clear, rect);
        }

        let border_style = if btn.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let label = Paragraph::new(Span::styled(
            btn.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(label, centered_line(inner));
    }

    fn render_triangle(&self, tri: &Triangle, area: Rect, frame: &mut Frame) {
        let glyph = match (tri.dir, self.ascii) {
            (TriangleDir::Up, false) => "▲",
            (TriangleDir::Down, false) => "▼",
            (TriangleDir::Up, true) => "^",
            (TriangleDir::Down, true) => "v",
        };
        let rect = scale_rect(area, tri.rect);
        let widget = Paragraph::new(Span::styled(
            glyph,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(widget, centered_line(rect));
    }

    fn render_label(&self, label: &Label, area: Rect, frame: &mut Frame) {
        let style = if label.emphasized {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let width = label.content.width() as u16;
        let (col, row) = logical_to_cell(area, (label.x, label.y));
        let x = col.saturating_sub(width / 2).max(area.x);
        let rect = Rect {
            x,
            y: row.min(area.y + area.height.saturating_sub(1)),
            width: width.min(area.width),
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(label.content.clone(), style)), rect);
    }
}

/// Middle row of a (possibly multi-row) rect, for single-line centering.
fn centered_line(rect: Rect) -> Rect {
    Rect {
        x: rect.x,
        y: rect.y + rect.height / 2,
        width: rect.width,
        height: 1.min(rect.height),
    }
}

/// Scale a logical rectangle onto the drawable terminal area.
pub fn scale_rect(area: Rect, r: layout::Rect) -> Rect {
    let sx = f32::from(area.width) / SCREEN_W;
    let sy = f32::from(area.height) / SCREEN_H;

    let x = area.x + (r.x * sx).round() as u16;
    let y = area.y + (r.y * sy).round() as u16;
    let width = ((r.w * sx).round() as u16).max(1);
    let height = ((r.h * sy).round() as u16).max(1);

    Rect {
        x: x.min(area.x + area.width.saturating_sub(1)),
        y: y.min(area.y + area.height.saturating_sub(1)),
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Terminal cell → logical point, hitting the cell's center so boundary
/// cells resolve consistently with the inclusive region edges.
pub fn cell_to_logical(area: Rect, col: u16, row: u16) -> Point {
    let x = (f32::from(col.saturating_sub(area.x)) + 0.5) / f32::from(area.width.max(1)) * SCREEN_W;
    let y =
        (f32::from(row.saturating_sub(area.y)) + 0.5) / f32::from(area.height.max(1)) * SCREEN_H;
    (x, y)
}

/// Logical point → terminal cell (inverse of [`cell_to_logical`] up to
/// rounding).
pub fn logical_to_cell(area: Rect, (x, y): Point) -> (u16, u16) {
    let col = area.x + (x / SCREEN_W * f32::from(area.width)) as u16;
    let row = area.y + (y / SCREEN_H * f32::from(area.height)) as u16;
    (
        col.min(area.x + area.width.saturating_sub(1)),
        row.min(area.y + area.height.saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_mapping_round_trips_through_scaling() {
        let area = Rect::new(0, 0, 80, 30);
        for (col, row) in [(0u16, 0u16), (40, 15), (79, 29)] {
            let p = cell_to_logical(area, col, row);
            let (c, r) = logical_to_cell(area, p);
            assert_eq!((c, r), (col, row));
        }
    }

    #[test]
    fn cell_mapping_covers_logical_space() {
        let area = Rect::new(2, 1, 80, 30);
        let (x0, y0) = cell_to_logical(area, 2, 1);
        let (x1, y1) = cell_to_logical(area, 81, 30);
        assert!(x0 > 0.0 && y0 > 0.0);
        assert!(x1 < SCREEN_W && y1 < SCREEN_H);
        assert!(x1 > x0 && y1 > y0);
    }

    #[test]
    fn scale_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 60, 24);
        let r = scale_rect(area, layout::Rect::new(130.0, 500.0, 140.0, 56.0));
        assert!(r.x + r.width <= 60);
        assert!(r.y + r.height <= 24);
        assert!(r.width >= 1 && r.height >= 1);
    }

    #[test]
    fn scaled_button_center_hits_its_own_region() {
        use crate::layout::{LayoutTable, Region};
        use crate::session::Mode;

        let area = Rect::new(0, 0, 100, 40);
        let table = LayoutTable::new();
        for region in [Region::Start, Region::MinutesInput] {
            let rect = scale_rect(area, table.rect(region));
            let center_col = rect.x + rect.width / 2;
            let center_row = rect.y + rect.height / 2;
            let p = cell_to_logical(area, center_col, center_row);
            assert_eq!(table.hit_test(Mode::Setup, p), Some(region), "{region:?}");
        }
    }
}

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Points},
    widgets::Paragraph,
    Frame,
};

use crate::error::Result;
use crate::fmt::money;
use crate::summary::SpendingSummary;

const HEADER_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

const SLICE_COLORS: [Color; 6] = [
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

// ---------------------------------------------------------------------------
// Slice computation
// ---------------------------------------------------------------------------

/// One wedge of the pie: a category's share of the summed absolute totals.
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: &'static str,
    /// Absolute value charted; the sign convention never flips proportions.
    pub value: f64,
    pub pct: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub color: Color,
}

/// Compute chart slices from a summary. Zero-valued categories are dropped;
/// an empty result means there is nothing to chart.
pub fn pie_slices(summary: &SpendingSummary) -> Vec<PieSlice> {
    let total: f64 = summary.totals.iter().map(|t| t.total.abs()).sum();
    if total == 0.0 {
        return Vec::new();
    }
    let mut slices = Vec::new();
    let mut angle = 0.0f64;
    for (i, t) in summary.totals.iter().enumerate() {
        let value = t.total.abs();
        if value == 0.0 {
            continue;
        }
        let sweep = value / total * 360.0;
        slices.push(PieSlice {
            label: t.category.name(),
            value,
            pct: value / total * 100.0,
            start_deg: angle,
            end_deg: angle + sweep,
            color: SLICE_COLORS[i % SLICE_COLORS.len()],
        });
        angle += sweep;
    }
    slices
}

/// Sample a filled wedge as canvas points: one-degree steps along the arc,
/// radial steps toward the center.
fn slice_points(slice: &PieSlice) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let mut deg = slice.start_deg;
    while deg < slice.end_deg {
        let rad = deg.to_radians();
        for step in 0..=24 {
            let r = step as f64 / 24.0;
            coords.push((r * rad.cos(), r * rad.sin()));
        }
        deg += 1.0;
    }
    coords
}

// ---------------------------------------------------------------------------
// Interactive view
// ---------------------------------------------------------------------------

struct PieChartView {
    slices: Vec<PieSlice>,
    currency: String,
}

impl PieChartView {
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, body_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(" Spending by Category", HEADER_STYLE)),
            title_area,
        );

        let [pie_area, legend_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(self.legend_width()),
        ])
        .areas(body_area);

        self.draw_pie(frame, pie_area);
        self.draw_legend(frame, legend_area);

        frame.render_widget(
            Paragraph::new(" q=close").style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn draw_pie(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Terminal cells are roughly twice as tall as wide; widen the x span
        // so the unit disc renders round.
        let hy = 1.2f64;
        let hx = (hy * area.width as f64 / (2.0 * area.height.max(1) as f64)).max(hy / 2.0);
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-hx, hx])
            .y_bounds([-hy, hy])
            .paint(|ctx| {
                for slice in &self.slices {
                    let coords = slice_points(slice);
                    ctx.draw(&Points {
                        coords: &coords,
                        color: slice.color,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }

    fn draw_legend(&self, frame: &mut Frame, area: Rect) {
        let name_w = self.slices.iter().map(|s| s.label.len()).max().unwrap_or(8);
        let mut lines: Vec<Line> = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Legend",
                Style::new().add_modifier(Modifier::BOLD),
            )),
        ];
        for slice in &self.slices {
            lines.push(Line::from(vec![
                Span::styled("\u{25a0} ", Style::default().fg(slice.color)),
                Span::raw(format!(
                    "{:<name_w$}  {:>10}  {:>5.1}%",
                    slice.label,
                    money(slice.value, &self.currency),
                    slice.pct,
                )),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn legend_width(&self) -> u16 {
        let name_w = self.slices.iter().map(|s| s.label.len()).max().unwrap_or(8);
        (name_w + 26) as u16
    }
}

/// Render the pie chart full-screen until the user dismisses it with q, Esc,
/// or Enter. Presentation only; the summary is untouched.
pub fn show_pie_chart(summary: &SpendingSummary, currency: &str) -> Result<()> {
    let slices = pie_slices(summary);
    if slices.is_empty() {
        println!("No spending data to chart.");
        return Ok(());
    }
    let view = PieChartView {
        slices,
        currency: currency.to_string(),
    };

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    break Ok(());
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}

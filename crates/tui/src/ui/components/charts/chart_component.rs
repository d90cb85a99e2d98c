//! Dashboard charts.
//!
//! Maps the loaded metrics records into a monthly revenue bar chart and an
//! occupancy line chart. The chart widgets are an opaque sink here: this
//! component only shapes the series and hands them over. Without a usable
//! feed the whole panel degrades to a placeholder note.

use landlord_types::metrics::{PeriodRecord, monthly_series};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;

/// Component for the dashboard metrics panel.
#[derive(Debug, Default)]
pub struct ChartComponent;

impl ChartComponent {
    fn render_revenue_bars(frame: &mut Frame, area: Rect, records: &[PeriodRecord]) {
        let bars: Vec<(&str, u64)> = records
            .iter()
            .map(|record| (record.month.as_str(), record.revenue.max(0.0) as u64))
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(Span::styled("Revenue by month", theme::title_style()))
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(false)),
            )
            .data(bars.as_slice())
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme::ACCENT))
            .value_style(theme::text_muted());
        frame.render_widget(chart, area);
    }

    fn render_occupancy_line(frame: &mut Frame, area: Rect, records: &[PeriodRecord]) {
        let series = monthly_series(records);
        let Some(occupancy) = series.iter().find(|series| series.label == "occupancy") else {
            return;
        };
        let max_x = (records.len().saturating_sub(1)).max(1) as f64;
        let datasets = vec![
            Dataset::default()
                .name("Occupancy %")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::OK))
                .data(&occupancy.points),
        ];
        let first_month = records.first().map(|record| record.month.clone()).unwrap_or_default();
        let last_month = records.last().map(|record| record.month.clone()).unwrap_or_default();
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(Span::styled("Occupancy", theme::title_style()))
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(false)),
            )
            .x_axis(
                Axis::default()
                    .style(theme::text_muted())
                    .bounds([0.0, max_x])
                    .labels([first_month, last_month]),
            )
            .y_axis(
                Axis::default()
                    .style(theme::text_muted())
                    .bounds([0.0, 100.0])
                    .labels(["0", "50", "100"]),
            );
        frame.render_widget(chart, area);
    }
}

impl Component for ChartComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(records) = app.charts.records() else {
            let placeholder = Paragraph::new("Metrics feed unavailable — charts skipped.")
                .style(theme::text_muted())
                .block(
                    Block::default()
                        .title(Span::styled("Portfolio metrics", theme::title_style()))
                        .borders(Borders::ALL)
                        .border_style(theme::border_style(false)),
                );
            frame.render_widget(placeholder, area);
            return;
        };

        let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);
        Self::render_revenue_bars(frame, columns[0], records);
        Self::render_occupancy_line(frame, columns[1], records);
    }
}

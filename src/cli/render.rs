use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write;

use crate::trip::{ChartBar, MapPoint, Presentation};

const BAR_WIDTH: usize = 30;
const MISSING: &str = "—";

/// Terminal rendering: day sections, the hotspot table, then the budget
/// analysis with its bar chart and raw cost table.
pub(crate) fn render_text(view: &Presentation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, view);
    out
}

pub(crate) fn render_json(view: &Presentation) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize itinerary views")
}

fn write_text(out: &mut String, view: &Presentation) -> std::fmt::Result {
    writeln!(out, "{}", view.title.bold().cyan())?;
    writeln!(out)?;

    writeln!(out, "{}", "Itinerary".bold().underline())?;
    for section in &view.sections {
        writeln!(out)?;
        writeln!(out, "▸ {}", section.heading.bold())?;
        for entry in &section.entries {
            writeln!(out, "  • {}", entry.name.bold())?;
            if !entry.description.is_empty() {
                writeln!(out, "    {}", entry.description)?;
            }
            writeln!(
                out,
                "    {}",
                format!("Estimated Cost: {}", format_usd(entry.cost)).dimmed()
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{}", "Trip Hotspots".bold().underline())?;
    write_points(out, &view.points)?;
    writeln!(out)?;

    writeln!(out, "{}", "Estimated Budget Analysis".bold().underline())?;
    writeln!(
        out,
        "{}",
        format!("Total Estimated Trip Cost: ${:.2} USD", view.total_cost).green()
    )?;
    writeln!(out)?;
    write_chart(out, &view.chart)?;
    writeln!(out)?;
    write_cost_table(out, &view.chart)
}

fn write_points(out: &mut String, points: &[MapPoint]) -> std::fmt::Result {
    if points.is_empty() {
        return writeln!(out, "  (no activities to plot)");
    }

    let name_width = points
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Activity".len());

    writeln!(
        out,
        "  {:<4} | {:<name_width$} | {:>10} | {:>10}",
        "Day", "Activity", "Latitude", "Longitude"
    )?;
    for point in points {
        let day = point
            .day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        writeln!(
            out,
            "  {:<4} | {:<name_width$} | {:>10} | {:>10}",
            day,
            point.name,
            format_coordinate(point.latitude),
            format_coordinate(point.longitude)
        )?;
    }
    Ok(())
}

fn write_chart(out: &mut String, bars: &[ChartBar]) -> std::fmt::Result {
    if bars.is_empty() {
        return writeln!(out, "  (no daily costs)");
    }

    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let max = bars.iter().map(|b| b.cost).fold(0.0_f64, f64::max);
    for bar in bars {
        let fill = bar_length(bar.cost, max);
        writeln!(
            out,
            "  {:<label_width$} | {} {}",
            bar.label,
            "█".repeat(fill).blue(),
            format_usd(bar.cost)
        )?;
    }
    Ok(())
}

fn write_cost_table(out: &mut String, bars: &[ChartBar]) -> std::fmt::Result {
    let label_width = bars
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0)
        .max("Day".len());

    writeln!(out, "  {:<label_width$} | Estimated Cost (USD)", "Day")?;
    for bar in bars {
        writeln!(out, "  {:<label_width$} | {:.2}", bar.label, bar.cost)?;
    }
    Ok(())
}

/// Bar length scaled so the largest day fills `BAR_WIDTH`. Non-positive and
/// non-finite costs draw nothing.
fn bar_length(cost: f64, max: f64) -> usize {
    if !(cost.is_finite() && max.is_finite()) || cost <= 0.0 || max <= 0.0 {
        return 0;
    }
    ((cost / max) * BAR_WIDTH as f64).round() as usize
}

fn format_usd(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

fn format_coordinate(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::parsing::parse_itinerary;
    use crate::trip::presentation::present;
    use crate::trip::projection::project;

    const SAMPLE: &str = r#"{
        "tripName": "Kyoto Time Travel",
        "itinerary": [
            {"day": 1, "theme": "Shrines", "activities": [
                {"name": "Fushimi Inari", "description": "Torii gates.", "latitude": 34.9671, "longitude": 135.7727, "estimated_cost_usd": 10},
                {"name": "Sake tasting", "latitude": 34.9314, "estimated_cost_usd": 20}
            ]},
            {"day": 2, "theme": "Gion", "activities": [
                {"name": "Kaiseki lunch", "estimated_cost_usd": 15}
            ]}
        ]
    }"#;

    fn sample_view() -> Presentation {
        let itinerary = parse_itinerary(SAMPLE).unwrap();
        let projection = project(&itinerary);
        present(&itinerary, &projection)
    }

    #[test]
    fn text_view_has_every_surface() {
        colored::control::set_override(false);
        let text = render_text(&sample_view());

        assert!(text.starts_with("Kyoto Time Travel\n"));
        assert!(text.contains("▸ Day 1: Shrines"));
        assert!(text.contains("  • Fushimi Inari\n    Torii gates.\n    Estimated Cost: $10"));
        assert!(text.contains("Trip Hotspots"));
        assert!(text.contains("34.9671"));
        assert!(text.contains("Total Estimated Trip Cost: $45.00 USD"));
        assert!(text.contains("Day   | Estimated Cost (USD)"));
        assert!(text.contains("Day 1 | 30.00"));
        assert!(text.contains("Day 2 | 15.00"));
    }

    #[test]
    fn missing_coordinates_show_a_dash() {
        colored::control::set_override(false);
        let text = render_text(&sample_view());

        let sake = text
            .lines()
            .find(|line| line.contains("Sake tasting") && line.contains('|'))
            .unwrap();
        assert!(sake.contains("34.9314"));
        assert!(sake.trim_end().ends_with(MISSING));

        let kaiseki = text
            .lines()
            .find(|line| line.contains("Kaiseki lunch") && line.contains('|'))
            .unwrap();
        assert_eq!(kaiseki.matches(MISSING).count(), 2);
    }

    #[test]
    fn bars_scale_to_the_largest_day() {
        assert_eq!(bar_length(30.0, 30.0), BAR_WIDTH);
        assert_eq!(bar_length(15.0, 30.0), BAR_WIDTH / 2);
        assert_eq!(bar_length(0.0, 30.0), 0);
        assert_eq!(bar_length(-5.0, 30.0), 0);
        assert_eq!(bar_length(5.0, 0.0), 0);
        assert_eq!(bar_length(f64::NAN, 30.0), 0);
    }

    #[test]
    fn empty_itinerary_still_renders() {
        colored::control::set_override(false);
        let itinerary = parse_itinerary("{}").unwrap();
        let projection = project(&itinerary);
        let text = render_text(&present(&itinerary, &projection));

        assert!(text.contains("Your Custom Itinerary"));
        assert!(text.contains("(no activities to plot)"));
        assert!(text.contains("Total Estimated Trip Cost: $0.00 USD"));
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(10.0), "$10");
        assert_eq!(format_usd(6.5), "$6.50");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn json_view_is_the_serialized_presentation() {
        let json = render_json(&sample_view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Kyoto Time Travel");
        assert_eq!(value["total_cost"], 45.0);
        assert_eq!(value["chart"][1]["label"], "Day 2");
        assert_eq!(value["points"][2]["latitude"], serde_json::Value::Null);
    }
}

use serde::Serialize;

use super::itinerary::Itinerary;
use super::projection::Projection;

pub const DEFAULT_TITLE: &str = "Your Custom Itinerary";
pub const UNNAMED_ACTIVITY: &str = "Unnamed activity";
/// Marker size for every map point.
pub const MAP_POINT_SIZE: f64 = 20.0;

/// Everything the display surfaces need for one itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub title: String,
    pub sections: Vec<DaySection>,
    pub points: Vec<MapPoint>,
    pub chart: Vec<ChartBar>,
    pub total_cost: f64,
}

/// One collapsible day of the text view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySection {
    pub heading: String,
    pub entries: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub name: String,
    pub description: String,
    pub cost: f64,
}

/// A plotted activity. Coordinates are passed through unchecked; `None`
/// marks a coordinate the model left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub day: Option<u32>,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub cost: f64,
}

/// Shapes the itinerary and its projection into the three views.
pub fn present(itinerary: &Itinerary, projection: &Projection<'_>) -> Presentation {
    let title = itinerary
        .trip_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let sections = itinerary
        .days
        .iter()
        .map(|day| {
            let day_label = day
                .day
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string());
            DaySection {
                heading: format!("Day {}: {}", day_label, day.theme.as_deref().unwrap_or("")),
                entries: day
                    .activities
                    .iter()
                    .map(|activity| ActivityEntry {
                        name: display_name(activity.name.as_deref()),
                        description: activity.description.clone().unwrap_or_default(),
                        cost: activity.estimated_cost_usd,
                    })
                    .collect(),
            }
        })
        .collect();

    let points = projection
        .activities
        .iter()
        .map(|projected| MapPoint {
            day: projected.day,
            name: display_name(projected.activity.name.as_deref()),
            latitude: projected.activity.latitude,
            longitude: projected.activity.longitude,
            size: MAP_POINT_SIZE,
        })
        .collect();

    let chart = projection
        .costs
        .days
        .iter()
        .map(|entry| ChartBar {
            label: entry.label.clone(),
            cost: entry.cost,
        })
        .collect();

    Presentation {
        title,
        sections,
        points,
        chart,
        total_cost: projection.costs.total,
    }
}

fn display_name(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_ACTIVITY)
        .to_string()
}

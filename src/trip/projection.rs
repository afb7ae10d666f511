use serde::Serialize;

use super::itinerary::{Activity, Itinerary};

/// An activity tagged with the number of the day it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedActivity<'a> {
    pub day: Option<u32>,
    pub activity: &'a Activity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCost {
    pub day: Option<u32>,
    pub label: String,
    pub cost: f64,
}

/// Per-day subtotals in itinerary order plus their grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostSummary {
    pub days: Vec<DayCost>,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection<'a> {
    pub activities: Vec<ProjectedActivity<'a>>,
    pub costs: CostSummary,
}

/// Flattens an itinerary into its activity list and cost summary in one pass.
///
/// Output order is input order. Days are neither sorted nor merged: two
/// entries for the same day number produce two cost rows.
pub fn project(itinerary: &Itinerary) -> Projection<'_> {
    let mut activities = Vec::new();
    let mut costs = CostSummary::default();

    for day in &itinerary.days {
        let mut subtotal = 0.0;
        for activity in &day.activities {
            activities.push(ProjectedActivity {
                day: day.day,
                activity,
            });
            subtotal += activity.estimated_cost_usd;
        }
        costs.total += subtotal;
        costs.days.push(DayCost {
            day: day.day,
            label: day.label(),
            cost: subtotal,
        });
    }

    Projection { activities, costs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::itinerary::DayPlan;

    fn activity(name: &str, cost: f64) -> Activity {
        Activity {
            name: Some(name.to_string()),
            estimated_cost_usd: cost,
            ..Activity::default()
        }
    }

    fn day(number: Option<u32>, costs: &[f64]) -> DayPlan {
        DayPlan {
            day: number,
            theme: None,
            activities: costs
                .iter()
                .enumerate()
                .map(|(idx, cost)| activity(&format!("stop-{idx}"), *cost))
                .collect(),
        }
    }

    fn itinerary(days: Vec<DayPlan>) -> Itinerary {
        Itinerary {
            days,
            ..Itinerary::default()
        }
    }

    #[test]
    fn sums_per_day_and_total() {
        let input = itinerary(vec![
            day(Some(1), &[10.0, 20.0]),
            day(Some(2), &[15.0, 5.0]),
            day(Some(3), &[30.0, 0.0]),
        ]);
        let projection = project(&input);

        let labels: Vec<_> = projection.costs.days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Day 1", "Day 2", "Day 3"]);
        let subtotals: Vec<_> = projection.costs.days.iter().map(|d| d.cost).collect();
        assert_eq!(subtotals, [30.0, 20.0, 30.0]);
        assert_eq!(projection.costs.total, 80.0);
        assert_eq!(projection.activities.len(), 6);
    }

    #[test]
    fn total_matches_sum_of_days() {
        let input = itinerary(vec![
            day(Some(1), &[0.1, 0.2, 0.3]),
            day(Some(2), &[1e6, 0.7]),
            day(None, &[]),
            day(Some(4), &[3.333, 2.5, 19.99]),
        ]);
        let projection = project(&input);
        let summed: f64 = projection.costs.days.iter().map(|d| d.cost).sum();
        assert_eq!(projection.costs.total, summed);
    }

    #[test]
    fn empty_itinerary_projects_to_nothing() {
        let empty = Itinerary::default();
        let projection = project(&empty);
        assert!(projection.activities.is_empty());
        assert!(projection.costs.days.is_empty());
        assert_eq!(projection.costs.total, 0.0);
    }

    #[test]
    fn preserves_day_then_activity_order() {
        let input = itinerary(vec![
            day(Some(1), &[1.0, 2.0]),
            day(Some(2), &[3.0]),
            day(Some(3), &[4.0, 5.0, 6.0]),
        ]);
        let projection = project(&input);

        let days: Vec<_> = projection.activities.iter().map(|a| a.day).collect();
        assert_eq!(
            days,
            [Some(1), Some(1), Some(2), Some(3), Some(3), Some(3)]
        );
        assert!(days.windows(2).all(|pair| pair[0] <= pair[1]));

        let costs: Vec<_> = projection
            .activities
            .iter()
            .map(|a| a.activity.estimated_cost_usd)
            .collect();
        assert_eq!(costs, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn unsorted_days_keep_input_order() {
        let input = itinerary(vec![day(Some(3), &[1.0]), day(Some(1), &[2.0])]);
        let projection = project(&input);
        let labels: Vec<_> = projection.costs.days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Day 3", "Day 1"]);
    }

    #[test]
    fn duplicate_day_numbers_are_kept_separately() {
        let input = itinerary(vec![day(Some(1), &[10.0]), day(Some(1), &[5.0, 5.0])]);
        let projection = project(&input);

        assert_eq!(projection.costs.days.len(), 2);
        assert_eq!(projection.costs.days[0].cost, 10.0);
        assert_eq!(projection.costs.days[1].cost, 10.0);
        assert!(projection.costs.days.iter().all(|d| d.label == "Day 1"));
        assert_eq!(projection.costs.total, 20.0);
        assert_eq!(projection.activities.len(), 3);
    }

    #[test]
    fn missing_cost_contributes_zero() {
        let raw = r#"{"itinerary": [{"day": 1, "activities": [
            {"name": "Free walk"},
            {"name": "Museum", "estimated_cost_usd": 12.5}
        ]}]}"#;
        let input: Itinerary = serde_json::from_str(raw).unwrap();
        let projection = project(&input);

        assert_eq!(projection.costs.days[0].cost, 12.5);
        assert_eq!(projection.costs.total, 12.5);
    }
}

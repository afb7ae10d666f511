//! Shape of the itinerary the model is asked to return.
//!
//! Every field is optional on the wire. Defaults are applied here, at decode
//! time, so code downstream of the parser never has to guess about missing
//! keys: absent lists are empty, absent costs are zero, and absent text or
//! numbers stay `None`. Day numbers and the trip length are read leniently: a
//! numeric string counts, anything else that is not a whole non-negative
//! number becomes `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(rename = "itinerary", default, deserialize_with = "null_as_default")]
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayPlan {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub day: Option<u32>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Not range-checked; rendered exactly as the model returned it.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_cost_usd: f64,
}

impl DayPlan {
    /// Display label used by the cost summary and chart.
    pub fn label(&self) -> String {
        match self.day {
            Some(day) => format!("Day {day}"),
            None => "Day ?".to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(number.and_then(|n| u32::try_from(n).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_itinerary() {
        let raw = r#"{
            "tripName": "Temples & Tastes",
            "destination": "Kyoto",
            "duration": 2,
            "budget": "Moderate",
            "interests": ["History", "Food"],
            "itinerary": [
                {
                    "day": 1,
                    "theme": "Eastern Higashiyama",
                    "activities": [
                        {
                            "name": "Kiyomizu-dera",
                            "description": "Wooden stage temple.",
                            "latitude": 34.9949,
                            "longitude": 135.785,
                            "estimated_cost_usd": 3.5
                        }
                    ]
                }
            ]
        }"#;

        let itinerary: Itinerary = serde_json::from_str(raw).unwrap();
        assert_eq!(itinerary.trip_name.as_deref(), Some("Temples & Tastes"));
        assert_eq!(itinerary.duration, Some(2));
        assert_eq!(itinerary.interests, vec!["History", "Food"]);
        assert_eq!(itinerary.days.len(), 1);

        let day = &itinerary.days[0];
        assert_eq!(day.label(), "Day 1");
        let activity = &day.activities[0];
        assert_eq!(activity.name.as_deref(), Some("Kiyomizu-dera"));
        assert_eq!(activity.latitude, Some(34.9949));
        assert_eq!(activity.estimated_cost_usd, 3.5);
    }

    #[test]
    fn missing_and_null_fields_take_defaults() {
        let raw = r#"{
            "interests": null,
            "itinerary": [
                {"activities": [{"name": "Walk", "estimated_cost_usd": null}, {}]},
                {"day": 2, "activities": null}
            ]
        }"#;

        let itinerary: Itinerary = serde_json::from_str(raw).unwrap();
        assert!(itinerary.trip_name.is_none());
        assert!(itinerary.interests.is_empty());
        assert_eq!(itinerary.days[0].day, None);
        assert_eq!(itinerary.days[0].label(), "Day ?");
        assert_eq!(itinerary.days[0].activities[0].estimated_cost_usd, 0.0);
        assert_eq!(itinerary.days[0].activities[1], Activity::default());
        assert!(itinerary.days[1].activities.is_empty());
    }

    #[test]
    fn out_of_range_coordinates_are_kept() {
        let raw = r#"{"itinerary": [{"day": 1, "activities": [
            {"name": "Nowhere", "latitude": 123.0, "longitude": -500.0, "estimated_cost_usd": -4}
        ]}]}"#;

        let itinerary: Itinerary = serde_json::from_str(raw).unwrap();
        let activity = &itinerary.days[0].activities[0];
        assert_eq!(activity.latitude, Some(123.0));
        assert_eq!(activity.longitude, Some(-500.0));
        assert_eq!(activity.estimated_cost_usd, -4.0);
    }

    #[test]
    fn cost_ranges_are_rejected() {
        let raw = r#"{"itinerary": [{"day": 1, "activities": [
            {"name": "Dinner", "estimated_cost_usd": "20-30"}
        ]}]}"#;

        assert!(serde_json::from_str::<Itinerary>(raw).is_err());
    }

    #[test]
    fn mistyped_duration_is_dropped() {
        let raw = r#"{"duration": "3 days", "itinerary": [
            {"day": 1, "activities": [{"name": "Walk", "estimated_cost_usd": 5}]}
        ]}"#;

        let itinerary: Itinerary = serde_json::from_str(raw).unwrap();
        assert_eq!(itinerary.duration, None);
        assert_eq!(itinerary.days[0].day, Some(1));

        let itinerary: Itinerary = serde_json::from_str(r#"{"duration": {"days": 3}}"#).unwrap();
        assert_eq!(itinerary.duration, None);
        let itinerary: Itinerary = serde_json::from_str(r#"{"duration": "4"}"#).unwrap();
        assert_eq!(itinerary.duration, Some(4));
    }

    #[test]
    fn day_numbers_accept_numeric_strings() {
        let raw = r#"{"itinerary": [
            {"day": "1", "activities": []},
            {"day": " 2 ", "activities": []},
            {"day": "Day three", "activities": []},
            {"day": -1, "activities": []},
            {"day": 2.5, "activities": []},
            {"day": null, "activities": []}
        ]}"#;

        let itinerary: Itinerary = serde_json::from_str(raw).unwrap();
        let days: Vec<_> = itinerary.days.iter().map(|d| d.day).collect();
        assert_eq!(days, [Some(1), Some(2), None, None, None, None]);
        assert_eq!(itinerary.days[2].label(), "Day ?");
    }
}

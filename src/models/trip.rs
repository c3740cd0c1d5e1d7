use serde::{Deserialize, Serialize};

use crate::utils::budget::{budget_percentage, BudgetLevel};

/// Number of tags shown on a gallery tile; the rest are dropped silently.
pub const PREVIEW_TAG_LIMIT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Current,
    Completed,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Current => "current",
            TripStatus::Completed => "completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "bg-blue-100 text-blue-700",
            TripStatus::Current => "bg-emerald-100 text-emerald-700",
            TripStatus::Completed => "bg-slate-100 text-slate-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub caption: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Photo {
    pub fn preview_tags(&self) -> &[String] {
        let end = self.tags.len().min(PREVIEW_TAG_LIMIT);
        &self.tags[..end]
    }
}

/// A trip record. `spent` and the expense list are independent inputs and
/// nothing ties `status` to the dates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub spent: f64,
    pub description: String,
    pub status: TripStatus,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Trip {
    /// Unguarded: a zero budget yields a non-finite value.
    pub fn budget_percentage(&self) -> f64 {
        budget_percentage(self.spent, self.budget)
    }

    pub fn budget_level(&self) -> BudgetLevel {
        BudgetLevel::from_percentage(self.budget_percentage())
    }

    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    pub fn photo_count_label(&self) -> String {
        format!("{} photos", self.photos.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo_with_tags(tags: &[&str]) -> Photo {
        Photo {
            id: "p".to_string(),
            url: "/placeholder.svg".to_string(),
            caption: "caption".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn preview_tags_keeps_at_most_two() {
        assert!(photo_with_tags(&[]).preview_tags().is_empty());
        assert_eq!(photo_with_tags(&["a"]).preview_tags(), ["a"]);
        assert_eq!(photo_with_tags(&["a", "b"]).preview_tags(), ["a", "b"]);
        assert_eq!(
            photo_with_tags(&["a", "b", "c", "d", "e"]).preview_tags(),
            ["a", "b"]
        );
    }

    #[test]
    fn status_round_trips_as_lowercase() {
        let status: TripStatus = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(status, TripStatus::Current);
        assert_eq!(serde_json::to_string(&TripStatus::Upcoming).unwrap(), "\"upcoming\"");
        assert_eq!(TripStatus::Completed.label(), "completed");
    }

    #[test]
    fn trip_decodes_camel_case_fields_and_defaults_lists() {
        let raw = r#"{
            "id": "9",
            "destination": "Lima",
            "country": "Peru",
            "startDate": "2025-01-01",
            "endDate": "2024-12-01",
            "budget": 1000,
            "spent": 1500.5,
            "description": "",
            "status": "upcoming"
        }"#;
        let trip: Trip = serde_json::from_str(raw).unwrap();
        assert_eq!(trip.start_date, "2025-01-01");
        assert_eq!(trip.date_range(), "2025-01-01 - 2024-12-01");
        assert!(trip.photos.is_empty());
        assert!(trip.expenses.is_empty());
        assert_eq!(trip.budget_level(), BudgetLevel::Over);
        assert_eq!(trip.photo_count_label(), "0 photos");
    }
}

use super::trip::Trip;

const MOCK_TRIPS: &str = include_str!("../../data/trips.json");

pub fn decode_trips(raw: &str) -> Result<Vec<Trip>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The compiled-in trip list. A decode failure leaves the page empty.
pub fn load_trips() -> Vec<Trip> {
    match decode_trips(MOCK_TRIPS) {
        Ok(trips) => trips,
        Err(err) => {
            log::error!("failed to decode mock trips: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripStatus;

    #[test]
    fn mock_trips_decode() {
        let trips = decode_trips(MOCK_TRIPS).unwrap();
        assert_eq!(trips.len(), 3);

        let paris = &trips[0];
        assert_eq!(paris.destination, "Paris");
        assert_eq!(paris.country, "France");
        assert_eq!(paris.status, TripStatus::Completed);
        assert_eq!(paris.expenses.len(), 4);
        assert_eq!(paris.photos.len(), 2);

        let santorini = &trips[2];
        assert_eq!(santorini.status, TripStatus::Upcoming);
        assert!(santorini.photos.is_empty());
        assert!(santorini.expenses.is_empty());
        assert_eq!(santorini.spent, 0.0);
    }

    #[test]
    fn malformed_data_is_an_error() {
        assert!(decode_trips("[{\"id\": 1}]").is_err());
    }
}

use crate::utils::format::to_fixed;

/// A point picked on the map. Lives only for the duration of the click
/// notification and is never attached to a trip.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl Location {
    pub fn from_click(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            name: format!("Location {}, {}", to_fixed(lat, 2), to_fixed(lng, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_uses_coordinates_rounded_to_two_places() {
        let location = Location::from_click(10.1234, 20.5678);
        assert_eq!(location.name, "Location 10.12, 20.57");
        assert_eq!(location.lat, 10.1234);
        assert_eq!(location.lng, 20.5678);
    }

    #[test]
    fn name_keeps_sign_and_pads_decimals() {
        let location = Location::from_click(-33.9, 151.0);
        assert_eq!(location.name, "Location -33.90, 151.00");
    }

    #[test]
    fn name_rounds_exact_halves_up() {
        assert_eq!(
            Location::from_click(0.125, 10.375).name,
            "Location 0.13, 10.38"
        );
        assert_eq!(
            Location::from_click(-0.125, 0.005).name,
            "Location -0.13, 0.01"
        );
    }
}

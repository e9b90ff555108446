use {
    serde::{Deserialize, Serialize},
    std::{convert::TryFrom, error::Error, fmt},
};

/// One record of the coordinate list, exactly as the API sends it.
/// Latitude/longitude stay as text until a marker is built from them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub id: i64,
    pub longitudinal: String,
    pub lateral: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
}

impl Coordinate {
    pub fn new(id: i64, lateral: &str, longitudinal: &str, time_stamp: &str) -> Self {
        Coordinate {
            id,
            longitudinal: longitudinal.to_string(),
            lateral: lateral.to_string(),
            time_stamp: time_stamp.to_string(),
        }
    }

    /// Popup body. Values are shown verbatim, not reformatted from the parsed floats.
    pub fn popup_text(&self) -> String {
        format!(
            "Latitude: {}, Longitude: {}, Timestamp: {}",
            self.lateral, self.longitudinal, self.time_stamp
        )
    }
}

/// A parsed, finite latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    InvalidLatitude(String),
    InvalidLongitude(String),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoordinateError::InvalidLatitude(text) => write!(f, "Invalid latitude: {:?}", text),
            CoordinateError::InvalidLongitude(text) => write!(f, "Invalid longitude: {:?}", text),
        }
    }
}

impl Error for CoordinateError {}

// "NaN" and "inf" parse fine as f64 but can't be placed on a map.
fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl TryFrom<&Coordinate> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(coordinate: &Coordinate) -> Result<Self, Self::Error> {
        let lat = parse_finite(&coordinate.lateral)
            .ok_or_else(|| CoordinateError::InvalidLatitude(coordinate.lateral.clone()))?;
        let lon = parse_finite(&coordinate.longitudinal)
            .ok_or_else(|| CoordinateError::InvalidLongitude(coordinate.longitudinal.clone()))?;
        Ok(GeoPoint { lat, lon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn deserializes_api_field_names() {
        let json = r#"[{"id":1,"longitudinal":"20.0","lateral":"10.0","timeStamp":"t1"}]"#;
        let parsed: Vec<Coordinate> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, vec![Coordinate::new(1, "10.0", "20.0", "t1")]);
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let json = r#"[{"id":1,"longitudinal":"20.0","lateral":"10.0"}]"#;
        assert!(serde_json::from_str::<Vec<Coordinate>>(json).is_err());
    }

    #[test]
    fn lateral_is_latitude_and_longitudinal_is_longitude() {
        let point = GeoPoint::try_from(&Coordinate::new(7, " 63.5 ", "-1.25", "now")).unwrap();
        assert_eq!(point, GeoPoint { lat: 63.5, lon: -1.25 });
    }

    #[test]
    fn unparseable_text_is_rejected() {
        assert_matches!(
            GeoPoint::try_from(&Coordinate::new(1, "north", "0", "t")),
            Err(CoordinateError::InvalidLatitude(_))
        );
        assert_matches!(
            GeoPoint::try_from(&Coordinate::new(1, "0", "", "t")),
            Err(CoordinateError::InvalidLongitude(_))
        );
        assert_matches!(
            GeoPoint::try_from(&Coordinate::new(1, "NaN", "0", "t")),
            Err(CoordinateError::InvalidLatitude(_))
        );
    }

    #[test]
    fn popup_shows_raw_text() {
        let c = Coordinate::new(3, "10.000", "20.50", "2024-01-01T00:00:00");
        assert_eq!(
            c.popup_text(),
            "Latitude: 10.000, Longitude: 20.50, Timestamp: 2024-01-01T00:00:00"
        );
    }
}

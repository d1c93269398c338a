/// A rectangular region in degrees. Construct through [`BoundingBox::new`] so
/// the min/max ordering always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
}

#[derive(Debug, PartialEq)]
pub enum BoundingBoxError {
    NotFinite,
    OutOfRange,
    Inverted,
}

impl std::fmt::Display for BoundingBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BoundingBoxError::NotFinite => write!(f, "Coordinates must be finite numbers"),
            BoundingBoxError::OutOfRange => write!(
                f,
                "Latitude must be within [-90, 90] and longitude within [-180, 180]"
            ),
            BoundingBoxError::Inverted => write!(
                f,
                "Minimum latitude/longitude must be strictly less than maximum"
            ),
        }
    }
}

impl std::error::Error for BoundingBoxError {}

impl BoundingBox {
    pub fn new(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Result<Self, BoundingBoxError> {
        if ![min_lat, min_lon, max_lat, max_lon]
            .iter()
            .all(|c| c.is_finite())
        {
            return Err(BoundingBoxError::NotFinite);
        }

        let lat_ok = |l: f64| (-90.0..=90.0).contains(&l);
        let lon_ok = |l: f64| (-180.0..=180.0).contains(&l);
        if !(lat_ok(min_lat) && lat_ok(max_lat) && lon_ok(min_lon) && lon_ok(max_lon)) {
            return Err(BoundingBoxError::OutOfRange);
        }

        if min_lat >= max_lat || min_lon >= max_lon {
            return Err(BoundingBoxError::Inverted);
        }

        Ok(BoundingBox {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        })
    }

    pub fn north_carolina() -> Self {
        BoundingBox {
            min_lat: 33.8,
            min_lon: -83.6,
            max_lat: 36.6,
            max_lon: -75.3,
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Edges are inclusive. Only used for reporting; records outside the box
    /// are still passed through as the source reports them.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lon && lng <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_box() {
        let bounds = BoundingBox::new(33.8, -83.6, 36.6, -75.3).unwrap();

        assert_eq!(bounds, BoundingBox::north_carolina());
    }

    #[test]
    fn rejects_inverted_box() {
        assert_eq!(
            BoundingBox::new(36.6, -83.6, 33.8, -75.3),
            Err(BoundingBoxError::Inverted)
        );
        assert_eq!(
            BoundingBox::new(33.8, -75.3, 36.6, -83.6),
            Err(BoundingBoxError::Inverted)
        );
        assert_eq!(
            BoundingBox::new(33.8, -83.6, 33.8, -75.3),
            Err(BoundingBoxError::Inverted)
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert_eq!(
            BoundingBox::new(f64::NAN, -83.6, 36.6, -75.3),
            Err(BoundingBoxError::NotFinite)
        );
        assert_eq!(
            BoundingBox::new(33.8, -83.6, 91.0, -75.3),
            Err(BoundingBoxError::OutOfRange)
        );
        assert_eq!(
            BoundingBox::new(33.8, -181.0, 36.6, -75.3),
            Err(BoundingBoxError::OutOfRange)
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = BoundingBox::north_carolina();

        assert!(bounds.contains(35.0, -79.0));
        assert!(bounds.contains(33.8, -75.3));
        assert!(!bounds.contains(37.0, -79.0));
    }
}

//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  At the
//! equator this gives ~1 m precision — more than sufficient for city-scale
//! simulation while halving memory consumption vs. `f64`.  Vehicle dynamics
//! (offsets along edges, speeds) are `f64` and never round-trip through
//! coordinates, so the coarser geo precision cannot accumulate into the
//! locomotion state.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy: ±0.5 % (f32 rounding); suitable for deriving edge lengths
    /// at city scale.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = ((other.lat - self.lat) as f64).to_radians();
        let d_lon = ((other.lon - self.lon) as f64).to_radians();

        let lat1 = (self.lat as f64).to_radians();
        let lat2 = (other.lat as f64).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Initial great-circle bearing from `self` toward `other`, in radians
    /// in `[0, 2π)` measured clockwise from north.
    ///
    /// Degenerate case: bearing to the same point is `0.0`.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = (self.lat as f64).to_radians();
        let lat2 = (other.lat as f64).to_radians();
        let d_lon = ((other.lon - self.lon) as f64).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let bearing = y.atan2(x);
        bearing.rem_euclid(std::f64::consts::TAU)
    }

    /// Linear interpolation between two coordinates.  `t` is clamped to
    /// `[0, 1]`.  Chord interpolation is fine at edge scale (< a few km).
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        let t = t.clamp(0.0, 1.0) as f32;
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

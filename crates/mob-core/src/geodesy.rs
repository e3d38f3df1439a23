//! Geographic positions on the WGS-84 ellipsoid.
//!
//! Used only by map-anchored scenarios to convert between longitude/latitude
//! and metres; nothing on the synthesis hot path touches it.
//!
//! Geodesics are solved by `geographiclib-rs` (Karney's algorithms), which
//! converge for every pair of points, antipodal ones included, and are
//! accurate to a few nanometres.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::{CoreError, CoreResult};

static WGS84: LazyLock<Geodesic> = LazyLock::new(Geodesic::wgs84);

/// A longitude/latitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPosition {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPosition {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Shortest-path distance along the ellipsoid, in metres.
    pub fn distance_m(self, other: GeoPosition) -> f64 {
        WGS84.inverse(self.lat, self.lon, other.lat, other.lon)
    }

    /// Destination reached by travelling `distance_m` metres from `self`
    /// with initial bearing `bearing_deg` (clockwise from north).
    pub fn shift(self, bearing_deg: f64, distance_m: f64) -> GeoPosition {
        let (lat, lon): (f64, f64) = WGS84.direct(self.lat, self.lon, bearing_deg, distance_m);
        GeoPosition { lon, lat }
    }

    /// The point `fraction` of the way along the geodesic to `other`.
    ///
    /// # Errors
    ///
    /// `Config` if `fraction` is outside `[0, 1]`.
    pub fn phantom_point(self, other: GeoPosition, fraction: f64) -> CoreResult<GeoPosition> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(CoreError::Config(format!(
                "phantom point fraction {fraction} is outside [0, 1]"
            )));
        }
        let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) =
            WGS84.inverse(self.lat, self.lon, other.lat, other.lon);
        Ok(self.shift(azi1, s12 * fraction))
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lon, self.lat)
    }
}

// ── ISO 6709 ──────────────────────────────────────────────────────────────────

impl FromStr for GeoPosition {
    type Err = CoreError;

    /// Parse the compact ISO 6709 notation: latitude then longitude, each
    /// with a mandatory sign, e.g. `+5012.5-00705/` or `+50.2+007.05`.
    ///
    /// Latitude carries 2 degree digits, longitude 3, each optionally
    /// followed by two minute digits, two second digits, and a decimal
    /// fraction of the last unit given.  A trailing `/` is accepted.
    fn from_str(s: &str) -> CoreResult<Self> {
        let body = s.trim().strip_suffix('/').unwrap_or(s.trim());
        let split = body
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '+' || c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| CoreError::Coordinate(format!("position '{s}' is not parsable as ISO 6709")))?;
        let (lat_part, lon_part) = body.split_at(split);

        let lat = parse_component(lat_part, 2, 90.0)
            .ok_or_else(|| CoreError::Coordinate(format!("'{lat_part}' is not a parsable ISO 6709 latitude")))?;
        let lon = parse_component(lon_part, 3, 180.0)
            .ok_or_else(|| CoreError::Coordinate(format!("'{lon_part}' is not a parsable ISO 6709 longitude")))?;

        Ok(GeoPosition { lon, lat })
    }
}

/// Parse `±D..D[MM[SS]][.fff]` with `deg_digits` degree digits.
fn parse_component(part: &str, deg_digits: usize, max_degrees: f64) -> Option<f64> {
    let (negative, rest) = match part.as_bytes().first()? {
        b'+' => (false, &part[1..]),
        b'-' => (true, &part[1..]),
        _ => return None,
    };
    let (int_part, fraction) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let units = match int_part.len().checked_sub(deg_digits)? {
        0 => 1,
        2 => 2,
        4 => 3,
        _ => return None,
    };

    let degrees: f64 = int_part[..deg_digits].parse().ok()?;
    if degrees > max_degrees {
        return None;
    }
    let mut value = degrees;
    let mut scale = 1.0;
    for k in 1..units {
        let start = deg_digits + 2 * (k - 1);
        let sub: f64 = int_part[start..start + 2].parse().ok()?;
        if sub > 60.0 {
            return None;
        }
        value = value * 60.0 + sub;
        scale *= 60.0;
    }
    if let Some(frac) = fraction {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value += format!("0.{frac}").parse::<f64>().ok()?;
    }

    let degrees = value / scale;
    if degrees > max_degrees {
        return None;
    }
    Some(if negative { -degrees } else { degrees })
}

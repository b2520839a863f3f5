//! Core constants, units, and shared primitives for the helioforge workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Metres per astronomical unit.
    pub const AU_M: f64 = 1.495_978_707e11;
    /// Seconds per day.
    pub const DAY_S: f64 = 86_400.0;
    /// Seconds per Julian year (365.25 days).
    pub const YEAR_S: f64 = 365.25 * DAY_S;
}

/// Reference bodies used to scale generated and preset planets.
pub mod reference {
    /// Earth mass (kg).
    pub const EARTH_MASS_KG: f64 = 5.972e24;
    /// Earth mean radius (m).
    pub const EARTH_RADIUS_M: f64 = 6.371e6;
    /// Jupiter mass (kg).
    pub const JUPITER_MASS_KG: f64 = 1.898e27;
    /// Jupiter mean radius (m).
    pub const JUPITER_RADIUS_M: f64 = 6.9911e7;
    /// Ice-giant reference mass (Uranus, kg).
    pub const ICE_GIANT_MASS_KG: f64 = 8.681e25;
    /// Ice-giant reference radius (Uranus, m).
    pub const ICE_GIANT_RADIUS_M: f64 = 2.5362e7;
    /// Solar mass (kg).
    pub const SUN_MASS_KG: f64 = 1.9885e30;
    /// Solar radius (m).
    pub const SUN_RADIUS_M: f64 = 6.9634e8;
    /// Solar luminosity (W).
    pub const SUN_LUMINOSITY_W: f64 = 3.828e26;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_M;

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AU_M
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAY_S, YEAR_S};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * DAY_S
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / DAY_S
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / YEAR_S
    }
}

/// Planar vector helpers; orbits live in the x/y plane.
pub mod vector {
    /// Alias for a 2D vector in metres.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Point at `radius` along the direction `angle_rad` from the origin.
    #[inline]
    pub fn polar(radius: f64, angle_rad: f64) -> Vector2 {
        let (sin, cos) = angle_rad.sin_cos();
        [radius * cos, radius * sin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn au_round_trip() {
        let m = units::au_to_m(5.2);
        assert!((units::m_to_au(m) - 5.2).abs() < 1e-12);
    }

    #[test]
    fn year_is_365_quarter_days() {
        assert!((time::seconds_to_days(constants::YEAR_S) - 365.25).abs() < 1e-12);
        assert!((time::seconds_to_years(constants::YEAR_S) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn polar_keeps_radius() {
        let p = vector::polar(3.0, 1.1);
        assert!((vector::norm(&p) - 3.0).abs() < 1e-12);
    }
}

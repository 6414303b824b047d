//! Region classification for (pressure, temperature) queries.

use crate::{
    error::SteamError,
    if97::{self, boundary, region4},
    state::Region,
};

/// Classifies a (p, T) point into the IF97 region that evaluates it.
///
/// Below 623.15 K the dividing line is the saturation curve (at or above it
/// is compressed liquid, below is superheated gas); from 623.15 K up to
/// 863.15 K it is the B23 boundary (above it is region 3); beyond 863.15 K
/// everything up to 100 MPa is region 2.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] if the temperature is outside
/// `[273.15, 1073.15] K` or the pressure is outside `(0, 100] MPa`.
pub(crate) fn region_select(pressure: f64, temperature: f64) -> Result<Region, SteamError> {
    if !(if97::TEMPERATURE_MIN..=if97::TEMPERATURE_MAX).contains(&temperature) {
        return Err(SteamError::out_of_domain(format!(
            "temperature {temperature} K is outside [{}, {}] K",
            if97::TEMPERATURE_MIN,
            if97::TEMPERATURE_MAX
        )));
    }
    if pressure <= 0.0 || pressure > if97::PRESSURE_MAX {
        return Err(SteamError::out_of_domain(format!(
            "pressure {pressure} MPa is outside (0, {}] MPa",
            if97::PRESSURE_MAX
        )));
    }

    if temperature < if97::TEMPERATURE_B13 {
        if pressure >= region4::saturation_pressure(temperature)? {
            Ok(Region::R1)
        } else {
            Ok(Region::R2)
        }
    } else if temperature <= if97::TEMPERATURE_B23_MAX {
        if pressure > boundary::b23_pressure(temperature) {
            Ok(Region::R3)
        } else {
            Ok(Region::R2)
        }
    } else {
        Ok(Region::R2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_region() {
        assert_eq!(region_select(3.0, 300.0).unwrap(), Region::R1);
        assert_eq!(region_select(0.0035, 300.0).unwrap(), Region::R2);
        assert_eq!(region_select(0.0035, 700.0).unwrap(), Region::R2);
        assert_eq!(region_select(30.0, 700.0).unwrap(), Region::R2);
        assert_eq!(region_select(25.5837018, 650.0).unwrap(), Region::R3);
    }

    #[test]
    fn liquid_wins_on_the_saturation_line() {
        let saturation = region4::saturation_pressure(500.0).unwrap();
        assert_eq!(region_select(saturation, 500.0).unwrap(), Region::R1);
    }

    #[test]
    fn the_triple_junction_belongs_to_the_upper_band() {
        // At exactly 623.15 K the B23 curve, not the saturation curve, divides.
        assert_eq!(region_select(17.0, 623.15).unwrap(), Region::R3);
        assert_eq!(region_select(16.0, 623.15).unwrap(), Region::R2);
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert!(region_select(3.0, 200.0).is_err());
        assert!(region_select(3.0, 1100.0).is_err());
        assert!(region_select(0.0, 300.0).is_err());
        assert!(region_select(101.0, 300.0).is_err());
    }
}

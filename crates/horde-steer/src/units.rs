//! Physical-to-scene unit conversions.
//!
//! Speed conversion chain: km/h → m/min → m/s → px/s.

/// 10 pixels per 30 cm.
pub const PIXELS_PER_METER: f32 = 10.0 / 0.3;

pub fn kmph_to_mpm(kmph: f32) -> f32 {
    kmph * 1000.0 / 60.0
}

pub fn mpm_to_mps(mpm: f32) -> f32 {
    mpm / 60.0
}

pub fn mps_to_pps(mps: f32) -> f32 {
    mps * PIXELS_PER_METER
}

/// Kilometers per hour to pixels per second.
pub fn kmph_to_pps(kmph: f32) -> f32 {
    mps_to_pps(mpm_to_mps(kmph_to_mpm(kmph)))
}

pub fn meters_to_pixels(meters: f32) -> f32 {
    meters * PIXELS_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_kmph_chain() {
        let mpm = kmph_to_mpm(10.0);
        assert!((mpm - 166.666_67).abs() < 1e-3);
        let mps = mpm_to_mps(mpm);
        assert!((mps - 2.777_778).abs() < 1e-5);
        assert!((kmph_to_pps(10.0) - mps * PIXELS_PER_METER).abs() < 1e-4);
        assert!((kmph_to_pps(10.0) - 92.592_59).abs() < 1e-3);
    }

    #[test]
    fn half_meter_is_about_sixteen_pixels() {
        assert!((meters_to_pixels(0.5) - 16.666_67).abs() < 1e-4);
    }
}

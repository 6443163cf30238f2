/// Cubic centimeters per liter
pub const CM3_PER_LITER: f64 = 1000.;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

pub fn volume_to_liters(cm3: f64) -> f64 {
    cm3 / CM3_PER_LITER
}

pub fn volume_from_liters(liters: f64) -> f64 {
    liters * CM3_PER_LITER
}

pub fn length_from_inches(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

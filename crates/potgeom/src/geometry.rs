pub fn disk_area(r: f64) -> f64 {
    r * r * core::f64::consts::PI
}

pub fn cone_volume(radius: f64, height: f64) -> f64 {
    disk_area(radius) * height / 3.
}

pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    disk_area(radius) * height
}

/// A solid with a well-defined volume
pub trait VolumeModel {
    fn volume(&self) -> f64;
}

/// A full cone standing on its circular base
#[derive(Clone, Debug)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
}

impl Cone {
    pub fn is_non_zero(&self) -> bool {
        self.radius > 0. && self.height > 0.
    }

    pub fn base_area(&self) -> f64 {
        disk_area(self.radius)
    }
}

impl VolumeModel for Cone {
    fn volume(&self) -> f64 {
        cone_volume(self.radius, self.height)
    }
}

/// A straight-walled vessel, e.g. a pot without taper
#[derive(Clone, Debug)]
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
}

impl Cylinder {
    pub fn is_non_zero(&self) -> bool {
        self.radius > 0. && self.height > 0.
    }

    pub fn cross_section_area(&self) -> f64 {
        disk_area(self.radius)
    }
}

impl VolumeModel for Cylinder {
    fn volume(&self) -> f64 {
        cylinder_volume(self.radius, self.height)
    }
}

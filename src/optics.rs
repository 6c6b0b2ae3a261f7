//! Direction math for light meeting a surface.
//!
//! The tracer only reflects. The refraction helpers are here for materials that carry a
//! refractive index, nothing in the traced path calls them yet.

use glam::DVec3;

// Reflect vector v around normal n
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refracts `incident` through a surface with unit `normal` facing against it, going from a
/// medium with index `n1` into one with index `n2`. Returns `None` on total internal reflection.
pub fn refract(incident: DVec3, normal: DVec3, n1: f64, n2: f64) -> Option<DVec3> {
    let incident = incident.normalize();
    let ratio = n1 / n2;
    let cosine = -incident.dot(normal);
    let discriminant = 1.0 - ratio * ratio * (1.0 - cosine * cosine);

    if discriminant < 0.0 {
        None
    } else {
        Some(ratio * incident + (ratio * cosine - discriminant.sqrt()) * normal)
    }
}

/// Schlick's approximation of the fresnel term.
///
/// Returns the reflected and the transmitted share of the light for a ray arriving at
/// `cosine` to the normal.
pub fn schlick(cosine: f64, n1: f64, n2: f64) -> (f64, f64) {
    let r_0 = (n1 - n2) / (n1 + n2);
    let r_0 = r_0 * r_0;
    let reflected = r_0 + (1.0 - r_0) * f64::powf(1.0 - cosine, 5.0);

    (reflected, 1.0 - reflected)
}

/// Angle of incidence above which light going from `n1` into `n2` is reflected entirely.
/// There is none when the second medium is the denser one.
pub fn critical_angle(n1: f64, n2: f64) -> Option<f64> {
    if n2 > n1 {
        None
    } else {
        Some(f64::asin(n2 / n1))
    }
}

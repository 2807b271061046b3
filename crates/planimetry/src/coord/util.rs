/// Round to 3 decimal places.
///
/// Several operations bake this precision into their results (distance,
/// slope, angles, reflected and intersected points) while others stay
/// unrounded (midpoint, translate, scale, triangle area). The asymmetry is a
/// per-operation contract; see the individual docs.
#[inline]
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Position of a linear, endlessly repeating sweep over `distance` that takes
/// `duration_ms` per cycle.
pub fn loop_position(elapsed_ms: f64, duration_ms: f64, distance: f64) -> f64 {
    if duration_ms <= 0.0 || !elapsed_ms.is_finite() {
        return 0.0;
    }
    let cycle = (elapsed_ms / duration_ms).rem_euclid(1.0);
    distance * cycle
}

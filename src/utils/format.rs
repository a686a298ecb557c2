/// Format a reading the way the tool has always printed it: whole numbers
/// keep one decimal (`20.0`), everything else uses the shortest exact form
/// (`5.3`, `-0.25`).
pub fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

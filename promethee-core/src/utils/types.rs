#[cfg(test)]
#[path = "../../tests/unit/utils/types_test.rs"]
mod types_test;

/// Alias to a scalar floating type.
pub type Float = f64;

/// A decimal place beyond which rounding cannot change a `Float` value.
pub const MAX_DECIMAL_PLACE: u32 = 17;

/// Rounds value to the given amount of decimal places. `None` keeps the value as is, so does
/// a decimal place above `MAX_DECIMAL_PLACE` or a value too large to be scaled.
pub fn round_to(value: Float, decimal_place: Option<u32>) -> Float {
    match decimal_place {
        Some(places) if places <= MAX_DECIMAL_PLACE => {
            let factor = (10 as Float).powi(places as i32);
            let scaled = value * factor;
            if !scaled.is_finite() {
                return value;
            }

            let rounded = scaled.round() / factor;
            // avoid negative zero leaking into outputs
            if rounded == 0. { 0. } else { rounded }
        }
        _ => value,
    }
}

/// Returns mean of values or zero for an empty iterator.
pub fn mean_of<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    let (sum, count) = values.fold((0., 0), |(sum, count), item| (sum + item, count + 1));

    if count == 0 { 0. } else { sum / count as Float }
}

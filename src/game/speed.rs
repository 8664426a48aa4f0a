/// Tick delay with an empty stomach, in milliseconds
const BASE_DELAY_MS: u64 = 150;
/// The speed bonus wraps past this value
const BONUS_CAP: u64 = 120;

/// Tick delay in milliseconds for a snake of `length` segments.
///
/// The delay shrinks as the snake grows, in steps at every 5th and 10th
/// segment; the bonus is taken modulo `BONUS_CAP`, which makes the curve
/// non-monotonic for very long snakes but keeps the delay inside
/// [30, 150] for any realistic length.
pub fn delay(length: usize) -> u64 {
    let length = length as u64;
    BASE_DELAY_MS - (length / 5 + length / 10) % BONUS_CAP
}

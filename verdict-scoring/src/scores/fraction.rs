/// Share of votes that found the review helpful: `yes / (yes + no)`.
///
/// A review nobody voted on scores exactly 0 (neutral), not NaN.
pub fn positive_fraction(yes: u64, no: u64) -> f64 {
    let n = yes as f64 + no as f64;
    if n == 0.0 {
        return 0.0;
    }
    yes as f64 / n
}

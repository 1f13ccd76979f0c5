/// Helpful minus not-helpful votes. May be negative.
///
/// Ignores vote volume and ratio, so it is reported but never ranked on.
/// Differences beyond the `i64` range saturate; validated records never
/// reach them.
pub fn net_score(yes: u64, no: u64) -> i64 {
    let diff = i128::from(yes) - i128::from(no);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

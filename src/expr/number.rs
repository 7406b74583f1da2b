
/// Formats a number the way every expression prints it: six fractional
/// digits, then trailing zeros stripped, then a trailing decimal point
/// stripped. `4.0` prints as `4` and `2.5` as `2.5`.
///
/// Values whose formatted text has no decimal point (infinities and
/// NaN) are returned unchanged.
pub fn format_number(value: f64) -> String {
  let mut text = format!("{value:.6}");
  if text.contains('.') {
    let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(trimmed_len);
  }
  text
}

/// Rounds to one decimal place, the precision every summary card shows.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a percentage; an empty whole reads as 0%.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    round1(part * 100.0 / whole)
}

pub fn average<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), v| (sum + v.into(), count + 1));
    if count == 0 {
        0.0
    } else {
        round1(sum / f64::from(count))
    }
}

/// Renders integer cents as `$1,234.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1.0, 3.0), 33.3);
        assert_eq!(percentage(2.0, 3.0), 66.7);
        assert_eq!(percentage(5.0, 5.0), 100.0);
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(3.0, 0.0), 0.0);
    }

    #[test]
    fn average_handles_empty_input() {
        assert_eq!(average(Vec::<f64>::new()), 0.0);
        assert_eq!(average([4.0, 4.5, 3.2]), 3.9);
    }

    #[test]
    fn cents_are_grouped_by_thousands() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(45_050), "$450.50");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(-100_000), "-$1,000.00");
    }
}

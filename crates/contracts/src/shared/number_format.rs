//! Number formatting for dashboard labels, tooltips and axis ticks.
//!
//! All values are US-formatted: `,` as the thousands separator, `.` as the
//! decimal point, `$` prefix for money.

/// Inserts `,` every three digits: `2681` → `"2,681"`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Whole dollars with separators: `25000.0` → `"$25,000"`.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", format_thousands(-rounded))
    } else {
        format!("${}", format_thousands(rounded))
    }
}

/// Millions with a fixed number of decimals: `3_375_000.0, 1` → `"$3.4M"`.
///
/// Rounds half away from zero so `3.375` → `3.38` at two decimals.
pub fn format_usd_millions(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let millions = (value / 1_000_000.0 * scale).round() / scale;
    format!("${:.prec$}M", millions, prec = decimals)
}

/// Money rounded to the nearest million (one decimal) or thousand.
///
/// The unit is picked after rounding, so `999_600.0` is `"$1.0M"`.
pub fn format_usd_compact(value: f64) -> String {
    let abs = value.abs();
    let thousands = (abs / 1_000.0).round();
    if thousands >= 1_000.0 {
        format_usd_millions(value, 1)
    } else if abs >= 1_000.0 {
        format!("${}k", (value / 1_000.0).round() as i64)
    } else {
        format_usd(value)
    }
}

/// `55.0` → `"55%"`, `30.5` → `"30.5%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_float(value))
}

/// `450.0` → `"450 patients"`, `2681.0` → `"2,681 patients"`.
pub fn format_patients(value: f64) -> String {
    format!("{} patients", format_thousands(value.round() as i64))
}

/// Shortest representation after rounding away float noise past two decimals.
fn trim_float(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(844), "844");
        assert_eq!(format_thousands(2681), "2,681");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-1476), "-1,476");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(25_000.0), "$25,000");
        assert_eq!(format_usd(9_035.0), "$9,035");
        assert_eq!(format_usd(500.0), "$500");
        assert_eq!(format_usd(-19_533.0), "-$19,533");
    }

    #[test]
    fn test_format_usd_millions() {
        assert_eq!(format_usd_millions(3_375_000.0, 1), "$3.4M");
        assert_eq!(format_usd_millions(3_375_000.0, 2), "$3.38M");
        assert_eq!(format_usd_millions(2_625_000.0, 2), "$2.63M");
        assert_eq!(format_usd_millions(900_000.0, 2), "$0.90M");
        assert_eq!(format_usd_millions(10_880_000.0, 2), "$10.88M");
        assert_eq!(format_usd_millions(380_000.0, 1), "$0.4M");
    }

    #[test]
    fn test_format_usd_compact() {
        assert_eq!(format_usd_compact(85_000_000.0), "$85.0M");
        assert_eq!(format_usd_compact(916_500.0), "$917k");
        assert_eq!(format_usd_compact(70_500.0), "$71k");
        assert_eq!(format_usd_compact(42.0), "$42");
        assert_eq!(format_usd_compact(999_600.0), "$1.0M");
        assert_eq!(format_usd_compact(999_499.0), "$999k");
        assert_eq!(format_usd_compact(1_000_000.0), "$1.0M");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(55.0), "55%");
        assert_eq!(format_percent(30.5), "30.5%");
        assert_eq!(format_percent(19.0), "19%");
    }

    #[test]
    fn test_format_patients() {
        assert_eq!(format_patients(450.0), "450 patients");
        assert_eq!(format_patients(2681.0), "2,681 patients");
    }
}

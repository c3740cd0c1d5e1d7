/// Digits needed to spell out any finite `f64` after the decimal point.
const EXACT_FRACTION_DIGITS: usize = 1074;

pub fn format_with_commas(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let groups: Vec<_> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .collect();
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, groups.join(","))
}

/// Fixed-point rendering that rounds exact halves up in magnitude, so
/// `0.125` becomes `0.13` and `12.5` becomes `13`. Works on the exact
/// decimal expansion of the float; `{:.N}` would round halves to even.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    kept.resize(whole.len() + digits, b'0');

    if fraction.as_bytes().get(digits).map_or(false, |d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

/// `$` followed by the shortest decimal form of the amount: `$2100`, `$12.5`.
pub fn format_amount(amount: f64) -> String {
    format!("${}", amount)
}

/// Comma-grouped whole dollars, used by the stats strip.
pub fn format_amount_grouped(amount: f64) -> String {
    format!("${}", format_with_commas(amount.round() as i64))
}

pub fn format_spent_of_budget(spent: f64, budget: f64) -> String {
    format!("{} / {}", format_amount(spent), format_amount(budget))
}

pub fn format_percentage(percentage: f64) -> String {
    if percentage.is_finite() {
        format!("{}%", to_fixed(percentage, 0))
    } else {
        "n/a".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::budget::budget_percentage;

    #[test]
    fn commas_every_three_digits() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(8800), "8,800");
        assert_eq!(format_with_commas(1234567), "1,234,567");
        assert_eq!(format_with_commas(-1000), "-1,000");
        assert_eq!(format_with_commas(-100), "-100");
        assert_eq!(format_with_commas(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn amounts_print_shortest_form() {
        assert_eq!(format_amount(2100.0), "$2100");
        assert_eq!(format_amount(12.5), "$12.5");
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_spent_of_budget(1200.0, 3500.0), "$1200 / $3500");
        assert_eq!(format_amount_grouped(8800.0), "$8,800");
    }

    #[test]
    fn percentage_rounds_and_handles_non_finite() {
        assert_eq!(format_percentage(84.0), "84%");
        assert_eq!(format_percentage(34.2857), "34%");
        assert_eq!(format_percentage(f64::INFINITY), "n/a");
        assert_eq!(format_percentage(f64::NAN), "n/a");
    }

    #[test]
    fn percentage_rounds_exact_halves_up() {
        assert_eq!(format_percentage(budget_percentage(25.0, 200.0)), "13%");
        assert_eq!(format_percentage(2.5), "3%");
        assert_eq!(format_percentage(99.5), "100%");
    }

    #[test]
    fn to_fixed_rounds_halves_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(10.375, 2), "10.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(12.5, 0), "13");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn to_fixed_pads_and_carries() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(151.0, 2), "151.00");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(-33.9, 2), "-33.90");
        assert_eq!(to_fixed(0.5, 0), "1");
    }
}

use crate::domain::model::Amount;

/// es-US 貨幣格式的固定設定
pub const CURRENCY_SYMBOL: &str = "$";
pub const GROUP_SEPARATOR: char = ',';
pub const DECIMAL_SEPARATOR: char = '.';
pub const FRACTION_DIGITS: usize = 2;
pub const NAN_SYMBOL: &str = "NaN";
pub const INFINITY_SYMBOL: &str = "∞";

/// 將金額格式化為美元字串 (es-US)，例如 1234.5 -> "$1,234.50"
///
/// 非數字輸入會先強制轉換，失敗時回傳 "$NaN" 而不是錯誤。
pub fn format_currency(amount: impl Into<Amount>) -> String {
    let value = amount.into().value();

    if value.is_nan() {
        tracing::debug!("Currency amount is not a number, using NaN sentinel");
        return format!("{}{}", CURRENCY_SYMBOL, NAN_SYMBOL);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}{}{}", sign, CURRENCY_SYMBOL, INFINITY_SYMBOL);
    }

    let (integer, fraction) = round_half_expand(value.abs(), FRACTION_DIGITS);

    format!(
        "{}{}{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_digits(&integer),
        DECIMAL_SEPARATOR,
        fraction
    )
}

/// 以最短十進位表示法進行四捨五入 (遠離零)，回傳整數與小數部分的數字字串
fn round_half_expand(value: f64, digits: usize) -> (String, String) {
    // f64 的 Display 不會使用科學記號
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut all_digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let int_len = all_digits.len();

    let mut frac_digits: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    let round_up = frac_digits.get(digits).is_some_and(|d| *d >= 5);
    frac_digits.resize(digits, 0);
    all_digits.extend(frac_digits);

    let mut int_len = int_len;
    if round_up {
        let mut carry = true;
        for d in all_digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            all_digits.insert(0, 1);
            int_len += 1;
        }
    }

    let to_string = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (
        to_string(&all_digits[..int_len]),
        to_string(&all_digits[int_len..]),
    )
}

fn group_digits(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(42.1), "$42.10");
        assert_eq!(format_currency(1_000_000.99), "$1,000,000.99");
        assert_eq!(format_currency(999), "$999.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-500), "-$500.00");
        assert_eq!(format_currency(-1234.567), "-$1,234.57");
        assert_eq!(format_currency(-0.0), "-$0.00");
        assert_eq!(format_currency(-0.001), "-$0.00");
    }

    #[test]
    fn test_format_currency_rounding() {
        assert_eq!(format_currency(1.005), "$1.01");
        assert_eq!(format_currency(2.675), "$2.68");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(0.994), "$0.99");
        assert_eq!(format_currency(999.995), "$1,000.00");
        assert_eq!(format_currency(9.999), "$10.00");
    }

    #[test]
    fn test_format_currency_sentinels() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency("not a number"), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_format_currency_coerces_strings() {
        assert_eq!(format_currency("1234.5"), "$1,234.50");
        assert_eq!(format_currency(" 10 "), "$10.00");
        assert_eq!(format_currency(""), "$0.00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("100"), "100");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }
}

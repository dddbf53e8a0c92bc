use serde::{Deserialize, Serialize};

/// 金額：以美元計價的數值，非數字輸入經過強制轉換後可能為 NaN
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// 依照 `Number(x)` 的字串規則轉換，無法解析時回傳 NaN
    pub fn coerce_str(input: &str) -> Self {
        Amount(parse_numeric_str(input))
    }

    /// JSON 值的強制轉換
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        let number = match value {
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_numeric_str(s),
            Value::Array(items) => match items.as_slice() {
                [] => 0.0,
                [single] => Self::from_json(single).0,
                _ => f64::NAN,
            },
            Value::Object(_) => f64::NAN,
        };

        Amount(number)
    }
}

fn parse_numeric_str(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // 0x / 0o / 0b 不接受正負號
    let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|rest| (rest, *radix)));
    if let Some((digits, radix)) = radix_literal {
        return parse_radix_digits(digits, radix);
    }

    // f64::from_str 也接受 "inf"、"nan"，先排除字母
    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

macro_rules! amount_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount(value as f64)
                }
            }
        )*
    };
}

amount_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::coerce_str(value)
    }
}

impl From<&String> for Amount {
    fn from(value: &String) -> Self {
        Amount::coerce_str(value)
    }
}

impl From<bool> for Amount {
    fn from(value: bool) -> Self {
        Amount(if value { 1.0 } else { 0.0 })
    }
}

impl From<&serde_json::Value> for Amount {
    fn from(value: &serde_json::Value) -> Self {
        Amount::from_json(value)
    }
}

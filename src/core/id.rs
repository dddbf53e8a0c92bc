use crate::domain::ports::IdGenerator;
use chrono::Utc;
use rand::Rng;
use std::sync::Mutex;

const RADIX: u32 = 36;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 產生識別碼：隨機小數的 36 進位 (去掉 "0.") 接上目前毫秒時間的 36 進位
///
/// 不保證唯一，也不適合用於安全用途。
pub fn generate_id() -> String {
    compose_id(rand::random::<f64>(), Utc::now().timestamp_millis())
}

/// 由給定的隨機值與毫秒時間組出識別碼
///
/// 1970 年以前的時間會帶 "-"，此時結果不再只有 36 進位字元。
pub fn compose_id(random: f64, now_millis: i64) -> String {
    let mut id = fraction_to_base36(random);
    if now_millis < 0 {
        id.push('-');
    }
    id.push_str(&integer_to_base36(now_millis.unsigned_abs()));
    id
}

/// 整數的 36 進位表示
pub fn integer_to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buffer = Vec::new();
    while value > 0 {
        buffer.push(DIGITS[(value % RADIX as u64) as usize]);
        value /= RADIX as u64;
    }
    buffer.reverse();
    String::from_utf8_lossy(&buffer).into_owned()
}

/// [0, 1) 小數部分的 36 進位數字 (不含 "0.")
///
/// 只輸出足以還原該 f64 的最短位數，最後一位依剩餘精度進位。
pub fn fraction_to_base36(value: f64) -> String {
    let mut fraction = value.fract().abs();
    if !fraction.is_finite() || fraction == 0.0 {
        return String::new();
    }

    // 相鄰 f64 間距的一半，代表還需要輸出的精度
    let mut delta = (0.5 * (next_up(fraction) - fraction)).max(next_up(0.0));
    let mut digits: Vec<u8> = Vec::new();

    if fraction >= delta {
        loop {
            fraction *= RADIX as f64;
            delta *= RADIX as f64;
            let digit = fraction as u8;
            digits.push(digit);
            fraction -= digit as f64;

            let past_half = fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1);
            if past_half && fraction + delta > 1.0 {
                round_up(&mut digits);
                break;
            }

            if fraction < delta {
                break;
            }
        }
    }

    digits.iter().map(|d| char::from(DIGITS[*d as usize])).collect()
}

// 從最後一位開始進位；溢位到整數部分時捨棄那些位數
fn round_up(digits: &mut Vec<u8>) {
    while let Some(last) = digits.pop() {
        if last + 1 < RADIX as u8 {
            digits.push(last + 1);
            return;
        }
    }
}

fn next_up(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// 以可替換的亂數來源產生識別碼
pub struct RandomIdGenerator<R: Rng + Send> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> RandomIdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> IdGenerator for RandomIdGenerator<R> {
    fn generate_id(&self) -> String {
        let random = match self.rng.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            Err(poisoned) => poisoned.into_inner().random::<f64>(),
        };
        compose_id(random, Utc::now().timestamp_millis())
    }
}

/// 使用執行緒本地亂數來源
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngIdGenerator;

impl IdGenerator for ThreadRngIdGenerator {
    fn generate_id(&self) -> String {
        generate_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_base36(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[test]
    fn test_integer_to_base36() {
        assert_eq!(integer_to_base36(0), "0");
        assert_eq!(integer_to_base36(35), "z");
        assert_eq!(integer_to_base36(36), "10");
        assert_eq!(integer_to_base36(1_709_596_800_000), "ltdlslc0");
    }

    #[test]
    fn test_fraction_to_base36() {
        assert_eq!(fraction_to_base36(0.0), "");
        assert_eq!(fraction_to_base36(0.5), "i");
        assert_eq!(fraction_to_base36(0.25), "9");
        assert_eq!(fraction_to_base36(0.75), "r");
    }

    #[test]
    fn test_fraction_digits_are_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let digits = fraction_to_base36(rng.random::<f64>());
            assert!(is_base36(&digits));
            // 53 位元精度在 36 進位下約 11 位數，極小值才會多出前導零
            assert!(digits.len() <= 20, "too many digits: {}", digits);
        }
    }

    #[test]
    fn test_compose_id() {
        assert_eq!(compose_id(0.5, 1_709_596_800_000), "iltdlslc0");
        assert_eq!(compose_id(0.0, 36), "10");
    }

    #[test]
    fn test_compose_id_before_epoch() {
        assert_eq!(compose_id(0.5, -36), "i-10");
        assert_eq!(compose_id(0.0, -1), "-1");
    }

    #[test]
    fn test_generate_id_format() {
        let first = generate_id();
        let second = generate_id();

        assert!(!first.is_empty());
        assert!(is_base36(&first));
        assert!(is_base36(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_seeded_generator_is_base36() {
        let generator = RandomIdGenerator::new(StdRng::seed_from_u64(42));
        let ids: Vec<String> = (0..100).map(|_| generator.generate_id()).collect();

        assert!(ids.iter().all(|id| !id.is_empty() && is_base36(id)));
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}

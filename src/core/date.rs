use chrono::{DateTime, Datelike, Local, Locale, NaiveDateTime, Offset, TimeZone, Utc};

/// es-ES 日期格式：日 (兩位數) de 月份全名 de 年
pub const DATE_LOCALE: Locale = Locale::es_ES;
pub const MONTH_PATTERN: &str = "%B";
pub const INVALID_DATE: &str = "Invalid Date";

/// Date 物件可表示的最大毫秒數 (±100,000,000 天)
pub const MAX_TIMESTAMP_MILLIS: f64 = 8.64e15;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CivilDate {
    year: i64,
    month: u32,
    day: u32,
}

/// 以本地時區格式化毫秒時間戳，例如 "05 de marzo de 2024"
pub fn format_date(timestamp_millis: f64) -> String {
    format_date_in(timestamp_millis, &Local)
}

/// 以指定時區格式化毫秒時間戳
///
/// 非有限值或超出 ±8.64e15 的時間戳回傳 "Invalid Date"，不會回傳錯誤。
pub fn format_date_in<Tz: TimeZone>(timestamp_millis: f64, tz: &Tz) -> String {
    match civil_date(timestamp_millis, tz) {
        Some(date) => format!(
            "{:02} de {} de {}",
            date.day,
            month_name(date.month),
            era_year(date.year)
        ),
        None => {
            tracing::debug!(timestamp_millis, "Timestamp out of range, using invalid date sentinel");
            INVALID_DATE.to_string()
        }
    }
}

fn civil_date<Tz: TimeZone>(timestamp_millis: f64, tz: &Tz) -> Option<CivilDate> {
    if !timestamp_millis.is_finite() || timestamp_millis.abs() > MAX_TIMESTAMP_MILLIS {
        return None;
    }

    // 小數毫秒向零截斷
    let millis = timestamp_millis.trunc() as i64;

    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => {
            let local = utc.with_timezone(tz);
            Some(CivilDate {
                year: i64::from(local.year()),
                month: local.month(),
                day: local.day(),
            })
        }
        None => Some(extended_civil_date(millis, tz)),
    }
}

/// chrono 只支援到 ±262143 年，更遠的時間直接從天數換算
///
/// 時區位移取最接近的可表示時間點。
fn extended_civil_date<Tz: TimeZone>(millis: i64, tz: &Tz) -> CivilDate {
    let boundary = if millis > 0 {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    };
    let offset_millis = i64::from(tz.offset_from_utc_datetime(&boundary).fix().local_minus_utc()) * 1000;

    civil_from_days((millis + offset_millis).div_euclid(MILLIS_PER_DAY))
}

// 1970-01-01 起算的天數 -> 公曆 (proleptic Gregorian) 年月日
fn civil_from_days(days: i64) -> CivilDate {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);

    CivilDate { year, month, day }
}

fn month_name(month: u32) -> String {
    Utc.with_ymd_and_hms(2000, month, 1, 0, 0, 0)
        .single()
        .map(|date| date.format_localized(MONTH_PATTERN, DATE_LOCALE).to_string())
        .unwrap_or_default()
}

/// 紀元年：西元前的年份不帶負號 (ISO 0 年 = 西元前 1 年)
fn era_year(year: i64) -> i64 {
    if year <= 0 {
        1 - year
    } else {
        year
    }
}

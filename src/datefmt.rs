pub(crate) const DEFAULT_LOCALE: &str = "en-US";

const MS_PER_DAY: i64 = 86_400_000;

/// Long-form date stamp for the page footer: full weekday name, full month
/// name, numeric day, numeric year, ordered per the locale family.
pub(crate) fn format_long_date(locale: &str, timestamp_ms: i64) -> String {
    let days = timestamp_ms.div_euclid(MS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    let weekday = weekday_from_days(days);
    let family = locale_family(locale);
    let weekday_name = weekday_name(family, weekday);
    let month_name = month_name(family, month);
    if family == "de" {
        format!("{weekday_name}, {day}. {month_name} {year}")
    } else {
        format!("{weekday_name}, {month_name} {day}, {year}")
    }
}

pub(crate) fn locale_family(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

// Epoch day 0 (1970-01-01) was a Thursday.
pub(crate) fn weekday_from_days(days: i64) -> u32 {
    ((days + 4).rem_euclid(7)) as u32
}

pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let adjusted_year = year - if month <= 2 { 1 } else { 0 };
    let era = adjusted_year.div_euclid(400);
    let yoe = adjusted_year - era * 400;
    let month = i64::from(month);
    let day = i64::from(day);
    let doy = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096).div_euclid(365);
    let mut year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2).div_euclid(153);
    let day = (doy - (153 * mp + 2).div_euclid(5) + 1) as u32;
    let month = (mp + if mp < 10 { 3 } else { -9 }) as u32;
    if month <= 2 {
        year += 1;
    }
    (year, month, day)
}

pub(crate) fn timestamp_ms_from_civil(year: i64, month: u32, day: u32) -> i64 {
    days_from_civil(year, month, day).saturating_mul(MS_PER_DAY)
}

pub(crate) fn month_name(family: &str, month: u32) -> String {
    let idx = month.saturating_sub(1) as usize;
    let value = match family {
        "de" => [
            "Januar",
            "Februar",
            "Maerz",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        _ => [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
    };
    value.get(idx).copied().unwrap_or_default().to_string()
}

pub(crate) fn weekday_name(family: &str, weekday: u32) -> String {
    let idx = weekday as usize;
    let value = match family {
        "de" => [
            "Sonntag",
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
        ],
        _ => [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
    };
    value.get(idx).copied().unwrap_or_default().to_string()
}

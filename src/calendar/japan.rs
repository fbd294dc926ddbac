//! Japanese national holiday rules.
//!
//! Generates the public holidays of Japan for a single year under the
//! National Holidays Act, as amended:
//!
//! - fixed-date holidays and the "Happy Monday" holidays (moved to a Monday from 2000/2003)
//! - the vernal and autumnal equinox days, using the usual astronomical approximation
//! - era-dependent holidays (Emperor's Birthday, Greenery Day / Showa Day)
//! - one-off holidays for imperial events and the relocated 2020/2021 Olympic holidays
//! - citizens' holidays for a day sandwiched between two holidays
//! - substitute holidays for a holiday falling on Sunday
//!
//! The equinox approximation is valid from 1980 to 2099, which bounds the
//! supported range.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::{HolidayKind, PublicHoliday};

/// Jurisdiction identifier for the built-in Japanese rules.
pub const JURISDICTION: &str = "JP";

/// First year the Japanese rules cover.
pub const FIRST_SUPPORTED_YEAR: i32 = 1980;

/// Last year the Japanese rules cover.
pub const LAST_SUPPORTED_YEAR: i32 = 2099;

const CITIZENS_HOLIDAY: &str = "Citizens' Holiday";
const SUBSTITUTE_HOLIDAY: &str = "Substitute Holiday";

/// Returns the Japanese public holidays of `year`, ordered by date.
///
/// Years outside [`FIRST_SUPPORTED_YEAR`]..=[`LAST_SUPPORTED_YEAR`] produce an
/// empty list; callers are expected to check the range first.
///
/// # Example
///
/// ```
/// use card_ledger::calendar::japan::holidays_for_year;
/// use card_ledger::models::HolidayKind;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2024);
/// let substitute = holidays
///     .iter()
///     .find(|h| h.date == NaiveDate::from_ymd_opt(2024, 2, 12).unwrap())
///     .unwrap();
/// assert_eq!(substitute.kind, HolidayKind::Substitute);
/// ```
pub fn holidays_for_year(year: i32) -> Vec<PublicHoliday> {
    if !(FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
        return Vec::new();
    }

    let statutory = statutory_holidays(year);
    let mut days: BTreeMap<NaiveDate, (&'static str, HolidayKind)> = statutory
        .iter()
        .map(|(date, name)| (*date, (*name, HolidayKind::Statutory)))
        .collect();

    // Before 2007 a citizens' holiday could not land on a substitute day or a
    // Sunday, so substitutes are placed first. From 2007 the substitute moves
    // past any holiday, including citizens' holidays.
    if year < 2007 {
        for date in substitute_holidays(&statutory, &days, false) {
            days.insert(date, (SUBSTITUTE_HOLIDAY, HolidayKind::Substitute));
        }
        for date in citizens_holidays(year, &statutory, &days) {
            days.insert(date, (CITIZENS_HOLIDAY, HolidayKind::Citizens));
        }
    } else {
        for date in citizens_holidays(year, &statutory, &days) {
            days.insert(date, (CITIZENS_HOLIDAY, HolidayKind::Citizens));
        }
        for date in substitute_holidays(&statutory, &days, true) {
            days.insert(date, (SUBSTITUTE_HOLIDAY, HolidayKind::Substitute));
        }
    }

    days.into_iter()
        .map(|(date, (name, kind))| PublicHoliday {
            date,
            name: name.to_string(),
            jurisdiction: JURISDICTION.to_string(),
            kind,
        })
        .collect()
}

/// Holidays named by statute for `year`, including one-off holidays.
fn statutory_holidays(year: i32) -> BTreeMap<NaiveDate, &'static str> {
    let mut entries: Vec<(Option<NaiveDate>, &'static str)> = Vec::new();

    entries.push((ymd(year, 1, 1), "New Year's Day"));
    entries.push(if year < 2000 {
        (ymd(year, 1, 15), "Coming of Age Day")
    } else {
        (nth_monday(year, 1, 2), "Coming of Age Day")
    });
    entries.push((ymd(year, 2, 11), "National Foundation Day"));
    if year >= 2020 {
        entries.push((ymd(year, 2, 23), "Emperor's Birthday"));
    }
    entries.push((ymd(year, 3, vernal_equinox_day(year)), "Vernal Equinox Day"));
    entries.push(match year {
        ..=1988 => (ymd(year, 4, 29), "Emperor's Birthday"),
        1989..=2006 => (ymd(year, 4, 29), "Greenery Day"),
        _ => (ymd(year, 4, 29), "Showa Day"),
    });
    entries.push((ymd(year, 5, 3), "Constitution Memorial Day"));
    if year >= 2007 {
        entries.push((ymd(year, 5, 4), "Greenery Day"));
    }
    entries.push((ymd(year, 5, 5), "Children's Day"));

    match year {
        1996..=2002 => entries.push((ymd(year, 7, 20), "Marine Day")),
        2020 => entries.push((ymd(year, 7, 23), "Marine Day")),
        2021 => entries.push((ymd(year, 7, 22), "Marine Day")),
        2003.. => entries.push((nth_monday(year, 7, 3), "Marine Day")),
        _ => {}
    }

    match year {
        2020 => entries.push((ymd(year, 8, 10), "Mountain Day")),
        2021 => entries.push((ymd(year, 8, 8), "Mountain Day")),
        2016.. => entries.push((ymd(year, 8, 11), "Mountain Day")),
        _ => {}
    }

    entries.push(if year < 2003 {
        (ymd(year, 9, 15), "Respect for the Aged Day")
    } else {
        (nth_monday(year, 9, 3), "Respect for the Aged Day")
    });
    entries.push((
        ymd(year, 9, autumnal_equinox_day(year)),
        "Autumnal Equinox Day",
    ));

    entries.push(match year {
        ..=1999 => (ymd(year, 10, 10), "Health and Sports Day"),
        2000..=2019 => (nth_monday(year, 10, 2), "Health and Sports Day"),
        2020 => (ymd(year, 7, 24), "Sports Day"),
        2021 => (ymd(year, 7, 23), "Sports Day"),
        _ => (nth_monday(year, 10, 2), "Sports Day"),
    });

    entries.push((ymd(year, 11, 3), "Culture Day"));
    entries.push((ymd(year, 11, 23), "Labour Thanksgiving Day"));
    if (1989..=2018).contains(&year) {
        entries.push((ymd(year, 12, 23), "Emperor's Birthday"));
    }

    match year {
        1989 => entries.push((ymd(year, 2, 24), "Funeral of Emperor Showa")),
        1990 => entries.push((ymd(year, 11, 12), "Enthronement Ceremony")),
        1993 => entries.push((ymd(year, 6, 9), "Wedding of Crown Prince Naruhito")),
        2019 => {
            entries.push((ymd(year, 5, 1), "Emperor's Enthronement Day"));
            entries.push((ymd(year, 10, 22), "Enthronement Ceremony"));
        }
        _ => {}
    }

    entries
        .into_iter()
        .filter_map(|(date, name)| date.map(|d| (d, name)))
        .collect()
}

/// Days whose previous and next day are both statutory holidays.
fn citizens_holidays(
    year: i32,
    statutory: &BTreeMap<NaiveDate, &'static str>,
    existing: &BTreeMap<NaiveDate, (&'static str, HolidayKind)>,
) -> Vec<NaiveDate> {
    // The sandwich rule was added at the end of 1985.
    if year < 1986 {
        return Vec::new();
    }

    statutory
        .keys()
        .filter_map(|date| date.checked_add_days(Days::new(2)))
        .filter(|after_next| statutory.contains_key(after_next))
        .filter_map(|after_next| after_next.pred_opt())
        .filter(|candidate| !existing.contains_key(candidate))
        .filter(|candidate| year >= 2007 || candidate.weekday() != Weekday::Sun)
        .collect()
}

/// Substitute days for statutory holidays that fall on Sunday.
///
/// With `skip_holidays` the substitute is the first following day that is not
/// already a holiday; otherwise it is the following Monday, if that Monday is
/// free.
fn substitute_holidays(
    statutory: &BTreeMap<NaiveDate, &'static str>,
    existing: &BTreeMap<NaiveDate, (&'static str, HolidayKind)>,
    skip_holidays: bool,
) -> Vec<NaiveDate> {
    let mut substitutes = Vec::new();

    for date in statutory.keys().filter(|d| d.weekday() == Weekday::Sun) {
        let mut candidate = date.succ_opt();
        if skip_holidays {
            while let Some(day) = candidate.filter(|d| existing.contains_key(d)) {
                candidate = day.succ_opt();
            }
        } else if candidate.is_some_and(|d| existing.contains_key(&d)) {
            candidate = None;
        }

        // Substitutes never spill into the next year: Dec 31 is not a holiday.
        if let Some(day) = candidate.filter(|d| d.year() == date.year()) {
            substitutes.push(day);
        }
    }

    substitutes
}

/// Day of March on which the vernal equinox falls.
fn vernal_equinox_day(year: i32) -> u32 {
    equinox_day(20.8431, year)
}

/// Day of September on which the autumnal equinox falls.
fn autumnal_equinox_day(year: i32) -> u32 {
    equinox_day(23.2488, year)
}

fn equinox_day(base: f64, year: i32) -> u32 {
    let elapsed = year - FIRST_SUPPORTED_YEAR;
    let leap_corrections = elapsed.div_euclid(4);
    let day = base + 0.242194 * f64::from(elapsed) - f64::from(leap_corrections);
    day.floor() as u32
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn nth_monday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dates_of(year: i32) -> Vec<NaiveDate> {
        holidays_for_year(year).into_iter().map(|h| h.date).collect()
    }

    fn kind_on(date_str: &str) -> Option<HolidayKind> {
        let date = make_date(date_str);
        holidays_for_year(date.year())
            .into_iter()
            .find(|h| h.date == date)
            .map(|h| h.kind)
    }

    // ==========================================================================
    // Full-year listings against the published Cabinet Office calendar
    // ==========================================================================
    #[test]
    fn test_holidays_2024() {
        let expected: Vec<NaiveDate> = [
            "2024-01-01", "2024-01-08", "2024-02-11", "2024-02-12", "2024-02-23",
            "2024-03-20", "2024-04-29", "2024-05-03", "2024-05-04", "2024-05-05",
            "2024-05-06", "2024-07-15", "2024-08-11", "2024-08-12", "2024-09-16",
            "2024-09-22", "2024-09-23", "2024-10-14", "2024-11-03", "2024-11-04",
            "2024-11-23",
        ]
        .iter()
        .map(|s| make_date(s))
        .collect();

        assert_eq!(dates_of(2024), expected);
    }

    #[test]
    fn test_holidays_2025() {
        let expected: Vec<NaiveDate> = [
            "2025-01-01", "2025-01-13", "2025-02-11", "2025-02-23", "2025-02-24",
            "2025-03-20", "2025-04-29", "2025-05-03", "2025-05-04", "2025-05-05",
            "2025-05-06", "2025-07-21", "2025-08-11", "2025-09-15", "2025-09-23",
            "2025-10-13", "2025-11-03", "2025-11-23", "2025-11-24",
        ]
        .iter()
        .map(|s| make_date(s))
        .collect();

        assert_eq!(dates_of(2025), expected);
    }

    #[test]
    fn test_holidays_2019_enthronement_week() {
        let dates = dates_of(2019);
        for day in [
            "2019-04-29",
            "2019-04-30",
            "2019-05-01",
            "2019-05-02",
            "2019-05-03",
            "2019-05-04",
            "2019-05-05",
            "2019-05-06",
            "2019-10-22",
        ] {
            assert!(dates.contains(&make_date(day)), "{} should be a holiday", day);
        }
        assert_eq!(kind_on("2019-04-30"), Some(HolidayKind::Citizens));
        assert_eq!(kind_on("2019-05-02"), Some(HolidayKind::Citizens));
        assert_eq!(kind_on("2019-05-06"), Some(HolidayKind::Substitute));
        // No Emperor's Birthday in 2019.
        assert!(!dates.contains(&make_date("2019-12-23")));
        assert!(!dates.contains(&make_date("2019-02-23")));
    }

    // ==========================================================================
    // Substitute holiday rules
    // ==========================================================================
    #[test]
    fn test_substitute_skips_following_holidays() {
        // 2015-05-03 is a Sunday; May 4 and 5 are holidays, so the substitute is May 6.
        assert_eq!(kind_on("2015-05-06"), Some(HolidayKind::Substitute));
    }

    #[test]
    fn test_emperors_birthday_substitute_2018() {
        assert_eq!(kind_on("2018-12-24"), Some(HolidayKind::Substitute));
    }

    #[test]
    fn test_pre_2007_substitute_is_monday_only() {
        // 2006-01-01 was a Sunday.
        assert_eq!(kind_on("2006-01-02"), Some(HolidayKind::Substitute));
        // 2000-01-01 was a Saturday: no substitute.
        assert_eq!(kind_on("2000-01-03"), None);
    }

    #[test]
    fn test_new_year_sunday_2023() {
        assert_eq!(kind_on("2023-01-02"), Some(HolidayKind::Substitute));
    }

    // ==========================================================================
    // Citizens' holiday rules
    // ==========================================================================
    #[test]
    fn test_silver_week_citizens_holiday_2026() {
        // Respect for the Aged Day 2026-09-21, equinox 2026-09-23.
        assert_eq!(kind_on("2026-09-21"), Some(HolidayKind::Statutory));
        assert_eq!(kind_on("2026-09-22"), Some(HolidayKind::Citizens));
        assert_eq!(kind_on("2026-09-23"), Some(HolidayKind::Statutory));
    }

    #[test]
    fn test_silver_week_citizens_holiday_2015() {
        assert_eq!(kind_on("2015-09-22"), Some(HolidayKind::Citizens));
    }

    #[test]
    fn test_may_4_before_2007_is_citizens_holiday() {
        // 1999-05-04 was a Tuesday between Constitution Day and Children's Day.
        assert_eq!(kind_on("1999-05-04"), Some(HolidayKind::Citizens));
    }

    #[test]
    fn test_may_4_from_2007_is_greenery_day() {
        let holiday = holidays_for_year(2010)
            .into_iter()
            .find(|h| h.date == make_date("2010-05-04"))
            .unwrap();
        assert_eq!(holiday.kind, HolidayKind::Statutory);
        assert_eq!(holiday.name, "Greenery Day");
    }

    // ==========================================================================
    // Moved and renamed holidays
    // ==========================================================================
    #[test]
    fn test_olympic_relocations() {
        for day in ["2020-07-23", "2020-07-24", "2020-08-10", "2021-07-22", "2021-07-23"] {
            assert_eq!(kind_on(day), Some(HolidayKind::Statutory), "{}", day);
        }
        // Mountain Day 2021 fell on Sunday 2021-08-08.
        assert_eq!(kind_on("2021-08-09"), Some(HolidayKind::Substitute));
        // The usual dates were working days.
        assert_eq!(kind_on("2020-10-12"), None);
        assert_eq!(kind_on("2021-08-11"), None);
    }

    #[test]
    fn test_happy_monday_transition() {
        assert_eq!(kind_on("1999-01-15"), Some(HolidayKind::Statutory));
        assert_eq!(kind_on("2000-01-10"), Some(HolidayKind::Statutory));
        assert_eq!(kind_on("2002-09-16"), Some(HolidayKind::Substitute));
        assert_eq!(kind_on("2003-09-15"), Some(HolidayKind::Statutory));
        assert_eq!(kind_on("2002-07-20"), Some(HolidayKind::Statutory));
        assert_eq!(kind_on("2003-07-21"), Some(HolidayKind::Statutory));
    }

    #[test]
    fn test_april_29_names_by_era() {
        let name_on = |year: i32| {
            holidays_for_year(year)
                .into_iter()
                .find(|h| h.date == NaiveDate::from_ymd_opt(year, 4, 29).unwrap())
                .unwrap()
                .name
        };
        assert_eq!(name_on(1985), "Emperor's Birthday");
        assert_eq!(name_on(2000), "Greenery Day");
        assert_eq!(name_on(2024), "Showa Day");
    }

    #[test]
    fn test_mountain_day_starts_2016() {
        assert_eq!(kind_on("2015-08-11"), None);
        assert_eq!(kind_on("2016-08-11"), Some(HolidayKind::Statutory));
    }

    // ==========================================================================
    // Equinox approximation
    // ==========================================================================
    #[test]
    fn test_equinox_days() {
        assert_eq!(vernal_equinox_day(2024), 20);
        assert_eq!(autumnal_equinox_day(2024), 22);
        assert_eq!(vernal_equinox_day(2025), 20);
        assert_eq!(autumnal_equinox_day(2025), 23);
        assert_eq!(vernal_equinox_day(2023), 21);
        assert_eq!(autumnal_equinox_day(2012), 22);
    }

    #[test]
    fn test_out_of_range_year_is_empty() {
        assert!(holidays_for_year(1979).is_empty());
        assert!(holidays_for_year(2100).is_empty());
    }

    #[test]
    fn test_every_holiday_is_tagged_jp_and_sorted() {
        for year in FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR {
            let holidays = holidays_for_year(year);
            assert!(holidays.len() >= 12, "{} has too few holidays", year);
            assert!(holidays.windows(2).all(|w| w[0].date < w[1].date));
            assert!(holidays.iter().all(|h| h.jurisdiction == JURISDICTION));
            assert!(holidays.iter().all(|h| h.date.year() == year));
        }
    }
}

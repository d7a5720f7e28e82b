use chrono::{Datelike, Days, Local, Month, NaiveDate};
use nom::character::complete::{char, i32 as year, u32 as number};
use nom::combinator::all_consuming;
use nom::sequence::{terminated, tuple};
use nom::IResult;
use num_traits::FromPrimitive;
use std::convert::From;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Day of the week, numbered from Monday (1) to Sunday (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    pub fn value(&self) -> u32 {
        *self as u32
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            1..=7 => Some(WeekDay::ALL[value as usize - 1]),
            _ => None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
            WeekDay::Sunday => "Sun",
        }
    }
}

impl From<chrono::Weekday> for WeekDay {
    fn from(weekday: chrono::Weekday) -> Self {
        WeekDay::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// A validated calendar date.
///
/// Values are never modified in place: `add_days` and `sub_days` hand back a
/// new date and return `None` once the result would leave the range chrono
/// can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    inner: NaiveDate,
}

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let month_value = Month::from_u32(month).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidDate,
                &format!("month {} is not in 1..=12", month),
            )
        })?;

        if day == 0 || day > days_of_month(&month_value, year) {
            return Err(Error::new(
                ErrorKind::InvalidDate,
                &format!("{} {} has no day {}", month_value.name(), year, day),
            ));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate::from)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidDate,
                    &format!("year {} is out of range", year),
                )
            })
    }

    pub fn today() -> Self {
        CalendarDate::from(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    fn chrono_month(&self) -> Month {
        // month() is always within 1..=12 for a NaiveDate
        Month::from_u32(self.inner.month()).unwrap_or(Month::January)
    }

    /// English name of the month, e.g. `February`.
    pub fn month_name(&self) -> &'static str {
        self.chrono_month().name()
    }

    pub fn weekday(&self) -> WeekDay {
        WeekDay::from(self.inner.weekday())
    }

    pub fn days_in_month(&self) -> u32 {
        days_of_month(&self.chrono_month(), self.year())
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.inner
            .checked_add_days(Days::new(days))
            .map(CalendarDate::from)
    }

    pub fn sub_days(&self, days: u64) -> Option<Self> {
        self.inner
            .checked_sub_days(Days::new(days))
            .map(CalendarDate::from)
    }

    /// Shifts by a signed number of days, failing when the result cannot be
    /// represented.
    pub fn shifted(&self, days: i64) -> Result<Self> {
        let shifted = if days < 0 {
            self.sub_days(days.unsigned_abs())
        } else {
            self.add_days(days as u64)
        };

        shifted.ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidDate,
                &format!("{} shifted by {} days is out of range", self, days),
            )
        })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(inner: NaiveDate) -> Self {
        CalendarDate { inner }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

fn ymd(input: &str) -> IResult<&str, (i32, u32, u32)> {
    all_consuming(tuple((
        terminated(year, char('-')),
        terminated(number, char('-')),
        number,
    )))(input)
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (year, month, day)) = ymd(s.trim())?;
        CalendarDate::from_ymd(year, month, day)
    }
}

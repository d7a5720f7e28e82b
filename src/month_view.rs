use itertools::Itertools;
use std::fmt;
use std::io;
use std::mem;

use crate::date::{CalendarDate, WeekDay};

/// Text rendering of the month containing a reference date.
///
/// The first line holds the upper-case month name and year, the second the
/// weekday header starting on Monday, followed by one line per week. Each day
/// occupies four characters: the day number right-aligned in three columns
/// and a marker that is the today symbol for the reference date and a space
/// otherwise.
#[derive(Debug, Clone)]
pub struct MonthView {
    reference: CalendarDate,
    today_symbol: Option<char>,
}

impl MonthView {
    const CELL_WIDTH: usize = 4;

    pub fn new(reference: CalendarDate) -> Self {
        MonthView {
            reference,
            today_symbol: Some('*'),
        }
    }

    pub fn today_symbol(mut self, symbol: char) -> Self {
        self.today_symbol = Some(symbol);
        self
    }

    pub fn today_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.today_symbol = symbol_opt;
        self
    }

    pub fn no_today_symbol(mut self) -> Self {
        self.today_symbol = None;
        self
    }

    pub fn title(&self) -> String {
        format!(
            "{} {}",
            self.reference.month_name().to_uppercase(),
            self.reference.year()
        )
    }

    pub fn header() -> String {
        WeekDay::ALL.iter().map(WeekDay::short_name).join(" ")
    }

    pub fn weeks(&self) -> Vec<String> {
        let reference = self.reference;
        let first = reference
            .sub_days(u64::from(reference.day() - 1))
            .unwrap_or(reference);
        let offset = (first.weekday().value() - 1) as usize;

        log::debug!(
            "Rendering {} starting on {:?}",
            self.title(),
            first.weekday()
        );

        let mut weeks = Vec::with_capacity(6);
        let mut line = " ".repeat(offset * Self::CELL_WIDTH);
        let mut current = Some(first);

        while let Some(date) = current.filter(|d| d.month() == first.month()) {
            let marker = match self.today_symbol {
                Some(symbol) if date == reference => symbol,
                _ => ' ',
            };
            line.push_str(&format!("{:>3}{}", date.day(), marker));

            if date.weekday() == WeekDay::Sunday {
                weeks.push(mem::take(&mut line));
            }

            current = date.add_days(1);
        }

        if !line.is_empty() {
            weeks.push(line);
        }

        weeks
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title(), Self::header()];
        lines.extend(self.weeks());
        lines
    }

    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

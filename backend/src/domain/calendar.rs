//! Calendar domain logic for the goal tracker.
//!
//! Builds month grid view models for a goal: padding cells for the
//! days-of-week before the 1st, then one cell per day carrying the flags the
//! UI needs (in range, completed, today, toggleable). Everything here is a
//! pure function of its arguments; there is no hidden focus state, so any
//! month can be rendered for any goal at any time.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarDay, CalendarDayType, CalendarMonth};

use crate::domain::dates::date_key;
use crate::domain::models::Goal;

/// Generate the month grid for a goal.
///
/// `month` is 1-based and must be valid; the HTTP layer rejects anything
/// outside 1..=12 before calling. Assumes `goal.start_date <= goal.end_date`.
pub fn build_month_grid(goal: &Goal, year: i32, month: u32, today: NaiveDate) -> CalendarMonth {
    let total_days = days_in_month(month, year);
    let first_day = first_day_of_month(month, year);

    let mut days = Vec::with_capacity((first_day + total_days) as usize);

    // Empty cells for the days-of-week before the 1st
    for _ in 0..first_day {
        days.push(CalendarDay {
            day: 0,
            date: None,
            in_range: false,
            is_completed: false,
            is_today: false,
            can_toggle: false,
            day_type: CalendarDayType::PaddingBefore,
        });
    }

    for day in 1..=total_days {
        // Valid by construction: day is within the month's length
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("day within month length");
        let key = date_key(date);

        let in_range = date >= goal.start_date && date <= goal.end_date;
        let is_completed = goal.completed_dates.contains(&key);
        let can_toggle = in_range && date <= today;

        days.push(CalendarDay {
            day,
            date: Some(key),
            in_range,
            is_completed,
            is_today: date == today,
            can_toggle,
            day_type: CalendarDayType::MonthDay,
        });
    }

    CalendarMonth {
        month,
        year,
        first_day_of_week: first_day,
        days,
    }
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the day-of-week index of the 1st of the month (0 = Sunday)
pub fn first_day_of_month(month: u32, year: i32) -> u32 {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
        date.weekday().num_days_from_sunday()
    } else {
        0
    }
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Navigate to the previous month
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Navigate to the next month
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

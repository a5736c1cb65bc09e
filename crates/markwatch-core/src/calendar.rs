//! Calendar state for the custom date picker.
//!
//! The picker binds to a read-only text field and shows a month grid
//! of 42 cells (six full weeks, Sunday first). Dates are displayed and
//! parsed as `DD-MM-YYYY`.

use chrono::{Datelike, NaiveDate};

/// Display format of a picked date.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Cells in the month grid (6 weeks x 7 days).
pub const GRID_CELLS: usize = 42;

/// Full month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
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
];

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Whether the calendar popover is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    #[default]
    Closed,
    Open,
}

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Prev,
    Next,
}

impl Nav {
    const fn delta(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month shown in the cell.
    pub day: u32,
    /// `false` for leading days of the previous month and trailing days
    /// of the next month. Only in-month cells are selectable.
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Format a date as `DD-MM-YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `DD-MM-YYYY` string.
///
/// # Errors
///
/// Returns the chrono parse error if `text` is not a valid date in that
/// format.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
}

/// Number of days in a zero-based `month` of `year`.
fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    let (next_year, next_month) = if month0 >= 11 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}

/// State of one date picker instance.
///
/// Lives as long as the bound input field. After any selection the
/// visible month and year equal the selected date's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    visible_month: u32,
    visible_year: i32,
    selected: Option<NaiveDate>,
    phase: PickerPhase,
}

impl CalendarState {
    /// Create a closed picker showing the month of `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            visible_month: today.month0(),
            visible_year: today.year(),
            selected: None,
            phase: PickerPhase::Closed,
        }
    }

    /// Zero-based visible month.
    #[must_use]
    pub const fn visible_month(&self) -> u32 {
        self.visible_month
    }

    #[must_use]
    pub const fn visible_year(&self) -> i32 {
        self.visible_year
    }

    #[must_use]
    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub const fn phase(&self) -> PickerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == PickerPhase::Open
    }

    /// Text for the bound field: the formatted selection, or `""`.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.selected.map(format_date).unwrap_or_default()
    }

    pub fn open(&mut self) {
        self.phase = PickerPhase::Open;
    }

    pub fn close(&mut self) {
        self.phase = PickerPhase::Closed;
    }

    /// Move the visible month one step, carrying into the year.
    ///
    /// Leaves the selection and the open/closed phase unchanged.
    pub fn navigate(&mut self, nav: Nav) {
        let month = i32::try_from(self.visible_month).unwrap_or(0) + nav.delta();
        if month < 0 {
            self.visible_month = 11;
            self.visible_year -= 1;
        } else if month > 11 {
            self.visible_month = 0;
            self.visible_year += 1;
        } else {
            self.visible_month = month.unsigned_abs();
        }
    }

    /// Select `date`, snap the view to it, and close.
    ///
    /// Returns the formatted value for the bound field; callers emit it
    /// as a change notification.
    pub fn select(&mut self, date: NaiveDate) -> String {
        self.selected = Some(date);
        self.visible_month = date.month0();
        self.visible_year = date.year();
        self.phase = PickerPhase::Closed;
        tracing::debug!(%date, "date selected");
        format_date(date)
    }

    /// Select a day of the visible month.
    ///
    /// Returns `None` (and changes nothing) if `day` does not exist in
    /// the visible month.
    pub fn select_day(&mut self, day: u32) -> Option<String> {
        let date = NaiveDate::from_ymd_opt(self.visible_year, self.visible_month + 1, day)?;
        Some(self.select(date))
    }

    /// Select `today`.
    pub fn select_today(&mut self, today: NaiveDate) -> String {
        self.select(today)
    }

    /// Clear the selection and close. The visible month is kept.
    pub fn clear(&mut self) {
        self.selected = None;
        self.phase = PickerPhase::Closed;
    }

    /// Set the selection from `DD-MM-YYYY` text without closing.
    ///
    /// Empty text is ignored.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed text; the state is left
    /// unchanged.
    pub fn set_value(&mut self, text: &str) -> Result<(), chrono::ParseError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let date = parse_date(text)?;
        self.selected = Some(date);
        self.visible_month = date.month0();
        self.visible_year = date.year();
        Ok(())
    }

    /// Header text, e.g. `"March 2025"`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = usize::try_from(self.visible_month)
            .ok()
            .and_then(|m| MONTH_NAMES.get(m))
            .copied()
            .unwrap_or_default();
        format!("{name} {}", self.visible_year)
    }

    /// Build the 42-cell grid for the visible month.
    ///
    /// Leading cells are the tail of the previous month (one per weekday
    /// before the 1st, Sunday = 0); trailing cells are the start of the
    /// next month. Returns an empty grid only for years chrono cannot
    /// represent.
    #[must_use]
    pub fn grid(&self, today: NaiveDate) -> Vec<DayCell> {
        let Some(first) = NaiveDate::from_ymd_opt(self.visible_year, self.visible_month + 1, 1)
        else {
            return Vec::new();
        };
        let Some(days) = days_in_month(self.visible_year, self.visible_month) else {
            return Vec::new();
        };
        let prev_days = first.pred_opt().map_or(31, |d| d.day());
        let leading = first.weekday().num_days_from_sunday();

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for i in (0..leading).rev() {
            cells.push(DayCell {
                day: prev_days - i,
                in_month: false,
                is_today: false,
                is_selected: false,
            });
        }
        for day in 1..=days {
            let date = first.with_day(day);
            cells.push(DayCell {
                day,
                in_month: true,
                is_today: date == Some(today),
                is_selected: date.is_some() && date == self.selected,
            });
        }
        let mut next = 1;
        while cells.len() < GRID_CELLS {
            cells.push(DayCell {
                day: next,
                in_month: false,
                is_today: false,
                is_selected: false,
            });
            next += 1;
        }
        cells
    }
}

//! Calendar helpers. The browser clock is the only date source on wasm, so
//! everything funnels through `today()`.

use chrono::NaiveDate;
use shared::MonthKey;

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn current_month() -> MonthKey {
    MonthKey::from_date(today())
}

/// `dd/mm/yyyy`, the display form used across tables.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `yyyy-mm-dd` for `<input type="date">` values.
pub fn format_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `Tháng M/YYYY` label for month selectors.
pub fn month_label(month: MonthKey) -> String {
    format!("Tháng {}/{}", month.month, month.year)
}

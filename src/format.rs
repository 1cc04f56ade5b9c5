use chrono::{Datelike, Local, NaiveDate};

pub const MONTHS_SHORT: [&str; 12] = [
    "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
];

pub const MONTHS_FULL: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn group_thousands(units: i64) -> String {
    let raw = units.to_string();
    let mut grouped = String::new();
    let digits: Vec<char> = raw.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }
    grouped
}

// it-IT style: dot for thousands, comma for decimals
pub fn eur(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "€ {}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

pub fn month_short(month: u32) -> &'static str {
    MONTHS_SHORT[(month as usize - 1).min(11)]
}

pub fn month_full(month: u32) -> &'static str {
    MONTHS_FULL[(month as usize - 1).min(11)]
}

pub fn date_short(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_short(date.month()))
}

pub fn date_medium(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_short(date.month()), date.year())
}

pub fn date_long(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_full(date.month()), date.year())
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn prev_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_m, next_y) = next_month(month, year);
    first_of_month(next_y, next_m)
        .signed_duration_since(first_of_month(year, month))
        .num_days() as u32
}

// monday-first offset of the month's first day, for the calendar grid
pub fn leading_blanks(year: i32, month: u32) -> usize {
    first_of_month(year, month).weekday().num_days_from_monday() as usize
}

// previous/next entry around the current year in the server-reported list
pub fn year_neighbors(years: &[i32], current: i32) -> (Option<i32>, Option<i32>) {
    match years.iter().position(|y| *y == current) {
        Some(index) => {
            let before = index.checked_sub(1).map(|i| years[i]);
            let after = years.get(index + 1).copied();
            (before, after)
        }
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eur_groups_thousands_and_uses_comma() {
        assert_eq!(eur(0.0), "€ 0,00");
        assert_eq!(eur(1234.5), "€ 1.234,50");
        assert_eq!(eur(1_000_000.0), "€ 1.000.000,00");
        assert_eq!(eur(-1234.56), "€ -1.234,56");
        assert_eq!(eur(19.999), "€ 20,00");
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        assert_eq!(eur(-0.001), "€ 0,00");
    }

    #[test]
    fn month_wrapping() {
        assert_eq!(prev_month(1, 2026), (12, 2025));
        assert_eq!(prev_month(7, 2026), (6, 2026));
        assert_eq!(next_month(12, 2025), (1, 2026));
        assert_eq!(next_month(3, 2026), (4, 2026));
    }

    #[test]
    fn calendar_grid_math() {
        // june 2026 starts on a monday and has 30 days
        assert_eq!(leading_blanks(2026, 6), 0);
        assert_eq!(days_in_month(2026, 6), 30);
        // february of a leap year
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        // march 2026 starts on a sunday
        assert_eq!(leading_blanks(2026, 3), 6);
    }

    #[test]
    fn year_stepping_is_bounded_by_the_server_list() {
        let years = [2024, 2025, 2026];
        assert_eq!(year_neighbors(&years, 2024), (None, Some(2025)));
        assert_eq!(year_neighbors(&years, 2025), (Some(2024), Some(2026)));
        assert_eq!(year_neighbors(&years, 2026), (Some(2025), None));
        assert_eq!(year_neighbors(&years, 2030), (None, None));
    }

    #[test]
    fn italian_date_rendering() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(date_short(date), "5 Mar");
        assert_eq!(date_medium(date), "5 Mar 2026");
        assert_eq!(date_long(date), "5 Marzo 2026");
        assert_eq!(iso(date), "2026-03-05");
    }
}

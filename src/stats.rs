//! Derived figures the client computes itself; everything else is
//! displayed as the server reports it.

use chrono::{Datelike, NaiveDate};

use crate::models::Category;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BudgetHealth {
    InLinea,
    Attenzione,
    Superato,
}

impl BudgetHealth {
    pub fn label(self) -> &'static str {
        match self {
            BudgetHealth::InLinea => "In linea",
            BudgetHealth::Attenzione => "Attenzione",
            BudgetHealth::Superato => "Superato",
        }
    }
}

// percentage of the limit spent, clamped to 100 for the progress bar
pub fn budget_progress(spent: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 0.0;
    }
    (spent / limit * 100.0).min(100.0)
}

pub fn budget_health(spent: f64, limit: f64) -> BudgetHealth {
    if spent > limit {
        return BudgetHealth::Superato;
    }
    if limit > 0.0 && spent / limit > 0.8 {
        return BudgetHealth::Attenzione;
    }
    BudgetHealth::InLinea
}

pub fn budget_overrun(spent: f64, limit: f64) -> f64 {
    (spent - limit).max(0.0)
}

pub fn goal_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0)
}

// whole months between today and the deadline, ignoring the day of month
pub fn months_until(today: NaiveDate, deadline: NaiveDate) -> i32 {
    (deadline.year() - today.year()) * 12 + deadline.month() as i32 - today.month() as i32
}

// None when there is no usable deadline, 0 when the goal is already funded
pub fn monthly_savings(
    target: f64,
    current: f64,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<f64> {
    let deadline = deadline?;
    let months = months_until(today, deadline);
    if months <= 0 {
        return None;
    }
    let remaining = target - current;
    if remaining <= 0.0 {
        return Some(0.0);
    }
    Some(remaining / months as f64)
}

// a budget can never be reassigned onto its own category
pub fn reassign_targets<'a>(categories: &'a [Category], own: &str) -> Vec<&'a Category> {
    categories.iter().filter(|c| c.name != own).collect()
}

pub fn spent_for(chart: &[crate::models::CategoryAmount], category: &str) -> f64 {
    chart
        .iter()
        .find(|entry| entry.category == category)
        .map(|entry| entry.amount)
        .unwrap_or(0.0)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PasswordReport {
    pub long_enough: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordReport {
    pub fn score(self) -> u8 {
        [
            self.long_enough,
            self.has_upper,
            self.has_lower,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    pub fn label(self) -> &'static str {
        match self.score() {
            0..=2 => "Debole",
            3..=4 => "Media",
            _ => "Forte",
        }
    }
}

pub fn password_report(password: &str) -> PasswordReport {
    PasswordReport {
        long_enough: password.chars().count() >= 8,
        has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special: password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ninety_percent_is_a_warning() {
        // limit 500, spent 450 -> 90% -> "Attenzione"
        assert_eq!(budget_progress(450.0, 500.0), 90.0);
        assert_eq!(budget_health(450.0, 500.0), BudgetHealth::Attenzione);
    }

    #[test]
    fn over_limit_is_superato_with_overage() {
        assert_eq!(budget_health(520.0, 500.0), BudgetHealth::Superato);
        assert!((budget_overrun(520.0, 500.0) - 20.0).abs() < 1e-9);
        assert_eq!(budget_progress(520.0, 500.0), 100.0);
    }

    #[test]
    fn exactly_at_limit_is_still_a_warning() {
        assert_eq!(budget_health(500.0, 500.0), BudgetHealth::Attenzione);
        assert_eq!(budget_overrun(500.0, 500.0), 0.0);
    }

    #[test]
    fn well_under_limit_is_in_linea() {
        assert_eq!(budget_health(100.0, 500.0), BudgetHealth::InLinea);
        assert_eq!(budget_health(400.0, 500.0), BudgetHealth::InLinea);
    }

    #[test]
    fn zero_limit_never_divides() {
        assert_eq!(budget_progress(50.0, 0.0), 0.0);
        assert_eq!(budget_health(50.0, 0.0), BudgetHealth::Superato);
    }

    #[test]
    fn monthly_savings_example() {
        // target 2000, current 500, deadline 10 months out -> 150/month
        let today = date(2026, 2, 15);
        let deadline = Some(date(2026, 12, 1));
        assert_eq!(monthly_savings(2000.0, 500.0, deadline, today), Some(150.0));
    }

    #[test]
    fn funded_goal_needs_nothing_per_month() {
        let today = date(2026, 2, 15);
        let deadline = Some(date(2026, 12, 1));
        assert_eq!(monthly_savings(2000.0, 2500.0, deadline, today), Some(0.0));
    }

    #[test]
    fn missing_or_passed_deadline_yields_none() {
        let today = date(2026, 2, 15);
        assert_eq!(monthly_savings(2000.0, 500.0, None, today), None);
        assert_eq!(
            monthly_savings(2000.0, 500.0, Some(date(2026, 1, 31)), today),
            None
        );
        // same month counts as passed
        assert_eq!(
            monthly_savings(2000.0, 500.0, Some(date(2026, 2, 28)), today),
            None
        );
    }

    #[test]
    fn goal_progress_clamps() {
        assert_eq!(goal_progress(500.0, 2000.0), 25.0);
        assert_eq!(goal_progress(2500.0, 2000.0), 100.0);
        assert_eq!(goal_progress(10.0, 0.0), 0.0);
    }

    #[test]
    fn reassign_targets_exclude_own_category() {
        let categories: Vec<Category> = serde_json::from_str(
            r#"[{"id":1,"name":"Spesa"},{"id":2,"name":"Affitto"},{"id":3,"name":"Svago"}]"#,
        )
        .unwrap();
        let targets = reassign_targets(&categories, "Affitto");
        let names: Vec<&str> = targets.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Spesa", "Svago"]);
    }

    #[test]
    fn password_scoring_matches_requirements() {
        assert_eq!(password_report("").score(), 0);
        let weak = password_report("abc");
        assert_eq!(weak.score(), 1);
        assert_eq!(weak.label(), "Debole");
        let medium = password_report("Abcdefgh");
        assert_eq!(medium.score(), 3);
        assert_eq!(medium.label(), "Media");
        let strong = password_report("Abcdefg1!");
        assert_eq!(strong.score(), 5);
        assert_eq!(strong.label(), "Forte");
    }

    #[test]
    fn spent_lookup_defaults_to_zero() {
        let chart: Vec<crate::models::CategoryAmount> =
            serde_json::from_str(r#"[{"category":"Spesa","amount":321.0}]"#).unwrap();
        assert_eq!(spent_for(&chart, "Spesa"), 321.0);
        assert_eq!(spent_for(&chart, "Svago"), 0.0);
    }
}

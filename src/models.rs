use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MovementType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl MovementType {
    pub fn label(self) -> &'static str {
        match self {
            MovementType::Income => "Entrata",
            MovementType::Expense => "Spesa",
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            MovementType::Income => "INCOME",
            MovementType::Expense => "EXPENSE",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub is_superuser: bool,
}

impl User {
    // prefers the real name, falls back to the username
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim().to_string();
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_planned: bool,
    #[serde(default)]
    pub is_confirmed: Option<bool>,
    #[serde(default)]
    pub from_recurring_id: Option<i64>,
}

impl Movement {
    // a spawned occurrence the user has not yet confirmed
    pub fn awaits_confirmation(&self) -> bool {
        self.from_recurring_id.is_some() && !self.is_confirmed.unwrap_or(true)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MovementPayload {
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub is_planned: bool,
}

impl MovementPayload {
    pub fn from_movement(movement: &Movement) -> Self {
        Self {
            kind: movement.kind,
            date: movement.date,
            amount: movement.amount,
            category: movement.category.clone(),
            description: movement.description.clone(),
            is_planned: movement.is_planned,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub color: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub applicable_months: Option<Vec<u32>>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub amount: f64,
    pub applicable_months: Option<Vec<u32>>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RecurringExpense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_recurrence")]
    pub recurrence_type: String,
    pub day_of_month: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

fn default_recurrence() -> String {
    "monthly".to_string()
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RecurringPayload {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub recurrence_type: String,
    pub day_of_month: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct GoalPayload {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub color: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Family {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FamilyPayload {
    pub name: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: String,
}

// the SMTP password is write-only: the server blanks it on read and the
// client must never pre-fill it back into the form
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    pub from_email: String,
    pub use_tls: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            id: None,
            smtp_server: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: String::new(),
            use_tls: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct BudgetStatusEntry {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    #[serde(default)]
    pub planned: f64,
    #[serde(default)]
    pub total_spent: f64,
    pub remaining: f64,
    pub percentage: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct BudgetStatusResponse {
    pub budgets: Vec<BudgetStatusEntry>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ChartData {
    pub expenses_by_category: Vec<CategoryAmount>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AvailableYears {
    pub years: Vec<i32>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SearchMovement {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SearchRecurring {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SearchBuckets {
    pub movements: Vec<SearchMovement>,
    pub categories: Vec<Category>,
    pub recurring_expenses: Vec<SearchRecurring>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SearchResults {
    pub total_results: usize,
    pub results: SearchBuckets,
}

// client-side validation, caught before anything is dispatched
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "L'importo non è un numero valido".to_string())?;
    if amount <= 0.0 {
        return Err("L'importo deve essere maggiore di zero".to_string());
    }
    Ok(amount)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| "La data non è valida".to_string())
}

impl MovementPayload {
    pub fn from_form(
        kind: MovementType,
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
        is_planned: bool,
    ) -> Result<Self, String> {
        if category.trim().is_empty() {
            return Err("Seleziona una categoria".to_string());
        }
        let description = description.trim();
        Ok(Self {
            kind,
            date: parse_date(date)?,
            amount: parse_amount(amount)?,
            category: category.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            is_planned,
        })
    }
}

impl RecurringPayload {
    pub fn from_form(
        name: &str,
        amount: &str,
        category: &str,
        description: &str,
        day: &str,
        start: &str,
        end: &str,
    ) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Il nome è obbligatorio".to_string());
        }
        if category.trim().is_empty() {
            return Err("Seleziona una categoria".to_string());
        }
        let day_of_month: u32 = day
            .trim()
            .parse()
            .map_err(|_| "Il giorno del mese non è valido".to_string())?;
        if !(1..=31).contains(&day_of_month) {
            return Err("Il giorno del mese deve essere tra 1 e 31".to_string());
        }
        let start_date = parse_date(start)?;
        let end_date = if end.trim().is_empty() {
            None
        } else {
            let end_date = parse_date(end)?;
            if end_date < start_date {
                return Err("La data di fine precede la data di inizio".to_string());
            }
            Some(end_date)
        };
        let description = description.trim();
        Ok(Self {
            name: name.to_string(),
            amount: parse_amount(amount)?,
            category: category.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            recurrence_type: "monthly".to_string(),
            day_of_month,
            start_date,
            end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_type_tag_round_trips() {
        let json = serde_json::to_string(&MovementType::Expense).unwrap();
        assert_eq!(json, "\"EXPENSE\"");
        let parsed: MovementType = serde_json::from_str("\"INCOME\"").unwrap();
        assert_eq!(parsed, MovementType::Income);
    }

    #[test]
    fn movement_deserializes_server_shape() {
        let json = r#"{
            "id": 7,
            "type": "EXPENSE",
            "date": "2026-03-05",
            "amount": 42.5,
            "category": "Spesa",
            "description": "supermercato",
            "is_planned": false,
            "is_confirmed": false,
            "from_recurring_id": 3,
            "created_at": "2026-03-05T10:00:00",
            "family_id": 1
        }"#;
        let movement: Movement = serde_json::from_str(json).unwrap();
        assert_eq!(movement.kind, MovementType::Expense);
        assert_eq!(movement.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert!(movement.awaits_confirmation());
    }

    #[test]
    fn confirmed_occurrence_needs_no_confirmation() {
        let json = r#"{"id":1,"type":"EXPENSE","date":"2026-01-01","amount":10.0,
            "category":"Affitto","is_confirmed":true,"from_recurring_id":9}"#;
        let movement: Movement = serde_json::from_str(json).unwrap();
        assert!(!movement.awaits_confirmation());
    }

    #[test]
    fn manual_movement_needs_no_confirmation() {
        let json = r#"{"id":1,"type":"INCOME","date":"2026-01-01","amount":10.0,"category":"Stipendio"}"#;
        let movement: Movement = serde_json::from_str(json).unwrap();
        assert!(!movement.awaits_confirmation());
    }

    // saving an untouched edit form must round-trip every field unchanged
    #[test]
    fn payload_from_movement_preserves_fields() {
        let json = r#"{"id":4,"type":"EXPENSE","date":"2026-02-11","amount":19.99,
            "category":"Ristoranti","description":"pizza","is_planned":true}"#;
        let movement: Movement = serde_json::from_str(json).unwrap();
        let payload = MovementPayload::from_movement(&movement);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "EXPENSE");
        assert_eq!(value["date"], "2026-02-11");
        assert_eq!(value["amount"], 19.99);
        assert_eq!(value["category"], "Ristoranti");
        assert_eq!(value["description"], "pizza");
        assert_eq!(value["is_planned"], true);
    }

    #[test]
    fn budget_months_accept_null_and_list() {
        let every: Budget =
            serde_json::from_str(r#"{"id":1,"category":"Spesa","amount":500.0,"applicable_months":null}"#)
                .unwrap();
        assert_eq!(every.applicable_months, None);
        let some: Budget =
            serde_json::from_str(r#"{"id":2,"category":"Vacanze","amount":200.0,"applicable_months":[6,7,8]}"#)
                .unwrap();
        assert_eq!(some.applicable_months, Some(vec![6, 7, 8]));
    }

    #[test]
    fn smtp_password_defaults_to_blank_on_read() {
        let json = r#"{"id":1,"smtp_server":"smtp.example.com","smtp_port":587,
            "smtp_username":"mailer","from_email":"noreply@example.com","use_tls":true}"#;
        let config: SmtpConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.smtp_password, "");
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn search_results_deserialize_buckets() {
        let json = r##"{
            "query": "aff",
            "total_results": 2,
            "results": {
                "movements": [{"id":1,"type":"EXPENSE","date":"2026-01-02","amount":650.0,"category":"Affitto","description":null}],
                "categories": [{"id":3,"name":"Affitto","icon":null,"color":"#10b981"}],
                "recurring_expenses": []
            }
        }"##;
        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.total_results, 2);
        assert_eq!(results.results.movements.len(), 1);
        assert_eq!(results.results.categories[0].name, "Affitto");
        assert!(results.results.recurring_expenses.is_empty());
    }

    #[test]
    fn form_rejects_bad_amounts_and_dates() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert_eq!(parse_amount("12,50"), Ok(12.5));
        assert_eq!(parse_amount(" 7.25 "), Ok(7.25));
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("").is_err());
        assert_eq!(
            parse_date("2026-03-05"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        );
    }

    #[test]
    fn form_requires_a_category() {
        let err = MovementPayload::from_form(
            MovementType::Expense,
            "2026-03-05",
            "10",
            "  ",
            "",
            false,
        );
        assert!(err.is_err());
        let ok = MovementPayload::from_form(
            MovementType::Income,
            "2026-03-05",
            "1200",
            "Stipendio",
            "",
            false,
        )
        .unwrap();
        assert_eq!(ok.description, None);
        assert_eq!(ok.amount, 1200.0);
    }

    #[test]
    fn recurring_form_validates_its_fields() {
        assert!(RecurringPayload::from_form("", "10", "Casa", "", "1", "2026-01-01", "").is_err());
        assert!(RecurringPayload::from_form("Rata", "10", "", "", "1", "2026-01-01", "").is_err());
        assert!(RecurringPayload::from_form("Rata", "10", "Casa", "", "0", "2026-01-01", "").is_err());
        assert!(RecurringPayload::from_form("Rata", "10", "Casa", "", "32", "2026-01-01", "").is_err());
        assert!(RecurringPayload::from_form("Rata", "abc", "Casa", "", "5", "2026-01-01", "").is_err());
        assert!(RecurringPayload::from_form("Rata", "10", "Casa", "", "5", "not-a-date", "").is_err());
        // end date cannot precede the start date
        assert!(
            RecurringPayload::from_form("Rata", "10", "Casa", "", "5", "2026-06-01", "2026-01-01")
                .is_err()
        );
    }

    #[test]
    fn recurring_form_builds_the_payload() {
        let payload = RecurringPayload::from_form(
            "Affitto",
            "650",
            "Casa",
            " canone ",
            "5",
            "2026-01-01",
            "",
        )
        .unwrap();
        assert_eq!(payload.name, "Affitto");
        assert_eq!(payload.amount, 650.0);
        assert_eq!(payload.day_of_month, 5);
        assert_eq!(payload.recurrence_type, "monthly");
        assert_eq!(payload.description.as_deref(), Some("canone"));
        assert_eq!(payload.end_date, None);
        let bounded = RecurringPayload::from_form(
            "Rata",
            "120",
            "Auto",
            "",
            "10",
            "2026-01-01",
            "2026-12-31",
        )
        .unwrap();
        assert!(bounded.end_date.is_some());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let with_name: User = serde_json::from_str(
            r#"{"id":1,"username":"mrossi","first_name":"Mario","last_name":"Rossi","is_superuser":false}"#,
        )
        .unwrap();
        assert_eq!(with_name.display_name(), "Mario Rossi");
        let bare: User =
            serde_json::from_str(r#"{"id":2,"username":"admin","is_superuser":true}"#).unwrap();
        assert_eq!(bare.display_name(), "admin");
    }
}

//! One explicit record type per list domain. The backend speaks JSON with
//! Mongo-style `_id` strings and kebab-case category slugs; sample
//! collections that never leave the client use plain integer ids.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::list::Searchable;

/// A managed account as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
    pub category: Category,
}

impl Searchable for User {
    fn haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.email,
            self.role.label(),
            self.category.label()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employee, Role::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

/// The six stock categories the shop backend is organised around. The wire
/// form doubles as the URL path segment, e.g. `/animal-feeding/revenue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AnimalFeeding,
    FreshOil,
    Godown,
    Hardware,
    Stationery,
    Printing,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AnimalFeeding,
        Category::FreshOil,
        Category::Godown,
        Category::Hardware,
        Category::Stationery,
        Category::Printing,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::AnimalFeeding => "animal-feeding",
            Category::FreshOil => "fresh-oil",
            Category::Godown => "godown",
            Category::Hardware => "hardware",
            Category::Stationery => "stationery",
            Category::Printing => "printing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::AnimalFeeding => "Animal Feeding",
            Category::FreshOil => "Fresh Oil",
            Category::Godown => "Godown",
            Category::Hardware => "Hardware",
            Category::Stationery => "Stationery",
            Category::Printing => "Printing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == s)
    }
}

/// Aggregation window for the orders and revenue endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Month => "Month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// Which sample report dataset the reports page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    UserActivity,
    Sales,
    SystemEvents,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::UserActivity,
        ReportKind::Sales,
        ReportKind::SystemEvents,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::UserActivity => "User Activity",
            ReportKind::Sales => "Sales",
            ReportKind::SystemEvents => "System Events",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ReportKind::UserActivity => "user-activity",
            ReportKind::Sales => "sales",
            ReportKind::SystemEvents => "system-events",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == s)
    }
}

/// A report row rendered as a flat list of labelled fields, so the reports
/// page can display the three datasets with one card component.
pub trait ReportRow {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

fn fields_haystack(row: &impl ReportRow) -> String {
    row.fields()
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityRow {
    pub id: u32,
    pub name: String,
    pub action: String,
    pub date: Date,
}

impl ReportRow for UserActivityRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Action", self.action.clone()),
            ("Date", self.date.to_string()),
        ]
    }
}

impl Searchable for UserActivityRow {
    fn haystack(&self) -> String {
        fields_haystack(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRow {
    pub id: u32,
    pub item: String,
    pub amount_usd: u32,
    pub date: Date,
}

impl ReportRow for SaleRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Item", self.item.clone()),
            ("Amount", format!("${}", self.amount_usd)),
            ("Date", self.date.to_string()),
        ]
    }
}

impl Searchable for SaleRow {
    fn haystack(&self) -> String {
        fields_haystack(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemEventRow {
    pub id: u32,
    pub event: String,
    pub status: String,
    pub date: Date,
}

impl ReportRow for SystemEventRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event", self.event.clone()),
            ("Status", self.status.clone()),
            ("Date", self.date.to_string()),
        ]
    }
}

impl Searchable for SystemEventRow {
    fn haystack(&self) -> String {
        fields_haystack(self)
    }
}

/// A support-inbox message. Sample data only; no messages endpoint exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime,
    pub read: bool,
}

impl Searchable for Message {
    fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.email, self.subject, self.body
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub at: DateTime,
}

impl Searchable for AuditLog {
    fn haystack(&self) -> String {
        format!("{} {}", self.user, self.action)
    }
}

/// A content post as listed on the content dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub author: String,
}

impl Searchable for Post {
    fn haystack(&self) -> String {
        format!("{} {}", self.title, self.author)
    }
}

/// The full post as shown on the content detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBody {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub published: Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_wire_shape_uses_mongo_id() {
        let json = r#"{"_id":"65ab3","email":"lwena@example.com","role":"admin","category":"fresh-oil"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "65ab3");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.category, Category::FreshOil);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["_id"], "65ab3");
        assert_eq!(back["category"], "fresh-oil");
    }

    #[test]
    fn category_slug_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.slug()), Some(category));
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn period_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Period::Week).unwrap(), "\"week\"");
        assert_eq!(Period::parse("month"), Some(Period::Month));
        assert_eq!(Period::parse("year"), None);
    }

    #[test]
    fn report_rows_search_over_every_field() {
        let row = SaleRow {
            id: 1,
            item: "Laptop".into(),
            amount_usd: 1200,
            date: jiff::civil::date(2025, 1, 25),
        };
        assert!(row.haystack().contains("Laptop"));
        assert!(row.haystack().contains("$1200"));
        assert!(row.haystack().contains("2025-01-25"));
    }
}

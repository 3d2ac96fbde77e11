//! Month records and the tagged entries they are built from

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Calendar month, ordered by year and then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// 1 = January, 12 = December
    pub month: u8,
}

impl Period {
    /// Returns `None` when `month` is outside 1-12
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// Period containing today's local date
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month).ok_or_else(invalid)
    }
}

/// Direction of money relative to the month's available funds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

/// Budget category. Income is the only inflow; the rest draw down funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    #[serde(alias = "expense")]
    Expenses,
    #[serde(alias = "saving")]
    Savings,
    #[serde(alias = "investment")]
    Investments,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Income,
        Category::Expenses,
        Category::Savings,
        Category::Investments,
    ];

    pub fn kind(self) -> EntryKind {
        match self {
            Category::Income => EntryKind::Income,
            Category::Expenses | Category::Savings | Category::Investments => EntryKind::Expense,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Expenses => "expenses",
            Category::Savings => "savings",
            Category::Investments => "investments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Category::Income),
            "expense" | "expenses" => Ok(Category::Expenses),
            "saving" | "savings" => Ok(Category::Savings),
            "investment" | "investments" => Ok(Category::Investments),
            _ => Err(PlannerError::UnknownCategory(s.to_string())),
        }
    }
}

/// One tagged amount within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub category: Category,
    /// Unsigned as entered; the sign comes from the category
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl Entry {
    pub fn new(category: Category, amount: f64) -> Self {
        Self {
            category,
            amount,
            label: String::new(),
        }
    }

    /// Tagged-transaction style income entry
    pub fn income(amount: f64, label: impl Into<String>) -> Self {
        Self {
            category: Category::Income,
            amount,
            label: label.into(),
        }
    }

    /// Tagged-transaction style expense entry
    pub fn expense(amount: f64, label: impl Into<String>) -> Self {
        Self {
            category: Category::Expenses,
            amount,
            label: label.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.category.kind()
    }

    pub fn signed_amount(&self) -> f64 {
        match self.kind() {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Flat per-category totals for a month (or a whole plan)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub investments: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Income => self.income,
            Category::Expenses => self.expenses,
            Category::Savings => self.savings,
            Category::Investments => self.investments,
        }
    }

    pub fn outflows(&self) -> f64 {
        self.expenses + self.savings + self.investments
    }
}

impl std::ops::Add for CategoryTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            income: self.income + rhs.income,
            expenses: self.expenses + rhs.expenses,
            savings: self.savings + rhs.savings,
            investments: self.investments + rhs.investments,
        }
    }
}

/// One calendar month of budget activity
///
/// `rollover_from_previous` and `remaining_funds` are derived by
/// [`RolloverEngine`](crate::rollover::RolloverEngine); everything else is
/// user-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MonthRow", try_from = "MonthRow")]
pub struct MonthRecord {
    pub id: String,
    pub period: Period,
    pub entries: Vec<Entry>,
    pub notes: String,
    pub rollover_from_previous: f64,
    pub remaining_funds: f64,
}

impl MonthRecord {
    pub fn new(id: impl Into<String>, period: Period) -> Self {
        Self {
            id: id.into(),
            period,
            entries: Vec::new(),
            notes: String::new(),
            rollover_from_previous: 0.0,
            remaining_funds: 0.0,
        }
    }

    /// Empty month identified by its `YYYY-MM` period
    pub fn empty(period: Period) -> Self {
        Self::new(period.to_string(), period)
    }

    /// Build from four scalar totals, one aggregated entry per non-zero category
    pub fn from_totals(id: impl Into<String>, period: Period, totals: CategoryTotals) -> Self {
        let mut record = Self::new(id, period);
        for category in Category::ALL {
            record.set_category(category, totals.get(category));
        }
        record
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replace every entry of `category` with a single aggregated amount
    pub fn set_category(&mut self, category: Category, amount: f64) {
        self.entries.retain(|e| e.category != category);
        if amount != 0.0 {
            self.entries.push(Entry::new(category, amount));
        }
    }

    pub fn category_total(&self, category: Category) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .fold(0.0, |acc, e| acc + e.amount)
    }

    pub fn income(&self) -> f64 {
        self.category_total(Category::Income)
    }

    pub fn expenses(&self) -> f64 {
        self.category_total(Category::Expenses)
    }

    pub fn savings(&self) -> f64 {
        self.category_total(Category::Savings)
    }

    pub fn investments(&self) -> f64 {
        self.category_total(Category::Investments)
    }

    pub fn totals(&self) -> CategoryTotals {
        CategoryTotals {
            income: self.income(),
            expenses: self.expenses(),
            savings: self.savings(),
            investments: self.investments(),
        }
    }

    /// Sum of all inflow entries
    pub fn total_income(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind() == EntryKind::Income)
            .fold(0.0, |acc, e| acc + e.amount)
    }

    /// Sum of all outflow entries (expenses, savings and investments)
    pub fn total_expense(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind() == EntryKind::Expense)
            .fold(0.0, |acc, e| acc + e.amount)
    }

    /// This month's own contribution to the running balance
    pub fn net_flow(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, e| acc + e.signed_amount())
    }

    /// True when the entries carry nothing the four flat totals would lose
    fn is_flat(&self) -> bool {
        self.entries.iter().all(|e| e.label.is_empty())
            && Category::ALL
                .iter()
                .all(|c| self.entries.iter().filter(|e| e.category == *c).count() <= 1)
    }
}

/// Sort months ascending by period. Rollover results depend on this order.
pub fn sort_by_period(records: &mut [MonthRecord]) {
    records.sort_by_key(|r| r.period);
}

/// Reject a month id or period that appears more than once
pub fn check_unique(records: &[MonthRecord]) -> Result<(), PlannerError> {
    let mut ids = HashSet::new();
    let mut periods = HashSet::new();
    for record in records {
        if !ids.insert(record.id.as_str()) {
            return Err(PlannerError::InvalidData(format!("duplicate month id {}", record.id)));
        }
        if !periods.insert(record.period) {
            return Err(PlannerError::InvalidData(format!("duplicate period {}", record.period)));
        }
    }
    Ok(())
}

/// JSON shape of a month: flat category totals plus optional tagged entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRow {
    id: String,
    year: i32,
    month: u8,
    income: f64,
    expenses: f64,
    savings: f64,
    investments: f64,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    rollover_from_previous: f64,
    #[serde(default)]
    remaining_funds: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entries: Vec<Entry>,
}

impl From<MonthRecord> for MonthRow {
    fn from(record: MonthRecord) -> Self {
        let totals = record.totals();
        let entries = if record.is_flat() {
            Vec::new()
        } else {
            record.entries
        };
        Self {
            id: record.id,
            year: record.period.year,
            month: record.period.month,
            income: totals.income,
            expenses: totals.expenses,
            savings: totals.savings,
            investments: totals.investments,
            notes: record.notes,
            rollover_from_previous: record.rollover_from_previous,
            remaining_funds: record.remaining_funds,
            entries,
        }
    }
}

impl TryFrom<MonthRow> for MonthRecord {
    type Error = PlannerError;

    fn try_from(row: MonthRow) -> Result<Self, Self::Error> {
        let period = Period::new(row.year, row.month).ok_or_else(|| {
            PlannerError::InvalidData(format!(
                "month {} has month number {} outside 1-12",
                row.id, row.month
            ))
        })?;

        let numbers = [
            row.income,
            row.expenses,
            row.savings,
            row.investments,
            row.rollover_from_previous,
            row.remaining_funds,
        ];
        if numbers.iter().chain(row.entries.iter().map(|e| &e.amount)).any(|n| !n.is_finite()) {
            return Err(PlannerError::InvalidData(format!(
                "month {} contains a non-finite amount",
                row.id
            )));
        }

        // Tagged entries, when present, are authoritative over the flat totals
        let mut record = if row.entries.is_empty() {
            MonthRecord::from_totals(
                row.id,
                period,
                CategoryTotals {
                    income: row.income,
                    expenses: row.expenses,
                    savings: row.savings,
                    investments: row.investments,
                },
            )
        } else {
            let mut record = MonthRecord::new(row.id, period);
            record.entries = row.entries;
            record
        };
        record.notes = row.notes;
        record.rollover_from_previous = row.rollover_from_previous;
        record.remaining_funds = row.remaining_funds;
        Ok(record)
    }
}

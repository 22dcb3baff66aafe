use crate::errors::TicketError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

pub const TICKET_ID_PREFIX: &str = "TICKET-";

/// Identifier of the form `TICKET-<n>` with `n > 0` and no leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct TicketId(u64);

impl TicketId {
    pub fn from_suffix(suffix: u64) -> Result<Self, TicketError> {
        if suffix == 0 {
            return Err(TicketError::MalformedId(format!("{TICKET_ID_PREFIX}0")));
        }
        Ok(Self(suffix))
    }

    pub fn suffix(self) -> u64 {
        self.0
    }
}

fn parse_suffix(raw: &str) -> Result<u64, TicketError> {
    let malformed = || TicketError::MalformedId(raw.to_string());
    let digits = raw.strip_prefix(TICKET_ID_PREFIX).ok_or_else(malformed)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    digits.parse::<u64>().map_err(|_| malformed())
}

impl FromStr for TicketId {
    type Err = TicketError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_suffix(raw.trim()).map(Self)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TICKET_ID_PREFIX}{}", self.0)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    Closed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }

    /// Label understood by the webhook consumer.
    pub fn spanish_label(self) -> &'static str {
        match self {
            Status::Open => "Abierto",
            Status::InProgress => "En Progreso",
            Status::Closed => "Cerrado",
        }
    }
}

impl FromStr for Status {
    type Err = TicketError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "open" | "abierto" => Ok(Status::Open),
            "in progress" | "en progreso" => Ok(Status::InProgress),
            "closed" | "cerrado" => Ok(Status::Closed),
            _ => Err(TicketError::validation(format!("unknown status {raw:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn spanish_label(self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Media",
            Priority::Low => "Baja",
        }
    }
}

impl FromStr for Priority {
    type Err = TicketError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "high" | "alta" => Ok(Priority::High),
            "medium" | "media" => Ok(Priority::Medium),
            "low" | "baja" => Ok(Priority::Low),
            _ => Err(TicketError::validation(format!("unknown priority {raw:?}"))),
        }
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    description: String,
    status: Status,
    priority: Priority,
    submitted_date: NaiveDate,
}

impl Ticket {
    /// A freshly submitted ticket, always `Open`.
    pub fn new(
        id: TicketId,
        description: &str,
        priority: Priority,
        submitted_date: NaiveDate,
    ) -> Result<Self, TicketError> {
        Self::restore(id, description, Status::Open, priority, submitted_date)
    }

    /// Rebuilds a ticket that already exists (seed data, edited rows).
    pub fn restore(
        id: TicketId,
        description: &str,
        status: Status,
        priority: Priority,
        submitted_date: NaiveDate,
    ) -> Result<Self, TicketError> {
        Ok(Self {
            id,
            description: validate_description(description)?,
            status,
            priority,
            submitted_date,
        })
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn submitted_date(&self) -> NaiveDate {
        self.submitted_date
    }
}

fn validate_description(description: &str) -> Result<String, TicketError> {
    if description.trim().is_empty() {
        return Err(TicketError::validation("description must not be empty"));
    }
    Ok(description.to_string())
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub description: String,
    pub priority: String,
}

/// Untyped ticket as it arrives from edits or seed files.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRow {
    pub id: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub submitted_date: String,
}

impl TicketRow {
    pub fn into_ticket(self) -> Result<Ticket, TicketError> {
        let id = self.id.parse::<TicketId>()?;
        let submitted_date = NaiveDate::parse_from_str(self.submitted_date.trim(), "%Y-%m-%d")
            .map_err(|err| {
                TicketError::validation(format!(
                    "{id}: invalid submitted_date {:?}: {err}",
                    self.submitted_date
                ))
            })?;
        Ticket::restore(
            id,
            &self.description,
            self.status.parse()?,
            self.priority.parse()?,
            submitted_date,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NotificationReport {
    Delivered,
    Skipped,
    Failed {
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        http_status: Option<u16>,
    },
}

#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub ticket: Ticket,
    pub notification: NotificationReport,
}

/// Calendar month used to bucket submission dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn bump(&mut self, status: Status) {
        let slot = match status {
            Status::Open => &mut self.open,
            Status::InProgress => &mut self.in_progress,
            Status::Closed => &mut self.closed,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.closed
    }
}

#[derive(Debug, Serialize)]
pub struct MonthStatusPoint {
    pub month: MonthKey,
    #[serde(flatten)]
    pub counts: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub open_count: usize,
    pub status_by_month: Vec<MonthStatusPoint>,
    pub priority_distribution: BTreeMap<Priority, usize>,
}

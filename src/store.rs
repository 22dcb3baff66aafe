use crate::errors::TicketError;
use crate::id::next_id;
use crate::models::{Priority, Status, Ticket, TicketId};
use chrono::{Local, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Tickets of one session, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(tickets: Vec<Ticket>) -> Result<Self, TicketError> {
        ensure_unique(&tickets)?;
        Ok(Self { tickets })
    }

    pub fn create(&mut self, description: &str, priority: Priority) -> Result<Ticket, TicketError> {
        self.create_on(Local::now().date_naive(), description, priority)
    }

    pub fn create_on(
        &mut self,
        today: NaiveDate,
        description: &str,
        priority: Priority,
    ) -> Result<Ticket, TicketError> {
        let id = next_id(&self.tickets)?;
        let ticket = Ticket::new(id, description, priority, today)?;
        self.tickets.insert(0, ticket.clone());
        Ok(ticket)
    }

    /// All-or-nothing: ids and submission dates must match the current tickets.
    pub fn replace_all(&mut self, edited: Vec<Ticket>) -> Result<(), TicketError> {
        if edited.len() != self.tickets.len() {
            return Err(TicketError::validation(format!(
                "expected {} tickets, got {}",
                self.tickets.len(),
                edited.len()
            )));
        }
        ensure_unique(&edited)?;

        let current: HashMap<TicketId, NaiveDate> = self
            .tickets
            .iter()
            .map(|ticket| (ticket.id(), ticket.submitted_date()))
            .collect();

        for ticket in &edited {
            match current.get(&ticket.id()) {
                None => {
                    return Err(TicketError::validation(format!(
                        "{} does not exist; ids cannot be changed",
                        ticket.id()
                    )));
                }
                Some(date) if *date != ticket.submitted_date() => {
                    return Err(TicketError::validation(format!(
                        "{}: submitted_date cannot be changed",
                        ticket.id()
                    )));
                }
                Some(_) => {}
            }
        }

        self.tickets = edited;
        Ok(())
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| ticket.status() == status)
            .count()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

fn ensure_unique(tickets: &[Ticket]) -> Result<(), TicketError> {
    let mut seen = HashSet::with_capacity(tickets.len());
    for ticket in tickets {
        if !seen.insert(ticket.id()) {
            return Err(TicketError::validation(format!(
                "duplicate ticket id {}",
                ticket.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn store_with_three() -> TicketStore {
        let mut store = TicketStore::new();
        store.create_on(day(1), "Printer offline", Priority::High).unwrap();
        store.create_on(day(2), "VPN drops", Priority::Medium).unwrap();
        store.create_on(day(3), "Monitor flickers", Priority::Low).unwrap();
        store
    }

    fn edited(ticket: &Ticket, status: Status, priority: Priority) -> Ticket {
        Ticket::restore(
            ticket.id(),
            ticket.description(),
            status,
            priority,
            ticket.submitted_date(),
        )
        .unwrap()
    }

    #[test]
    fn create_on_empty_store_assigns_first_id() {
        let mut store = TicketStore::new();
        let ticket = store.create_on(day(1), "Printer offline", Priority::High).unwrap();
        assert_eq!(ticket.id().to_string(), "TICKET-1001");
        assert_eq!(ticket.status(), Status::Open);
        assert_eq!(ticket.submitted_date(), day(1));
    }

    #[test]
    fn create_prepends_and_grows_by_one() {
        let mut store = store_with_three();
        let before = store.len();
        let ticket = store.create_on(day(4), "Keyboard missing keys", Priority::Low).unwrap();
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.all()[0], ticket);
        assert_eq!(ticket.id().to_string(), "TICKET-1004");
    }

    #[test]
    fn rejected_create_leaves_store_untouched() {
        let mut store = store_with_three();
        let snapshot = store.clone();
        assert!(store.create_on(day(4), "  ", Priority::Low).is_err());
        assert_eq!(store, snapshot);
    }

    #[test]
    fn replace_all_applies_status_and_priority_edits() {
        let mut store = store_with_three();
        let mut rows = store.all().to_vec();
        rows[1] = edited(&rows[1], Status::Closed, Priority::High);
        store.replace_all(rows).unwrap();

        let vpn = store
            .all()
            .iter()
            .find(|ticket| ticket.id().to_string() == "TICKET-1002")
            .unwrap();
        assert_eq!(vpn.status(), Status::Closed);
        assert_eq!(vpn.priority(), Priority::High);
        assert_eq!(store.count_by_status(Status::Open), 2);
    }

    #[test]
    fn replace_all_accepts_reordering() {
        let mut store = store_with_three();
        let mut rows = store.all().to_vec();
        rows.reverse();
        store.replace_all(rows).unwrap();
        assert_eq!(store.all()[0].id().to_string(), "TICKET-1001");
    }

    #[test]
    fn replace_all_rejects_changed_submitted_date() {
        let mut store = store_with_three();
        let snapshot = store.clone();
        let mut rows = store.all().to_vec();
        rows[0] = Ticket::restore(
            rows[0].id(),
            rows[0].description(),
            rows[0].status(),
            rows[0].priority(),
            day(20),
        )
        .unwrap();

        let err = store.replace_all(rows).unwrap_err();
        assert!(matches!(err, TicketError::Validation(_)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn replace_all_rejects_changed_id() {
        let mut store = store_with_three();
        let snapshot = store.clone();
        let mut rows = store.all().to_vec();
        rows[0] = Ticket::restore(
            "TICKET-2000".parse().unwrap(),
            rows[0].description(),
            rows[0].status(),
            rows[0].priority(),
            rows[0].submitted_date(),
        )
        .unwrap();

        assert!(matches!(store.replace_all(rows), Err(TicketError::Validation(_))));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn replace_all_rejects_dropped_or_duplicated_rows() {
        let mut store = store_with_three();
        let snapshot = store.clone();

        let mut shorter = store.all().to_vec();
        shorter.pop();
        assert!(store.replace_all(shorter).is_err());

        let mut duplicated = store.all().to_vec();
        duplicated[2] = duplicated[0].clone();
        assert!(store.replace_all(duplicated).is_err());

        assert_eq!(store, snapshot);
    }

    #[test]
    fn seeded_store_rejects_duplicate_ids() {
        let mut store = store_with_three();
        let mut tickets = store.all().to_vec();
        tickets.push(tickets[0].clone());
        assert!(TicketStore::seeded(tickets).is_err());

        store.create_on(day(5), "Badge reader", Priority::Medium).unwrap();
        let reseeded = TicketStore::seeded(store.all().to_vec()).unwrap();
        assert_eq!(reseeded.len(), 4);
    }

    #[test]
    fn count_by_status_on_empty_store_is_zero() {
        let store = TicketStore::new();
        for status in [Status::Open, Status::InProgress, Status::Closed] {
            assert_eq!(store.count_by_status(status), 0);
        }
        assert!(store.is_empty());
    }
}

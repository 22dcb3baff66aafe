use crate::models::{
    MonthKey, MonthStatusPoint, Priority, Status, StatsResponse, StatusCounts, Ticket,
};
use std::collections::BTreeMap;

pub fn build_stats(tickets: &[Ticket]) -> StatsResponse {
    let status_by_month = status_by_month(tickets)
        .into_iter()
        .map(|(month, counts)| MonthStatusPoint { month, counts })
        .collect();

    StatsResponse {
        total: tickets.len(),
        open_count: open_count(tickets),
        status_by_month,
        priority_distribution: priority_distribution(tickets),
    }
}

pub fn open_count(tickets: &[Ticket]) -> usize {
    tickets
        .iter()
        .filter(|ticket| ticket.status() == Status::Open)
        .count()
}

/// Oldest month first; months without submissions are absent.
pub fn status_by_month(tickets: &[Ticket]) -> BTreeMap<MonthKey, StatusCounts> {
    let mut months: BTreeMap<MonthKey, StatusCounts> = BTreeMap::new();
    for ticket in tickets {
        months
            .entry(MonthKey::of(ticket.submitted_date()))
            .or_default()
            .bump(ticket.status());
    }
    months
}

pub fn priority_distribution(tickets: &[Ticket]) -> BTreeMap<Priority, usize> {
    let mut counts: BTreeMap<Priority, usize> =
        Priority::ALL.into_iter().map(|priority| (priority, 0)).collect();
    for ticket in tickets {
        *counts.entry(ticket.priority()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketId;
    use chrono::NaiveDate;

    fn ticket(suffix: u64, date: (i32, u32, u32), status: Status, priority: Priority) -> Ticket {
        Ticket::restore(
            TicketId::from_suffix(suffix).unwrap(),
            "issue",
            status,
            priority,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
        .unwrap()
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket(1005, (2026, 2, 20), Status::Open, Priority::High),
            ticket(1004, (2026, 2, 3), Status::Closed, Priority::High),
            ticket(1003, (2026, 1, 30), Status::InProgress, Priority::Low),
            ticket(1002, (2026, 1, 2), Status::Open, Priority::Medium),
            ticket(1001, (2025, 1, 15), Status::Open, Priority::High),
        ]
    }

    #[test]
    fn open_count_matches_open_tickets() {
        assert_eq!(open_count(&sample()), 3);
        assert_eq!(open_count(&[]), 0);
    }

    #[test]
    fn status_by_month_keeps_years_apart() {
        let months = status_by_month(&sample());
        let keys: Vec<String> = months.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["2025-01", "2026-01", "2026-02"]);

        let jan = months[&MonthKey { year: 2026, month: 1 }];
        assert_eq!(jan.open, 1);
        assert_eq!(jan.in_progress, 1);
        assert_eq!(jan.closed, 0);

        let total: usize = months.values().map(StatusCounts::total).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn priority_distribution_covers_every_priority() {
        let counts = priority_distribution(&sample());
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&Priority::High], 3);
        assert_eq!(counts[&Priority::Medium], 1);
        assert_eq!(counts[&Priority::Low], 1);
        assert_eq!(counts.values().sum::<usize>(), sample().len());

        let empty = priority_distribution(&[]);
        assert!(empty.values().all(|count| *count == 0));
        assert_eq!(empty.len(), 3);
    }

    #[test]
    fn build_stats_serializes_for_the_page() {
        let stats = build_stats(&sample());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.open_count, 3);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["status_by_month"][0]["month"], "2025-01");
        assert_eq!(value["status_by_month"][2]["closed"], 1);
        assert_eq!(value["priority_distribution"]["high"], 3);
    }
}

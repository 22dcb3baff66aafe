use crate::errors::TicketError;
use crate::models::{Ticket, TicketId, TICKET_ID_PREFIX};

pub const FIRST_SUFFIX: u64 = 1001;

/// Derived from the tickets currently held; there is no separate counter.
pub fn next_id(tickets: &[Ticket]) -> Result<TicketId, TicketError> {
    match tickets.iter().map(|ticket| ticket.id().suffix()).max() {
        None => TicketId::from_suffix(FIRST_SUFFIX),
        Some(max) => {
            let next = max
                .checked_add(1)
                .ok_or_else(|| TicketError::MalformedId(format!("{TICKET_ID_PREFIX}{max}")))?;
            TicketId::from_suffix(next)
        }
    }
}

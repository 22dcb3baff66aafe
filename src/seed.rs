use crate::errors::TicketError;
use crate::models::{Ticket, TicketRow};
use crate::store::TicketStore;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed ticket: {0}")]
    Ticket(#[from] TicketError),
}

/// A missing file means an empty session.
pub async fn load_seed(path: &Path) -> Result<Vec<Ticket>, SeedError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("seed file {} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let tickets = parse_seed(&bytes)?;
    info!("loaded {} seed tickets from {}", tickets.len(), path.display());
    Ok(tickets)
}

pub fn parse_seed(bytes: &[u8]) -> Result<Vec<Ticket>, SeedError> {
    let rows: Vec<TicketRow> = serde_json::from_slice(bytes)?;
    let mut tickets = rows
        .into_iter()
        .map(TicketRow::into_ticket)
        .collect::<Result<Vec<_>, _>>()?;
    tickets.sort_by(|a, b| b.id().cmp(&a.id()));
    TicketStore::seeded(tickets.clone())?;
    Ok(tickets)
}

use crate::errors::TicketError;
use crate::models::Ticket;
use crate::notify::NotificationSink;
use crate::store::TicketStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single session served by this process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TicketStore>>,
    pub seed: Arc<Vec<Ticket>>,
    pub sink: Option<Arc<dyn NotificationSink>>,
}

impl AppState {
    pub fn new(
        seed: Vec<Ticket>,
        sink: Option<Arc<dyn NotificationSink>>,
    ) -> Result<Self, TicketError> {
        let store = TicketStore::seeded(seed.clone())?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            seed: Arc::new(seed),
            sink,
        })
    }

    /// Throws away every change made in this session.
    pub async fn reset(&self) -> Result<(), TicketError> {
        let fresh = TicketStore::seeded(self.seed.as_ref().clone())?;
        *self.store.lock().await = fresh;
        Ok(())
    }
}

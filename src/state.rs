use crate::models::AppData;
use crate::reminders::ReminderScheduler;
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub data: Arc<Mutex<AppData>>,
    pub reminders: Arc<ReminderScheduler>,
}

impl AppState {
    pub fn new(store: Store, data: AppData) -> Self {
        Self {
            store,
            data: Arc::new(Mutex::new(data)),
            reminders: Arc::new(ReminderScheduler::new()),
        }
    }
}

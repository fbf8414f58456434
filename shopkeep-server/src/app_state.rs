use std::sync::Arc;

use shared::config::server::Config;

use crate::{
    auth::session::SessionStore,
    services::{store::DataStore, whatsapp::ReminderSink},
};

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionStore>,
    pub records: Arc<DataStore>,
    pub reminders: Arc<dyn ReminderSink>,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::auth::session::MemorySessionStore;
    use crate::services::{store::DataStore, whatsapp::testing::RecordingSink};

    pub(crate) fn state_with_sink(sink: Arc<RecordingSink>) -> Arc<AppState> {
        let config = Arc::new(Config::with_defaults());
        let sessions: Arc<dyn SessionStore> = Arc::new(
            MemorySessionStore::from_config(&config.session).expect("session store builds"),
        );
        let reminders: Arc<dyn ReminderSink> = sink;
        Arc::new(AppState {
            config,
            sessions,
            records: Arc::new(DataStore::new()),
            reminders,
        })
    }

    pub(crate) fn test_state() -> Arc<AppState> {
        state_with_sink(Arc::new(RecordingSink::default()))
    }
}

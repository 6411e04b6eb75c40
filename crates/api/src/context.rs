use std::sync::Arc;

use tokio::sync::Mutex;

use bayespro_events::Dashboard;

/// The dashboard session shared by all request handlers.
///
/// One session per process: each request locks it, dispatches a single event
/// and releases it.
#[derive(Clone)]
pub struct DashboardContext {
    inner: Arc<Mutex<Dashboard>>,
}

impl DashboardContext {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dashboard)),
        }
    }

    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, Dashboard> {
        self.inner.lock().await
    }
}

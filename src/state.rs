use crate::assistant::AssistantClient;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::stats::seed_week;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub assistant: AssistantClient,
    chat_in_flight: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, assistant: AssistantClient) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            assistant,
            chat_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let dashboard = Dashboard::new(seed_week(), config.calorie_goal, config.water_goal);
        Self::new(dashboard, AssistantClient::new(config.assistant_url.clone()))
    }

    /// Claims the single assistant slot. Returns `None` while another chat
    /// request is pending.
    pub fn begin_chat(&self) -> Option<ChatGuard> {
        self.chat_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ChatGuard {
                flag: Arc::clone(&self.chat_in_flight),
            })
    }
}

pub struct ChatGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ChatGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// src/web/sessions.rs
//! Chat widgets kept alive per browser session.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::chat::{ChatTiming, ChatWidget};
use crate::page::{PageLayout, ScrollQueue};
use crate::responder::Responder;

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
const DEFAULT_MAX_SESSIONS: usize = 1000;

pub struct ChatSession {
    pub widget: ChatWidget,
    pub scrolls: Arc<ScrollQueue>,
    last_seen: Mutex<Instant>,
}

impl ChatSession {
    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn last_seen(&self) -> Instant {
        *self.last_seen.lock()
    }
}

pub struct ChatSessions {
    sessions: Mutex<HashMap<Uuid, Arc<ChatSession>>>,
    layout: PageLayout,
    timing: ChatTiming,
    responder: Responder,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl ChatSessions {
    pub fn new(layout: PageLayout, timing: ChatTiming) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            layout,
            timing,
            responder: Responder::default(),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    pub fn with_limits(mut self, idle_timeout: Duration, max_sessions: usize) -> Self {
        self.idle_timeout = idle_timeout;
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Create a session with its widget already opened. Idle sessions are
    /// evicted first; at capacity the least recently used one goes too.
    pub fn create(&self) -> (Uuid, Arc<ChatSession>) {
        let scrolls = Arc::new(ScrollQueue::new(self.layout.clone()));
        let widget = ChatWidget::new(self.responder, scrolls.clone(), self.timing);
        widget.open();

        let id = Uuid::new_v4();
        let session = Arc::new(ChatSession {
            widget,
            scrolls,
            last_seen: Mutex::new(Instant::now()),
        });

        let mut evicted = self.take_idle();
        {
            let mut sessions = self.sessions.lock();
            while sessions.len() >= self.max_sessions {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, session)| session.last_seen())
                    .map(|(id, _)| *id);
                match oldest.and_then(|id| sessions.remove(&id)) {
                    Some(session) => evicted.push(session),
                    None => break,
                }
            }
            sessions.insert(id, Arc::clone(&session));
        }
        Self::teardown_all(evicted);

        info!("Chat session {} created", id);
        (id, session)
    }

    /// Look up a live session and mark it as used.
    pub fn get(&self, id: &Uuid) -> Option<Arc<ChatSession>> {
        Self::teardown_all(self.take_idle());
        let session = self.sessions.lock().get(id).cloned()?;
        session.touch();
        Some(session)
    }

    /// Drop the session and cancel its pending timers.
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.lock().remove(id);
        match removed {
            Some(session) => {
                session.widget.teardown();
                info!("Chat session {} closed", id);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    fn take_idle(&self) -> Vec<Arc<ChatSession>> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, session)| now.duration_since(session.last_seen()) >= self.idle_timeout)
            .map(|(id, _)| *id)
            .collect();
        expired
            .iter()
            .filter_map(|id| sessions.remove(id))
            .collect()
    }

    fn teardown_all(sessions: Vec<Arc<ChatSession>>) {
        if !sessions.is_empty() {
            info!("Evicting {} chat sessions", sessions.len());
        }
        for session in sessions {
            session.widget.teardown();
        }
    }
}

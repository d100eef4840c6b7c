//! Typed application events
//!
//! In-process pub-sub for cross-surface signaling: the chat view announces
//! accepted suggestions, the dashboard reacts to previews and creations.
//! The bus is owned by the application root and handed to components
//! explicitly; there is no ambient global instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

use crate::suggestion::{ProjectDraft, ProjectSuggestion};

/// Channel capacity before the slowest subscriber starts lagging
const CHANNEL_CAPACITY: usize = 256;

/// Upper bound on retained event history
const MAX_HISTORY_SIZE: usize = 256;

/// An application event with its typed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AppEvent {
    /// A chat suggestion was accepted and should become a project
    CreateProject { draft: ProjectDraft },
    /// A suggestion preview was requested
    ProjectPreview { suggestion: ProjectSuggestion },
    /// Project creation succeeded on the backend
    ProjectCreated { project: serde_json::Value },
}

impl AppEvent {
    /// Stable name used in logs and history inspection
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateProject { .. } => "createProject",
            Self::ProjectPreview { .. } => "projectPreview",
            Self::ProjectCreated { .. } => "projectCreated",
        }
    }
}

/// An event plus its delivery metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AppEvent,
}

impl EventEnvelope {
    fn new(event: AppEvent) -> Self {
        Self { id: Uuid::new_v4().to_string(), timestamp: Utc::now(), event }
    }
}

/// Broadcast bus for application events
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
    history: Arc<RwLock<Vec<EventEnvelope>>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender, history: Arc::new(RwLock::new(Vec::new())) }
    }

    /// Publish an event to every current subscriber
    ///
    /// Publishing with zero subscribers is not an error; the event still
    /// lands in history.
    pub async fn publish(&self, event: AppEvent) -> EventEnvelope {
        let envelope = EventEnvelope::new(event);
        self.add_to_history(envelope.clone()).await;
        let _ = self.sender.send(envelope.clone());
        envelope
    }

    /// Subscribe to all events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Most recent events, newest first
    pub async fn history(&self, limit: Option<usize>) -> Vec<EventEnvelope> {
        let history = self.history.read().await;
        let limit = limit.unwrap_or(history.len());
        history.iter().rev().take(limit).cloned().collect()
    }

    async fn add_to_history(&self, envelope: EventEnvelope) {
        let mut history = self.history.write().await;
        history.push(envelope);

        if history.len() > MAX_HISTORY_SIZE {
            let excess = history.len() - MAX_HISTORY_SIZE;
            history.drain(0..excess);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionPipeline;

    fn sample_draft() -> ProjectDraft {
        SuggestionPipeline::new()
            .draft("**Budget Tracker**\nA simple app.\nWeek 1: Setup\n- Install tools")
            .draft
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        let published = bus.publish(AppEvent::CreateProject { draft: sample_draft() }).await;
        let received = receiver.recv().await.unwrap();

        assert_eq!(received.id, published.id);
        assert_eq!(received.event.name(), "createProject");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ok() {
        let bus = EventBus::new();
        let envelope = bus
            .publish(AppEvent::ProjectCreated { project: serde_json::json!({"id": "p1"}) })
            .await;

        assert_eq!(envelope.event.name(), "projectCreated");
        assert_eq!(bus.history(None).await.len(), 1);
    }

    #[tokio::test]
    async fn test_events_arrive_in_publish_order() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.publish(AppEvent::ProjectPreview {
            suggestion: SuggestionPipeline::new().extract("**App**"),
        })
        .await;
        bus.publish(AppEvent::ProjectCreated { project: serde_json::json!({"id": "p2"}) }).await;

        assert_eq!(receiver.recv().await.unwrap().event.name(), "projectPreview");
        assert_eq!(receiver.recv().await.unwrap().event.name(), "projectCreated");
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_limited() {
        let bus = EventBus::new();
        for _ in 0..3 {
            bus.publish(AppEvent::ProjectCreated { project: serde_json::Value::Null }).await;
        }

        let history = bus.history(Some(2)).await;
        assert_eq!(history.len(), 2);
    }
}

//! Scripted collaborators shared by the orchestrator tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quill_config::QuillConfig;
use quill_generate::{GenerationContext, GenerationError, GenerationRequest, GenerationService};
use quill_links::{LinkCheck, LinkVerdict};
use quill_orchestrator::{Orchestrator, RunEvent};
use serde_json::{Value, json};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Clone)]
pub enum Reply {
    Payload(Value),
    Fail(String),
    Unauthorized,
    /// Panic with a bare `&str` payload.
    Panic(&'static str),
}

/// Generation service double keyed by target name.
#[derive(Debug, Clone, Default)]
pub struct ScriptedService {
    replies: HashMap<&'static str, Reply>,
    calls: Arc<Mutex<Vec<String>>>,
    contexts: Arc<Mutex<Vec<GenerationContext>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reply(mut self, target: &'static str, reply: Reply) -> Self {
        self.replies.insert(target, reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contexts(&self) -> Vec<GenerationContext> {
        self.contexts.lock().unwrap().clone()
    }
}

impl GenerationService for ScriptedService {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Value, GenerationError>> + Send {
        let target = request.target.as_str();
        self.calls.lock().unwrap().push(target.to_string());
        self.contexts.lock().unwrap().push(request.context.clone());
        let reply = self.replies.get(target).cloned();
        async move {
            match reply {
                Some(Reply::Payload(value)) => Ok(value),
                Some(Reply::Fail(message)) => Err(GenerationError::Failed(message)),
                Some(Reply::Unauthorized) => Err(GenerationError::Unauthorized {
                    status: 401,
                    message: "invalid api key".into(),
                }),
                Some(Reply::Panic(message)) => std::panic::panic_any(message),
                None => Err(GenerationError::Failed(format!("no reply scripted for {target}"))),
            }
        }
    }
}

/// Link double: everything is valid except the listed URLs.
#[derive(Debug, Clone, Default)]
pub struct StaticLinks {
    invalid: Arc<HashSet<String>>,
    calls: Arc<AtomicUsize>,
}

impl StaticLinks {
    pub fn rejecting<I: IntoIterator<Item = String>>(urls: I) -> Self {
        Self {
            invalid: Arc::new(urls.into_iter().collect()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LinkCheck for StaticLinks {
    fn validate(&self, url: &str) -> impl Future<Output = LinkVerdict> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let verdict = if self.invalid.contains(url) {
            LinkVerdict::rejected(Some(404), "HTTP 404: Not Found")
        } else {
            LinkVerdict::valid(200)
        };
        std::future::ready(verdict)
    }
}

pub fn orchestrator(
    service: &ScriptedService,
    links: &StaticLinks,
) -> Orchestrator<ScriptedService, StaticLinks> {
    orchestrator_with(service, links, &QuillConfig::default())
}

pub fn orchestrator_with(
    service: &ScriptedService,
    links: &StaticLinks,
    config: &QuillConfig,
) -> Orchestrator<ScriptedService, StaticLinks> {
    Orchestrator::new(service.clone(), links.clone(), config).with_linger(Duration::ZERO)
}

pub fn drain(rx: &mut UnboundedReceiver<RunEvent>) -> Vec<RunEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub fn progress_values(events: &[RunEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            RunEvent::Progress { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect()
}

pub fn authors_payload(authors: usize, quotes: usize) -> Value {
    let authors: Vec<Value> = (0..authors)
        .map(|a| {
            json!({
                "name": format!("Author {a}"),
                "quotes": (0..quotes)
                    .map(|q| json!({"text": format!("Quote {a}.{q}"), "relevanceScore": 80}))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    json!({ "authors": authors })
}

pub fn newsletter_url(i: usize) -> String {
    format!("https://letters.example/{i}")
}

pub fn newsletters_payload(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("Letter {i}"),
                "link": newsletter_url(i),
                "relevanceScore": 60
            })
        })
        .collect();
    json!({ "newsletters": items })
}

pub fn facts_payload() -> Value {
    json!({
        "funFacts": [{"text": "Fun", "relevanceScore": 50}],
        "scienceFacts": [{"text": "Science", "relevanceScore": 50}]
    })
}

pub fn tools_payload() -> Value {
    json!({
        "freeTools": [{"name": "Free", "relevanceScore": 50}],
        "paidTools": []
    })
}

pub fn podcasts_payload() -> Value {
    json!({"podcasts": [{"title": "Pod", "link": "https://pods.example/1", "relevanceScore": 50}]})
}

pub fn header_payload() -> Value {
    json!({"subject": "Fresh subject", "intro": "Fresh intro"})
}

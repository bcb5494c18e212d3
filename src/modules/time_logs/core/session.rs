use thiserror::Error;

use crate::modules::time_logs::core::interval::{ActivityInterval, PersistedState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("an activity is already running: {0}")]
    AlreadyRunning(String),

    #[error("no activity is running")]
    NotRunning,
}

/// The client-held transient record for a started, not-yet-stopped activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningActivity {
    pub activity_name: String,
    pub start_time: String,
}

type Subscriber = Box<dyn Fn(&Session) + Send + Sync>;

/// In-process tracking state: the activity catalogue, the completed log and
/// the single running activity, mutated only through the methods below.
/// Subscribers are notified after every applied update; this replaces
/// ambient global bindings with explicit registration.
#[derive(Default)]
pub struct Session {
    activities: Vec<String>,
    logs: Vec<ActivityInterval>,
    running: Option<RunningActivity>,
    subscribers: Vec<Subscriber>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn logs(&self) -> &[ActivityInterval] {
        &self.logs
    }

    pub fn running(&self) -> Option<&RunningActivity> {
        self.running.as_ref()
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&Session) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Registers an activity name. Idempotent; duplicates are ignored.
    pub fn add_activity(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.activities.contains(&name) {
            self.activities.push(name);
            self.notify();
        }
    }

    /// Starts tracking `name`. Only one activity runs at a time; names not
    /// seen before are registered on the fly.
    pub fn start(
        &mut self,
        name: impl Into<String>,
        start_time: impl Into<String>,
    ) -> Result<(), SessionError> {
        if let Some(running) = &self.running {
            return Err(SessionError::AlreadyRunning(running.activity_name.clone()));
        }
        let name = name.into();
        if !self.activities.contains(&name) {
            self.activities.push(name.clone());
        }
        self.running = Some(RunningActivity {
            activity_name: name,
            start_time: start_time.into(),
        });
        self.notify();
        Ok(())
    }

    /// Stops the running activity, promoting it to a completed log entry.
    /// The entry is immutable from here on.
    pub fn stop(&mut self, end_time: impl Into<String>) -> Result<ActivityInterval, SessionError> {
        let running = self.running.take().ok_or(SessionError::NotRunning)?;
        let interval = ActivityInterval {
            activity_name: running.activity_name,
            start_time: running.start_time,
            end_time: Some(end_time.into()),
        };
        self.logs.push(interval.clone());
        self.notify();
        Ok(interval)
    }

    /// Replaces logs and activities wholesale from a persisted document.
    /// The running activity is transient and never persisted.
    pub fn hydrate(&mut self, state: PersistedState) {
        self.logs = state.logs;
        self.activities = state.activities;
        self.notify();
    }

    /// Snapshot in the persisted-document shape, for saving through a store.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            logs: self.logs.clone(),
            activities: self.activities.clone(),
        }
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self);
        }
    }
}

use serde_json::Value;
use shared::IntegrationType;

use crate::error::LoadError;

/// Body of a successful load, stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The backend returned a JSON array
    Records(Vec<Value>),
    /// Any other JSON value
    Structured(Value),
}

impl Payload {
    /// Classify a response body. `null`, `false`, `0` and `""` carry no
    /// data and yield `None`; an empty array is still a payload.
    pub fn from_body(body: Value) -> Option<Self> {
        match body {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Array(records) => Some(Payload::Records(records)),
            other => Some(Payload::Structured(other)),
        }
    }
}

/// Payload together with the integration it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub integration: IntegrationType,
    pub payload: Payload,
}

/// Stored data after a load settles, plus the notice to show the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub loaded: Option<Loaded>,
    pub notice: Option<String>,
}

/// Apply a load outcome: success replaces the stored data wholesale,
/// failure keeps it and produces a notice.
pub fn settle(
    current: Option<Loaded>,
    integration: IntegrationType,
    outcome: Result<Value, LoadError>,
) -> Settlement {
    match outcome {
        Ok(body) => Settlement {
            loaded: Payload::from_body(body).map(|payload| Loaded {
                integration,
                payload,
            }),
            notice: None,
        },
        Err(e) => Settlement {
            loaded: current,
            notice: Some(e.user_message()),
        },
    }
}

/// Ticket identifying one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks which load is the latest so that overlapping requests cannot
/// overwrite each other out of order.
#[derive(Debug, Default)]
pub struct LoadTracker {
    epoch: u64,
}

impl LoadTracker {
    /// Issue a ticket for a new load, superseding any outstanding one.
    pub fn begin(&mut self) -> LoadTicket {
        self.epoch += 1;
        LoadTicket(self.epoch)
    }

    /// Supersede every outstanding load without issuing a new one.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Drop the stored data. Outstanding loads are superseded so a late
    /// response cannot bring it back.
    pub fn clear(&mut self) -> Option<Loaded> {
        self.invalidate();
        None
    }

    /// Whether a settled load may still apply its outcome.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.epoch
    }

    /// Settle the load behind `ticket`; `None` when it has been superseded
    /// and its outcome must be ignored.
    pub fn settle(
        &self,
        ticket: LoadTicket,
        current: Option<Loaded>,
        integration: IntegrationType,
        outcome: Result<Value, LoadError>,
    ) -> Option<Settlement> {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping superseded {} load", integration);
            return None;
        }

        match &outcome {
            Ok(Value::Array(records)) => {
                tracing::info!("Loaded {} items from {}", records.len(), integration)
            }
            Ok(_) => tracing::info!("Loaded structured data from {}", integration),
            Err(e) => tracing::error!("Failed to load {} data: {}", integration, e),
        }

        Some(settle(current, integration, outcome))
    }
}

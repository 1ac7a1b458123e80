//! State dispatcher for pub-sub pattern

use crate::picker::{PickerEvent, PickerState};
use tracing::{debug, info};

/// Trait for components that subscribe to state changes
pub trait StateSubscriber {
    /// Handle a state event, after it has been applied to `state`
    fn on_state_event(&mut self, event: &PickerEvent, state: &PickerState);

    /// Get subscriber name for debugging
    fn name(&self) -> &str;
}

/// State dispatcher that coordinates picker state changes with subscribers
pub struct StateDispatcher {
    /// The picker state this dispatcher owns
    state: PickerState,

    /// List of subscribers
    subscribers: Vec<Box<dyn StateSubscriber>>,

    /// Event history for debugging
    event_history: Vec<PickerEvent>,

    /// Maximum event history size
    max_history: usize,
}

impl StateDispatcher {
    pub fn new(state: PickerState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            event_history: Vec::new(),
            max_history: 100,
        }
    }

    /// Current state, for rendering
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Add a subscriber
    pub fn subscribe(&mut self, subscriber: Box<dyn StateSubscriber>) {
        info!("StateDispatcher: Adding subscriber: {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    /// Dispatch a picker event: apply it through the reducer, then notify
    /// all subscribers with the resulting state
    pub fn dispatch(&mut self, event: PickerEvent) {
        debug!("StateDispatcher: Dispatching event: {:?}", event);

        // Record event in history
        self.event_history.push(event.clone());
        if self.event_history.len() > self.max_history {
            self.event_history.remove(0);
        }

        self.state = self.state.apply(&event);

        // Notify all subscribers
        for subscriber in &mut self.subscribers {
            debug!(
                "StateDispatcher: Notifying subscriber: {}",
                subscriber.name()
            );
            subscriber.on_state_event(&event, &self.state);
        }
    }

    /// Get event history for debugging
    pub fn get_event_history(&self) -> &[PickerEvent] {
        &self.event_history
    }
}

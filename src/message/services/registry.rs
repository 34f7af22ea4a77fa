//! Registry of message kinds.
//!
//! The registry maps tags to descriptors and keeps the descriptors that can
//! recognize messages in registration order. Recognition tries them in that
//! order and the first to claim a message wins, so specific kinds must be
//! registered before catch-all ones.

use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

use crate::message::adapters::HeaderMessage;
use crate::message::domain::{MessageType, Recognition, TypedMessage};
use crate::message::kinds::{delivery_receipt, ics213, plain_text, read_receipt, unknown_form};
use crate::message::ports::RawMessage;

static STANDARD: LazyLock<MessageTypeRegistry> = LazyLock::new(MessageTypeRegistry::new);

/// Returns the shared registry of standard kinds.
///
/// Built on first use and read-only afterwards; callers needing extra kinds
/// build their own registry with [`MessageTypeRegistry::new`].
#[must_use]
pub fn standard_registry() -> &'static MessageTypeRegistry {
    &STANDARD
}

/// Registry of message kinds keyed by tag.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use typedpacket::message::services::MessageTypeRegistry;
///
/// let registry = MessageTypeRegistry::new();
/// let receipt = registry.create("DELIVERED", &DefaultClock).expect("known kind");
/// assert_eq!(receipt.message_type().tag(), "DELIVERED");
/// assert!(registry.create("BOGUS", &DefaultClock).is_none());
/// ```
#[derive(Debug, Default)]
pub struct MessageTypeRegistry {
    types: HashMap<String, Arc<MessageType>>,
    recognizers: Vec<Arc<MessageType>>,
}

impl MessageTypeRegistry {
    /// Creates a registry holding the standard kinds.
    ///
    /// Kinds are registered in recognition order: delivery receipt, read
    /// receipt, ICS-213, the unknown-form fallback, then plain text.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(delivery_receipt::message_type());
        registry.register(read_receipt::message_type());
        registry.register(ics213::message_type());
        registry.register(unknown_form::message_type());
        registry.register(plain_text::message_type());
        registry
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a kind.
    ///
    /// A kind registered under an existing tag replaces it for lookup and
    /// creation. If the kind can recognize messages it is appended to the
    /// recognizer list; a replaced kind keeps its earlier place there.
    pub fn register(&mut self, message_type: MessageType) -> Arc<MessageType> {
        let shared = Arc::new(message_type);
        let tag = shared.tag().to_owned();
        if shared.is_recognizable() {
            self.recognizers.push(Arc::clone(&shared));
        }
        if self.types.insert(tag, Arc::clone(&shared)).is_some() {
            debug!(tag = shared.tag(), "replaced message type");
        } else {
            trace!(tag = shared.tag(), "registered message type");
        }
        shared
    }

    /// Returns the kind registered under `tag`.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&Arc<MessageType>> {
        self.types.get(tag)
    }

    /// Returns the registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.types.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Returns the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Creates a blank message of the kind registered under `tag`.
    ///
    /// The message starts with a blank raw message and every field at its
    /// default.
    ///
    /// Returns `None` if the tag is unknown or the kind cannot be created
    /// from scratch.
    #[must_use]
    pub fn create(&self, tag: &str, clock: &impl Clock) -> Option<TypedMessage> {
        let message_type = self.lookup(tag)?;
        let defs = message_type.blank_fields()?;
        Some(TypedMessage::create(
            Arc::clone(message_type),
            defs,
            Box::new(HeaderMessage::new()),
            clock,
        ))
    }

    /// Runs a raw message past the recognizers in registration order.
    ///
    /// The first recognizer to claim the message wins. If none does, the raw
    /// message is handed back untouched.
    #[must_use]
    pub fn recognize(&self, raw: Box<dyn RawMessage>) -> Recognition {
        for message_type in &self.recognizers {
            let Some(decoded) = message_type.recognize(raw.as_ref()) else {
                trace!(tag = message_type.tag(), "recognizer declined");
                continue;
            };
            debug!(tag = message_type.tag(), "recognized message");
            return Recognition::Typed(TypedMessage::recognized(
                Arc::clone(message_type),
                decoded,
                raw,
            ));
        }
        debug!(subject = raw.subject(), "no recognizer claimed message");
        Recognition::Unrecognized(raw)
    }
}

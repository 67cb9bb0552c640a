use crate::{EnvelopeKind, Navigate, Notify, ResultEnvelope, Routes};

/// Fixed warning shown whenever a response reveals the session to be missing
/// or expired.
pub const SESSION_EXPIRED_MESSAGE: &str = "User is not logged in or the session has expired";

/// Maps classified server responses onto their side effects.
///
/// One classification emits at most one notification and at most one
/// navigation; when a callback applies it runs after the notification. An
/// [EnvelopeKind::Unauthorized] outcome always both warns and routes to the
/// login target - it doubles as the signal that any cached authorization
/// state is stale, and callers holding such state should invalidate it.
pub struct Classifier<N, V>
where
    N: Notify,
    V: Navigate,
{
    notifier: N,
    navigator: V,
    routes: Routes,
}

impl<N, V> Classifier<N, V>
where
    N: Notify,
    V: Navigate,
{
    /// Create a classifier over the given collaborators, using the default
    /// [Routes].
    pub fn new(notifier: N, navigator: V) -> Self {
        Self {
            notifier,
            navigator,
            routes: Routes::default(),
        }
    }

    /// Replace the navigation targets.
    pub fn with_routes(mut self, routes: Routes) -> Self {
        self.routes = routes;
        self
    }

    /// Classify `envelope` without callbacks.
    pub fn classify(&self, envelope: &ResultEnvelope) {
        self.classify_with(envelope, None::<fn()>, None::<fn()>);
    }

    /// Classify `envelope`, running `on_success` after a success
    /// notification or `on_fail` after a failure notification.
    ///
    /// An envelope without a tag is malformed and classifying it does
    /// nothing at all; this is a tolerated condition, not an error.
    pub fn classify_with<S, F>(
        &self,
        envelope: &ResultEnvelope,
        on_success: Option<S>,
        on_fail: Option<F>,
    ) where
        S: FnOnce(),
        F: FnOnce(),
    {
        let Some(kind) = envelope.kind else {
            return;
        };
        let content = envelope.content.as_deref().unwrap_or_default();

        match kind {
            EnvelopeKind::Info => {
                self.notifier.info(content);
            }
            EnvelopeKind::NotFound => {
                self.navigator.navigate_to(&self.routes.not_found);
            }
            EnvelopeKind::Unauthorized => {
                self.notifier.warning(SESSION_EXPIRED_MESSAGE);
                self.navigator.navigate_to(&self.routes.login);
            }
            EnvelopeKind::Success => {
                self.notifier.success(content);
                if let Some(callback) = on_success {
                    callback();
                }
            }
            EnvelopeKind::Fail => {
                self.notifier.error(content);
                if let Some(callback) = on_fail {
                    callback();
                }
            }
        }
    }

    /// Classify a failure that never produced an envelope: a non-2xx status
    /// from the transport itself.
    ///
    /// A 401 is handled like [EnvelopeKind::Unauthorized] and a 404 like
    /// [EnvelopeKind::NotFound]; anything else surfaces as an error
    /// notification carrying the status code and text.
    pub fn classify_transport_error(&self, status: u16, status_text: &str) {
        match status {
            401 => {
                self.notifier.warning(SESSION_EXPIRED_MESSAGE);
                self.navigator.navigate_to(&self.routes.login);
            }
            404 => {
                self.navigator.navigate_to(&self.routes.not_found);
            }
            _ => {
                self.notifier
                    .error(&format!("An error occurred: {status}: {status_text}"));
            }
        }
    }
}

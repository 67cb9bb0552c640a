use std::time::Duration;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral, informational.
    Info,
    /// An operation completed.
    Success,
    /// Something needs the user's attention but nothing failed.
    Warning,
    /// An operation failed.
    Error,
}

/// Presentation options for a notification.
///
/// The concrete values are configuration, not contract: the presets below
/// reflect the shell's defaults (3 seconds for routine messages, 6 seconds
/// for errors) and renderers may be handed different ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    /// How long the notification stays visible.
    pub duration: Duration,
    /// Whether to animate the notification in and out.
    pub animate: bool,
    /// Whether the visibility timer pauses while hovered.
    pub pause_on_hover: bool,
}

impl NotifyOptions {
    /// The preset used for info, success and warning messages.
    pub fn standard() -> Self {
        Self {
            duration: Duration::from_secs(3),
            animate: true,
            pause_on_hover: true,
        }
    }

    /// The longer-lived preset used for error messages.
    pub fn error() -> Self {
        Self {
            duration: Duration::from_secs(6),
            animate: true,
            pause_on_hover: true,
        }
    }
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// The notification boundary: something that can surface a message to the
/// user. Rendering (toasts, status bars, logs) happens behind this trait.
///
/// Implementers provide [Notify::notify]; the per-severity conveniences
/// apply the duration presets and are what the classifier calls.
pub trait Notify {
    /// Surface `message` to the user at the given severity.
    fn notify(&self, severity: Severity, message: &str, options: &NotifyOptions);

    /// Surface an informational message with the standard preset.
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message, &NotifyOptions::standard());
    }

    /// Surface a success message with the standard preset.
    fn success(&self, message: &str) {
        self.notify(Severity::Success, message, &NotifyOptions::standard());
    }

    /// Surface a warning with the standard preset.
    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message, &NotifyOptions::standard());
    }

    /// Surface an error with the error preset.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message, &NotifyOptions::error());
    }
}

/// A [Notify] implementation that writes to the `tracing` subscriber, for
/// headless shells and tests that do not render notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, severity: Severity, message: &str, _options: &NotifyOptions) {
        match severity {
            Severity::Info | Severity::Success => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

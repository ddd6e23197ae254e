//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`LineLogger`].
//!
//! [`LineLoggerLayer`] is a tracing-subscriber layer that writes each event's
//! message through a shared logger: `ERROR`, `WARN` and `INFO` events take the
//! Info path, `DEBUG` and `TRACE` events take the Debug path and its level
//! filter. This lets code instrumented with `tracing::info!` and friends end
//! up in the same `[INFO] ` / `[DEBUG] ` line stream.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{init_tracing, LineLogger, LogFlags};
//!
//! let logger = Arc::new(LineLogger::new(std::io::stderr(), "", LogFlags::empty()));
//! init_tracing(Arc::clone(&logger));
//!
//! tracing::info!("listening");
//! tracing::debug!(port = 8080, "bound");
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::call_site::{CallSite, ResolveCallSite};
use crate::logger::{LineLogger, SELF_TARGET};

/// Which logger path a tracing event is routed through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Route {
    Info,
    Debug,
}

/// A tracing layer that writes events through a shared [`LineLogger`].
pub struct LineLoggerLayer<W, R> {
    logger: Arc<LineLogger<W, R>>,
}

impl<W, R> LineLoggerLayer<W, R> {
    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<LineLogger<W, R>>) -> Self {
        Self { logger }
    }

    /// Levels more verbose than `INFO` take the Debug path.
    fn route(level: Level) -> Route {
        if level > Level::INFO {
            Route::Debug
        } else {
            Route::Info
        }
    }
}

impl<S, W, R> Layer<S> for LineLoggerLayer<W, R>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
    R: ResolveCallSite + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // The logger reports its own sink failures through tracing.
        if metadata.target() == SELF_TARGET {
            return;
        }

        let route = Self::route(*metadata.level());
        if route == Route::Debug && !self.logger.debug_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = visitor.finish();
        let site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(file, line)),
            _ => None,
        };

        let logger = self.logger.as_ref();
        let resolver = EventSite(site);
        match route {
            Route::Info => logger.info_with(&resolver, Location::caller(), &text),
            Route::Debug => logger.debug_with(&resolver, Location::caller(), &text),
        }
    }
}

/// Resolves to the file and line recorded in the event's metadata.
struct EventSite(Option<CallSite>);

impl ResolveCallSite for EventSite {
    fn resolve(&self, _caller: &'static Location<'static>) -> Option<CallSite> {
        self.0.clone()
    }
}

/// Visitor collecting the `message` field followed by `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => message,
            (Some(message), false) => format!("{message} {}", self.fields),
            (None, _) => self.fields,
        }
    }

    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a global tracing subscriber that writes events through `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use logging::{init_tracing, LineLogger, LogFlags};
///
/// init_tracing(Arc::new(LineLogger::new(std::io::stdout(), "", LogFlags::CONTEXT)));
/// tracing::info!("ready");
/// ```
pub fn init_tracing<W, R>(logger: Arc<LineLogger<W, R>>)
where
    W: Write + Send + 'static,
    R: ResolveCallSite + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LineLoggerLayer::new(logger))
        .init();
}

/// Installs a global tracing subscriber with an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use logging::{init_tracing_with_filter, LineLogger, LogFlags};
/// use tracing_subscriber::EnvFilter;
///
/// let logger = Arc::new(LineLogger::new(std::io::stderr(), "", LogFlags::empty()));
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<W, R, F>(logger: Arc<LineLogger<W, R>>, filter: F)
where
    W: Write + Send + 'static,
    R: ResolveCallSite + Send + Sync + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LineLoggerLayer::new(logger))
        .init();
}

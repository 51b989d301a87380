//! Trace context carried across the host `web_request` boundary.
//!
//! A request leaves the plugin in one `update` call and its result arrives in
//! a later one. The span ids ride along in the request's context map so the
//! response handling nests under the span that issued the request.

use opentelemetry::trace::{
    SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
};
use opentelemetry::ContextGuard;
use std::collections::BTreeMap;

/// Context map key for the trace id.
pub const TRACE_ID_KEY: &str = "trace_id";

/// Context map key for the parent span id.
pub const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Hex-encoded trace and span ids of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current `tracing` span.
    ///
    /// Returns `None` when tracing is not initialized or the span is disabled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();
        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Writes the ids into a `web_request` context map.
    pub fn inject(&self, context: &mut BTreeMap<String, String>) {
        context.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        context.insert(PARENT_SPAN_ID_KEY.to_string(), self.parent_span_id.clone());
    }

    /// Reads the ids back from a context map returned with a web result.
    #[must_use]
    pub fn extract(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(PARENT_SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes the carried span the remote parent of spans opened while the
    /// returned guard lives.
    ///
    /// Returns `None` if either id is not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<ContextGuard> {
        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

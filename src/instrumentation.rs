//! Search timing, compiled in with `--features instrumentation`.
//!
//! `search_best_move` is the instrumented span. Each entry into it is timed and
//! the per-span totals are printed to stderr when the program exits.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SpanTiming {
    calls: u32,
    total: Duration,
}

impl SpanTiming {
    fn add(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
    }

    fn average(&self) -> Duration {
        if self.calls == 0 {
            Duration::default()
        } else {
            self.total / self.calls
        }
    }
}

static SPAN_TIMINGS: Lazy<Mutex<BTreeMap<&'static str, SpanTiming>>> =
    Lazy::new(|| Mutex::new(BTreeMap::new()));

struct SearchTimingLayer;

impl<S> Layer<S> for SearchTimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = span.extensions_mut().remove::<Instant>();
        if let (Some(started), Ok(mut timings)) = (started, SPAN_TIMINGS.lock()) {
            timings.entry(span.name()).or_default().add(started.elapsed());
        }
    }
}

pub fn init_tracing() {
    let subscriber = tracing_subscriber::registry().with(SearchTimingLayer);
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", error);
    }
}

pub fn print_timing_statistics() {
    let timings = match SPAN_TIMINGS.lock() {
        Ok(timings) => timings.clone(),
        Err(_) => return,
    };

    if timings.is_empty() {
        eprintln!("no searches were timed");
        return;
    }

    eprintln!("{}", timing_report(&timings));
}

fn timing_report(timings: &BTreeMap<&'static str, SpanTiming>) -> String {
    let mut lines = vec![format!(
        "{:<24} {:>8} {:>14} {:>14}",
        "span", "calls", "total", "average"
    )];
    for (name, timing) in timings {
        lines.push(format!(
            "{:<24} {:>8} {:>14} {:>14}",
            name,
            timing.calls,
            format!("{:?}", timing.total),
            format!("{:?}", timing.average())
        ));
    }
    lines.join("\n")
}

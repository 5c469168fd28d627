//! Prometheus metrics collection and exposition endpoint.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use super::ObservabilityError;

/// Request metrics, built once at start-up and shared by the request
/// middleware and the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub(crate) struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl HttpMetrics {
    pub(crate) fn new() -> Result<Self, ObservabilityError> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "dairycart_json_http_requests_total",
                "Total HTTP requests partitioned by method, route, status class, and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "dairycart_json_http_request_duration_seconds",
                "HTTP request duration in seconds partitioned by method and route.",
            )
            .buckets(vec![
                0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::with_opts(Opts::new(
            "dairycart_json_http_requests_in_flight",
            "Current number of in-flight HTTP requests.",
        ))?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }

    pub(super) fn track_in_flight(&self) -> InFlightRequestGuard {
        self.requests_in_flight.inc();

        InFlightRequestGuard {
            gauge: self.requests_in_flight.clone(),
        }
    }

    pub(super) fn observe_request(
        &self,
        method: &str,
        route: &str,
        status_code: u16,
        duration_seconds: f64,
    ) {
        let status_class = status_class(status_code);
        let status_code = status_code.to_string();

        self.requests_total
            .with_label_values(&[method, route, status_class, status_code.as_str()])
            .inc();

        self.request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration_seconds);
    }

    fn encode(&self) -> Result<(String, Vec<u8>), prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut encoded = Vec::new();

        encoder.encode(&self.registry.gather(), &mut encoded)?;

        Ok((encoder.format_type().to_owned(), encoded))
    }
}

/// Decrements the in-flight gauge when the request finishes.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    gauge: IntGauge,
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}

/// Serves the Prometheus text exposition of [`HttpMetrics`].
#[derive(Debug, Clone)]
pub(crate) struct MetricsExporter {
    metrics: HttpMetrics,
}

impl MetricsExporter {
    pub(crate) fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

#[handler]
impl MetricsExporter {
    async fn handle(&self, res: &mut Response) {
        let (format_type, encoded) = match self.metrics.encode() {
            Ok(encoded) => encoded,
            Err(source) => {
                error!("failed to encode metrics response: {source}");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

                return;
            }
        };

        let content_type = match HeaderValue::from_str(&format_type) {
            Ok(value) => value,
            Err(source) => {
                error!("failed to encode metrics content type header: {source}");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

                return;
            }
        };

        res.headers_mut().insert(CONTENT_TYPE, content_type);
        res.render(String::from_utf8_lossy(&encoded).into_owned());
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

use metrics_exporter_prometheus::PrometheusHandle;
use paior::config::parse_age_weight;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_age_weight_arg(raw: &str) -> Result<f64, String> {
    parse_age_weight(raw).map_err(|err| err.to_string())
}

use crate::application::comparison_renderer::COMPARISON_TARGETS;
use crate::application::system::Application;
use crate::domain::chart::ChartSpec;
use crate::domain::validation::PredictionInputs;
use crate::interfaces::view_models::prediction_view_model::{
    PredictionOutcome, PredictionViewModel,
};
use crossbeam_channel::Receiver;
use std::collections::VecDeque;
use tracing::info;

const MAX_LOG_LINES: usize = 500;

/// One precomputed evaluation chart on the dashboard
pub struct ChartPanel {
    pub target: &'static str,
    pub caption: &'static str,
    /// Error text replaces the chart when the table could not be loaded
    pub chart: Result<ChartSpec, String>,
}

fn caption(target: &str) -> &'static str {
    match target {
        "roi" => {
            "ROI is the total PnL divided by initial deposits. It accounts for gas and impermanent loss."
        }
        "fee_apr" => {
            "Fee APR is the annualized rate of fees earned. It does NOT include gas or impermanent loss."
        }
        _ => "",
    }
}

/// State behind the egui window
pub struct DashboardApp {
    pub app: Application,
    pub charts: Vec<ChartPanel>,
    pub inputs: PredictionInputs,
    pub outcome: PredictionOutcome,
    pub logs: VecDeque<String>,
    pub logs_collapsed: bool,
    log_rx: Receiver<String>,
    last_inputs: PredictionInputs,
}

impl DashboardApp {
    pub fn new(app: Application, log_rx: Receiver<String>) -> Self {
        let charts = COMPARISON_TARGETS
            .into_iter()
            .map(|target| ChartPanel {
                target,
                caption: caption(target),
                chart: app.comparisons.render(target).map_err(|e| {
                    tracing::error!("Failed to render chart for {}: {}", target, e);
                    e.to_string()
                }),
            })
            .collect();

        let inputs = PredictionInputs::default();
        let outcome = PredictionViewModel::compute(&app.predictions, &inputs);
        info!("Dashboard ready");

        Self {
            app,
            charts,
            inputs,
            outcome,
            logs: VecDeque::with_capacity(MAX_LOG_LINES),
            logs_collapsed: false,
            log_rx,
            last_inputs: inputs,
        }
    }

    /// Pull pending log lines from the tracing channel
    pub fn drain_logs(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            let line = line.trim_end().to_string();
            if line.is_empty() {
                continue;
            }
            if self.logs.len() == MAX_LOG_LINES {
                self.logs.pop_front();
            }
            self.logs.push_back(line);
        }
    }

    /// Recompute the prediction only when a form value changed
    pub fn refresh_prediction(&mut self) {
        if self.inputs == self.last_inputs {
            return;
        }
        self.last_inputs = self.inputs;
        self.outcome = PredictionViewModel::compute(&self.app.predictions, &self.inputs);
    }
}

//! AWS Lambda handler for ROI projections
//!
//! Accepts business parameters via JSON and returns the projection either as
//! JSON or as the CSV report text. Supports Lambda Function URLs for direct
//! HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use roi_projection::{
    report::{render_report, DEFAULT_REPORT_FILE}, BusinessModel, BusinessParameters, BusinessProfile, ProjectionResult,
    ScenarioRunner,
};
use serde::{Deserialize, Serialize};

/// Input for one projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Business parameters (COD fields optional)
    pub parameters: BusinessParameters,

    /// Business model; falls back to ROI_BUSINESS_MODEL, then standard
    #[serde(default)]
    pub model: Option<BusinessModel>,

    /// Response format: "json" (default) or "csv"
    #[serde(default)]
    pub format: ResponseFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Csv,
}

/// JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub model: BusinessModel,
    pub paid_back: bool,
    pub result: ProjectionResult,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorBody { error: message })?;
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let model = match request.model {
        Some(model) => model,
        None => match BusinessProfile::from_env() {
            Ok(profile) => profile.model,
            Err(e) => return error_response(500, &e.to_string()),
        },
    };

    let runner = ScenarioRunner::new(model);
    let result = match runner.run_validated(&request.parameters) {
        Ok(result) => result,
        Err(e) => return error_response(422, &e.to_string()),
    };

    match request.format {
        ResponseFormat::Csv => {
            let report = render_report(&request.parameters, model, &result);
            Ok(cors(Response::builder())
                .status(200)
                .header("Content-Type", "text/csv; charset=utf-8")
                .header(
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", DEFAULT_REPORT_FILE),
                )
                .body(Body::Text(report))?)
        }
        ResponseFormat::Json => {
            let response = ProjectionResponse {
                model,
                paid_back: result.is_paid_back(),
                result,
                execution_time_us: start.elapsed().as_micros() as u64,
            };
            Ok(cors(Response::builder())
                .status(200)
                .header("Content-Type", "application/json")
                .body(Body::Text(serde_json::to_string(&response)?))?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

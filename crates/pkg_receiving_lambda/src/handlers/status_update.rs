use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adapters::record_store::RecordStore;
use crate::runtime::contract::StatusTransition;
use crate::runtime::validity::ValidityCheck;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateConfig {
    /// CORS headers are a deployment option; only some stages sit behind
    /// a browser-facing API Gateway.
    pub include_cors: bool,
    /// ISO-8601 UTC timestamp sampled once per invocation; written as the
    /// record's `receiveDate`.
    pub event_time: String,
}

/// Updates a package's receiving status in response to an API Gateway
/// query.
///
/// Looks up the record named by the `packageId` query parameter, runs
/// the validity predicate over it, and writes the resulting status
/// transition back with the invocation timestamp. Every outcome,
/// including unhandled faults, is converted into a structured response;
/// this function never returns an error to the runtime.
pub fn handle_status_update_event(
    event: Value,
    config: &StatusUpdateConfig,
    store: &dyn RecordStore,
    validity: &dyn ValidityCheck,
) -> ApiGatewayResponse {
    match process_event(event, config, store, validity) {
        Ok(response) => response,
        Err(message) => {
            log_status_error("status_update_failed", json!({ "error": message.clone() }));
            plain_response(500, format!("Error: {message}"), config)
        }
    }
}

fn process_event(
    event: Value,
    config: &StatusUpdateConfig,
    store: &dyn RecordStore,
    validity: &dyn ValidityCheck,
) -> Result<ApiGatewayResponse, String> {
    let package_id = extract_package_id(&event)?;
    log_status_info(
        "status_update_received",
        json!({ "package_id": package_id.clone() }),
    );

    let Some(record) = store.get_record(&package_id)? else {
        log_status_info("package_not_found", json!({ "package_id": package_id }));
        return Ok(plain_response(404, "Package not found".to_string(), config));
    };

    let transition = StatusTransition::from_validity(validity.evaluate(&record));
    let update = transition.into_update(config.event_time.clone());
    store.update_status(&package_id, &update)?;

    log_status_info(
        "status_updated",
        json!({
            "package_id": package_id,
            "status": update.status.clone(),
            "receive_date": update.receive_date.clone(),
        }),
    );

    Ok(plain_response(
        transition.response_status_code(),
        transition.response_body(),
        config,
    ))
}

fn extract_package_id(event: &Value) -> Result<String, String> {
    event
        .get("queryStringParameters")
        .and_then(Value::as_object)
        .and_then(|params| params.get("packageId"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| "Missing required query parameter: packageId".to_string())
}

fn plain_response(
    status_code: u16,
    body: String,
    config: &StatusUpdateConfig,
) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: response_headers(config.include_cors),
        body,
    }
}

fn response_headers(include_cors: bool) -> Value {
    if include_cors {
        json!({
            "Content-Type": "text/plain",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "*",
            "Access-Control-Allow-Headers": "*",
            "Access-Control-Max-Age": "3600",
        })
    } else {
        json!({ "Content-Type": "text/plain" })
    }
}

fn log_status_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "status_update_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_status_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "status_update_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

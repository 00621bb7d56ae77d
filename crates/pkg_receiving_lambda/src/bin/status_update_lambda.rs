use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use pkg_receiving_lambda::adapters::record_store::RecordStore;
use pkg_receiving_lambda::handlers::status_update::{
    handle_status_update_event, ApiGatewayResponse, StatusUpdateConfig,
};
use pkg_receiving_lambda::runtime::contract::{PackageRecord, StatusUpdate};
use pkg_receiving_lambda::runtime::validity::AlwaysValid;
use serde_json::Value;

struct DynamoDbRecordStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl RecordStore for DynamoDbRecordStore {
    fn get_record(&self, package_id: &str) -> Result<Option<PackageRecord>, String> {
        let table_name = self.table_name.clone();
        let key = package_id.to_string();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_item()
                    .table_name(table_name)
                    .key("packageId", AttributeValue::S(key))
                    .send()
                    .await
                    .map_err(|error| format!("failed to read package record: {error}"))?;

                Ok(output.item.map(record_from_item))
            })
        })
    }

    fn update_status(&self, package_id: &str, update: &StatusUpdate) -> Result<(), String> {
        let table_name = self.table_name.clone();
        let key = package_id.to_string();
        let status = update.status.clone();
        let receive_date = update.receive_date.clone();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .update_item()
                    .table_name(table_name)
                    .key("packageId", AttributeValue::S(key))
                    // #status: "status" is a DynamoDB reserved word.
                    .update_expression("SET #status = :status, receiveDate = :receiveDate")
                    .expression_attribute_names("#status", "status")
                    .expression_attribute_values(":status", AttributeValue::S(status))
                    .expression_attribute_values(":receiveDate", AttributeValue::S(receive_date))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to update package record: {error}"))
            })
        })
    }
}

fn record_from_item(item: HashMap<String, AttributeValue>) -> PackageRecord {
    let mut record = PackageRecord {
        package_id: String::new(),
        status: String::new(),
        receive_date: None,
        attributes: BTreeMap::new(),
    };

    for (name, value) in item {
        match name.as_str() {
            "packageId" => {
                if let Ok(text) = value.as_s() {
                    record.package_id = text.clone();
                }
            }
            "status" => {
                if let Ok(text) = value.as_s() {
                    record.status = text.clone();
                }
            }
            "receiveDate" => {
                record.receive_date = value.as_s().ok().cloned();
            }
            _ => {
                if let Some(json) = attribute_to_json(&value) {
                    record.attributes.insert(name, json);
                }
            }
        }
    }

    record
}

fn attribute_to_json(value: &AttributeValue) -> Option<Value> {
    match value {
        AttributeValue::S(text) => Some(Value::from(text.clone())),
        AttributeValue::N(number) => number.parse::<f64>().ok().map(Value::from),
        AttributeValue::Bool(flag) => Some(Value::from(*flag)),
        _ => None,
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let table_name =
        std::env::var("PACKAGES_TABLE_NAME").unwrap_or_else(|_| "Packages".to_string());
    let include_cors = std::env::var("INCLUDE_CORS_HEADERS")
        .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(false);

    let config = StatusUpdateConfig {
        include_cors,
        event_time: Utc::now().to_rfc3339(),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let record_store = DynamoDbRecordStore {
        table_name,
        dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
    };

    Ok(handle_status_update_event(
        event.payload,
        &config,
        &record_store,
        &AlwaysValid,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

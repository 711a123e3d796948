use super::fields::{
    bool_value, int_value, millis_value, nested, object_list, string_list, string_value,
};
use super::whois::WhoisRecord;
use crate::traits::ApiResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Status reported when a record has no `whoisRecordStatus` at all
pub const WHOIS_RECORD_STATUS_UNKNOWN: i64 = -1;

/// A bulk request as listed by `getUserRequests`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkRequest {
    pub request_id: String,
    pub time: Option<DateTime<Utc>>,
    pub status: String,
    pub total_records: i64,
    pub fetched_records: i64,
}

impl From<&Value> for BulkRequest {
    fn from(values: &Value) -> Self {
        Self {
            request_id: string_value(values, "requestId"),
            time: millis_value(values, "time"),
            status: string_value(values, "status"),
            total_records: int_value(values, "totalRecords"),
            fetched_records: int_value(values, "fetchedRecords"),
        }
    }
}

/// One domain's entry in a records page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkWhoisRecord {
    pub domain_name: String,
    pub domain_status: String,
    pub whois_record_status: i64,
    pub domain_fetched_time: Option<DateTime<Utc>>,
    pub index: i64,
    pub whois_record: Option<WhoisRecord>,
}

impl Default for BulkWhoisRecord {
    fn default() -> Self {
        Self {
            domain_name: String::new(),
            domain_status: String::new(),
            whois_record_status: WHOIS_RECORD_STATUS_UNKNOWN,
            domain_fetched_time: None,
            index: 0,
            whois_record: None,
        }
    }
}

impl From<&Value> for BulkWhoisRecord {
    fn from(values: &Value) -> Self {
        let whois_record_status = if values.get("whoisRecordStatus").is_some() {
            int_value(values, "whoisRecordStatus")
        } else {
            WHOIS_RECORD_STATUS_UNKNOWN
        };

        Self {
            domain_name: string_value(values, "domainName"),
            domain_status: string_value(values, "domainStatus"),
            whois_record_status,
            domain_fetched_time: millis_value(values, "domainFetchedTime"),
            index: int_value(values, "index"),
            whois_record: nested(values, "whoisRecord"),
        }
    }
}

/// Parsed body of a vendor error response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub code: i64,
    pub message: String,
}

impl From<&Value> for ErrorMessage {
    fn from(values: &Value) -> Self {
        Self {
            code: int_value(values, "messageCode"),
            message: string_value(values, "message"),
        }
    }
}

/// Result of creating a bulk request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseCreate {
    pub request_id: String,
    /// Domains the server refused to process
    pub invalid_domains: Vec<String>,
}

impl From<&Value> for ResponseCreate {
    fn from(values: &Value) -> Self {
        Self {
            request_id: string_value(values, "requestId"),
            invalid_domains: string_list(values, "invalidDomains"),
        }
    }
}

impl ApiResponse for ResponseCreate {
    const ROOT_ELEMENT: &'static str = "requestId";
}

/// One page of processed WHOIS records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseRecords {
    pub no_data_available: bool,
    pub request_id: String,
    pub total_records: i64,
    pub records_left: i64,
    pub records_processed: i64,
    pub domain_list: Vec<String>,
    pub whois_records: Vec<BulkWhoisRecord>,
}

impl From<&Value> for ResponseRecords {
    fn from(values: &Value) -> Self {
        Self {
            no_data_available: bool_value(values, "noDataAvailable"),
            request_id: string_value(values, "requestId"),
            total_records: int_value(values, "totalRecords"),
            records_left: int_value(values, "recordsLeft"),
            records_processed: int_value(values, "recordsProcessed"),
            domain_list: string_list(values, "domainList"),
            whois_records: object_list(values, "whoisRecords"),
        }
    }
}

impl ApiResponse for ResponseRecords {
    const ROOT_ELEMENT: &'static str = "whoisRecords";
}

/// The caller's bulk requests
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseRequests {
    pub user_requests: Vec<BulkRequest>,
}

impl From<&Value> for ResponseRequests {
    fn from(values: &Value) -> Self {
        Self {
            user_requests: object_list(values, "userRequests"),
        }
    }
}

impl ApiResponse for ResponseRequests {
    const ROOT_ELEMENT: &'static str = "userRequests";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_create() {
        let values = json!({
            "noDataAvailable": false,
            "message": "OK",
            "messageCode": 200,
            "invalidDomains": ["foo.bar"],
            "requestId": "12345678-1234-1234-1234-123456789012",
            "whoisRecords": [],
            "domains": []
        });
        let parsed = ResponseCreate::from(&values);

        assert_eq!(parsed.request_id, values["requestId"]);
        assert_eq!(parsed.invalid_domains, vec!["foo.bar"]);
    }

    #[test]
    fn test_response_create_defaults() {
        let parsed = ResponseCreate::from(&json!({}));
        assert_eq!(parsed.request_id, "");
        assert!(parsed.invalid_domains.is_empty());
    }

    #[test]
    fn test_response_records() {
        let values = json!({
            "noDataAvailable": false,
            "domainList": ["foo.bar", "baz.qux"],
            "requestId": "12345678-1234-1234-1234-123456789012",
            "whoisRecords": [
                {
                    "domainName": "foo.bar",
                    "domainStatus": "I",
                    "whoisRecordStatus": 0,
                    "domainFetchedTime": "1642158864782",
                    "whoisRecord": {"domainName": "foo.bar", "registrarName": "bar"},
                    "index": 1
                },
                {
                    "domainName": "baz.qux",
                    "index": 2
                }
            ],
            "totalRecords": 2,
            "recordsLeft": 0,
            "recordsProcessed": 2
        });
        let parsed = ResponseRecords::from(&values);

        assert!(!parsed.no_data_available);
        assert_eq!(parsed.domain_list, vec!["foo.bar", "baz.qux"]);
        assert_eq!(parsed.total_records, 2);
        assert_eq!(parsed.records_processed, 2);
        assert_eq!(parsed.whois_records.len(), 2);

        let first = &parsed.whois_records[0];
        assert_eq!(first.whois_record_status, 0);
        assert_eq!(first.index, 1);
        assert_eq!(
            first.domain_fetched_time.unwrap().timestamp_millis(),
            1642158864782
        );
        assert_eq!(
            first.whois_record.as_ref().unwrap().whois.registrar_name,
            "bar"
        );

        let second = &parsed.whois_records[1];
        assert_eq!(second.whois_record_status, WHOIS_RECORD_STATUS_UNKNOWN);
        assert!(second.domain_fetched_time.is_none());
        assert!(second.whois_record.is_none());
    }

    #[test]
    fn test_response_requests() {
        let values = json!({
            "userRequests": [
                {
                    "requestId": "12345678-1234-1234-1234-123456789012",
                    "time": 1641985855887_i64,
                    "status": "Completed",
                    "totalRecords": 2,
                    "fetchedRecords": 0
                },
                {
                    "requestId": "12345678-1234-1234-1234-123456789013",
                    "status": "Processing",
                    "totalRecords": "1"
                }
            ]
        });
        let parsed = ResponseRequests::from(&values);

        assert_eq!(parsed.user_requests.len(), 2);
        assert_eq!(
            parsed.user_requests[1].request_id,
            values["userRequests"][1]["requestId"]
        );
        assert_eq!(
            parsed.user_requests[0].time.unwrap().timestamp_millis(),
            1641985855887
        );
        assert!(parsed.user_requests[1].time.is_none());
        assert_eq!(parsed.user_requests[1].total_records, 1);
    }

    #[test]
    fn test_error_message() {
        let values = json!({"message": "Domain list can not be empty!", "messageCode": 417});
        let parsed = ErrorMessage::from(&values);
        assert_eq!(parsed.code, 417);
        assert_eq!(parsed.message, "Domain list can not be empty!");

        assert_eq!(ErrorMessage::from(&json!(null)), ErrorMessage::default());
    }

    #[test]
    fn test_malformed_nested_entries() {
        let values = json!({"userRequests": ["oops", 5, null, {"status": "Completed"}]});
        let parsed = ResponseRequests::from(&values);

        assert_eq!(parsed.user_requests.len(), 4);
        assert_eq!(parsed.user_requests[0], BulkRequest::default());
        assert_eq!(parsed.user_requests[3].status, "Completed");
    }
}

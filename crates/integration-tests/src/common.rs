//! Common fixtures for integration tests

use crate::*;

pub const API_KEY: &str = "at_abcdefghijklmnopqrstuvwxyz123";
pub const REQUEST_ID: &str = "3f1b7a90-5a2c-4e55-9d3c-2b8e0f6a1c44";

/// Start a mock API server
pub async fn mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Client pointed at the mock server, with a short timeout
pub fn client_for(server: &ServerGuard) -> Client {
    client_with_key(server, API_KEY)
}

pub fn client_with_key(server: &ServerGuard, api_key: &str) -> Client {
    let config = ClientConfig::new()
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));
    Client::with_config(api_key, config).expect("Failed to create client")
}

/// Body of a successful `bulkWhois` call
pub fn create_response(invalid_domains: &[&str]) -> Value {
    json!({
        "noDataAvailable": false,
        "message": "OK",
        "messageCode": 200,
        "invalidDomains": invalid_domains,
        "requestId": REQUEST_ID,
        "whoisRecords": [],
        "domains": []
    })
}

/// One entry of a `getRecords` page
pub fn bulk_record(domain: &str, index: i64) -> Value {
    json!({
        "domainName": domain,
        "domainStatus": "I",
        "whoisRecordStatus": 0,
        "domainFetchedTime": 1642158864782_i64,
        "index": index,
        "whoisRecord": {
            "domainName": domain,
            "registrarName": "Example Registrar, Inc.",
            "createdDate": "1997-09-15T07:00:00+0000",
            "customField1Name": "RegistrarContactEmail",
            "customField1Value": "abuse@registrar.example",
            "registryData": {
                "domainName": domain,
                "whoisServer": "whois.registrar.example",
                "customField2Name": "RegistrarURL",
                "customField2Value": "https://registrar.example",
                "nameServers": {"hostNames": ["NS1.EXAMPLE.COM", {"str": "NS2.EXAMPLE.COM"}]}
            }
        }
    })
}

/// Body of a `getRecords` page covering `domains`, starting at `start`
pub fn records_response(domains: &[&str], start: i64, total: i64) -> Value {
    let records: Vec<Value> = domains
        .iter()
        .zip(start..)
        .map(|(domain, index)| bulk_record(domain, index))
        .collect();
    let processed = records.len() as i64;

    json!({
        "noDataAvailable": false,
        "requestId": REQUEST_ID,
        "domainList": domains,
        "whoisRecords": records,
        "totalRecords": total,
        "recordsLeft": total - (start - 1) - processed,
        "recordsProcessed": processed
    })
}

/// Body of a `getUserRequests` call
pub fn requests_response() -> Value {
    json!({
        "userRequests": [
            {
                "requestId": REQUEST_ID,
                "time": 1641985855887_i64,
                "status": "Completed",
                "totalRecords": 3,
                "fetchedRecords": 1
            }
        ]
    })
}

pub const CSV_BODY: &str = "domainName,registrarName\nexample.com,Example Registrar, Inc.\n";

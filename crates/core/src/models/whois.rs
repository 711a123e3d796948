//! Generic WHOIS record shape and its bulk-specific extensions

use super::fields::{int_value, nested, string_list, string_value};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Contact block (registrant, administrative, technical, billing, zone)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub name: String,
    pub organization: String,
    pub street1: String,
    pub street2: String,
    pub street3: String,
    pub street4: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub country_code: String,
    pub email: String,
    pub telephone: String,
    pub telephone_ext: String,
    pub fax: String,
    pub fax_ext: String,
    pub raw_text: String,
    pub unparsable: String,
    pub parse_code: i64,
}

impl From<&Value> for Contact {
    fn from(values: &Value) -> Self {
        Self {
            name: string_value(values, "name"),
            organization: string_value(values, "organization"),
            street1: string_value(values, "street1"),
            street2: string_value(values, "street2"),
            street3: string_value(values, "street3"),
            street4: string_value(values, "street4"),
            city: string_value(values, "city"),
            state: string_value(values, "state"),
            postal_code: string_value(values, "postalCode"),
            country: string_value(values, "country"),
            country_code: string_value(values, "countryCode"),
            email: string_value(values, "email"),
            telephone: string_value(values, "telephone"),
            telephone_ext: string_value(values, "telephoneExt"),
            fax: string_value(values, "fax"),
            fax_ext: string_value(values, "faxExt"),
            raw_text: string_value(values, "rawText"),
            unparsable: string_value(values, "unparsable"),
            parse_code: int_value(values, "parseCode"),
        }
    }
}

/// Record audit timestamps as reported by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Audit {
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Value> for Audit {
    fn from(values: &Value) -> Self {
        Self {
            created_date: string_value(values, "createdDate"),
            updated_date: string_value(values, "updatedDate"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NameServers {
    pub raw_text: String,
    pub host_names: Vec<String>,
    pub ips: Vec<String>,
}

impl From<&Value> for NameServers {
    fn from(values: &Value) -> Self {
        // Host names come either as plain strings or as {"str": ...} objects
        let host_names = values
            .get("hostNames")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(_) => item
                            .get("str")
                            .and_then(Value::as_str)
                            .map(String::from),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            raw_text: string_value(values, "rawText"),
            host_names,
            ips: string_list(values, "ips"),
        }
    }
}

/// Fields shared by registrar-level and registry-level WHOIS records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WhoisData {
    pub domain_name: String,
    pub domain_name_ext: String,
    pub status: String,
    pub raw_text: String,
    pub header: String,
    pub stripped_text: String,
    pub footer: String,
    pub registrar_name: String,
    pub registrar_iana_id: String,
    pub whois_server: String,
    pub created_date: String,
    pub updated_date: String,
    pub expires_date: String,
    pub created_date_normalized: String,
    pub updated_date_normalized: String,
    pub expires_date_normalized: String,
    pub contact_email: String,
    pub estimated_domain_age: i64,
    pub parse_code: i64,
    pub data_error: i64,
    pub registrant: Option<Contact>,
    pub administrative_contact: Option<Contact>,
    pub technical_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
    pub zone_contact: Option<Contact>,
    pub audit: Option<Audit>,
    pub name_servers: Option<NameServers>,
    pub ips: Vec<String>,
}

impl From<&Value> for WhoisData {
    fn from(values: &Value) -> Self {
        Self {
            domain_name: string_value(values, "domainName"),
            domain_name_ext: string_value(values, "domainNameExt"),
            status: string_value(values, "status"),
            raw_text: string_value(values, "rawText"),
            header: string_value(values, "header"),
            stripped_text: string_value(values, "strippedText"),
            footer: string_value(values, "footer"),
            registrar_name: string_value(values, "registrarName"),
            registrar_iana_id: string_value(values, "registrarIANAID"),
            whois_server: string_value(values, "whoisServer"),
            created_date: string_value(values, "createdDate"),
            updated_date: string_value(values, "updatedDate"),
            expires_date: string_value(values, "expiresDate"),
            created_date_normalized: string_value(values, "createdDateNormalized"),
            updated_date_normalized: string_value(values, "updatedDateNormalized"),
            expires_date_normalized: string_value(values, "expiresDateNormalized"),
            contact_email: string_value(values, "contactEmail"),
            estimated_domain_age: int_value(values, "estimatedDomainAge"),
            parse_code: int_value(values, "parseCode"),
            data_error: int_value(values, "dataErrorFlag"),
            registrant: nested(values, "registrant"),
            administrative_contact: nested(values, "administrativeContact"),
            technical_contact: nested(values, "technicalContact"),
            billing_contact: nested(values, "billingContact"),
            zone_contact: nested(values, "zoneContact"),
            audit: nested(values, "audit"),
            name_servers: nested(values, "nameServers"),
            ips: string_list(values, "ips"),
        }
    }
}

impl WhoisData {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_whois_date(&self.created_date)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        parse_whois_date(&self.updated_date)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        parse_whois_date(&self.expires_date)
    }
}

/// Parse the API's date strings (`2019-09-09T15:39:04+0000` or RFC 3339)
pub fn parse_whois_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    DateTime::parse_from_rfc3339(date)
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The three vendor-defined name/value pairs attached to bulk records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomFields {
    pub custom1_field_name: String,
    pub custom1_field_value: String,
    pub custom2_field_name: String,
    pub custom2_field_value: String,
    pub custom3_field_name: String,
    pub custom3_field_value: String,
}

impl From<&Value> for CustomFields {
    fn from(values: &Value) -> Self {
        Self {
            custom1_field_name: string_value(values, "customField1Name"),
            custom1_field_value: string_value(values, "customField1Value"),
            custom2_field_name: string_value(values, "customField2Name"),
            custom2_field_value: string_value(values, "customField2Value"),
            custom3_field_name: string_value(values, "customField3Name"),
            custom3_field_value: string_value(values, "customField3Value"),
        }
    }
}

impl CustomFields {
    /// Non-empty name/value pairs in order
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        [
            (&self.custom1_field_name, &self.custom1_field_value),
            (&self.custom2_field_name, &self.custom2_field_value),
            (&self.custom3_field_name, &self.custom3_field_value),
        ]
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
    }
}

/// WHOIS data taken from the registry (thin registry record)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryData {
    #[serde(flatten)]
    pub whois: WhoisData,
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

impl From<&Value> for RegistryData {
    fn from(values: &Value) -> Self {
        Self {
            whois: WhoisData::from(values),
            custom_fields: CustomFields::from(values),
        }
    }
}

/// Registrar-level WHOIS record of a bulk result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WhoisRecord {
    #[serde(flatten)]
    pub whois: WhoisData,
    #[serde(flatten)]
    pub custom_fields: CustomFields,
    pub registry_data: Option<RegistryData>,
}

impl From<&Value> for WhoisRecord {
    fn from(values: &Value) -> Self {
        Self {
            whois: WhoisData::from(values),
            custom_fields: CustomFields::from(values),
            registry_data: nested(values, "registryData"),
        }
    }
}

pub(crate) mod fields;
pub mod request;
pub mod response;
pub mod whois;

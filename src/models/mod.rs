//! Data models shared by the importer, generator and CLI

pub mod types;

pub use types::{
    generate_id, BodyContent, BodyType, BodyValidation, Header, ImportResult, KeyValueItem,
    ParsedCurlRequest, QueryParam, RequestBody,
};

//! Scout core: data model and pure transformations for fetch-and-persist runs.
mod conversion;
mod filename;
mod normalize;
mod report;
mod response;
mod result;
mod schema;
mod subject;

pub use conversion::{in_field_order, object, ConversionError, Converter};
pub use filename::{result_filename, sanitize_subject};
pub use normalize::normalize;
pub use report::{format_value, report};
pub use response::{Format, RemoteResponse};
pub use result::{
    DataRecord, ErrorRecord, Extraction, FetchResult, RecordKind, SuccessFlag, Timestamp,
    TIMESTAMP_FORMAT,
};
pub use schema::{CompanyProfile, ExtractionSchema, ExtractionTarget, FieldKind, FieldSpec};
pub use subject::Subject;

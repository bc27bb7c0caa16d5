pub mod api;
pub mod records;

pub use api::ApiClient;
pub use records::RecordStore;

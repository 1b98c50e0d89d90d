pub mod document;
pub mod operation;
pub mod request_body;
pub mod schema;

pub use document::{Components, Document, Info, PathItem};
pub use operation::{Operation, Parameter, Response};
pub use request_body::{MediaType, RequestBody};
pub use schema::Schema;

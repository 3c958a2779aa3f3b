pub mod goals;
pub mod session;
pub mod subject;

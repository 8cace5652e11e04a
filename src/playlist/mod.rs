pub mod models;
pub mod url;

pub mod cards;
pub mod init;
pub mod navigate;
pub mod routes;
pub mod translate;
pub mod validate;

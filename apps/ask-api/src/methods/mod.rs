pub mod ask;
pub mod entities;
pub mod health_check;
pub mod routes;

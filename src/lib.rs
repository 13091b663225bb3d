pub mod error;
pub use error::Error;

pub mod app;

pub mod forms;

pub mod models;

pub mod storage;

pub mod services;

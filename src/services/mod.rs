pub mod db;
pub mod fs_service;
pub mod predictor;
pub mod session;

pub mod download;
pub mod storage;

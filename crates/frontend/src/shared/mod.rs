pub mod format;
pub mod request_seq;

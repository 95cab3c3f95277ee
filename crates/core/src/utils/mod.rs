pub mod record_utils;

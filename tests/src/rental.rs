mod record_log;
mod scenario;

/// Context property enabling body logging for stream-based bodies
pub const LOG_BODY_STREAMS_PROPERTY: &str = "log.debug.body.streams";
/// Context property capping logged body length in characters
pub const LOG_BODY_MAX_CHARS_PROPERTY: &str = "log.debug.body.max_chars";
/// Default character cap for logged bodies
pub const DEFAULT_LOG_MAX_CHARS: i32 = 1000;
/// Default character cap for structured dumps (128 KiB)
pub const DUMP_MAX_CHARS: i32 = 128 * 1024;

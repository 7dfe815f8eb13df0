//! Field and event names shared by the log macros, the workflow and the
//! test capture layer

// Every operation event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Interactive session correlation
pub const FIELD_SESSION_ID: &str = "session_id";
pub const FIELD_TX_ID: &str = "tx_id";
pub const FIELD_OUTCOME: &str = "outcome";

// Store writes
pub const FIELD_ENTITY_KIND: &str = "entity_kind";
pub const FIELD_ENTITY_KEY: &str = "entity_key";

// Migrations
pub const FIELD_ROW_COUNT: &str = "row_count";

// Failures
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Values of [`FIELD_OUTCOME`]
pub const OUTCOME_COMMIT: &str = "commit";
pub const OUTCOME_ROLLBACK: &str = "rollback";

//! Dotted key registry.
//!
//! Every leaf of the schema is named here exactly once. Section specs and the
//! typed snapshot builder both refer to these constants, so a key can only be
//! renamed in one place.

pub const CORE_MODE: &str = "core.mode";
pub const CORE_WORK_POOL_SIZE: &str = "core.work_pool_size";

pub const POSTGRES_HOST: &str = "postgres.host";
pub const POSTGRES_PORT: &str = "postgres.port";
pub const POSTGRES_DB: &str = "postgres.db";
pub const POSTGRES_USER: &str = "postgres.user";
pub const POSTGRES_PASS: &str = "postgres.pass";
pub const POSTGRES_BATCH_COUNT: &str = "postgres.batch_count";

pub const KAFKA_BOOTSTRAP_SERVERS: &str = "kafka.bootstrap_servers";
pub const KAFKA_GROUP_ID: &str = "kafka.group_id";
pub const KAFKA_AUTO_OFFSET_RESET: &str = "kafka.auto_offset_reset";
pub const KAFKA_TOPIC: &str = "kafka.topic";

pub const PROMETHEUS_PORT: &str = "prometheus.port";

pub const LOG_LEVEL: &str = "log.level";

pub const GRPC_ADDRESS: &str = "endpoints.grpc.address";

pub const HTTP_ADDRESS: &str = "endpoints.http.address";
pub const HTTP_USER: &str = "endpoints.http.user";
pub const HTTP_PASS: &str = "endpoints.http.pass";

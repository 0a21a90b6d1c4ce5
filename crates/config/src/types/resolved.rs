//! The typed, immutable configuration snapshot.
//!
//! Responsibilities:
//! - Define one struct per configuration section.
//! - Build the snapshot from a fully merged document through the key registry.
//!
//! Does NOT handle:
//! - Source selection or environment overrides (see the `loader` module).
//!
//! Invariants:
//! - Optional sections are `Some` exactly when their section is in the schema.
//! - Credential fields are `SecretString` so `Debug` never prints them.
//! - The snapshot has no setters; it is never mutated after construction.

use secrecy::SecretString;

use super::document::{ConfigDocument, DocumentOrigin};
use crate::schema::{Capabilities, Schema, keys, sections};

/// Runtime mode and worker-pool sizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSection {
    /// `release`, `debug` or `test`.
    pub mode: String,
    pub work_pool_size: i64,
}

/// Relational store connection.
#[derive(Debug, Clone)]
pub struct PostgresSection {
    pub host: String,
    pub port: i64,
    pub db: String,
    pub user: String,
    pub pass: SecretString,
    /// Rows per write batch.
    pub batch_count: i64,
}

/// Event stream consumer connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaSection {
    /// Comma-separated broker addresses.
    pub bootstrap_servers: String,
    pub group_id: String,
    pub auto_offset_reset: String,
    pub topic: String,
}

/// Metrics exporter port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrometheusSection {
    pub port: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSection {
    pub level: String,
}

/// RPC listener bind address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcSection {
    pub address: String,
}

/// HTTP listener address and basic-auth credentials.
#[derive(Debug, Clone)]
pub struct HttpSection {
    pub address: String,
    pub user: String,
    pub pass: SecretString,
}

#[derive(Debug, Clone)]
pub struct EndpointsSection {
    pub grpc: Option<GrpcSection>,
    pub http: HttpSection,
}

/// Final configuration snapshot published once per process.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub core: CoreSection,
    pub postgres: Option<PostgresSection>,
    pub kafka: Option<KafkaSection>,
    pub prometheus: PrometheusSection,
    pub log: LogSection,
    pub endpoints: EndpointsSection,
    capabilities: Capabilities,
    document: ConfigDocument,
}

impl ResolvedConfig {
    /// Build the snapshot from a document that already holds every schema key.
    pub(crate) fn from_document(schema: &Schema, document: ConfigDocument) -> Self {
        let doc = &document;
        let string = |key: &str| doc.string(key).to_string();
        let secret = |key: &str| SecretString::new(doc.string(key).into());

        let core = CoreSection {
            mode: string(keys::CORE_MODE),
            work_pool_size: doc.integer(keys::CORE_WORK_POOL_SIZE),
        };

        let postgres = schema
            .has_section(sections::POSTGRES.name)
            .then(|| PostgresSection {
                host: string(keys::POSTGRES_HOST),
                port: doc.integer(keys::POSTGRES_PORT),
                db: string(keys::POSTGRES_DB),
                user: string(keys::POSTGRES_USER),
                pass: secret(keys::POSTGRES_PASS),
                batch_count: doc.integer(keys::POSTGRES_BATCH_COUNT),
            });

        let kafka = schema.has_section(sections::KAFKA.name).then(|| KafkaSection {
            bootstrap_servers: string(keys::KAFKA_BOOTSTRAP_SERVERS),
            group_id: string(keys::KAFKA_GROUP_ID),
            auto_offset_reset: string(keys::KAFKA_AUTO_OFFSET_RESET),
            topic: string(keys::KAFKA_TOPIC),
        });

        let prometheus = PrometheusSection {
            port: doc.integer(keys::PROMETHEUS_PORT),
        };

        let log = LogSection {
            level: string(keys::LOG_LEVEL),
        };

        let endpoints = EndpointsSection {
            grpc: schema.has_section(sections::GRPC.name).then(|| GrpcSection {
                address: string(keys::GRPC_ADDRESS),
            }),
            http: HttpSection {
                address: string(keys::HTTP_ADDRESS),
                user: string(keys::HTTP_USER),
                pass: secret(keys::HTTP_PASS),
            },
        };

        Self {
            core,
            postgres,
            kafka,
            prometheus,
            log,
            endpoints,
            capabilities: schema.capabilities(),
            document,
        }
    }

    /// Capabilities of the schema this snapshot was resolved against.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Where the base document came from.
    pub fn origin(&self) -> &DocumentOrigin {
        self.document.origin()
    }

    /// The merged flat document, one entry per schema key.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }
}

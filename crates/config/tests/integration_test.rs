//! End-to-end configuration resolution through the public API.
//!
//! These tests drive the same compose → source → overlay pipeline the
//! bootstrap binary uses, against temporary files and a scoped environment.

use std::path::PathBuf;

use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use stratum_config::schema::keys;
use stratum_config::{
    Capabilities, ConfigError, DocumentOrigin, Schema, SourceResolver, Value, env_var_or_none,
    merge, resolve_with,
};

const SERVICE_DOCUMENT: &str = r#"
core:
  mode: test
  work_pool_size: 12
postgres:
  host: db.internal
  port: 6432
  db: orders
  user: svc
  pass: hunter2
  batch_count: 50
kafka:
  bootstrap_servers: "k1:9092,k2:9092"
  group_id: orders-consumer
  auto_offset_reset: latest
  topic: orders
prometheus:
  port: 9300
log:
  level: warn
endpoints:
  grpc:
    address: "0.0.0.0:6000"
  http:
    address: "0.0.0.0:8080"
    user: ops
    pass: opspass
"#;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write config");
    path
}

/// Every `STRATUM_*` key of the full schema, unset.
fn cleared_env() -> Vec<(String, Option<String>)> {
    Schema::compose(Capabilities::all())
        .env_keys()
        .into_iter()
        .map(|(_, var)| (var, None))
        .collect()
}

#[test]
#[serial]
fn test_full_pipeline_from_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "service.yaml", SERVICE_DOCUMENT);
    let schema = Schema::compose(Capabilities::all());
    let resolver = SourceResolver::with_search_dirs(vec![]);

    temp_env::with_vars(cleared_env(), || {
        let config = resolve_with(&schema, &resolver, Some(&path)).expect("resolves");

        assert_eq!(config.origin(), &DocumentOrigin::Explicit(path.clone()));
        assert_eq!(config.core.mode, "test");
        assert_eq!(config.core.work_pool_size, 12);

        let postgres = config.postgres.as_ref().expect("postgres section");
        assert_eq!(postgres.host, "db.internal");
        assert_eq!(postgres.port, 6432);
        assert_eq!(postgres.pass.expose_secret(), "hunter2");
        assert_eq!(postgres.batch_count, 50);

        let kafka = config.kafka.as_ref().expect("kafka section");
        assert_eq!(kafka.bootstrap_servers, "k1:9092,k2:9092");
        assert_eq!(kafka.auto_offset_reset, "latest");

        assert_eq!(
            config.endpoints.grpc.as_ref().map(|g| g.address.as_str()),
            Some("0.0.0.0:6000")
        );
        assert_eq!(config.endpoints.http.user, "ops");
        assert_eq!(config.prometheus.port, 9300);
        assert_eq!(config.log.level, "warn");
    });
}

#[test]
#[serial]
fn test_env_beats_every_document_source() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "config.yaml", SERVICE_DOCUMENT);
    let schema = Schema::compose(Capabilities::all());
    let resolver = SourceResolver::with_search_dirs(vec![dir.path().to_path_buf()]);

    let mut vars = cleared_env();
    vars.retain(|(k, _)| k != "STRATUM_POSTGRES_PORT" && k != "STRATUM_KAFKA_TOPIC");
    vars.push(("STRATUM_POSTGRES_PORT".to_string(), Some("7777".to_string())));
    vars.push(("STRATUM_KAFKA_TOPIC".to_string(), Some("audit".to_string())));

    temp_env::with_vars(vars, || {
        let config = resolve_with(&schema, &resolver, None).expect("resolves");

        assert!(matches!(config.origin(), DocumentOrigin::Discovered(_)));
        assert_eq!(config.postgres.as_ref().map(|p| p.port), Some(7777));
        assert_eq!(config.kafka.as_ref().map(|k| k.topic.as_str()), Some("audit"));
        assert_eq!(
            config.document().get(keys::POSTGRES_PORT),
            Some(&Value::Integer(7777))
        );
    });
}

#[test]
#[serial]
fn test_built_in_defaults_with_no_files() {
    let empty = TempDir::new().unwrap();
    let schema = Schema::compose(Capabilities::empty());
    let resolver = SourceResolver::with_search_dirs(vec![empty.path().to_path_buf()]);

    temp_env::with_vars(cleared_env(), || {
        let config = resolve_with(&schema, &resolver, None).expect("resolves");

        assert_eq!(config.origin(), &DocumentOrigin::BuiltIn);
        assert_eq!(config.core.mode, "release");
        assert_eq!(config.core.work_pool_size, 1000);
        assert_eq!(config.prometheus.port, 8080);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.endpoints.http.address, ":4040");
        assert!(config.postgres.is_none());
        assert!(config.kafka.is_none());
        assert!(config.endpoints.grpc.is_none());
    });
}

#[test]
#[serial]
fn test_bad_env_integer_surfaces_variable_name() {
    let empty = TempDir::new().unwrap();
    let schema = Schema::compose(Capabilities::empty());
    let resolver = SourceResolver::with_search_dirs(vec![empty.path().to_path_buf()]);

    let mut vars = cleared_env();
    vars.push((
        "STRATUM_CORE_WORK_POOL_SIZE".to_string(),
        Some("plenty".to_string()),
    ));

    temp_env::with_vars(vars, || {
        let err = resolve_with(&schema, &resolver, None).unwrap_err();
        assert!(matches!(err, ConfigError::OverlayType { .. }));
        assert!(err.to_string().contains("STRATUM_CORE_WORK_POOL_SIZE"));
        assert!(err.to_string().contains("plenty"));
    });
}

#[test]
fn test_merge_accepts_custom_lookup() {
    let schema = Schema::compose(Capabilities::RPC_ENDPOINT);
    let base = stratum_config::parse_document(&schema, "", DocumentOrigin::BuiltIn).unwrap();

    let config = merge(&schema, &base, |var| {
        (var == "STRATUM_ENDPOINTS_GRPC_ADDRESS").then(|| "[::]:7000".to_string())
    })
    .unwrap();

    assert_eq!(
        config.endpoints.grpc.as_ref().map(|g| g.address.as_str()),
        Some("[::]:7000")
    );
}

#[test]
fn test_redacted_tree_hides_secrets() {
    let schema = Schema::compose(Capabilities::RELATIONAL_STORE);
    let base =
        stratum_config::parse_document(&schema, SERVICE_DOCUMENT, DocumentOrigin::BuiltIn).unwrap();
    let config = merge(&schema, &base, |_| None).unwrap();

    let tree = config.document().to_tree(true).unwrap();
    let rendered = serde_json::to_string(&tree).unwrap();

    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("opspass"));
    assert_eq!(tree["postgres"]["host"], "db.internal");
    assert_eq!(tree["postgres"]["port"], 6432);
    assert_eq!(tree["postgres"]["pass"], stratum_config::constants::REDACTED);

    let raw = config.document().to_tree(false).unwrap();
    assert_eq!(raw["endpoints"]["http"]["pass"], "opspass");
}

#[test]
#[serial]
fn test_env_var_or_none_ignores_blank() {
    temp_env::with_vars(
        [("STRATUM_TEST_BLANK", Some("  ")), ("STRATUM_TEST_SET", Some("x"))],
        || {
            assert_eq!(env_var_or_none("STRATUM_TEST_BLANK"), None);
            assert_eq!(env_var_or_none("STRATUM_TEST_SET"), Some("x".to_string()));
        },
    );
}

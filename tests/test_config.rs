use harbor::config::{
    Config, DEFAULT_HOST, DEFAULT_INDEX_FILE, DEFAULT_PORT, DEFAULT_READ_CHUNK_SIZE, DEFAULT_ROOT,
};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.host, DEFAULT_HOST);
    assert_eq!(cfg.server.port, DEFAULT_PORT);
    assert_eq!(cfg.server.read_chunk_size, DEFAULT_READ_CHUNK_SIZE);
    assert_eq!(cfg.static_files.root, PathBuf::from(DEFAULT_ROOT));
    assert_eq!(cfg.static_files.index_file, DEFAULT_INDEX_FILE);
}

#[test]
fn test_default_listen_addr() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr(), "127.0.0.1:9000");
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
server:
  host: "0.0.0.0"
  port: 8080
  read_chunk_size: 4096
static_files:
  root: "/srv/site"
  index_file: "home.html"
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.read_chunk_size, 4096);
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/site"));
    assert_eq!(cfg.static_files.index_file, "home.html");
}

#[test]
fn test_partial_yaml_keeps_defaults_for_missing_fields() {
    let yaml = r#"
server:
  port: 3000
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.host, DEFAULT_HOST);
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.static_files.index_file, DEFAULT_INDEX_FILE);
}

#[test]
fn test_load_without_config_file_uses_defaults() {
    // Point CONFIG at a path that cannot exist
    unsafe {
        std::env::set_var("CONFIG", "/nonexistent/harbor-test-config.yaml");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.port, DEFAULT_PORT);
    unsafe {
        std::env::remove_var("CONFIG");
    }
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let result = Config::from_yaml("server: [not, a, mapping]");
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr(), cfg2.server.listen_addr());
}

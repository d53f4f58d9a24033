//! 以 list_resources 的实际输出编译访问类型
//!
//! fixtures/generated 下提交的是对 fixtures/project/resources 运行一次后的清单与访问类；
//! 测试先确认当前输出与之逐字节一致，再把它 include! 进来验证运行期行为。
use std::fs;
use std::path::{Path, PathBuf};

use resource_list_core::{list_resources, ClassConfig, ListConfig};
use tempfile::TempDir;

mod app {
    include!("fixtures/generated/app/FixtureResources.rs");
}

use app::FixtureResources;

/// 访问类内嵌清单时使用的编译期根目录，对应下面的 build_output_dir
const RESOURCE_ROOT: &str = r#"concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/generated/classes")"#;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn committed_accessor_matches_list_resources_output() {
    let dir = TempDir::new().unwrap();
    let mut cfg = ListConfig::new(dir.path().join("classes"));
    cfg.resource_base_dir = Some(fixtures().join("project/resources"));
    cfg.artifact_id = Some("fixture".to_string());
    cfg.resource_list_class = Some(ClassConfig {
        class_name: "app.FixtureResources".to_string(),
        output_directory: Some(dir.path().join("generated")),
        resource_root: Some(RESOURCE_ROOT.to_string()),
        ..ClassConfig::default()
    });

    let outcome = list_resources(&cfg).unwrap();

    assert_eq!(outcome.resource_count, 3);
    assert_eq!(
        fs::read_to_string(&outcome.resource_list_file).unwrap(),
        fs::read_to_string(fixtures().join("generated/classes/META-INF/fixture.resources")).unwrap()
    );
    let class_file = outcome.source_root.unwrap().join("app/FixtureResources.rs");
    assert_eq!(
        fs::read_to_string(class_file).unwrap(),
        fs::read_to_string(fixtures().join("generated/app/FixtureResources.rs")).unwrap()
    );
}

#[test]
fn generated_accessor_lists_scanned_resources() {
    assert_eq!(
        FixtureResources::relative().list(),
        vec!["app/app.properties", "app/nested/messages.properties", "logback.xml"]
    );
    assert_eq!(
        FixtureResources::absolute().list(),
        vec!["/app/app.properties", "/app/nested/messages.properties", "/logback.xml"]
    );
}

#[test]
fn default_excludes_do_not_reach_the_accessor() {
    assert!(FixtureResources::relative().stream().all(|r| !r.starts_with("META-INF/")));
}

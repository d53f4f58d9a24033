//! 主流程：扫描 → 写清单 → 登记资源 →（可选）生成访问类
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{default_class_output_directory, ListConfig};
use crate::error::{ResourceListError, Result};
use crate::generator::generate_class_file;
use crate::manifest::write_manifest;
use crate::paths::{absolute_normalized, to_slash_path};
use crate::scan::ResourceScanner;
use crate::types::{ListOutcome, ResourceListResource};

/// 按配置执行一次完整流程
///
/// 清单总会先写出；随后若请求生成访问类而清单不在构建输出目录下，返回配置错误。
pub fn list_resources(config: &ListConfig) -> Result<ListOutcome> {
    let build_output_dir = config.build_output_dir();
    let base_dir = config.resource_base_dir();
    let resource_list_file = config.resource_list_file();

    let mut scanner = ResourceScanner::new(config.scan_config());
    // 清单不列出自己
    scanner.exclude_file(resource_list_file.clone());
    let resources = scanner.scan(&base_dir)?;

    info!(file = ?resource_list_file, count = resources.len(), "writing resource list file");
    write_manifest(&resources, &resource_list_file)?;

    let resource = resource_list_resource(&resource_list_file, &build_output_dir);
    if resource.is_some() {
        debug!(file = ?resource_list_file, "added resource list file as resource");
    }

    let mut source_root = None;
    let mut compile_source_roots = config.compile_source_roots.clone();
    if let Some(mut class) = config.resource_list_class() {
        let Some(resource) = resource.as_ref() else {
            return Err(ResourceListError::Configuration(
                "a resource list class can only be generated if the resource list file is located in the build output directory"
                    .to_string(),
            ));
        };
        let output_directory = class
            .output_directory
            .get_or_insert_with(|| default_class_output_directory(&build_output_dir))
            .clone();
        debug!(dir = ?output_directory, "resource list class output directory");

        let class_file = generate_class_file(&class, resource)?;
        debug!(file = ?class_file, "generated resource list class");

        if add_source_root(&mut compile_source_roots, &output_directory) {
            debug!(dir = ?output_directory, "added compile source root");
        }
        source_root = Some(output_directory);
    }

    Ok(ListOutcome {
        resource_count: resources.len(),
        resource_list_file,
        resource,
        source_root,
        compile_source_roots,
    })
}

/// 清单位于构建输出目录之下时，描述它作为构建资源的位置
pub fn resource_list_resource(resource_list_file: &Path, build_output_dir: &Path) -> Option<ResourceListResource> {
    let relative = resource_list_file.strip_prefix(build_output_dir).ok()?;
    let file_name = resource_list_file.file_name()?.to_string_lossy().into_owned();
    let directory = resource_list_file.parent()?.to_path_buf();
    let target_path = relative.parent().map(to_slash_path).unwrap_or_default();

    Some(ResourceListResource { directory, includes: vec![file_name], target_path })
}

/// 登记源码根；按归一化绝对形式比较，已存在时不重复添加
///
/// 返回是否新增。
pub fn add_source_root(source_roots: &mut Vec<PathBuf>, source_root: &Path) -> bool {
    let absolute = absolute_normalized(source_root);
    if source_roots.iter().any(|r| r == source_root || absolute_normalized(r) == absolute) {
        return false;
    }
    source_roots.push(absolute);
    true
}

//! 清单文件写入：UTF-8，每行一个资源，`\n` 结尾
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ResourceListError, Result};
use crate::types::ResourceSet;

/// 把资源集合写入 `out`（按集合自身的升序）
pub fn write_resources(resources: &ResourceSet, out: &mut dyn Write) -> std::io::Result<()> {
    for resource in resources {
        out.write_all(resource.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// 写清单文件；必要时创建父目录，已存在则覆盖
pub fn write_manifest(resources: &ResourceSet, target: &Path) -> Result<()> {
    let wrap = |source| ResourceListError::ManifestWrite { path: target.to_path_buf(), source };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    // 句柄在作用域结束时关闭，出错路径亦然
    let mut out = BufWriter::new(File::create(target).map_err(wrap)?);
    write_resources(resources, &mut out).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(())
}

//! 路径归一化（不访问文件系统、不解析符号链接）
use std::path::{Component, Path, PathBuf};

/// 转为绝对路径并按字面消解 `.`、`..`
///
/// 当前目录不可得时退回原路径的字面归一化结果。
pub fn absolute_normalized(path: &Path) -> PathBuf {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    lexical_normalize(&abs)
}

/// 字面归一化：去掉 `.`，`..` 弹出上一段（根之上不再弹出）
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }
    components.iter().collect()
}

/// 以 `/` 连接各段，与宿主分隔符无关
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dot_segments() {
        assert_eq!(
            lexical_normalize(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(lexical_normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(lexical_normalize(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let p = absolute_normalized(Path::new("src/main/java/../../../target/classes/"));
        assert!(p.is_absolute());
        assert!(p.ends_with("target/classes"));
    }

    #[test]
    fn slash_path() {
        let p: PathBuf = ["a", "b", "c.txt"].iter().collect();
        assert_eq!(to_slash_path(&p), "a/b/c.txt");
    }
}

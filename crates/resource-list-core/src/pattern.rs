//! Ant 风格路径模式匹配（`*`、`?` 限于单段，`**` 跨零或多段）
//!
//! 路径与模式都按 `/` 切段，整体锚定匹配，不做前缀匹配，大小写敏感。
//! `**` 的展开用二维 DP 表完成，避免连续 `**` 时的指数回溯。

/// 匹配任意层级目录的段
const GLOBSTAR: &str = "**";

/// 判断 `path`（已归一化为 `/` 分隔）是否完整匹配 `pattern`
pub fn matches_one(path: &str, pattern: &str) -> bool {
    let pat: Vec<&str> = pattern.split('/').collect();
    let segs: Vec<&str> = path.split('/').collect();

    // dp[i][j]：pat[i..] 能否匹配 segs[j..]
    let (m, n) = (pat.len(), segs.len());
    let mut dp = vec![vec![false; n + 1]; m + 1];
    dp[m][n] = true;

    for i in (0..m).rev() {
        for j in (0..=n).rev() {
            dp[i][j] = if pat[i] == GLOBSTAR {
                // 吸收零段，或吸收当前段后继续由同一个 `**` 处理
                dp[i + 1][j] || (j < n && dp[i][j + 1])
            } else {
                j < n && dp[i + 1][j + 1] && matches_segment(segs[j], pat[i])
            };
        }
    }
    dp[0][0]
}

/// 任一模式匹配即为真（OR 语义）
pub fn matches_any<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| matches_one(path, p.as_ref()))
}

/// 单段通配：`*` 匹配零或多个字符，`?` 匹配恰好一个字符，其余按字面比较
fn matches_segment(segment: &str, pattern: &str) -> bool {
    let s: Vec<char> = segment.chars().collect();
    let p: Vec<char> = pattern.chars().collect();

    let (mut si, mut pi) = (0usize, 0usize);
    // 最近一个 `*` 的位置，以及它当时对应的段位置
    let mut star: Option<(usize, usize)> = None;

    while si < s.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == s[si]) {
            si += 1;
            pi += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, si));
            pi += 1;
        } else if let Some((sp, ss)) = star {
            // 回到上一个 `*`，让它多吞一个字符
            pi = sp + 1;
            si = ss + 1;
            star = Some((sp, ss + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}

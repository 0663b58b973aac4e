//! Textfile-collector exposition lines.
//!
//! The node exporter textfile collector reads `*.prom` files; each chain gets
//! its own file holding a single sample line.

use std::path::{Path, PathBuf};

/// File name suffix of every per-chain textfile.
pub const TEXTFILE_SUFFIX: &str = "_max_epoch_nozero.prom";

/// `<chain>_shares_count{instance="<instance>",job="<chain>"} <epoch>\n`
pub fn shares_count_line(chain: &str, instance: &str, epoch: i64) -> String {
    format!(
        "{chain}_shares_count{{instance=\"{}\",job=\"{chain}\"}} {epoch}\n",
        escape_label_value(instance)
    )
}

/// `<dir>/<chain>_max_epoch_nozero.prom`
pub fn textfile_path(dir: &Path, chain: &str) -> PathBuf {
    dir.join(format!("{chain}{TEXTFILE_SUFFIX}"))
}

/// Escape a label value per the text exposition format.
fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

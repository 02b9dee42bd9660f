use owo_colors::OwoColorize;
use std::path::Path;

use crate::bucket::BucketKey;
use crate::relocate::Progress;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Used for the progress report,
/// which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Bucket header line, e.g. "Dir 2023/2023-03-05 contains 2 files".
pub fn bucket_line(key: &BucketKey, files: usize) -> String {
    format!("Dir {key} contains {files} files")
}

/// Per-file line: a tab, a dash and the destination path.
pub fn file_line(dest: &Path) -> String {
    format!("\t- {}", dest.display())
}

/// Progress sink that prints the report to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn bucket(&mut self, key: &BucketKey, files: usize) {
        print_user(&bucket_line(key, files));
    }

    fn file(&mut self, dest: &Path) {
        print_user(&file_line(dest));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        let key = BucketKey::new(2023, 3, 5);
        assert_eq!(bucket_line(&key, 2), "Dir 2023/2023-03-05 contains 2 files");
        assert_eq!(file_line(Path::new("out/a.txt")), "\t- out/a.txt");
    }
}

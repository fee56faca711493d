//! 运行日志服务 - 业务能力层
//!
//! 只负责"写 console-log.txt"能力：每行同时输出到标准输出，写入失败不影响主流程

use crate::config::LogMode;
use crate::error::FilesystemError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "console-log.txt";

/// 运行日志
///
/// 职责：
/// - 运行开始时写入带时间的表头
/// - 逐行追加处理记录，并同步打印到标准输出
/// - 不关心记录的内容和流程顺序
#[derive(Debug, Clone)]
pub struct RunLog {
    log_file_path: PathBuf,
}

impl RunLog {
    /// 初始化日志文件
    ///
    /// # 参数
    /// - `log_dir`: 日志目录，不存在时会创建
    /// - `mode`: 覆盖还是追加
    pub fn init(log_dir: &Path, mode: LogMode) -> Result<Self, FilesystemError> {
        fs::create_dir_all(log_dir).map_err(|e| FilesystemError::create_dir(log_dir, e))?;

        let log_file_path = log_dir.join(LOG_FILE_NAME);
        let log_header = format!(
            "{}\n处理日志 - {}\n{}\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );

        match mode {
            LogMode::Truncate => fs::write(&log_file_path, log_header)
                .map_err(|e| FilesystemError::write(&log_file_path, e))?,
            LogMode::Append => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_file_path)
                    .map_err(|e| FilesystemError::write(&log_file_path, e))?;
                let prefix = if file.metadata().map(|m| m.len() > 0).unwrap_or(false) {
                    "\n"
                } else {
                    ""
                };
                write!(file, "{}{}", prefix, log_header)
                    .map_err(|e| FilesystemError::write(&log_file_path, e))?;
            }
        }

        Ok(Self { log_file_path })
    }

    /// 日志文件路径
    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    /// 追加一行日志并打印到标准输出
    ///
    /// 写入失败只输出到标准错误，不返回错误
    pub fn append(&self, message: &str) {
        self.append_with_mirror(message, &mut std::io::stdout().lock());
    }

    /// 追加一行日志，并把同一行写到 `mirror`
    ///
    /// 两边的写入失败都只报告到标准错误
    pub fn append_with_mirror<W: Write>(&self, message: &str, mirror: &mut W) {
        let line = if message.ends_with('\n') {
            message.to_string()
        } else {
            format!("{}\n", message)
        };

        if let Err(e) = mirror.write_all(line.as_bytes()).and_then(|_| mirror.flush()) {
            report_to_stderr(format_args!("输出日志到控制台失败: {}", e));
        }

        if let Err(e) = self.write_line(&line) {
            report_to_stderr(format_args!(
                "写入日志失败 ({}): {}",
                self.log_file_path.display(),
                e
            ));
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;
        file.write_all(line.as_bytes())
    }
}

// stderr 也可能已关闭，这里同样不能 panic
fn report_to_stderr(args: std::fmt::Arguments<'_>) {
    let _ = writeln!(std::io::stderr().lock(), "{}", args);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_truncates_and_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "previous run\n").unwrap();

        let log = RunLog::init(dir.path(), LogMode::Truncate).unwrap();
        assert_eq!(log.path(), path.as_path());

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("previous run"));
        assert!(content.contains("处理日志 - "));
    }

    #[test]
    fn test_append_mode_keeps_previous_sections() {
        let dir = tempfile::tempdir().unwrap();

        let first = RunLog::init(dir.path(), LogMode::Append).unwrap();
        first.append("第一次运行");
        let second = RunLog::init(dir.path(), LogMode::Append).unwrap();
        second.append("第二次运行");

        let content = fs::read_to_string(second.path()).unwrap();
        assert_eq!(content.matches("处理日志 - ").count(), 2);
        let first_pos = content.find("第一次运行").unwrap();
        let second_pos = content.find("第二次运行").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_append_terminates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::init(dir.path(), LogMode::Truncate).unwrap();

        log.append("one");
        log.append("two\n");

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.ends_with("one\ntwo\n"));
    }

    #[test]
    fn test_init_creates_missing_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("nested");

        let log = RunLog::init(&nested, LogMode::Truncate).unwrap();
        assert!(log.path().exists());
    }

    /// 模拟已断开的管道
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn test_append_mirrors_line_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::init(dir.path(), LogMode::Truncate).unwrap();
        let mut mirror = Vec::new();

        log.append_with_mirror("已复制 100", &mut mirror);

        assert_eq!(mirror, "已复制 100\n".as_bytes());
        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.ends_with("已复制 100\n"));
    }

    #[test]
    fn test_broken_mirror_does_not_stop_logging() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::init(dir.path(), LogMode::Truncate).unwrap();

        for i in 0..3 {
            log.append_with_mirror(&format!("文件夹 {}", i), &mut BrokenPipe);
        }

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.ends_with("文件夹 0\n文件夹 1\n文件夹 2\n"));
    }

    #[test]
    fn test_append_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::init(dir.path(), LogMode::Truncate).unwrap();
        fs::remove_file(log.path()).unwrap();
        fs::create_dir(log.path()).unwrap();

        // 路径已被目录占用，写入失败但不 panic
        log.append("lost line");
        assert!(log.path().is_dir());
    }
}

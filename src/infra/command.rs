//! # Process Invocation Module / 进程调用模块
//!
//! Runs one external command with a timeout and captures its exit code,
//! stdout and stderr. Timeouts and launch failures never escape this
//! boundary: they are normalized into a synthetic `InvocationResult` so
//! every caller handles one failure shape.
//!
//! 使用超时运行一个外部命令，并捕获其退出码、stdout 和 stderr。
//! 超时和启动失败不会越过此边界：它们被归一化为合成的
//! `InvocationResult`，因此所有调用方只需处理一种失败形状。

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;

use crate::core::models::{CommandLine, InvocationResult};

/// Invokes `command` in `working_dir` (the harness's own directory when
/// `None`), waiting at most `timeout` for it to exit.
///
/// The child's stdout and stderr are read concurrently, line by line, into
/// separate buffers. On timeout the child is killed and abandoned and the
/// synthetic timeout result is returned. This function has no side effect
/// beyond process creation and termination.
///
/// 在 `working_dir`（为 `None` 时为本工具自身目录）中调用 `command`，
/// 最多等待 `timeout` 让其退出。
///
/// 子进程的 stdout 和 stderr 被并发地逐行读取到各自的缓冲区中。
/// 超时时杀死并放弃子进程，返回合成的超时结果。
/// 除进程创建与终止外，此函数没有其他副作用。
pub async fn invoke(
    command: &CommandLine,
    working_dir: Option<&Path>,
    timeout: Duration,
) -> InvocationResult {
    let mut cmd = tokio::process::Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return InvocationResult::launch_failure(e),
    };

    // The pipes are always present: both streams were requested above.
    // 管道总是存在：上面请求了两个流。
    let stdout_handle = match child.stdout.take() {
        Some(stdout) => read_lines(stdout),
        None => {
            return InvocationResult::launch_failure("Failed to capture stdout");
        }
    };
    let stderr_handle = match child.stderr.take() {
        Some(stderr) => read_lines(stderr),
        None => {
            return InvocationResult::launch_failure("Failed to capture stderr");
        }
    };

    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(e)) => return InvocationResult::launch_failure(e),
        Err(_) => {
            // Timeout: kill the child and abandon the reader tasks; they end
            // once the pipes close.
            // 超时：杀死子进程并放弃读取任务；管道关闭后它们会自行结束。
            let _ = child.start_kill();
            return InvocationResult::timed_out();
        }
    };

    // Wait for both reader tasks so no trailing output is lost.
    // 等待两个读取任务完成，以免丢失末尾输出。
    let stdout = stdout_handle.await.unwrap_or_default();
    let stderr = stderr_handle.await.unwrap_or_default();

    InvocationResult {
        exit_code: status.code().unwrap_or(crate::core::models::SYNTHETIC_EXIT_CODE),
        stdout,
        stderr,
    }
}

/// Spawns a task that drains one output stream line by line into a string.
/// 派生一个任务，将一个输出流逐行读入字符串。
fn read_lines<R>(stream: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = String::new();
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    })
}

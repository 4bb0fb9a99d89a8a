//! # Scratch Source Module / 临时源文件模块
//!
//! Scoped creation of the throwaway source files some steps compile.
//! The guard owns the source file and the compiled artifact with the same
//! stem; both are removed when the guard drops, on every exit path.
//! Removal is best-effort by contract: a cleanup error is swallowed rather
//! than allowed to mask the real step result.
//!
//! 某些步骤编译的一次性源文件的作用域化创建。
//! guard 拥有源文件和同名（同词干）的编译产物；
//! 无论以何种路径退出，guard 析构时都会删除两者。
//! 按契约，删除是尽力而为的：清理错误会被吞掉，而不是掩盖真实的步骤结果。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A scratch source file scoped to one step.
/// 作用域限定在单个步骤内的临时源文件。
#[derive(Debug)]
pub struct ScratchSource {
    source_path: PathBuf,
    artifact_path: PathBuf,
}

impl ScratchSource {
    /// Writes `contents` to `basename` inside `dir` and returns the guard.
    /// The compiled-artifact path is derived from the basename stem, matching
    /// the `--name <stem>` convention of single-file compiles.
    ///
    /// 将 `contents` 写入 `dir` 中名为 `basename` 的文件并返回 guard。
    /// 编译产物路径由文件名词干派生，与单文件编译的 `--name <stem>` 约定一致。
    pub fn create(dir: &Path, basename: &str, contents: &str) -> Result<Self> {
        let source_path = dir.join(basename);
        fs::write(&source_path, contents).with_context(|| {
            format!("Failed to write scratch source: {}", source_path.display())
        })?;

        let stem = Path::new(basename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| basename.to_string());
        let artifact_path = dir.join(stem);

        Ok(Self {
            source_path,
            artifact_path,
        })
    }

    /// The path of the scratch source file.
    /// 临时源文件的路径。
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// The path the compiled executable is expected at.
    /// 编译后的可执行文件的预期路径。
    pub fn artifact_path(&self) -> PathBuf {
        if cfg!(windows) {
            self.artifact_path.with_extension("exe")
        } else {
            self.artifact_path.clone()
        }
    }
}

impl Drop for ScratchSource {
    fn drop(&mut self) {
        // Best-effort: a stale artifact would corrupt a later compile, so
        // both spellings of the artifact name are removed alongside the
        // source. Errors are swallowed here by contract.
        // 尽力而为：残留产物会破坏后续编译，因此与源文件一起删除
        // 产物名称的两种拼写。按契约，这里吞掉错误。
        let _ = fs::remove_file(&self.source_path);
        let _ = fs::remove_file(&self.artifact_path);
        let _ = fs::remove_file(self.artifact_path.with_extension("exe"));
    }
}

#[cfg(test)]
#[cfg(unix)] // Signal tests only work on Unix-like systems
mod signal_tests {
    use std::fs;
    use std::io::Read;
    use std::path::PathBuf;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn get_bootstrapify_binary() -> PathBuf {
        let mut path = std::env::current_exe().unwrap();
        path.pop(); // Remove test binary name
        if path.ends_with("deps") {
            path.pop();
        }
        path.push("bootstrapify");
        path
    }

    fn write_template_checkout(dir: &std::path::Path) {
        fs::write(
            dir.join("README.md"),
            "# ${projectName}\n\nClone https://github.com/fast/template\n",
        )
        .unwrap();
        fs::create_dir(dir.join("template")).unwrap();
        fs::write(
            dir.join("template/Cargo.toml"),
            "[package]\nname = \"template\"\n",
        )
        .unwrap();
    }

    #[test]
    fn test_sigint_during_prompt_cancels_with_exit_0() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_template_checkout(temp_dir.path());

        // Piped stdin stays open so the prompt blocks on read
        let mut child = Command::new(get_bootstrapify_binary())
            .current_dir(temp_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn command");

        // Wait until the prompt is on stderr so the signal lands while
        // the run is blocked on input
        let mut stderr = child.stderr.take().unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 256];
        let deadline = Instant::now() + Duration::from_secs(10);
        while !String::from_utf8_lossy(&seen).contains("project name") {
            assert!(
                Instant::now() < deadline,
                "Prompt never appeared on stderr: {:?}",
                String::from_utf8_lossy(&seen)
            );
            let n = stderr.read(&mut buf).expect("Failed to read stderr");
            assert!(n > 0, "stderr closed before the prompt appeared");
            seen.extend_from_slice(&buf[..n]);
        }

        // Send SIGINT (Ctrl-C)
        unsafe {
            libc::kill(child.id() as i32, libc::SIGINT);
        }

        let status = child.wait().expect("Failed to wait for child");
        let mut rest = String::new();
        stderr.read_to_string(&mut rest).unwrap();
        let all_stderr = format!("{}{}", String::from_utf8_lossy(&seen), rest);

        // Cancellation is a clean exit, not a failure
        assert_eq!(
            status.code(),
            Some(0),
            "Should exit 0 on cancellation, stderr: {all_stderr}"
        );
        assert!(all_stderr.contains("Operation cancelled"));

        // No file may have been touched before the inputs were complete
        let readme = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        assert!(readme.contains("${projectName}"));
        assert!(readme.contains("fast/template"));
        assert!(temp_dir.path().join("template").is_dir());
    }
}

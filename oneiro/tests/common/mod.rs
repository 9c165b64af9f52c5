use assert_cmd::assert::Assert;
use assert_cmd::Command;
use assert_fs::prelude::PathCopy;
use assert_fs::TempDir;
use std::path::PathBuf;

fn setup_working_dir(dir_name: &str) -> TempDir {
    let file_path = PathBuf::from(format!(
        "{}/tests/test-cases/{}",
        env!("CARGO_MANIFEST_DIR"),
        dir_name
    ));

    let temp = TempDir::new().unwrap();
    temp.copy_from(file_path, &["*", "**/*"]).unwrap();

    temp
}

pub struct OneiroTestHelper {
    pub work_dir: TempDir,
}

impl OneiroTestHelper {
    pub fn new(test_dir: &str) -> Self {
        Self {
            work_dir: setup_working_dir(test_dir),
        }
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("oneiro").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env("NO_COLOR", "1")
            .args(args)
            .assert()
    }

    pub fn report(&self, extra: &[&str]) -> Assert {
        let mut args = vec!["report"];
        args.extend_from_slice(extra);
        self.run_command(&args)
    }

    pub fn analyze(&self, extra: &[&str]) -> Assert {
        let mut args = vec!["analyze"];
        args.extend_from_slice(extra);
        self.run_command(&args)
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}

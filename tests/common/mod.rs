//! Common test utilities for evm-bootstrap integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the real evm-bootstrap binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bootstrap_cmd() -> Command {
    Command::cargo_bin("evm-bootstrap").expect("evm-bootstrap binary should be built")
}

/// A scripted program in the fake toolchain
struct FakeProgram {
    name: String,
    /// (substring of the argument list, exit code)
    failures: Vec<(String, i32)>,
    hang: Option<String>,
}

/// A directory of shell scripts standing in for `sudo`, `apt-get` and
/// `add-apt-repository`
///
/// Each package-manager script appends `<name> <args>` to `calls.log` and
/// writes [`STDOUT_SENTINEL`] / [`STDERR_SENTINEL`] lines to its own stdout and
/// stderr. The fake `sudo` appends to `escalations.log` and then execs its
/// arguments, or forks and waits like the real one with
/// [`FakeToolchain::forking_sudo`]. Point `PATH` at [`FakeToolchain::bin_dir`]
/// only, so nothing real is ever run.
///
/// A hung program records its pid in `hung.pid`. Every later program checks
/// that pid on start and appends to `survivors.log` if it is still running.
pub struct FakeToolchain {
    pub temp: TempDir,
    programs: Vec<FakeProgram>,
    with_sudo: bool,
    sudo_forks: bool,
}

impl FakeToolchain {
    /// Toolchain with `sudo`, `apt-get` and `add-apt-repository`, all succeeding
    pub fn new() -> Self {
        let mut toolchain = Self::empty();
        toolchain.with_sudo = true;
        toolchain.add_program("apt-get");
        toolchain.add_program("add-apt-repository");
        toolchain
    }

    /// Toolchain with no programs at all
    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
            programs: Vec::new(),
            with_sudo: false,
            sudo_forks: false,
        }
    }

    pub fn add_program(&mut self, name: &str) -> &mut Self {
        self.programs.push(FakeProgram {
            name: name.to_string(),
            failures: Vec::new(),
            hang: None,
        });
        self
    }

    pub fn without_program(&mut self, name: &str) -> &mut Self {
        self.programs.retain(|p| p.name != name);
        self
    }

    /// Make `name` exit with `code` when its arguments contain `args_contain`
    pub fn fail(&mut self, name: &str, args_contain: &str, code: i32) -> &mut Self {
        if let Some(program) = self.programs.iter_mut().find(|p| p.name == name) {
            program.failures.push((args_contain.to_string(), code));
        }
        self
    }

    /// Make `name` spin forever when its arguments contain `args_contain`
    pub fn hang(&mut self, name: &str, args_contain: &str) -> &mut Self {
        if let Some(program) = self.programs.iter_mut().find(|p| p.name == name) {
            program.hang = Some(args_contain.to_string());
        }
        self
    }

    /// Make `sudo` run its command as a child and wait for it instead of exec
    pub fn forking_sudo(&mut self) -> &mut Self {
        self.sudo_forks = true;
        self
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    pub fn calls_log(&self) -> PathBuf {
        self.temp.path().join("calls.log")
    }

    pub fn escalations_log(&self) -> PathBuf {
        self.temp.path().join("escalations.log")
    }

    pub fn hung_pid_file(&self) -> PathBuf {
        self.temp.path().join("hung.pid")
    }

    pub fn survivors_log(&self) -> PathBuf {
        self.temp.path().join("survivors.log")
    }

    /// Write the scripts to disk
    #[cfg(unix)]
    pub fn install(&self) {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.bin_dir();
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");

        let mut scripts: Vec<(String, String)> = self
            .programs
            .iter()
            .map(|p| (p.name.clone(), self.program_script(p)))
            .collect();
        if self.with_sudo {
            let run = if self.sudo_forks {
                "\"$@\"\nexit $?\n"
            } else {
                "exec \"$@\"\n"
            };
            scripts.push((
                "sudo".to_string(),
                format!(
                    "#!/bin/sh\necho \"sudo $*\" >> \"{}\"\n{run}",
                    self.escalations_log().display()
                ),
            ));
        }

        for (name, script) in scripts {
            let path = bin.join(name);
            std::fs::write(&path, script).expect("Failed to write fake program");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake program executable");
        }
    }

    fn program_script(&self, program: &FakeProgram) -> String {
        let name = &program.name;
        let hung_pid = self.hung_pid_file();
        let mut script = format!(
            r##"#!/bin/sh
if [ -f "{pid_file}" ]; then
  read -r hung < "{pid_file}"
  if [ -r "/proc/$hung/stat" ]; then
    read -r stat < "/proc/$hung/stat"
    case "$stat" in
      *") Z "*|*") X "*) ;;
      *) echo "{name} $*: $hung" >> "{survivors}" ;;
    esac
  fi
fi
echo "{name} $*" >> "{calls}"
echo "{STDOUT_SENTINEL} {name} $*"
echo "{STDERR_SENTINEL} {name} $*" >&2
case "$*" in
"##,
            pid_file = hung_pid.display(),
            survivors = self.survivors_log().display(),
            calls = self.calls_log().display(),
        );
        if let Some(ref pattern) = program.hang {
            script.push_str(&format!(
                "  *{pattern}*) echo $$ > \"{}\"; while :; do :; done ;;\n",
                hung_pid.display()
            ));
        }
        for (pattern, code) in &program.failures {
            script.push_str(&format!("  *{pattern}*) exit {code} ;;\n"));
        }
        script.push_str("esac\nexit 0\n");
        script
    }

    /// evm-bootstrap command that only sees this toolchain on PATH
    pub fn command(&self) -> Command {
        let mut cmd = bootstrap_cmd();
        cmd.env("PATH", self.bin_dir());
        cmd
    }

    /// Lines appended to `calls.log`, empty when nothing ran
    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.calls_log())
    }

    pub fn escalations(&self) -> Vec<String> {
        read_lines(&self.escalations_log())
    }

    /// Programs that started while a hung program was still running
    pub fn survivors(&self) -> Vec<String> {
        read_lines(&self.survivors_log())
    }
}

impl Default for FakeToolchain {
    fn default() -> Self {
        Self::new()
    }
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Written to stdout by every fake package-manager program
pub const STDOUT_SENTINEL: &str = "fake-apt stdout:";

/// Written to stderr by every fake package-manager program
pub const STDERR_SENTINEL: &str = "fake-apt stderr:";

/// The five package-manager calls of a default run, in order
pub const EXPECTED_CALLS: [&str; 5] = [
    "apt-get install -y software-properties-common",
    "add-apt-repository -y ppa:ethereum/ethereum",
    "apt-get update",
    "apt-get install -y ethereum",
    "apt-get install -y solc",
];

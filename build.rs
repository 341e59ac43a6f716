fn main() {
    let git_dir = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok()
        .and_then(|output| {
            std::str::from_utf8(&output.stdout)
                .ok()
                .map(|s| s.trim_end().to_string())
        });

    // Tell cargo to rebuild if the head moves.
    if let Some(git_dir) = git_dir {
        let git_path = std::path::Path::new(&git_dir);
        if git_path.join("HEAD").exists() {
            println!("cargo:rerun-if-changed={git_dir}/HEAD");
        }
        if git_path.join("refs/heads").exists() {
            println!("cargo:rerun-if-changed={git_dir}/refs/heads");
        }
    }

    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            std::str::from_utf8(&output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        });

    // Make the current git hash available to the build.
    if let Some(git_hash) = git_hash {
        println!("cargo:rustc-env=GITEXC_BUILD_GIT_HASH={git_hash}");
    }
}

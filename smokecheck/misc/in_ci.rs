static CI_ENV_VARS: [&str; 4] = ["GITHUB_ACTIONS", "TRAVIS", "CIRCLECI", "GITLAB_CI"];

/// Returns true if the current process seems to be running in CI.
pub fn in_ci() -> bool {
    in_ci_with(|var| std::env::var_os(var).is_some())
}

fn in_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_ENV_VARS.iter().any(|var| is_set(var))
}

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Internal crates each workspace crate may depend on
const ALLOWED_INTERNAL_DEPS: &[(&str, &[&str])] = &[
    ("quizdeck-domain", &[]),
    ("quizdeck-shared", &["quizdeck-domain"]),
    ("quizdeck-player", &["quizdeck-domain", "quizdeck-shared"]),
];

/// Crates whose sources must stay free of UI, transport, and runtime code
const PURE_CRATES: &[&str] = &["quizdeck-domain", "quizdeck-shared"];

const FORBIDDEN_IN_PURE_CRATES: &str = r"\b(dioxus|reqwest|tokio|tracing_subscriber)::";

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata);
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent")?;
        violations.extend(source_violations(&package.name, &src)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    let allowed: BTreeMap<&str, BTreeSet<&str>> = ALLOWED_INTERNAL_DEPS
        .iter()
        .map(|(name, deps)| (*name, deps.iter().copied().collect()))
        .collect();

    let mut violations = Vec::new();
    for package in &metadata.packages {
        let Some(permitted) = allowed.get(package.name.as_str()) else {
            continue;
        };
        for dep in &package.dependencies {
            let internal = allowed.contains_key(dep.name.as_str());
            if internal && !permitted.contains(dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    violations
}

fn source_violations(crate_name: &str, src: &Path) -> anyhow::Result<Vec<String>> {
    let forbidden = Regex::new(FORBIDDEN_IN_PURE_CRATES).context("compiling pattern")?;
    let mut violations = Vec::new();
    for file in rust_files(src)? {
        let text = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (number, line) in text.lines().enumerate() {
            if let Some(found) = forbidden.find(line) {
                violations.push(format!(
                    "{crate_name}: {}:{} uses `{}`",
                    file.display(),
                    number + 1,
                    found.as_str()
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, deps: &[&str]) -> Package {
        Package {
            name: name.to_string(),
            manifest_path: PathBuf::from(format!("/ws/crates/{name}/Cargo.toml")),
            dependencies: deps
                .iter()
                .map(|d| Dependency {
                    name: d.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn layering_is_enforced() {
        let metadata = Metadata {
            packages: vec![
                package("quizdeck-domain", &["serde", "quizdeck-shared"]),
                package("quizdeck-shared", &["quizdeck-domain"]),
                package("quizdeck-player", &["quizdeck-domain", "quizdeck-shared"]),
            ],
        };
        assert_eq!(
            dependency_violations(&metadata),
            vec!["quizdeck-domain must not depend on quizdeck-shared".to_string()]
        );
    }

    #[test]
    fn pure_crates_reject_runtime_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("entities")).expect("subdir");
        std::fs::write(
            dir.path().join("lib.rs"),
            "use serde::Serialize;\nfn f() { tokio::spawn(async {}); }\n",
        )
        .expect("write");
        std::fs::write(
            dir.path().join("entities").join("user.rs"),
            "fn g() -> dioxus::prelude::Element { todo!() }\n",
        )
        .expect("write");
        std::fs::write(dir.path().join("notes.txt"), "reqwest::get").expect("write");

        let mut violations = source_violations("quizdeck-domain", dir.path()).expect("scan");
        violations.sort();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.contains(":2 uses `tokio::`")));
        assert!(violations.iter().any(|v| v.contains("user.rs:1 uses `dioxus::`")));
    }
}

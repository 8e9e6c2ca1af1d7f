#![allow(clippy::unwrap_used, clippy::print_stdout)]

use std::{
    collections::HashMap,
    env,
    fs::{self, read_to_string},
};

use handlebars::Handlebars;
use konst::eq_str;
use vergen::EmitBuilder;

fn get_git_hash() -> String {
    use std::process::Command;

    let commit = Command::new("git")
        .arg("rev-parse")
        .arg("--short")
        .arg("--verify")
        .arg("HEAD")
        .output();

    match commit {
        Ok(commit_output) => {
            let commit_string = String::from_utf8_lossy(&commit_output.stdout);
            commit_string.lines().next().unwrap_or("unknown").into()
        }
        Err(e) => {
            println!("cargo:warning=can not get git commit: {e}");
            String::from("unknown")
        }
    }
}

enum SiteEnv {
    Prod,
    Beta,
    Local,
}

const fn site_env(env: Option<&str>) -> SiteEnv {
    match env {
        Some(env) if eq_str(env, "prod") => SiteEnv::Prod,
        Some(env) if eq_str(env, "beta") => SiteEnv::Beta,
        _ => SiteEnv::Local,
    }
}

fn process_html_template(git_hash: &str) {
    const TEMPLATE_FILE: &str = "index.html.hbs";
    const INDEX_FILE: &str = "index.html";

    let mut hb = Handlebars::new();
    hb.register_template_file("template", TEMPLATE_FILE)
        .unwrap();

    let mut data: HashMap<&str, &str> = HashMap::new();
    data.insert("release", git_hash);

    match site_env(env::var("SITE_ENV").ok().as_deref()) {
        SiteEnv::Prod => {
            println!("cargo:warning=env is prod");
            data.insert("env", "production");
            data.insert("analytics", "ducklingspreschool.com");
        }
        SiteEnv::Beta => {
            println!("cargo:warning=env is beta");
            data.insert("env", "beta");
            data.insert("analytics", "beta.ducklingspreschool.com");
        }
        SiteEnv::Local => {
            println!("cargo:warning=env is local");
            data.insert("env", "local");
        }
    }

    let content = hb.render("template", &data).unwrap();

    if file_content_changed(INDEX_FILE, &content) {
        use std::io::Write;

        let mut output_file = fs::File::create(INDEX_FILE).unwrap();

        write!(output_file, "{content}").unwrap();
    }

    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");
}

fn file_content_changed(path: &str, content: &str) -> bool {
    read_to_string(path).map_or(true, |current_content| content != current_content)
}

fn main() -> anyhow::Result<()> {
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(true)
        .git_branch()
        .emit()?;

    println!("cargo:rerun-if-env-changed=SITE_ENV");

    let git = get_git_hash();
    process_html_template(&git);

    Ok(())
}

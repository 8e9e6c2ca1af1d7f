use konst::eq_str;

pub enum SiteEnv {
    Prod,
    Beta,
    Local,
}

pub const fn site_env(env: Option<&str>) -> SiteEnv {
    match env {
        Some(env) if eq_str(env, "prod") => SiteEnv::Prod,
        Some(env) if eq_str(env, "beta") => SiteEnv::Beta,
        _ => SiteEnv::Local,
    }
}

pub const SITE_ENV: SiteEnv = site_env(option_env!("SITE_ENV"));

pub const fn log_level() -> log::Level {
    match SITE_ENV {
        SiteEnv::Prod | SiteEnv::Beta => log::Level::Info,
        SiteEnv::Local => log::Level::Debug,
    }
}

use super::*;

#[test]
fn defaults_apply_when_values_missing() {
    let cfg = AppConfig::from_values(None, None, None);
    assert_eq!(cfg.supabase_url, DEFAULT_SUPABASE_URL);
    assert_eq!(cfg.supabase_anon_key, DEFAULT_SUPABASE_ANON_KEY);
    assert_eq!(cfg.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_values(Some("  "), Some(""), Some(" "));
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn overrides_trim_trailing_slash() {
    let cfg = AppConfig::from_values(Some("https://abc.supabase.co/"), Some("key"), Some("https://hook.test/x"));
    assert_eq!(cfg.supabase_url, "https://abc.supabase.co");
    assert_eq!(cfg.supabase_anon_key, "key");
    assert_eq!(cfg.webhook_url, "https://hook.test/x");
}

#[test]
fn storage_key_uses_project_ref() {
    let cfg = AppConfig::from_values(Some("https://abc123.supabase.co"), None, None);
    assert_eq!(cfg.session_storage_key, "sb-abc123-auth-token");

    let local = AppConfig::from_values(Some("http://localhost:54321"), None, None);
    assert_eq!(local.session_storage_key, "sb-localhost-auth-token");
}

#[test]
fn storage_key_keeps_bracketed_ipv6_host_whole() {
    let cfg = AppConfig::from_values(Some("http://[::1]:54321"), None, None);
    assert_eq!(cfg.session_storage_key, "sb-[::1]-auth-token");
}

#[test]
fn storage_key_falls_back_for_unparseable_url() {
    let cfg = AppConfig::from_values(Some("not a url"), None, None);
    assert_eq!(cfg.session_storage_key, "sb-local-auth-token");
}

#[test]
fn endpoint_helpers_join_paths() {
    let cfg = AppConfig::from_values(Some("https://abc.supabase.co"), None, None);
    assert_eq!(cfg.auth_url("token?grant_type=password"), "https://abc.supabase.co/auth/v1/token?grant_type=password");
    assert_eq!(cfg.auth_url("/logout"), "https://abc.supabase.co/auth/v1/logout");
    assert_eq!(cfg.rest_url("projects"), "https://abc.supabase.co/rest/v1/projects");
}

#[test]
fn private_fragments_cover_wizard_and_dashboard() {
    assert!(paths::PRIVATE_FRAGMENTS.contains(&"create-wizard"));
    assert!(paths::PRIVATE_FRAGMENTS.contains(&"dashboard"));
}

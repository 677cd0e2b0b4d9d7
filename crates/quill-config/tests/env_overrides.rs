use figment::Jail;
use quill_config::QuillConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("QUILL_GENERATION__ENDPOINT", "https://env.example.com");
        jail.set_env("QUILL_GENERATION__API_KEY", "key_from_env");
        jail.set_env("QUILL_LINKS__HEAD_TIMEOUT_MS", "2500");

        let config = QuillConfig::load().expect("config loads");
        assert_eq!(config.generation.endpoint, "https://env.example.com");
        assert_eq!(config.generation.api_key, "key_from_env");
        assert_eq!(config.links.head_timeout_ms, 2_500);
        assert!(config.generation.is_configured());
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".quill")?;
        jail.create_file(
            ".quill/config.toml",
            r#"
[generation]
api_key = "key_from_toml"
"#,
        )?;
        jail.set_env("QUILL_GENERATION__API_KEY", "key_from_env");

        let config = QuillConfig::load().expect("config loads");
        assert_eq!(config.generation.api_key, "key_from_env");
        Ok(())
    });
}

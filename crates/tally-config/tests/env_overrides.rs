use figment::Jail;
use tally_config::TallyConfig;

#[test]
fn env_vars_fill_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_SERVER__PORT", "9090");
        jail.set_env("TALLY_DATABASE__PATH", ":memory:");

        let config = TallyConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 9090);
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("tally.toml", "[logging]\nfilter = \"warn\"\n")?;
        jail.set_env("TALLY_LOGGING__FILTER", "trace");

        let config = TallyConfig::load(None).expect("config loads");
        assert_eq!(config.logging.filter, "trace");
        Ok(())
    });
}

#[test]
fn unprefixed_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER__PORT", "1234");

        let config = TallyConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 3000);
        Ok(())
    });
}

use config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use std::{fs, io};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(alias = "SERVER")]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(alias = "URL")]
    pub url: String,
    #[serde(alias = "TIMEOUT", default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Reads the INI file and checks that the server section is usable.
pub fn get_configuration(cfg_file: &str) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::new(cfg_file, config::FileFormat::Ini))
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(&settings.server.url).map_err(|e| {
        ConfigError::Message(format!("SERVER.URL '{}' is invalid: {}", settings.server.url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Message(format!(
            "SERVER.URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if settings.server.timeout == 0 {
        return Err(ConfigError::Message(
            "SERVER.TIMEOUT must be at least one second".to_string(),
        ));
    }

    Ok(())
}

/// Writes a template configuration file, asking before replacing an existing one.
pub fn create_config(cfg_file: &Path) -> io::Result<()> {
    println!("\x1b[1m\x1b[32mCreating configuration...\x1b[0m");

    if cfg_file.exists() && !confirm_overwrite()? {
        println!("\x1b[33mOperation cancelled.\x1b[0m");
        return Ok(());
    }

    write_template(cfg_file)?;

    println!("\x1b[32mConfiguration file created at:");
    println!("  -> {}", cfg_file.display());
    println!("\x1b[0mPlease set SERVER.URL to the endpoint you want to watch.");

    Ok(())
}

fn write_template(cfg_file: &Path) -> io::Result<()> {
    if let Some(parent) = cfg_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let config_content = include_str!("config_template.ini");
    fs::write(cfg_file, config_content)
}

fn confirm_overwrite() -> Result<bool, io::Error> {
    println!("\x1b[31mThe configuration file already exists.");
    println!("Do you want to overwrite it? (y/N)\x1b[0m");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> String {
        let path = dir.join("config.ini");
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_reads_server_url() {
        let temp_dir = tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            "[SERVER]\nURL = http://example.com/albums\nTIMEOUT = 12\n",
        );

        let settings = get_configuration(&path).unwrap();

        assert_eq!(settings.server.url, "http://example.com/albums");
        assert_eq!(settings.server.timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_timeout_defaults_when_missing() {
        let temp_dir = tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[server]\nurl = https://example.com/a\n");

        let settings = get_configuration(&path).unwrap();

        assert_eq!(settings.server.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[SERVER]\nTIMEOUT = 5\n");

        assert!(get_configuration(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.ini");

        assert!(get_configuration(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let temp_dir = tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[SERVER]\nURL = ftp://example.com/albums\n");

        let error = get_configuration(&path).unwrap_err();
        assert!(error.to_string().contains("http or https"));
    }

    #[test]
    fn test_template_is_a_loadable_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.ini");

        write_template(&path).unwrap();
        let settings = get_configuration(path.to_str().unwrap()).unwrap();

        assert_eq!(settings.server.url, "http://localhost:8000/albums");
        assert_eq!(settings.server.timeout, 30);
    }
}

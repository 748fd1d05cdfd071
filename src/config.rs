use crate::domain::FieldSet;

#[derive(serde::Deserialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub form: FormConfig,
}

#[derive(serde::Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub cache_buster: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct FormConfig {
    pub variant: FieldSet,
    pub honeypot: bool,
}

pub fn get_config() -> Config {
    config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .build()
        .expect("failed to read config.yaml.")
        .try_deserialize::<Config>()
        .expect("failed to deserialize config.yaml.")
}

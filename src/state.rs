use quillgate_config::{CorsConfig, ServerConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        server_config: ServerConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}

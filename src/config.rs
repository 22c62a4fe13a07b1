use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
}

/// Signing material for the token issuer/validator. Always constructed
/// explicitly and handed to the app as shared state; there is no compiled-in
/// fallback secret.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url: Self::get_env("DATABASE_URL"),
            jwt: JwtConfig {
                secret: Self::get_env("JWT_SECRET"),
                issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "crewtrack".to_string()),
                audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "crewtrack".to_string()),
            },
        }
    }
}

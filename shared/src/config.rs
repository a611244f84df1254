use anyhow::{bail, Context, Result};
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://lotry.db".into()),
        };
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("invalid PORT: {v}"))?,
                Err(_) => 8080,
            },
        };
        // 空のシークレットを許すとリセットが誰にでも通ってしまう
        let secret = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
        if secret.is_empty() {
            bail!("ADMIN_PASSWORD must not be empty");
        }
        let admin = AdminConfig { secret };
        let payment = PaymentConfig {
            link_base: env::var("PAYMENT_LINK_BASE").context("PAYMENT_LINK_BASE must be set")?,
            unit_price: match env::var("UNIT_PRICE_EUR") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("invalid UNIT_PRICE_EUR: {v}"))?,
                Err(_) => 2,
            },
        };
        Ok(Self {
            database,
            server,
            admin,
            payment,
        })
    }
}

pub struct DatabaseConfig {
    pub url: String,
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub struct AdminConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub link_base: String,
    pub unit_price: u32,
}

impl PaymentConfig {
    pub fn amount_for(&self, box_count: usize) -> u64 {
        box_count as u64 * u64::from(self.unit_price)
    }

    // 例: https://pay.example/shop + 2 ケース -> https://pay.example/shop/4EUR
    pub fn link_for(&self, box_count: usize) -> String {
        format!(
            "{}/{}EUR",
            self.link_base.trim_end_matches('/'),
            self.amount_for(box_count)
        )
    }
}

use crate::config::DatabaseConfig;
use anyhow::{Context, Result, bail};
use sqlx::{ConnectOptions, Connection, MySql, Pool, mysql::MySqlPoolOptions};
use tracing::info;

pub type ConnectionPool = Pool<MySql>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Opens the shared pool, first making sure the target database
    /// exists. Both steps are idempotent.
    pub async fn new_pool(config: &DatabaseConfig) -> Result<ConnectionPool> {
        Self::ensure_database(config).await?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.pool_limit)
            .connect_with(config.connect_options(true)?)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }

    async fn ensure_database(config: &DatabaseConfig) -> Result<()> {
        if config.database.is_empty() || config.database.contains('`') {
            bail!("Invalid database name: {:?}", config.database);
        }

        let mut conn = config
            .connect_options(false)?
            .connect()
            .await
            .context("Failed to connect to the MySQL server for bootstrap")?;

        sqlx::query(&format!(
            "CREATE DATABASE IF NOT EXISTS `{}`",
            config.database
        ))
        .execute(&mut conn)
        .await
        .context("Failed to ensure the target database exists")?;

        conn.close().await.ok();
        Ok(())
    }

    /// Creates the three tables when they are missing. Gated by the
    /// `PREPARE_SCHEMA` flag so managed deployments can own their schema.
    pub async fn prepare_schema(pool: &ConnectionPool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                price DECIMAL(10, 2) NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create products table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INT AUTO_INCREMENT PRIMARY KEY,
                order_number VARCHAR(64) NOT NULL UNIQUE,
                status VARCHAR(32) NOT NULL DEFAULT 'Pending',
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create orders table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS order_products (
                id INT AUTO_INCREMENT PRIMARY KEY,
                order_id INT NOT NULL,
                product_id INT NOT NULL,
                qty INT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                CONSTRAINT fk_order_products_order
                    FOREIGN KEY (order_id) REFERENCES orders (id) ON DELETE CASCADE,
                CONSTRAINT fk_order_products_product
                    FOREIGN KEY (product_id) REFERENCES products (id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create order_products table")?;

        info!("Schema prepared: products, orders, order_products");
        Ok(())
    }
}

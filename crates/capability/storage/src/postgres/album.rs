//! Postgres 专辑存储实现

use crate::error::StorageError;
use crate::traits::AlbumStore;
use domain::{Album, AlbumId, NewAlbum};
use recordings_config::DatabaseConfig;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};
use tracing::debug;

const SELECT_BY_ARTIST: &str = "SELECT * FROM album WHERE artist = $1";
const SELECT_BY_ID: &str = "SELECT * FROM album WHERE id = $1";
const INSERT_ALBUM: &str =
    "INSERT INTO album (title, artist, price) VALUES ($1, $2, $3) RETURNING id";

#[derive(Clone)]
pub struct PgAlbumStore {
    pub pool: PgPool,
}

impl PgAlbumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 按配置建立并校验连接池
    ///
    /// # 参数
    /// - `config`：数据库连接配置
    ///
    /// # 返回
    /// - `Result<Self, StorageError>`：存储或错误
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(config).await?;
        Ok(Self { pool })
    }
}

fn album_from_row(row: &PgRow) -> Result<Album, sqlx::Error> {
    Ok(Album {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        price: price_from_row(row)?,
    })
}

/// 按列类型解码价格：REAL、DOUBLE PRECISION 与 DECIMAL/NUMERIC 均转换为 f32。
fn price_from_row(row: &PgRow) -> Result<f32, sqlx::Error> {
    let column = row.try_column("price")?;
    match column.type_info().name() {
        "FLOAT4" => row.try_get("price"),
        "FLOAT8" => row.try_get::<f64, _>("price").map(|price| price as f32),
        "NUMERIC" => {
            let price: Decimal = row.try_get("price")?;
            price
                .to_f32()
                .ok_or_else(|| price_decode_error(format!("{price} is not representable as f32")))
        }
        other => Err(price_decode_error(format!(
            "unsupported price column type {other}"
        ))),
    }
}

fn price_decode_error(message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: "\"price\"".to_string(),
        source: message.into(),
    }
}

#[async_trait::async_trait]
impl AlbumStore for PgAlbumStore {
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, StorageError> {
        const OP: &str = "albums_by_artist";
        let input = format!("{artist:?}");
        debug!(artist, "querying albums by artist");
        let rows = sqlx::query(SELECT_BY_ARTIST)
            .bind(artist)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| StorageError::query(OP, input.clone(), err))?;
        let mut albums = Vec::with_capacity(rows.len());
        for row in &rows {
            let album =
                album_from_row(row).map_err(|err| StorageError::query(OP, input.clone(), err))?;
            albums.push(album);
        }
        Ok(albums)
    }

    async fn album_by_id(&self, id: AlbumId) -> Result<Album, StorageError> {
        const OP: &str = "album_by_id";
        debug!(id, "querying album by id");
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::query(OP, id.to_string(), err))?;
        let Some(row) = row else {
            return Err(StorageError::NotFound(id));
        };
        album_from_row(&row).map_err(|err| StorageError::query(OP, id.to_string(), err))
    }

    async fn add_album(&self, album: NewAlbum) -> Result<AlbumId, StorageError> {
        debug!(title = %album.title, artist = %album.artist, "inserting album");
        let id: AlbumId = sqlx::query_scalar(INSERT_ALBUM)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| StorageError::query("add_album", format!("{:?}", album.title), err))?;
        Ok(id)
    }
}

//! 录音库数据访问演示：建池、连通性检查，依次执行三个仓储操作并打印结果。

use domain::NewAlbum;
use recordings_config::DatabaseConfig;
use recordings_storage::{
    AlbumStore, PgAlbumStore, StorageError, build_pool, close_pool, verify_pool,
};
use recordings_telemetry::init_tracing;
use sqlx::PgPool;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 初始化结构化日志（stderr）
    init_tracing();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let pool = match build_pool(&config) {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "failed to build connection pool");
            return ExitCode::FAILURE;
        }
    };

    // 无论成功与否都关闭连接池
    let result = run(&pool).await;
    close_pool(&pool).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "data access demo failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(pool: &PgPool) -> Result<(), StorageError> {
    verify_pool(pool).await?;
    println!("Connected!");

    let store = PgAlbumStore::new(pool.clone());

    let albums = store.albums_by_artist("John Coltrane").await?;
    println!("Albums found: {albums:?}");

    let album = store.album_by_id(2).await?;
    println!("Album found: {album:?}");

    let id = store
        .add_album(NewAlbum::new("The White Album", "the Beatles", 10.99))
        .await?;
    println!("ID of added album: {id}");

    Ok(())
}

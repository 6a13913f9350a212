use std::time::Duration;

use sea_orm::sea_query::{Index, IndexCreateStatement, PostgresQueryBuilder, SqliteQueryBuilder};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::entity::{attendance, feedback, registration};

/// Connect to the configured database, falling back to `fallback_url` once if
/// the primary is unreachable, then bring the schema up to date.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = match connect(&config.url, config).await {
        Ok(db) => db,
        Err(e) => match config.fallback_url.as_deref() {
            Some(fallback) => {
                warn!(error = %e, "Primary database unreachable, using fallback");
                connect(fallback, config).await?
            }
            None => return Err(e),
        },
    };

    info!(backend = ?db.get_database_backend(), "Database connected");
    sync_schema(&db).await?;
    Ok(db)
}

async fn connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    Database::connect(opt).await
}

/// Create missing tables and the uniqueness constraints the link tables rely on.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.get_schema_registry("campus_events::entity::*")
        .sync(db)
        .await?;
    ensure_indexes(db).await
}

/// One registration, attendance record and feedback per (student, event).
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        Index::create()
            .if_not_exists()
            .unique()
            .name("uq_registration_student_event")
            .table(registration::Entity)
            .col(registration::Column::StudentId)
            .col(registration::Column::EventId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .unique()
            .name("uq_attendance_student_event")
            .table(attendance::Entity)
            .col(attendance::Column::StudentId)
            .col(attendance::Column::EventId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .unique()
            .name("uq_feedback_student_event")
            .table(feedback::Entity)
            .col(feedback::Column::StudentId)
            .col(feedback::Column::EventId)
            .to_owned(),
    ];

    let backend = db.get_database_backend();
    for stmt in &indexes {
        db.execute_unprepared(&render_index(backend, stmt)?).await?;
    }
    info!("Ensured unique (student_id, event_id) indexes");

    Ok(())
}

fn render_index(backend: DbBackend, stmt: &IndexCreateStatement) -> Result<String, DbErr> {
    match backend {
        DbBackend::Postgres => Ok(stmt.to_string(PostgresQueryBuilder)),
        DbBackend::Sqlite => Ok(stmt.to_string(SqliteQueryBuilder)),
        other => Err(DbErr::Custom(format!("Unsupported database backend: {other:?}"))),
    }
}

use crate::domain::{
    owner::entity::owner,
    restaurant::entity::restaurant,
    survey::entity::{question_bank, survey, survey_question, survey_response},
    survey::operational::operational_questions,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Schema, Set, Statement,
};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        create_tables(&db).await?;
        seed_question_bank(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys! (Parent first, then Child)
    create_table_if_not_exists(db, &schema, owner::Entity).await?;
    create_table_if_not_exists(db, &schema, question_bank::Entity).await?;
    create_table_if_not_exists(db, &schema, restaurant::Entity).await?;
    create_table_if_not_exists(db, &schema, survey::Entity).await?;
    create_table_if_not_exists(db, &schema, survey_question::Entity).await?;
    create_table_if_not_exists(db, &schema, survey_response::Entity).await?;

    create_index_if_not_exists(
        db,
        "uq_owners_email_social",
        "owners",
        &["email", "social_type"],
        true,
    )
    .await?;
    create_index_if_not_exists(db, "uq_restaurants_owner", "restaurants", &["owner_id"], true)
        .await?;
    create_index_if_not_exists(db, "uq_restaurants_code", "restaurants", &["code"], true).await?;
    // 응답은 질문 텍스트로 키가 잡히므로 설문 내 질문 텍스트는 유일해야 함
    create_index_if_not_exists(
        db,
        "uq_survey_questions_survey_question",
        "survey_questions",
        &["survey_id", "question"],
        true,
    )
    .await?;
    create_index_if_not_exists(
        db,
        "idx_survey_restaurant_status",
        "survey",
        &["restaurant_id", "status"],
        false,
    )
    .await?;
    // 대시보드 기간 조회 최적화
    create_index_if_not_exists(
        db,
        "idx_survey_responses_survey_submitted",
        "survey_responses",
        &["survey_id", "submitted_at"],
        false,
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

/// 문항 은행이 비어 있으면 운영 설문 문항으로 채웁니다.
async fn seed_question_bank(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = question_bank::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    for fixed in operational_questions() {
        question_bank::ActiveModel {
            question: Set(fixed.question.to_string()),
            option_left: Set(fixed.option_left.to_string()),
            option_right: Set(fixed.option_right.to_string()),
            category: Set(fixed.category.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!(
        count = operational_questions().len(),
        "Seeded question bank with operational questions"
    );
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
    unique: bool,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let kind = if unique { "UNIQUE INDEX" } else { "INDEX" };
    let sql = format!(
        "CREATE {} {} ON {} ({})",
        kind, index_name, table_name, cols
    );
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignore duplicate index errors for idempotency.
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table: {}", e);
        e
    })
}

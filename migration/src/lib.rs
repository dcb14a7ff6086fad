pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_create_tables::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::MigratorTrait;
    use sea_orm_migration::sea_orm::{ConnectionTrait, Database};

    use super::Migrator;

    #[tokio::test]
    async fn test_semester_ordinal_unique_within_school_year() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        db.execute_unprepared(
            "INSERT INTO school_years (name, starts_on, ends_on, active, created_at, updated_at) \
             VALUES ('2025-2026', '2025-09-01', '2026-06-30', 0, 0, 0), \
                    ('2026-2027', '2026-09-01', '2027-06-30', 0, 0, 0)",
        )
        .await
        .unwrap();

        db.execute_unprepared(
            "INSERT INTO semesters (school_year_id, name, ordinal, created_at) \
             VALUES (1, '第一学期', 1, 0)",
        )
        .await
        .unwrap();

        // 同一学年重复的学期序号被唯一索引拒绝
        let duplicate = db
            .execute_unprepared(
                "INSERT INTO semesters (school_year_id, name, ordinal, created_at) \
                 VALUES (1, '重复学期', 1, 0)",
            )
            .await;
        assert!(duplicate.is_err());

        // 不同学年允许相同序号
        db.execute_unprepared(
            "INSERT INTO semesters (school_year_id, name, ordinal, created_at) \
             VALUES (2, '第一学期', 1, 0)",
        )
        .await
        .unwrap();
    }
}

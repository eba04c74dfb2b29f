use dotenv::dotenv;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    seed::seed_data(&db).await?;

    Ok(())
}

mod seed {
    use chrono::Utc;
    use fake::faker::lorem::en::Sentence;
    use fake::{Fake, Faker};
    use sqlx::PgPool;
    use std::collections::HashSet;
    use uuid::Uuid;

    pub async fn seed_data(db: &PgPool) -> anyhow::Result<()> {
        // Check if data already exists
        let follow_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows")
            .fetch_one(db)
            .await?;
        if follow_count > 0 {
            println!("Data already exists, skipping seed");
            return Ok(());
        }

        // Users live in the identity provider; locally we only need their ids.
        let user_ids: Vec<String> = (0..10)
            .map(|_| format!("user_{}", Uuid::new_v4().simple()))
            .collect();

        seed_follows(db, &user_ids, 15).await?;
        seed_posts(db, &user_ids, 30).await?;

        println!("Seed data inserted successfully");
        Ok(())
    }

    async fn seed_follows(db: &PgPool, user_ids: &[String], count: usize) -> anyhow::Result<()> {
        let mut seeded: HashSet<(String, String)> = HashSet::new();

        while seeded.len() < count {
            let follower_id = &user_ids[Faker.fake::<usize>() % user_ids.len()];
            let following_id = &user_ids[Faker.fake::<usize>() % user_ids.len()];

            // No self-follows, no duplicate edges
            if follower_id == following_id
                || !seeded.insert((follower_id.clone(), following_id.clone()))
            {
                continue;
            }

            sqlx::query(
                "INSERT INTO follows (id, follower_id, following_id, created_at) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(follower_id)
            .bind(following_id)
            .bind(Utc::now())
            .execute(db)
            .await?;
        }

        Ok(())
    }

    async fn seed_posts(db: &PgPool, user_ids: &[String], count: usize) -> anyhow::Result<()> {
        for _ in 0..count {
            let author_id = &user_ids[Faker.fake::<usize>() % user_ids.len()];
            let content: String = Sentence(4..12).fake();
            let now = Utc::now();

            sqlx::query(
                "INSERT INTO posts (id, author_id, content, created_at, updated_at) VALUES ($1, $2, $3, $4, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(author_id)
            .bind(content)
            .bind(now)
            .execute(db)
            .await?;
        }

        Ok(())
    }
}

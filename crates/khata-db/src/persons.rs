use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};
use tracing::warn;

use khata_data::{Delete, Person, PersonFilter, Query, Retrieve, Upsert};

use crate::{results::QueryError, Connection};

#[async_trait]
impl Query<Person> for Connection {
    type Filter = PersonFilter;

    /// List persons ordered by name. An engine error on this
    /// read path degrades to an empty result.
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Person>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::new(
            r#"
            SELECT
                id,
                name,
                phone,
                email,
                imageUri,
                createdAt
            FROM persons
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id.clone() {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(name) = filter.name.clone() {
            qry.push(" AND name LIKE ").push_bind(format!("%{}%", name));
        }
        qry.push(" ORDER BY name ASC");

        let persons = match qry.build_query_as().fetch_all(&mut *conn).await {
            Ok(persons) => persons,
            Err(err) => {
                warn!("person query failed, returning empty result: {}", err);
                Vec::new()
            }
        };
        Ok(persons)
    }
}

#[async_trait]
impl Retrieve<Person> for Connection {
    type Key = String;

    async fn retrieve(&self, person_id: Self::Key) -> Result<Person> {
        let filter = PersonFilter {
            id: Some(person_id),
            ..Default::default()
        };
        let person = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(person)
    }
}

#[async_trait]
impl Upsert<Person> for Connection {
    /// Insert or replace a person, keyed on id.
    async fn upsert(&self, person: Person) -> Result<Person> {
        {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT OR REPLACE INTO persons (
                    id,
                    name,
                    phone,
                    email,
                    imageUri,
                    createdAt
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&person.id)
                .push_bind(&person.name)
                .push_bind(&person.phone)
                .push_bind(&person.email)
                .push_bind(&person.image_uri)
                .push_bind(person.created_at);

            qry.push(")").build().execute(&mut *conn).await?;
        }
        self.retrieve(person.id).await
    }
}

#[async_trait]
impl Delete<Person> for Connection {
    /// Delete a person. Their transactions go with them through
    /// the cascade relationship; a missing id is a no-op.
    async fn delete(&self, person: Person) -> Result<()> {
        let mut conn = self.lock().await;
        QueryBuilder::<Sqlite>::new("DELETE FROM persons WHERE id = ")
            .push_bind(person.id)
            .build()
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

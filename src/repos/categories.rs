//! Categories repo, presents CRUD operations with the categories table
use failure::Error as FailureError;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{Category, CategoryId, NewCategory, UpdateCategory};

use super::types::RepoResult;

pub trait CategoriesRepo {
    /// Returns all categories ordered by name
    fn list(&self) -> RepoResult<Vec<Category>>;

    /// Creates new category
    fn create(&self, payload: NewCategory) -> RepoResult<Category>;

    /// Finds specific category by id
    fn find(&self, category_id_arg: CategoryId) -> RepoResult<Option<Category>>;

    /// Updates specific category
    fn update(&self, category_id_arg: CategoryId, payload: UpdateCategory) -> RepoResult<()>;

    /// Deletes the category row. Attribute definitions and products that
    /// reference it are left in place.
    fn delete(&self, category_id_arg: CategoryId) -> RepoResult<()>;
}

/// Categories repository, responsible for handling the categories table
pub struct CategoriesRepoImpl<'a> {
    pub db_conn: &'a Connection,
}

impl<'a> CategoriesRepoImpl<'a> {
    pub fn new(db_conn: &'a Connection) -> Self {
        Self { db_conn }
    }
}

fn category_from_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

impl<'a> CategoriesRepo for CategoriesRepoImpl<'a> {
    fn list(&self) -> RepoResult<Vec<Category>> {
        debug!("Find all categories.");
        let mut stmt = self
            .db_conn
            .prepare("SELECT id, name, description FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], category_from_row)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(From::from)
            .map_err(|e: FailureError| e.context("List categories error occurred").into())
    }

    fn create(&self, payload: NewCategory) -> RepoResult<Category> {
        debug!("Create category {:?}.", payload);
        self.db_conn
            .execute(
                "INSERT INTO categories (name, description) VALUES (?1, ?2)",
                params![payload.name, payload.description],
            )
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Create new category {:?} error occurred", payload)).into())
            .map(|_| Category {
                id: CategoryId(self.db_conn.last_insert_rowid()),
                name: payload.name,
                description: payload.description,
            })
    }

    fn find(&self, category_id_arg: CategoryId) -> RepoResult<Option<Category>> {
        debug!("Find in categories with id {}.", category_id_arg);
        let category = self
            .db_conn
            .query_row(
                "SELECT id, name, description FROM categories WHERE id = ?1",
                params![category_id_arg],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }

    fn update(&self, category_id_arg: CategoryId, payload: UpdateCategory) -> RepoResult<()> {
        debug!("Updating category {} with payload {:?}.", category_id_arg, payload);
        self.db_conn
            .execute(
                "UPDATE categories SET name = ?1, description = ?2 WHERE id = ?3",
                params![payload.name, payload.description, category_id_arg],
            )
            .map(|_| ())
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Update category {} error occurred", category_id_arg)).into())
    }

    fn delete(&self, category_id_arg: CategoryId) -> RepoResult<()> {
        debug!("Delete category {}.", category_id_arg);
        self.db_conn
            .execute("DELETE FROM categories WHERE id = ?1", params![category_id_arg])
            .map(|_| ())
            .map_err(From::from)
            .map_err(|e: FailureError| e.context(format!("Delete category {} error occurred", category_id_arg)).into())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::schema::create_tables;

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn lists_categories_ordered_by_name() {
        let conn = setup();
        let repo = CategoriesRepoImpl::new(&conn);
        repo.create(new_category("Shoes")).unwrap();
        repo.create(new_category("Apparel")).unwrap();
        repo.create(new_category("Electronics")).unwrap();

        let names: Vec<_> = repo.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Apparel", "Electronics", "Shoes"]);
    }

    #[test]
    fn find_returns_none_for_missing_id() {
        let conn = setup();
        let repo = CategoriesRepoImpl::new(&conn);
        assert!(repo.find(CategoryId(404)).unwrap().is_none());
    }

    #[test]
    fn updates_category_fields() {
        let conn = setup();
        let repo = CategoriesRepoImpl::new(&conn);
        let created = repo.create(new_category("Shoes")).unwrap();

        repo.update(
            created.id,
            UpdateCategory {
                name: "Footwear".to_string(),
                description: "updated".to_string(),
            },
        )
        .unwrap();

        let found = repo.find(created.id).unwrap().unwrap();
        assert_eq!(found.name, "Footwear");
        assert_eq!(found.description, "updated");
    }

    #[test]
    fn delete_leaves_other_rows_untouched() {
        let conn = setup();
        let repo = CategoriesRepoImpl::new(&conn);
        let first = repo.create(new_category("Shoes")).unwrap();
        let second = repo.create(new_category("Apparel")).unwrap();

        repo.delete(first.id).unwrap();

        assert!(repo.find(first.id).unwrap().is_none());
        assert!(repo.find(second.id).unwrap().is_some());
    }
}

//! Capa de persistencia
//!
//! [`Repository`] es el único contrato que ven los servicios. Dos backends
//! lo implementan para cada [`Entity`]: [`PgRepository`] sobre un pool de
//! sqlx y [`MemoryRepository`] para desarrollo sin base de datos
//! y para los tests.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use crate::models::{
    Address, Client, Comment, Department, Employee, EntityKind, Location, Lot, ServiceTicket,
};
use crate::utils::errors::AppResult;

pub mod memory_repository;
pub mod postgres_repository;

pub use memory_repository::MemoryRepository;
pub use postgres_repository::PgRepository;

pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Registro persistido con clave primaria entera.
///
/// `Reference` enumera las columnas de clave foránea de la tabla. Cada una
/// apunta a un registro padre y puede ser nula.
pub trait Entity: Clone + Send + Sync + Unpin + 'static + for<'r> FromRow<'r, PgRow> {
    type Reference: Copy + fmt::Debug + Send + Sync + 'static;

    const TABLE: &'static str;
    const KIND: EntityKind;
    /// Todas las columnas salvo `id`, en el orden en que las enlaza [`Entity::bind_columns`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    fn reference(&self, field: Self::Reference) -> Option<i64>;
    fn set_reference(&mut self, field: Self::Reference, value: Option<i64>);
    fn reference_column(field: Self::Reference) -> &'static str;

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Todos los registros ordenados por id.
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    /// Registros cuyo `field` apunta a `parent_id`, ordenados por id.
    async fn find_by_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<Vec<T>>;

    /// Guarda un registro nuevo. Se ignora el id de `entity`.
    async fn insert(&self, entity: T) -> AppResult<T>;

    /// Reemplaza el registro con el mismo id. Not-Found si no existe.
    async fn update(&self, entity: T) -> AppResult<T>;

    /// Indica si se borró un registro.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Apunta `field` del registro `id` a `parent_id`, solo si sigue siendo
    /// nulo. `None` si el registro no existe o ya está vinculado.
    async fn assign_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>>;

    /// Anula `field` del registro `id` si apunta a `parent_id`. Si no, `None`.
    async fn release_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>>;

    /// Anula `field` en cada registro que apunta a `parent_id`; devuelve cuántos cambiaron.
    async fn clear_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<u64>;
}

/// Un repositorio por tabla, compartido por todas las peticiones.
#[derive(Clone)]
pub struct Repositories {
    pub addresses: Arc<dyn Repository<Address>>,
    pub clients: Arc<dyn Repository<Client>>,
    pub comments: Arc<dyn Repository<Comment>>,
    pub departments: Arc<dyn Repository<Department>>,
    pub employees: Arc<dyn Repository<Employee>>,
    pub locations: Arc<dyn Repository<Location>>,
    pub lots: Arc<dyn Repository<Lot>>,
    pub tickets: Arc<dyn Repository<ServiceTicket>>,
    /// `postgres` o `memory`.
    pub storage: &'static str,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            addresses: Arc::new(PgRepository::new(pool.clone())),
            clients: Arc::new(PgRepository::new(pool.clone())),
            comments: Arc::new(PgRepository::new(pool.clone())),
            departments: Arc::new(PgRepository::new(pool.clone())),
            employees: Arc::new(PgRepository::new(pool.clone())),
            locations: Arc::new(PgRepository::new(pool.clone())),
            lots: Arc::new(PgRepository::new(pool.clone())),
            tickets: Arc::new(PgRepository::new(pool)),
            storage: "postgres",
        }
    }

    pub fn in_memory() -> Self {
        Self {
            addresses: Arc::new(MemoryRepository::new()),
            clients: Arc::new(MemoryRepository::new()),
            comments: Arc::new(MemoryRepository::new()),
            departments: Arc::new(MemoryRepository::new()),
            employees: Arc::new(MemoryRepository::new()),
            locations: Arc::new(MemoryRepository::new()),
            lots: Arc::new(MemoryRepository::new()),
            tickets: Arc::new(MemoryRepository::new()),
            storage: "memory",
        }
    }
}

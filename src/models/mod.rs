//! Modelos de entidades del concesionario
//!
//! Cada struct corresponde a una tabla del esquema de `migrations/`.
//! Las relaciones viven en el hijo como claves foráneas nulas, así la
//! colección de un padre es cada hijo cuya clave lo nombra.

use std::fmt;

pub mod address;
pub mod client;
pub mod comment;
pub mod department;
pub mod employee;
pub mod location;
pub mod lot;
pub mod service_ticket;

pub use address::Address;
pub use client::{Client, ClientReference};
pub use comment::{Comment, CommentReference};
pub use department::{Department, DepartmentReference};
pub use employee::{Employee, EmployeeReference, EmployeeType, Gender, Role};
pub use location::{Location, LocationReference};
pub use lot::{Lot, LotReference};
pub use service_ticket::{ServiceTicket, ServiceTicketReference};

/// Nombre de un tipo de entidad en logs y mensajes de error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Address,
    Client,
    Comment,
    Department,
    Employee,
    Location,
    Lot,
    Manager,
    Mechanic,
    SalesAssociate,
    ServiceTicket,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Address => "Address",
            EntityKind::Client => "Client",
            EntityKind::Comment => "Comment",
            EntityKind::Department => "Department",
            EntityKind::Employee => "Employee",
            EntityKind::Location => "Location",
            EntityKind::Lot => "Lot",
            EntityKind::Manager => "Manager",
            EntityKind::Mechanic => "Mechanic",
            EntityKind::SalesAssociate => "SalesAssociate",
            EntityKind::ServiceTicket => "ServiceTicket",
        };
        f.write_str(name)
    }
}

/// Tipo de referencia de las entidades que no apuntan a nada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoReference {}

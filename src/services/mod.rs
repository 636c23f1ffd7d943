//! Reglas de negocio del concesionario
//!
//! [`CrudService`] implementa el contrato genérico de CRUD y [`Relation`]
//! las reglas de los vínculos uno a muchos. Cada servicio de entidad
//! combina ambos con sus propias verificaciones de referencias.

pub mod address_service;
pub mod client_service;
pub mod comment_service;
pub mod crud_service;
pub mod department_service;
pub mod employee_service;
pub mod location_service;
pub mod lot_service;
pub mod manager_service;
pub mod mechanic_service;
pub mod relationship;
pub mod sales_associate_service;
pub mod service_ticket_service;

pub use address_service::AddressService;
pub use client_service::ClientService;
pub use comment_service::CommentService;
pub use crud_service::CrudService;
pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
pub use location_service::LocationService;
pub use lot_service::LotService;
pub use manager_service::ManagerService;
pub use mechanic_service::MechanicService;
pub use relationship::Relation;
pub use sales_associate_service::SalesAssociateService;
pub use service_ticket_service::ServiceTicketService;

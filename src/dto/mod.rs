//! DTOs de la API
//!
//! Las peticiones se validan con `validator` y se convierten en entidades;
//! las respuestas se construyen desde las entidades. Los campos van en
//! camelCase y las relaciones viajan como campos `...Id`.

pub mod address_dto;
pub mod client_dto;
pub mod comment_dto;
pub mod department_dto;
pub mod employee_dto;
pub mod location_dto;
pub mod lot_dto;
pub mod service_ticket_dto;

pub use address_dto::{AddressRequest, AddressResponse};
pub use client_dto::{ClientRequest, ClientResponse};
pub use comment_dto::{CommentRequest, CommentResponse};
pub use department_dto::{DepartmentRequest, DepartmentResponse};
pub use employee_dto::{EmployeeRequest, EmployeeResponse};
pub use location_dto::{LocationRequest, LocationResponse};
pub use lot_dto::{LotRequest, LotResponse};
pub use service_ticket_dto::{ServiceTicketRequest, ServiceTicketResponse};

//! Controladores por recurso, entre los routers y los servicios
//!
//! Un controlador registra la petición, convierte los DTOs de entrada en
//! entidades y las entidades en DTOs de respuesta. Cada handler crea uno por petición.

pub mod address_controller;
pub mod client_controller;
pub mod comment_controller;
pub mod department_controller;
pub mod employee_controller;
pub mod location_controller;
pub mod lot_controller;
pub mod manager_controller;
pub mod mechanic_controller;
pub mod sales_associate_controller;
pub mod service_ticket_controller;

//! Routers HTTP, uno por recurso, anidados bajo `/api/v1` por [`crate::create_app`].

pub mod address_routes;
pub mod client_routes;
pub mod comment_routes;
pub mod department_routes;
pub mod employee_routes;
pub mod location_routes;
pub mod lot_routes;
pub mod manager_routes;
pub mod mechanic_routes;
pub mod sales_associate_routes;
pub mod service_ticket_routes;

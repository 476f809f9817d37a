//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Route Organization
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation (CORS, fallback, state)
//! └── api_routes.rs   - API endpoint registration
//! ```
//!
//! # Routes
//!
//! ## Authentication
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/verify` - Validate the presented token
//!
//! ## Users (admin only)
//! - `GET /api/users` - List users
//! - `POST /api/users` - Create a user
//! - `DELETE /api/users/{user_id}` - Delete a user and their schedules
//!
//! ## Schedules
//! - `GET /api/schedules` - List schedules (role-scoped)
//! - `POST /api/schedules` - Create a schedule entry (admin)
//! - `PUT /api/schedules/{schedule_id}` - Update subject/class (admin)
//! - `DELETE /api/schedules/{schedule_id}` - Delete an entry (admin)
//! - `GET /api/schedules/export` - CSV export (role-scoped)
//! - `POST /api/schedules/import` - CSV import (admin)
//!
//! ## Settings
//! - `GET /api/settings/break-period` - Current break placement
//! - `PUT /api/settings/break-period` - Move the break (admin)
//!
//! ## Changelogs
//! - `GET /api/changelogs` - Audit history (role-scoped, newest first)
//!
//! ## Demo
//! - `POST /api/demo/load-schedules` - Rebuild the demo timetable (admin)
//! - `POST /api/demo/clear-schedules` - Wipe schedules and audit history (admin)

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

pub use router::create_router;

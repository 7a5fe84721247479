//! API integration tests
//!
//! `auth_guard` and `validation` run against a lazy pool: every request is
//! rejected before any store query executes, so no database is needed.
//! `flows` exercises the full stack and requires TEST_DATABASE_URL.

mod auth_guard;
mod common;
mod flows;
mod validation;

//! Service tests

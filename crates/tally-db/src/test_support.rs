//! Shared test utilities for tally-db unit tests.

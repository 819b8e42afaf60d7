//! Unit tests for replica-set bootstrap.

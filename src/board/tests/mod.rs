//! Unit tests for the board read models.

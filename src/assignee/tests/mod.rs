//! Unit tests for the assignee context.

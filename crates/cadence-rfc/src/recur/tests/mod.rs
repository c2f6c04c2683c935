//! Cross-module tests for the recurrence value type.

mod fixtures;

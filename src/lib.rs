//! Workspace-level integration tests for SeqCalc live under `tests/`.

// ABOUTME: Test helper module organization for integration tests
// ABOUTME: Exposes the axum oneshot request builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness
#![allow(dead_code)]

pub mod axum_test;

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Compiler passes that run between analysis and emission.

pub mod destructuring_planner;

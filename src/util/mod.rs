// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by scoring and rendering.

pub mod normalize;

pub use normalize::{fold_case, is_blank, normalize};

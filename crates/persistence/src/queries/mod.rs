// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `roots`: Stored user documents

pub mod roots;

pub use roots::{StoredRoot, find_root, find_root_revision};
